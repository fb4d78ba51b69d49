//! Correct-position rule
//!
//! Every (letter, position) the board has confirmed must be respected:
//! if the attempt has reached that position, the letter there must be
//! the confirmed one. Positions the attempt has not reached yet are not
//! checked.

use super::rule::{Rule, RuleKind};
use crate::core::{AttemptBuffer, Judgement, JudgementGrid};

/// Fails when a typed letter disagrees with a confirmed position
pub struct CorrectPositionRule;

impl Rule for CorrectPositionRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Correct
    }

    fn check(&self, grid: &JudgementGrid, attempt: &AttemptBuffer) -> bool {
        grid.facts(Judgement::Correct).iter().all(|fact| {
            match attempt.letter_at(fact.position) {
                Some(letter) => letter == fact.letter,
                None => true,
            }
        })
    }
}
