//! Absent-letter rule
//!
//! Once the board has judged a letter absent, it is not in the answer at
//! all; typing it again anywhere is a violation, position-independent.

use super::rule::{Rule, RuleKind};
use crate::core::{AttemptBuffer, JudgementGrid};

/// Fails when the attempt contains any letter judged absent
pub struct AbsentLetterRule;

impl Rule for AbsentLetterRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Absent
    }

    fn check(&self, grid: &JudgementGrid, attempt: &AttemptBuffer) -> bool {
        let absent = grid.absent_letters();
        if absent.is_empty() {
            return true;
        }

        !attempt.letters().iter().any(|letter| absent.contains(letter))
    }
}
