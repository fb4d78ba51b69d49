//! Present-letter rule
//!
//! A letter judged present belongs in the word but not at the position
//! it was tried. Two checks per known (letter, position) pair: the
//! attempt must not repeat the letter at that proven-wrong position,
//! and a full-length attempt must contain the letter somewhere.
//!
//! Known limitation: the coverage check is containment, not a count. A
//! word that needs the same letter twice is accepted with a single copy.

use super::rule::{Rule, RuleKind};
use crate::core::{AttemptBuffer, Judgement, JudgementGrid};

/// Fails when a known-in-word letter is misplaced or missing
pub struct PresentLetterRule;

impl Rule for PresentLetterRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Present
    }

    fn check(&self, grid: &JudgementGrid, attempt: &AttemptBuffer) -> bool {
        grid.facts(Judgement::Present).iter().all(|fact| {
            let off_known_wrong_spot = attempt
                .letter_at(fact.position)
                .is_none_or(|letter| letter != fact.letter);

            let covered = !attempt.is_full() || attempt.contains(fact.letter);

            off_known_wrong_spot && covered
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(word: &str) -> AttemptBuffer {
        let mut buffer = AttemptBuffer::new();
        for byte in word.bytes() {
            buffer.apply_key(byte.to_ascii_uppercase());
        }
        buffer
    }

    fn grid_with_b_present_at_1() -> JudgementGrid {
        let board_rows = vec!["abcde".to_string()];
        let evaluation_rows = vec![Some(vec![
            Judgement::Absent,
            Judgement::Present,
            Judgement::Correct,
            Judgement::Absent,
            Judgement::Absent,
        ])];
        JudgementGrid::from_parts(&board_rows, &evaluation_rows)
    }

    #[test]
    fn letter_at_proven_wrong_spot_fails() {
        let grid = grid_with_b_present_at_1();
        assert!(!PresentLetterRule.check(&grid, &typed("xb")));
        assert!(!PresentLetterRule.check(&grid, &typed("xbcxx")));
    }

    #[test]
    fn letter_elsewhere_in_full_attempt_passes() {
        let grid = grid_with_b_present_at_1();
        assert!(PresentLetterRule.check(&grid, &typed("bxcxx")));
        assert!(PresentLetterRule.check(&grid, &typed("xxcbx")));
    }

    #[test]
    fn full_attempt_omitting_letter_fails() {
        let grid = grid_with_b_present_at_1();
        assert!(!PresentLetterRule.check(&grid, &typed("xxcxx")));
    }

    #[test]
    fn partial_attempt_omitting_letter_passes() {
        // Coverage is only demanded once all five letters are typed
        let grid = grid_with_b_present_at_1();
        assert!(PresentLetterRule.check(&grid, &typed("x")));
        assert!(PresentLetterRule.check(&grid, &typed("xxcx")));
    }

    #[test]
    fn empty_attempt_passes() {
        let grid = grid_with_b_present_at_1();
        assert!(PresentLetterRule.check(&grid, &AttemptBuffer::new()));
    }

    #[test]
    fn empty_grid_passes_any_attempt() {
        let grid = JudgementGrid::default();
        assert!(PresentLetterRule.check(&grid, &typed("qqqqq")));
    }

    #[test]
    fn single_copy_satisfies_coverage() {
        // Containment, not a count: one B covers both known pairs
        let board_rows = vec!["xbxxx".to_string(), "xxxbx".to_string()];
        let evaluation_rows = vec![
            Some(vec![
                Judgement::Absent,
                Judgement::Present,
                Judgement::Absent,
                Judgement::Absent,
                Judgement::Absent,
            ]),
            Some(vec![
                Judgement::Absent,
                Judgement::Absent,
                Judgement::Absent,
                Judgement::Present,
                Judgement::Absent,
            ]),
        ];
        let grid = JudgementGrid::from_parts(&board_rows, &evaluation_rows);

        assert!(PresentLetterRule.check(&grid, &typed("bzzzz")));
        assert!(!PresentLetterRule.check(&grid, &typed("zbzzz"))); // B back at pos 1
        assert!(!PresentLetterRule.check(&grid, &typed("zzzbz"))); // B back at pos 3
    }

    #[test]
    fn evaluate_reports_kind_and_validity() {
        let grid = grid_with_b_present_at_1();
        let result = PresentLetterRule.evaluate(&grid, &typed("xb"));

        assert_eq!(result.kind, RuleKind::Present);
        assert!(!result.is_valid);
    }
}
