//! Formatting utilities for terminal output

use crate::core::{AttemptBuffer, Cell, Judgement, WORD_LENGTH};

/// Emoji square for a judgement
#[must_use]
pub const fn judgement_square(judgement: Judgement) -> char {
    match judgement {
        Judgement::Correct => '🟩',
        Judgement::Present => '🟨',
        Judgement::Absent => '⬜',
    }
}

/// Format a graded row as five emoji squares
#[must_use]
pub fn row_squares(row: &[Cell; WORD_LENGTH]) -> String {
    row.iter()
        .map(|cell| judgement_square(cell.judgement()))
        .collect()
}

/// Format a graded row's letters as a word
#[must_use]
pub fn row_letters(row: &[Cell; WORD_LENGTH]) -> String {
    row.iter().map(|cell| cell.letter() as char).collect()
}

/// Format the attempt with underscores for slots not yet typed
///
/// A three-letter attempt renders as `CRA__`.
#[must_use]
pub fn attempt_slots(attempt: &AttemptBuffer) -> String {
    let mut slots = String::with_capacity(WORD_LENGTH);
    for position in 0..WORD_LENGTH {
        match attempt.letter_at(position) {
            Some(letter) => slots.push(letter as char),
            None => slots.push('_'),
        }
    }
    slots
}
