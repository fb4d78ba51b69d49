//! Core domain types
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and rebuilt cheaply on demand.

mod attempt;
mod grid;
mod judgement;

pub use attempt::{AttemptBuffer, BACKSPACE_KEY_CODE, LETTER_KEY_CODES};
pub use grid::{JudgementGrid, LetterFact};
pub use judgement::{Cell, Judgement};

/// Fixed word length of the puzzle
pub const WORD_LENGTH: usize = 5;
