//! Per-cell board judgements
//!
//! The puzzle grades every letter of a submitted guess with one of three
//! verdicts, persisted as the literal strings `"correct"`, `"present"`,
//! and `"absent"`. A `Cell` pairs one graded letter with its verdict.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The puzzle's verdict on a letter at a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Judgement {
    /// Right letter, right spot
    Correct,
    /// Letter in the word, wrong spot
    Present,
    /// Letter not in the word at all
    Absent,
}

impl Judgement {
    /// The wire literal this judgement is persisted as
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for Judgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One graded square of the board history
///
/// Immutable once parsed; the grid rebuilds every cell from persisted
/// state on each validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    letter: u8,
    judgement: Judgement,
}

impl Cell {
    /// Create a cell, normalizing the letter to ASCII uppercase
    #[inline]
    #[must_use]
    pub const fn new(letter: u8, judgement: Judgement) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            judgement,
        }
    }

    /// The graded letter (ASCII uppercase)
    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        self.letter
    }

    /// The verdict on this letter
    #[inline]
    #[must_use]
    pub const fn judgement(self) -> Judgement {
        self.judgement
    }
}
