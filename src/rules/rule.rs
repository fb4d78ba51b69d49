//! Rule trait and rule outcomes
//!
//! Every constraint check is a pure predicate over the freshly parsed
//! grid and the live attempt buffer. Rules never short-circuit one
//! another and have no failure path of their own: a rule with nothing
//! to check is vacuously valid.

use crate::core::{AttemptBuffer, JudgementGrid};

/// Stable identity of a constraint rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// A letter judged absent is being typed again
    Absent,
    /// A confirmed position is being overwritten
    Correct,
    /// A known-in-word letter is misplaced or missing
    Present,
}

impl RuleKind {
    /// Every rule, in the order results are always reported
    pub const ALL: [Self; 3] = [Self::Absent, Self::Correct, Self::Present];

    /// Stable category tag for the rendering boundary
    #[inline]
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Correct => "correct",
            Self::Present => "present",
        }
    }

    /// Fixed user-facing message, one per category
    #[inline]
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Absent => "Uses a letter the board has already ruled out",
            Self::Correct => "Conflicts with a letter already locked in place",
            Self::Present => "Misplaces or omits a letter known to be in the word",
        }
    }
}

/// Outcome of one rule for one validation pass
///
/// Produced fresh on every pass, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub kind: RuleKind,
    pub is_valid: bool,
    pub message: &'static str,
}

impl ValidationResult {
    /// A passing result for a rule that had nothing to check
    #[must_use]
    pub const fn vacuous(kind: RuleKind) -> Self {
        Self {
            kind,
            is_valid: true,
            message: kind.message(),
        }
    }
}

/// A single constraint check against the current guess
pub trait Rule {
    /// Which rule this is
    fn kind(&self) -> RuleKind;

    /// Run the check; `true` means no violation detected so far
    fn check(&self, grid: &JudgementGrid, attempt: &AttemptBuffer) -> bool;

    /// Package the check outcome for reporting
    fn evaluate(&self, grid: &JudgementGrid, attempt: &AttemptBuffer) -> ValidationResult {
        let kind = self.kind();
        ValidationResult {
            kind,
            is_valid: self.check(grid, attempt),
            message: kind.message(),
        }
    }
}
