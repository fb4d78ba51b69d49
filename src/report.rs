//! Violation reporting
//!
//! Reduces a full set of rule outcomes to the failed subset the
//! rendering boundary displays. No failures means an empty report and
//! nothing rendered.

use crate::rules::{RuleKind, ValidationResult};

/// A detected conflict between the attempt and a known constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Stable category tag (`absent` | `correct` | `present`)
    pub kind: RuleKind,
    /// Fixed message for the category
    pub message: &'static str,
}

impl Violation {
    /// The category tag as rendered
    #[inline]
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.kind.tag()
    }
}

/// Keep only the failed outcomes, in their reported order
#[must_use]
pub fn collect_violations(results: &[ValidationResult]) -> Vec<Violation> {
    results
        .iter()
        .filter(|result| !result.is_valid)
        .map(|result| Violation {
            kind: result.kind,
            message: result.message,
        })
        .collect()
}
