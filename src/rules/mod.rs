//! Constraint rules
//!
//! Three independent checks of the live attempt against the board's
//! revealed judgements. Every pass runs all three rules and reports all
//! three results together; rules never short-circuit one another.

mod absent;
mod correct;
mod present;
mod rule;

pub use absent::AbsentLetterRule;
pub use correct::CorrectPositionRule;
pub use present::PresentLetterRule;
pub use rule::{Rule, RuleKind, ValidationResult};

use crate::core::{AttemptBuffer, JudgementGrid};
use tracing::trace;

/// Evaluate every rule against the current grid and attempt
///
/// Results always come back in [`RuleKind::ALL`] order. With no grid
/// (storage absent or unreadable) no constraints are known and every
/// rule passes vacuously.
#[must_use]
pub fn run_all(grid: Option<&JudgementGrid>, attempt: &AttemptBuffer) -> [ValidationResult; 3] {
    let results = match grid {
        Some(grid) => [
            AbsentLetterRule.evaluate(grid, attempt),
            CorrectPositionRule.evaluate(grid, attempt),
            PresentLetterRule.evaluate(grid, attempt),
        ],
        None => RuleKind::ALL.map(ValidationResult::vacuous),
    };

    for result in &results {
        trace!(rule = result.kind.tag(), valid = result.is_valid, "rule evaluated");
    }

    results
}
