//! One-shot attempt validation
//!
//! Feeds an attempt string through a fresh monitor one key at a time and
//! returns the final pass, for scripted use and for printing.

use crate::core::WORD_LENGTH;
use crate::engine::Monitor;
use crate::report::{Violation, collect_violations};
use crate::rules::{ValidationResult, run_all};
use crate::state::StateStore;

/// Outcome of validating one attempt string
pub struct CheckResult {
    /// The letters actually fed, normalized to uppercase
    pub attempt: String,
    /// Graded rows found in storage, 0 when state was absent
    pub rows_known: usize,
    /// Whether storage produced a readable board state
    pub state_found: bool,
    /// All rule outcomes from the final pass, in reported order
    pub results: [ValidationResult; 3],
    /// The failed subset
    pub violations: Vec<Violation>,
}

/// Validate an attempt against the stored board state
///
/// Non-letter characters in the input are dropped; letters beyond the
/// first [`WORD_LENGTH`] are ignored exactly as live typing would
/// ignore them.
pub fn run_check<S: StateStore>(store: S, attempt: &str) -> CheckResult {
    let mut monitor = Monitor::new(store);

    let letters: String = attempt
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .take(WORD_LENGTH)
        .collect();

    for byte in letters.bytes() {
        monitor.handle_key(byte);
    }

    // One trailing pass so an empty input still reads storage
    monitor.revalidate();

    let session = monitor.session();
    let results = run_all(session.grid(), session.attempt());
    let violations = collect_violations(&results);

    CheckResult {
        attempt: letters,
        rows_known: session.grid().map_or(0, |grid| grid.rows_known()),
        state_found: session.grid().is_some(),
        results,
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleKind;
    use crate::state::{MemoryStore, STATE_KEY};

    const ONE_ROW_PLAYED: &str = r#"{
        "boardState": ["abcde", "", "", "", "", ""],
        "evaluations": [
            ["absent", "present", "correct", "absent", "absent"],
            null, null, null, null, null
        ]
    }"#;

    fn seeded_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert(STATE_KEY, ONE_ROW_PLAYED);
        store
    }

    #[test]
    fn clean_attempt_reports_nothing() {
        let result = run_check(seeded_store(), "bxcxx");

        assert!(result.violations.is_empty());
        assert!(result.state_found);
        assert_eq!(result.rows_known, 1);
        assert_eq!(result.attempt, "BXCXX");
    }

    #[test]
    fn conflicting_attempt_reports_each_broken_rule() {
        let result = run_check(seeded_store(), "xxaxx");

        let kinds: Vec<RuleKind> = result.violations.iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            vec![RuleKind::Absent, RuleKind::Correct, RuleKind::Present]
        );
    }

    #[test]
    fn input_is_normalized_and_truncated() {
        let result = run_check(seeded_store(), "b-x c9xxQQQ");
        assert_eq!(result.attempt, "BXCXX");
    }

    #[test]
    fn missing_state_checks_nothing() {
        let result = run_check(MemoryStore::new(), "adcde");

        assert!(result.violations.is_empty());
        assert!(!result.state_found);
        assert_eq!(result.rows_known, 0);
        assert!(result.results.iter().all(|r| r.is_valid));
    }

    #[test]
    fn partial_attempt_is_checked_as_typed_so_far() {
        // Two letters typed; B sits at its proven-wrong position
        let result = run_check(seeded_store(), "xb");

        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].kind, RuleKind::Present);
    }
}
