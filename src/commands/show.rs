//! Board snapshot command
//!
//! Reads and parses the stored board once so it can be printed.

use crate::core::JudgementGrid;
use crate::state::StateStore;

/// The parsed board, ready for rendering
pub struct ShowResult {
    /// `None` when storage held no readable state
    pub grid: Option<JudgementGrid>,
}

impl ShowResult {
    /// Graded rows in the snapshot
    #[must_use]
    pub fn rows_known(&self) -> usize {
        self.grid.as_ref().map_or(0, JudgementGrid::rows_known)
    }
}

/// Parse the stored board state into a snapshot
pub fn run_show<S: StateStore>(store: &S) -> ShowResult {
    ShowResult {
        grid: store.load_state().map(|state| state.to_grid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MemoryStore, STATE_KEY};

    #[test]
    fn snapshot_of_seeded_store() {
        let mut store = MemoryStore::new();
        store.insert(
            STATE_KEY,
            r#"{
                "boardState": ["crane", ""],
                "evaluations": [["absent", "absent", "correct", "absent", "present"], null]
            }"#,
        );

        let result = run_show(&store);
        assert_eq!(result.rows_known(), 1);
        assert_eq!(result.grid.unwrap().rows().len(), 2);
    }

    #[test]
    fn snapshot_of_empty_store() {
        let result = run_show(&MemoryStore::new());
        assert!(result.grid.is_none());
        assert_eq!(result.rows_known(), 0);
    }
}
