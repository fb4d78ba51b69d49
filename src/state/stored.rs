//! Serde model of the persisted game value
//!
//! The puzzle persists its board under a single storage key as JSON with
//! camelCase fields: `boardState` (one string of typed letters per row)
//! and `evaluations` (a parallel array of verdict rows, `null` for rows
//! not yet played).

use crate::core::{Judgement, JudgementGrid};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The persisted board value, as stored on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredState {
    /// Letters typed per row, row-major
    pub board_state: Vec<String>,
    /// Verdicts per row, `None` until the row is submitted
    pub evaluations: Vec<Option<Vec<Judgement>>>,
}

impl StoredState {
    /// Parse a raw stored value
    ///
    /// Returns `None` when the value does not parse; an unreadable value
    /// means no constraints are known, not an error.
    #[must_use]
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(state) => Some(state),
            Err(err) => {
                debug!(%err, "stored value did not parse, treating as no known state");
                None
            }
        }
    }

    /// Build the judgement grid this state describes
    #[must_use]
    pub fn to_grid(&self) -> JudgementGrid {
        JudgementGrid::from_parts(&self.board_state, &self.evaluations)
    }
}
