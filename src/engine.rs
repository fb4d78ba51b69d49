//! Keystroke orchestration
//!
//! The [`Monitor`] is the only component touching the storage boundary.
//! On every keystroke it runs one complete, synchronous pass: re-read
//! and re-parse the board state, update the attempt buffer, run every
//! rule, report the failures. The grid is rebuilt from storage on every
//! pass rather than cached: the state may have changed under us since
//! the last keystroke.

use crate::core::{AttemptBuffer, JudgementGrid};
use crate::report::{Violation, collect_violations};
use crate::rules::run_all;
use crate::state::StateStore;
use tracing::debug;

/// Everything one validation session mutates
///
/// Owned exclusively by the [`Monitor`]; nothing else may touch the
/// buffer, and the grid slot is overwritten wholesale on every pass.
#[derive(Debug, Clone, Default)]
pub struct Session {
    grid: Option<JudgementGrid>,
    attempt: AttemptBuffer,
}

impl Session {
    /// Fresh session with no known state and nothing typed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The grid from the most recent pass, if storage was readable
    #[must_use]
    pub fn grid(&self) -> Option<&JudgementGrid> {
        self.grid.as_ref()
    }

    /// The live attempt buffer
    #[must_use]
    pub fn attempt(&self) -> &AttemptBuffer {
        &self.attempt
    }
}

/// Drives parse → update → validate → report for each keystroke
pub struct Monitor<S: StateStore> {
    store: S,
    session: Session,
}

impl<S: StateStore> Monitor<S> {
    /// Create a monitor over a store, with a fresh session
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: Session::new(),
        }
    }

    /// Run one full pass for a raw key code
    ///
    /// Storage is re-read every time; an unreadable value clears the
    /// grid so every rule passes vacuously. Returns the violations the
    /// rendering boundary should display, empty when the attempt is
    /// consistent with everything known.
    pub fn handle_key(&mut self, code: u8) -> Vec<Violation> {
        self.refresh_grid();
        self.session.attempt.apply_key(code);
        self.validate()
    }

    /// Re-run validation without a keystroke (storage may have changed)
    pub fn revalidate(&mut self) -> Vec<Violation> {
        self.refresh_grid();
        self.validate()
    }

    /// Clear the typed letters, keeping the parsed grid
    ///
    /// The buffer is never cleared automatically; submission is not a
    /// transition this engine observes. Hosts resynchronize through
    /// this explicit call.
    pub fn reset_attempt(&mut self) {
        self.session.attempt.reset();
    }

    /// The current session state, for rendering
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn refresh_grid(&mut self) {
        self.session.grid = self.store.load_state().map(|state| state.to_grid());

        match &self.session.grid {
            Some(grid) => debug!(rows_known = grid.rows_known(), "board state parsed"),
            None => debug!("no readable board state, all rules pass"),
        }
    }

    fn validate(&self) -> Vec<Violation> {
        let results = run_all(self.session.grid.as_ref(), &self.session.attempt);
        collect_violations(&results)
    }
}
