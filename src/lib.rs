//! Wordle Guard
//!
//! Live validation of an in-progress Wordle guess against the board's
//! revealed judgements: letters ruled out, letters confirmed in place,
//! and letters known to belong somewhere else.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_guard::engine::Monitor;
//! use wordle_guard::state::{MemoryStore, STATE_KEY};
//!
//! let mut store = MemoryStore::new();
//! store.insert(
//!     STATE_KEY,
//!     r#"{
//!         "boardState": ["crane"],
//!         "evaluations": [["absent", "present", "absent", "absent", "correct"]]
//!     }"#,
//! );
//!
//! // C was judged absent: typing it again is flagged immediately
//! let mut monitor = Monitor::new(store);
//! let violations = monitor.handle_key(b'C');
//! assert_eq!(violations.len(), 1);
//! ```

// Core domain types
pub mod core;

// Persisted state boundary
pub mod state;

// Constraint rules
pub mod rules;

// Violation reporting
pub mod report;

// Keystroke orchestration
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive watch mode
pub mod interactive;
