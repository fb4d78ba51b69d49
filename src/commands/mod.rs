//! Command implementations

pub mod check;
pub mod show;

pub use check::{CheckResult, run_check};
pub use show::{ShowResult, run_show};
