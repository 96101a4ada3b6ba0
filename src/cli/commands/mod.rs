//! Command implementations

pub mod create;

pub use create::{run_create, CreateOptions, RunOutcome};
