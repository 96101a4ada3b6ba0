//! Core run pipeline
//!
//! Each stage can only be built from the one before it:
//! `RunConfig` → `UserSelection` → `ValidatedSelection` → `ConfirmedSelection`
//! → `PrResult`s.

pub mod config;
pub mod confirm;
pub mod creator;
pub mod selection;

pub use config::{load_env_file, ConfigError, RunConfig};
pub use confirm::{Confirmation, ConfirmationView, ConfirmedSelection};
pub use creator::{create_pull_requests, PrOutcome, PrResult, Reporter};
pub use selection::{UserSelection, ValidatedSelection, ValidationError};
