//! Check operation exposed to the CI orchestrator
//!
//! # Modules
//!
//! - [`command`]: Runs a check request end to end
//! - [`models`]: Request and response bodies
//! - [`error`]: Errors surfaced to the caller

pub mod command;
pub mod error;
pub mod models;

pub use command::CheckCommand;
pub use error::CheckError;
pub use models::{CheckRequest, CheckResponse};
