//! Shared test utilities

pub mod repository;

pub use repository::{MockRepository, check_request};
