//! Repository client implementations for listing artifacts

pub mod nexus;

pub use nexus::{Credentials, NexusRegistry};
