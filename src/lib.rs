//! Concourse resource check for versioned artifacts stored in Nexus
//!
//! - [`version`]: path filtering, version extraction, ordering and check resolution
//! - [`check`]: the check operation wired to a repository client
//! - [`config`]: source configuration and constants
//! - [`logging`]: log file setup

pub mod check;
pub mod config;
pub mod logging;
pub mod version;
