//! Version resolution layer for artifact checks
//!
//! This module decides which artifacts in a repository are new versions,
//! given a listing of paths, a pattern and the last version the caller saw.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Matcher   │────▶│  Extractor  │────▶│  Resolver   │
//! │  (listing)  │     │  (filter)   │     │  (token)    │     │  (delta)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │                   │
//!                                                ▼                   ▼
//!                                         ┌─────────────────────────────┐
//!                                         │     Semver (ordering)       │
//!                                         └─────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`matcher`]: Filters paths with the anchored pattern
//! - [`extractor`]: Captures the version token from a path
//! - [`semver`]: Loose semantic version parsing and total ordering
//! - [`resolver`]: Computes the versions to report for a check
//! - [`registry`]: Trait for listing paths from a remote repository
//! - [`registries`]: Concrete repository clients (Nexus)
//! - [`error`]: Error types for resolution and listing
//! - [`types`]: Common types like `Extraction` and `Version`

pub mod error;
pub mod extractor;
pub mod matcher;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod semver;
pub mod types;
