//! Common types shared by the resolution pipeline

use serde::{Deserialize, Serialize};

use crate::version::semver::ParsedVersion;

/// A matching artifact path paired with the version captured from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Path of the artifact inside the repository
    pub path: String,
    /// Raw substring captured by the pattern
    pub token: String,
    /// Parsed form of `token`
    pub version: ParsedVersion,
}

/// A version as exchanged with the orchestrator
///
/// The version is always the artifact path, never the parsed token, so the
/// wire contract does not depend on how tokens are compared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
}

impl Version {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl From<&Extraction> for Version {
    fn from(extraction: &Extraction) -> Self {
        Self::new(extraction.path.clone())
    }
}
