//! Request and response bodies of the check operation

use serde::{Deserialize, Serialize};

use crate::config::Source;
use crate::version::types::Version;

/// Check request read from stdin
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CheckRequest {
    pub source: Source,
    /// Last version the orchestrator has seen; `null` on the first check
    #[serde(default)]
    pub version: Option<Version>,
}

impl CheckRequest {
    /// Path of the previous version, if any
    pub fn previous_path(&self) -> Option<&str> {
        self.version
            .as_ref()
            .map(|v| v.path.as_str())
            .filter(|p| !p.is_empty())
    }
}

/// Check response written to stdout, ascending by version
pub type CheckResponse = Vec<Version>;
