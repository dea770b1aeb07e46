use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Nexus-related constants
// =============================================================================

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Search endpoint of the Nexus REST API, relative to the server URL
pub const SEARCH_ENDPOINT: &str = "service/rest/v1/search";

// =============================================================================
// Logging-related constants
// =============================================================================

/// Environment variable overriding the log directory
pub const LOG_DIR_ENV: &str = "NEXUS_RESOURCE_LOG_DIR";

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "concourse-nexus-resource.log";

/// Resource source configuration, as written in the pipeline
#[derive(Clone, Deserialize, Serialize, PartialEq)]
pub struct Source {
    /// Base URL of the Nexus server
    #[serde(default)]
    pub url: String,
    /// Name of the raw repository
    #[serde(default)]
    pub repository: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Group (directory) the listing is scoped to
    #[serde(default, rename = "directory")]
    pub group: String,
    /// Pattern matched against artifact paths, capturing the version
    #[serde(default)]
    pub regexp: String,
    /// HTTP timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default)]
    pub debug: bool,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Source")
            .field("url", &self.url)
            .field("repository", &self.repository)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("group", &self.group)
            .field("regexp", &self.regexp)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .finish()
    }
}

/// Error returned when the source configuration is invalid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("url must be specified")]
    MissingUrl,

    #[error("repository must be specified")]
    MissingRepository,

    #[error("username must be specified")]
    MissingUsername,

    #[error("password must be specified")]
    MissingPassword,

    #[error("group must start with '/'")]
    InvalidGroup,

    #[error("regexp must be specified")]
    MissingRegexp,

    #[error("regexp should not start with '/'")]
    InvalidRegexp,
}

impl Source {
    /// Validate the configuration; the first failing rule is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }

        if self.repository.is_empty() {
            return Err(ConfigError::MissingRepository);
        }

        if self.username.is_empty() {
            return Err(ConfigError::MissingUsername);
        }

        if self.password.is_empty() {
            return Err(ConfigError::MissingPassword);
        }

        if !self.group.is_empty() && !self.group.starts_with('/') {
            return Err(ConfigError::InvalidGroup);
        }

        if self.regexp.is_empty() {
            return Err(ConfigError::MissingRegexp);
        }

        if self.regexp.starts_with('/') {
            return Err(ConfigError::InvalidRegexp);
        }

        Ok(())
    }
}

/// Returns the directory log files are written to.
/// Uses $NEXUS_RESOURCE_LOG_DIR if set, otherwise the system temp directory.
pub fn log_dir() -> PathBuf {
    log_dir_with_env(std::env::var(LOG_DIR_ENV).ok(), std::env::temp_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    log_dir().join(LOG_FILE_NAME)
}

fn log_dir_with_env(override_dir: Option<String>, temp_dir: PathBuf) -> PathBuf {
    override_dir
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or(temp_dir)
}
