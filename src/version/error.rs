use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("version number was not valid: '{token}': {reason}")]
    UnparsableVersion { token: String, reason: String },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Repository not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
