use thiserror::Error;

use crate::config::ConfigError;
use crate::version::error::{RegistryError, VersionError};

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("listing files")]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Version(#[from] VersionError),
}
