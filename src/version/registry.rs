//! Repository trait for listing artifact paths

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Trait for listing the artifacts stored in a remote repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Lists every artifact path under `group` in `repository`
    ///
    /// # Arguments
    /// * `repository` - Name of the repository (e.g., "raw-releases")
    /// * `group` - Directory the listing is scoped to (e.g., "/files"), may be empty
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - All paths, with pagination already followed
    /// * `Err(RegistryError)` - If the listing fails
    async fn list_paths(&self, repository: &str, group: &str)
    -> Result<Vec<String>, RegistryError>;
}
