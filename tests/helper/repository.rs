//! Repository test utilities

use std::collections::HashMap;

use async_trait::async_trait;

use nexus_resource::check::CheckRequest;
use nexus_resource::config::Source;
use nexus_resource::version::error::RegistryError;
use nexus_resource::version::registry::RepositoryClient;
use nexus_resource::version::types::Version;

/// Mock repository for testing, keyed by group
pub struct MockRepository {
    repository: String,
    groups: HashMap<String, Vec<String>>,
}

impl MockRepository {
    pub fn new(repository: &str) -> Self {
        Self {
            repository: repository.to_string(),
            groups: HashMap::new(),
        }
    }

    pub fn with_paths(mut self, group: &str, paths: &[&str]) -> Self {
        self.groups.insert(
            group.to_string(),
            paths.iter().map(|p| p.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl RepositoryClient for MockRepository {
    async fn list_paths(
        &self,
        repository: &str,
        group: &str,
    ) -> Result<Vec<String>, RegistryError> {
        if repository != self.repository {
            return Err(RegistryError::NotFound(repository.to_string()));
        }

        Ok(self.groups.get(group).cloned().unwrap_or_default())
    }
}

/// Build a valid check request for `repository`
pub fn check_request(
    repository: &str,
    group: &str,
    regexp: &str,
    previous: Option<&str>,
) -> CheckRequest {
    CheckRequest {
        source: Source {
            url: "http://nexus-url.com".to_string(),
            repository: repository.to_string(),
            username: "user".to_string(),
            password: "password".to_string(),
            group: group.to_string(),
            regexp: regexp.to_string(),
            timeout: 10,
            debug: false,
        },
        version: previous.map(Version::new),
    }
}
