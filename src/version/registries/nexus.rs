//! Nexus Repository Manager 3 search API implementation

use std::time::Duration;

use indexmap::IndexSet;
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::{DEFAULT_TIMEOUT_SECS, SEARCH_ENDPOINT};
use crate::version::error::RegistryError;
use crate::version::registry::RepositoryClient;

/// One page of the search API response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
    #[serde(default)]
    continuation_token: Option<String>,
}

/// A component in the search results; only its name (the path) is used
#[derive(Debug, Deserialize)]
struct SearchItem {
    name: String,
}

/// Credentials sent as HTTP basic auth
#[derive(Clone, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Repository client for the Nexus search API
pub struct NexusRegistry {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl NexusRegistry {
    /// Creates a new NexusRegistry for the server at `base_url`
    ///
    /// A `timeout_secs` of zero uses [`DEFAULT_TIMEOUT_SECS`].
    pub fn new(
        base_url: &str,
        credentials: Credentials,
        timeout_secs: u64,
    ) -> Result<Self, RegistryError> {
        let timeout_secs = if timeout_secs == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            timeout_secs
        };

        let client = reqwest::Client::builder()
            .user_agent("nexus-resource")
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        info!(
            "New Nexus client created for {} (user '{}')",
            base_url, credentials.username
        );

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    fn search_url(
        &self,
        repository: &str,
        group: &str,
        continuation: Option<&str>,
    ) -> Result<Url, RegistryError> {
        let raw = format!("{}/{}", self.base_url, SEARCH_ENDPOINT);
        let mut url =
            Url::parse(&raw).map_err(|e| RegistryError::InvalidUrl(format!("{}: {}", raw, e)))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("repository", repository);
            query.append_pair("group", group);
            if let Some(token) = continuation {
                query.append_pair("continuationToken", token);
            }
        }

        Ok(url)
    }

    async fn fetch_page(
        &self,
        repository: &str,
        group: &str,
        continuation: Option<&str>,
    ) -> Result<SearchResponse, RegistryError> {
        let url = self.search_url(repository, group, continuation)?;
        debug!("Executing GET {}", url);

        let mut request = self.client.get(url.clone());
        if !self.credentials.username.is_empty() {
            request = request.basic_auth(
                &self.credentials.username,
                Some(&self.credentials.password),
            );
        }

        let response = request.send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(repository.to_string()));
        }

        if !status.is_success() {
            warn!("Nexus returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            warn!("Failed to parse Nexus search response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })
    }
}

#[async_trait::async_trait]
impl RepositoryClient for NexusRegistry {
    async fn list_paths(
        &self,
        repository: &str,
        group: &str,
    ) -> Result<Vec<String>, RegistryError> {
        debug!(
            "Listing repository '{}' and group '{}'",
            repository, group
        );

        // Components can show up on more than one page; keep the first occurrence
        let mut paths = IndexSet::new();
        let mut continuation: Option<String> = None;

        loop {
            let page = self
                .fetch_page(repository, group, continuation.as_deref())
                .await?;

            paths.extend(page.items.into_iter().map(|item| item.name));

            match page.continuation_token {
                Some(token) if !token.is_empty() => {
                    debug!("Got a continuation token, fetching next results");
                    continuation = Some(token);
                }
                _ => break,
            }
        }

        info!(
            "Found {} item(s) in repository '{}' and group '{}'",
            paths.len(),
            repository,
            group
        );

        Ok(paths.into_iter().collect())
    }
}
