//! The check operation: list, filter, extract, resolve

use std::sync::Arc;

use tracing::{debug, info};

use crate::check::error::CheckError;
use crate::check::models::{CheckRequest, CheckResponse};
use crate::version::error::VersionError;
use crate::version::extractor::TokenExtractor;
use crate::version::matcher::PathMatcher;
use crate::version::registry::RepositoryClient;
use crate::version::resolver::CheckResolver;
use crate::version::types::Extraction;

/// Runs check requests against a repository
pub struct CheckCommand {
    repository: Arc<dyn RepositoryClient>,
}

impl CheckCommand {
    pub fn new(repository: Arc<dyn RepositoryClient>) -> Self {
        Self { repository }
    }

    /// Run a single check.
    ///
    /// The source is validated and the pattern compiled before anything is
    /// listed, so configuration errors never reach the repository.
    pub async fn run(&self, request: &CheckRequest) -> Result<CheckResponse, CheckError> {
        let source = &request.source;
        source.validate()?;

        let matcher = PathMatcher::new(&source.regexp)?;
        let extractor = TokenExtractor::new(&source.regexp)?;

        let paths = self
            .repository
            .list_paths(&source.repository, &source.group)
            .await?;

        let extractions = collect_extractions(&matcher, &extractor, &paths)?;
        info!(
            "{} of {} path(s) match '{}'",
            extractions.len(),
            paths.len(),
            source.regexp
        );

        let response =
            CheckResolver::new(&extractor).resolve(extractions, request.previous_path())?;
        debug!("Check response: {:?}", response);

        Ok(response)
    }
}

/// Filter `paths` and extract a version from each match.
///
/// Matching paths whose pattern has no capturing group are skipped.
pub fn collect_extractions(
    matcher: &PathMatcher,
    extractor: &TokenExtractor,
    paths: &[String],
) -> Result<Vec<Extraction>, VersionError> {
    let mut extractions = Vec::new();

    for path in matcher.filter(paths) {
        if let Some(extraction) = extractor.extract(&path)? {
            extractions.push(extraction);
        }
    }

    Ok(extractions)
}
