//! Check delta resolution
//!
//! Decides which versions are reported to the orchestrator:
//! - no previous version: only the latest one, as a seed
//! - previous version still matching the pattern: every version at or after it
//! - previous version no longer matching: treated like no previous version

use tracing::{debug, warn};

use crate::version::error::VersionError;
use crate::version::extractor::TokenExtractor;
use crate::version::types::{Extraction, Version};

/// Sort extractions ascending by version.
///
/// The sort is stable, so equal versions keep their listing order.
pub fn sort_extractions(extractions: &mut [Extraction]) {
    extractions.sort_by(|a, b| a.version.cmp(&b.version));
}

/// Computes the check response for one invocation
pub struct CheckResolver<'a> {
    extractor: &'a TokenExtractor,
}

impl<'a> CheckResolver<'a> {
    /// `extractor` must be built from the same pattern as the extractions
    pub fn new(extractor: &'a TokenExtractor) -> Self {
        Self { extractor }
    }

    /// Resolve the versions to report.
    ///
    /// `previous_path` is the path of the last version the caller has seen;
    /// `None` or an empty string means this is the first check.
    pub fn resolve(
        &self,
        mut extractions: Vec<Extraction>,
        previous_path: Option<&str>,
    ) -> Result<Vec<Version>, VersionError> {
        sort_extractions(&mut extractions);

        let Some(latest) = extractions.last() else {
            debug!("No extractions, nothing to report");
            return Ok(Vec::new());
        };

        let Some(previous_path) = previous_path.filter(|p| !p.is_empty()) else {
            debug!("No previous version, reporting latest: {}", latest.path);
            return Ok(vec![Version::from(latest)]);
        };

        let Some(previous) = self.extractor.extract(previous_path)? else {
            warn!(
                "Previous version '{}' does not match the pattern, reporting latest: {}",
                previous_path, latest.path
            );
            return Ok(vec![Version::from(latest)]);
        };

        let versions: Vec<Version> = extractions
            .iter()
            .filter(|extraction| extraction.version >= previous.version)
            .map(Version::from)
            .collect();

        debug!(
            "Found {} version(s) at or after '{}'",
            versions.len(),
            previous_path
        );

        Ok(versions)
    }
}
