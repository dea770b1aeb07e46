//! Version token extraction from artifact paths
//!
//! The pattern's capturing groups decide which substring is the version:
//! - one group: that group
//! - several groups: the group named `version` if there is one, otherwise the first

use regex::{Captures, Regex};

use crate::version::error::VersionError;
use crate::version::semver::ParsedVersion;
use crate::version::types::Extraction;

/// Name of the capturing group that holds the version when a pattern has several
pub const VERSION_GROUP: &str = "version";

/// Strategy used to pick the token out of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSelection {
    /// Use the first capturing group
    First,
    /// Use the group named [`VERSION_GROUP`]
    Named,
}

impl TokenSelection {
    /// Pick the strategy for a compiled pattern.
    ///
    /// Returns `None` when the pattern has no capturing group at all.
    pub fn for_regex(regex: &Regex) -> Option<Self> {
        // captures_len counts the implicit whole-match group
        match regex.captures_len() {
            0 | 1 => None,
            2 => Some(TokenSelection::First),
            _ if regex
                .capture_names()
                .any(|name| name == Some(VERSION_GROUP)) =>
            {
                Some(TokenSelection::Named)
            }
            _ => Some(TokenSelection::First),
        }
    }

    /// Returns the selected token.
    ///
    /// A group that did not participate in the match yields an empty token.
    pub fn select<'h>(&self, captures: &Captures<'h>) -> &'h str {
        let group = match self {
            TokenSelection::First => captures.get(1),
            TokenSelection::Named => captures.name(VERSION_GROUP),
        };
        group.map_or("", |m| m.as_str())
    }
}

/// Extracts [`Extraction`]s from paths with a single compiled pattern
#[derive(Debug, Clone)]
pub struct TokenExtractor {
    regex: Regex,
    selection: Option<TokenSelection>,
}

impl TokenExtractor {
    /// Compile `pattern` as given (unanchored).
    ///
    /// The token comes from the leftmost match, not the full-path match that
    /// [`PathMatcher`](crate::version::matcher::PathMatcher) accepts, so lazy
    /// quantifiers can capture less: `files/abc-(.+?)(\.tgz)?` yields `1` for
    /// `files/abc-1.10.tgz`.
    pub fn new(pattern: &str) -> Result<Self, VersionError> {
        let regex = Regex::new(pattern).map_err(|source| VersionError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        let selection = TokenSelection::for_regex(&regex);

        Ok(Self { regex, selection })
    }

    pub fn selection(&self) -> Option<TokenSelection> {
        self.selection
    }

    /// Extract the version from `path`.
    ///
    /// Returns `Ok(None)` if the pattern does not match or has no capturing
    /// group. Returns an error if a token was captured but is not a valid version.
    pub fn extract(&self, path: &str) -> Result<Option<Extraction>, VersionError> {
        let Some(selection) = self.selection else {
            return Ok(None);
        };
        let Some(captures) = self.regex.captures(path) else {
            return Ok(None);
        };

        let token = selection.select(&captures);
        let version = ParsedVersion::parse(token)?;

        Ok(Some(Extraction {
            path: path.to_string(),
            token: token.to_string(),
            version,
        }))
    }
}

/// Compile `pattern` and extract the version from `path`
pub fn extract(path: &str, pattern: &str) -> Result<Option<Extraction>, VersionError> {
    TokenExtractor::new(pattern)?.extract(path)
}
