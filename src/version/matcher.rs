//! Path filtering against the configured pattern

use regex::Regex;

use crate::version::error::VersionError;

/// Filters artifact paths with a pattern anchored to the whole path
///
/// The pattern is wrapped as `^(?:pattern)$`, so alternations such as
/// `a-(.*).tgz|b-(.*).zip` are anchored as a whole.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    regex: Regex,
}

impl PathMatcher {
    pub fn new(pattern: &str) -> Result<Self, VersionError> {
        let anchored = format!("^(?:{})$", pattern);
        let regex = Regex::new(&anchored).map_err(|source| VersionError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self { regex })
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Returns the matching paths, preserving input order
    pub fn filter<I, S>(&self, paths: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .filter(|path| self.is_match(path.as_ref()))
            .map(|path| path.as_ref().to_string())
            .collect()
    }
}

/// Compile `pattern` and return every path in `paths` that fully matches it
pub fn match_paths<S: AsRef<str>>(paths: &[S], pattern: &str) -> Result<Vec<String>, VersionError> {
    Ok(PathMatcher::new(pattern)?.filter(paths))
}
