//! Loose semantic version parsing and ordering
//!
//! Tokens captured from artifact paths are not required to be strict SemVer.
//! A token is split on `.` into segments; purely numeric segments compare
//! numerically, everything else compares as text. Pre-release and build
//! suffixes get no special treatment, they are just more segments.
//!
//! Examples (ascending):
//! - `0.0.1` < `2.4.3` < `2.33.333` < `3.53`
//! - `1.0` < `1.0.0` (strict prefix is smaller)
//! - `1.9` < `1.10` < `1.rc1` (numeric segments sort before text segments)

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::version::error::VersionError;

/// A single dot-separated component of a version token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Digits only, stored without leading zeros ("007" -> "7")
    Numeric(String),
    /// Anything else, compared byte-wise
    Text(String),
}

impl Segment {
    fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.chars().all(is_segment_char) {
            return None;
        }

        if raw.bytes().all(|b| b.is_ascii_digit()) {
            let trimmed = raw.trim_start_matches('0');
            let digits = if trimmed.is_empty() { "0" } else { trimmed };
            Some(Segment::Numeric(digits.to_string()))
        } else {
            Some(Segment::Text(raw.to_string()))
        }
    }

    fn as_str(&self) -> &str {
        match self {
            Segment::Numeric(s) | Segment::Text(s) => s,
        }
    }
}

fn is_segment_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+')
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // No leading zeros, so the longer digit string is the bigger number
            (Segment::Numeric(a), Segment::Numeric(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Segment::Numeric(_), Segment::Text(_)) => Ordering::Less,
            (Segment::Text(_), Segment::Numeric(_)) => Ordering::Greater,
            (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A parsed version token
///
/// Ordering is lexicographic over segments, so a strict prefix sorts first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParsedVersion {
    segments: Vec<Segment>,
}

impl ParsedVersion {
    /// Parse a raw token such as `2.33.333` or `1.0.0-rc.1`.
    ///
    /// Fails on an empty token, an empty segment (`1..2`, `1.`) or a segment
    /// containing characters other than ASCII alphanumerics, `-`, `_` and `+`.
    pub fn parse(token: &str) -> Result<Self, VersionError> {
        if token.is_empty() {
            return Err(VersionError::UnparsableVersion {
                token: token.to_string(),
                reason: "expected a non-empty version".to_string(),
            });
        }

        let segments = token
            .split('.')
            .map(|raw| {
                Segment::parse(raw).ok_or_else(|| VersionError::UnparsableVersion {
                    token: token.to_string(),
                    reason: format!("invalid segment '{}'", raw),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl FromStr for ParsedVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment.as_str())?;
        }
        Ok(())
    }
}

/// Compare two parsed versions
pub fn compare(a: &ParsedVersion, b: &ParsedVersion) -> Ordering {
    a.cmp(b)
}
