use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Dotted-decimal version with any number of numeric segments.
///
/// Missing trailing segments compare as zero, so `"1.2"` and `"1.2.0"` are
/// equal. Trailing zero segments are stripped on construction so that
/// equality, ordering, and hashing agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version(Vec<u64>);

impl Version {
    #[must_use]
    pub fn new(mut segments: Vec<u64>) -> Self {
        while segments.last() == Some(&0) {
            segments.pop();
        }
        Self(segments)
    }

    /// Parse with the lenient rule used on the decision path: segments that
    /// do not parse as integers coerce to zero instead of failing.
    #[must_use]
    pub fn lenient(input: &str) -> Self {
        Self::new(
            input
                .split('.')
                .map(|segment| segment.trim().parse().unwrap_or(0))
                .collect(),
        )
    }

    #[must_use]
    pub fn segments(&self) -> &[u64] {
        &self.0
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.0.len().max(other.0.len());
        for i in 0..len {
            let a = self.0.get(i).copied().unwrap_or(0);
            let b = other.0.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "0");
        }
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionParseError {
    #[error("empty version string")]
    Empty,
    #[error("invalid version segment at position {position}: {value}")]
    InvalidSegment { position: usize, value: String },
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let mut segments = Vec::new();
        for (position, segment) in s.split('.').enumerate() {
            let parsed =
                segment
                    .parse()
                    .map_err(|_| VersionParseError::InvalidSegment {
                        position,
                        value: segment.to_string(),
                    })?;
            segments.push(parsed);
        }

        Ok(Version::new(segments))
    }
}

/// Compare two dotted version strings segment by segment, left to right,
/// padding the shorter one with zeros. Non-numeric segments coerce to zero.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    Version::lenient(a).cmp(&Version::lenient(b))
}
