//! Dot-notation paths
//!
//! A [`DotPath`] addresses a location inside a nested document, e.g.
//! `settings.fonts.size` or `users.0.name`. Paths are obtained by splitting
//! on `.`; there is no escaping, so a key that contains a literal dot cannot
//! be addressed unambiguously. That is an inherent limitation of the scheme,
//! not a bug.
//!
//! A segment that spells a canonical base-10 integer (all ASCII digits, no
//! leading zero unless it is exactly `0`) is classified as a sequence
//! position; every other segment is an object key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for dot-path validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path string was empty
    #[error("empty path")]
    Empty,

    /// A segment between dots was empty (leading, trailing, or doubled dot)
    #[error("empty segment at position {0}")]
    EmptySegment(usize),
}

/// A segment in a dot-notation path
///
/// # Examples
///
/// ```
/// use pathtree_core::path::PathSegment;
///
/// let path: pathtree_core::path::DotPath = "users.0.name".parse().unwrap();
/// assert_eq!(path.segments()[0], PathSegment::Key("users".to_string()));
/// assert_eq!(path.segments()[1], PathSegment::Index(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathSegment {
    /// Object key: `fonts` in `settings.fonts.size`
    Key(String),
    /// Sequence position: `0` in `users.0.name`
    Index(usize),
}

impl PathSegment {
    /// Classify a raw segment as a key or a sequence position.
    ///
    /// Only canonical integers become positions; `01` and `1x` stay keys.
    fn classify(raw: &str) -> PathSegment {
        let numeric = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());
        let canonical = raw == "0" || !raw.starts_with('0');
        if numeric && canonical {
            if let Ok(idx) = raw.parse::<usize>() {
                return PathSegment::Index(idx);
            }
        }
        PathSegment::Key(raw.to_string())
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(idx) => write!(f, "{}", idx),
        }
    }
}

/// A dot-notation path into a document
///
/// Always holds at least one segment: the empty path and paths with empty
/// segments (consecutive, leading, or trailing dots) are rejected at parse
/// time with a [`PathError`].
///
/// # Examples
///
/// ```
/// use pathtree_core::path::{DotPath, PathError};
///
/// let path: DotPath = "settings.fonts.size".parse().unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "settings.fonts.size");
///
/// assert_eq!("".parse::<DotPath>(), Err(PathError::Empty));
/// assert_eq!("a..b".parse::<DotPath>(), Err(PathError::EmptySegment(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DotPath {
    segments: Vec<PathSegment>,
}

impl DotPath {
    /// Build a path from pre-classified segments.
    ///
    /// Fails with [`PathError::Empty`] when `segments` is empty.
    pub fn from_segments(segments: Vec<PathSegment>) -> Result<Self, PathError> {
        if segments.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(DotPath { segments })
    }

    /// The path segments, in order
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments (always at least 1)
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept for symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromStr for DotPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }
        let mut segments = Vec::new();
        for (pos, raw) in s.split('.').enumerate() {
            if raw.is_empty() {
                return Err(PathError::EmptySegment(pos));
            }
            segments.push(PathSegment::classify(raw));
        }
        Ok(DotPath { segments })
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, seg) in self.segments.iter().enumerate() {
            if pos > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}
