//! Registry references: `repository[:tag]` parsed from a host+path string.
//!
//! The tag is taken from the final path segment only, splitting on its last
//! `:`. A port in the host (`localhost:5000/charts/app`) is never read as a
//! tag because it is not in the final segment.

use std::fmt;
use std::str::FromStr;

use crate::error::GetError;

/// A resolved artifact location in a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    /// Registry host plus repository path, without tag.
    pub repository: String,
    pub tag: Option<String>,
}

impl Reference {
    /// Parses `host/path[:tag]` into a reference.
    pub fn parse(host_and_path: &str) -> Result<Self, GetError> {
        if host_and_path.is_empty() {
            return Err(GetError::invalid_reference(host_and_path, "empty reference"));
        }

        let (repository, tag) = split_tag(host_and_path);
        if repository.is_empty() || repository.ends_with('/') {
            return Err(GetError::invalid_reference(
                host_and_path,
                "empty repository name",
            ));
        }

        // The tag comes from the final segment, so it never holds a `/`.
        if tag == Some("") {
            return Err(GetError::invalid_reference(host_and_path, "empty tag"));
        }

        Ok(Reference {
            repository: repository.to_string(),
            tag: tag.map(str::to_string),
        })
    }
}

impl FromStr for Reference {
    type Err = GetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reference::parse(s)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}:{}", self.repository, tag),
            None => f.write_str(&self.repository),
        }
    }
}

/// Splits `s` into `(before, tag)` on the last `:` of its final `/`-segment.
///
/// `before` keeps every preceding segment, so for `a/b/c:1` it is `a/b/c`.
/// Returns `(s, None)` when the final segment has no colon.
pub fn split_tag(s: &str) -> (&str, Option<&str>) {
    let segment_start = s.rfind('/').map_or(0, |i| i + 1);
    match s[segment_start..].rfind(':') {
        Some(i) => {
            let at = segment_start + i;
            (&s[..at], Some(&s[at + 1..]))
        }
        None => (s, None),
    }
}
