//! Version helpers.
//!
//! Data Dragon publishes every patch under its own `major.minor.patch`
//! directory (e.g. `13.18.1`). Manifests echo that string back in their
//! `version` field and name their payload in `type`. This module parses both
//! strictly so configuration mistakes surface before any request is made.

use std::fmt;

use crate::errors::{DdragonError, DdragonResult};

/// A parsed Data Dragon data version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl DataVersion {
    /// Parse a version string such as `"13.18.1"`.
    pub fn parse(s: &str) -> DdragonResult<Self> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        if parts.len() != 3 {
            return Err(DdragonError::invalid_argument(format!(
                "unsupported data version: {s} (expected major.minor.patch)"
            )));
        }

        let mut nums = [0u32; 3];
        for (slot, part) in nums.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| {
                DdragonError::invalid_argument(format!(
                    "unsupported data version: {s} (non-numeric component {part:?})"
                ))
            })?;
        }

        Ok(Self {
            major: nums[0],
            minor: nums[1],
            patch: nums[2],
        })
    }
}

impl fmt::Display for DataVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Known manifest payload kinds (`type` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    Champion,
    Item,
}

impl ManifestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Champion => "champion",
            Self::Item => "item",
        }
    }
}

/// Validate that a manifest `type` field matches the expected kind.
///
/// An empty field is accepted; some mirrors strip it.
pub fn require_kind(actual: &str, expected: ManifestKind) -> DdragonResult<()> {
    if actual.is_empty() || actual == expected.as_str() {
        Ok(())
    } else {
        Err(DdragonError::decode(
            format!("{} manifest", expected.as_str()),
            format!("expected type {}, got {actual}", expected.as_str()),
        ))
    }
}
