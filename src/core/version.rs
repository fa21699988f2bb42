//! Semantic version patch bumping

use crate::error::{BumpError, Result};
use std::fmt;

/// Version used when the descriptor has none
pub const DEFAULT_VERSION: &str = "0.0.0";

/// A `major.minor.patch` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemVer {
    pub major: u128,
    pub minor: u128,
    pub patch: u128,
}

impl SemVer {
    /// Parse a dotted version, padding missing trailing components with zero.
    ///
    /// Components past the third are ignored.
    pub fn parse(version: &str) -> Result<Self> {
        let mut parts: Vec<&str> = version.split('.').collect();
        if parts.len() < 3 {
            parts.resize(3, "0");
        }

        let component = |raw: &str, name: &str| -> Result<u128> {
            raw.trim().parse::<u128>().map_err(|e| {
                BumpError::invalid_version(version, format!("{name} component '{raw}': {e}"))
            })
        };

        Ok(Self {
            major: component(parts[0], "major")?,
            minor: component(parts[1], "minor")?,
            patch: component(parts[2], "patch")?,
        })
    }

    /// Same major and minor, patch plus one
    pub fn bump_patch(self) -> Result<Self> {
        let patch = self.patch.checked_add(1).ok_or_else(|| {
            BumpError::invalid_version(self.to_string(), "patch component cannot be incremented")
        })?;
        Ok(Self { patch, ..self })
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
