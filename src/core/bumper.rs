//! Version and build number bumping
//!
//! Reads the release descriptor, advances the patch version and the iOS
//! build number, and writes the whole document back in place.

use crate::{
    core::{
        build_number::{BuildNumberParse, DEFAULT_BUILD_NUMBER},
        descriptor::{DescriptorFile, ReleaseDescriptor},
        version::{DEFAULT_VERSION, SemVer},
    },
    error::Result,
};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Result of a single bump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    /// Version before the bump, if the descriptor had one
    pub previous_version: Option<String>,
    /// Version after the bump
    pub version: String,
    /// How the previous build number was read
    pub previous_build: BuildNumberParse,
    /// Build number after the bump
    pub build_number: i128,
}

impl BumpOutcome {
    /// One-line confirmation for the user
    pub fn summary(&self) -> String {
        format!(
            "✅ Bumped to version {} (iOS build {})",
            self.version, self.build_number
        )
    }
}

/// Advances release counters in a descriptor
#[derive(Debug, Default)]
pub struct Bumper;

impl Bumper {
    pub fn new() -> Self {
        Self
    }

    /// Bump the descriptor stored at `path`.
    ///
    /// The file is opened once, parsed, mutated in memory and overwritten.
    /// Nothing is written if reading, parsing or the version bump fails.
    #[instrument(skip(self))]
    pub fn bump(&self, path: &Path) -> Result<BumpOutcome> {
        info!("Bumping release descriptor: {}", path.display());

        let (file, mut descriptor) = DescriptorFile::open(path)?;
        let outcome = self.apply(&mut descriptor)?;
        file.save(&descriptor)?;

        debug!("Bump outcome: {:?}", outcome);
        Ok(outcome)
    }

    /// Apply the bump to an in-memory descriptor
    pub fn apply(&self, descriptor: &mut ReleaseDescriptor) -> Result<BumpOutcome> {
        let previous_version = descriptor.version()?;
        let current = previous_version.as_deref().unwrap_or(DEFAULT_VERSION);
        let version = SemVer::parse(current)?.bump_patch()?.to_string();
        debug!("Version {} -> {}", current, version);
        descriptor.set_version(version.as_str())?;

        let raw_build = descriptor
            .build_number()?
            .unwrap_or_else(|| Value::String(DEFAULT_BUILD_NUMBER.to_string()));
        let previous_build = BuildNumberParse::from_json(&raw_build)?;
        if previous_build == BuildNumberParse::Fallback {
            warn!(
                "Build number {} is not numeric, counting from zero",
                raw_build
            );
        }
        let build_number = previous_build.next()?;
        descriptor.set_build_number(build_number)?;

        Ok(BumpOutcome {
            previous_version,
            version,
            previous_build,
            build_number,
        })
    }
}
