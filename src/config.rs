//! Configuration management for the release bumper
//!
//! Resolves where the release descriptor lives.

use crate::{cli::Args, error::BumpError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Conventional descriptor location relative to the project root
pub const DEFAULT_DESCRIPTOR: &str = "react_native/app.json";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Project root directory
    pub project_root: PathBuf,
    /// Descriptor path relative to the project root
    pub descriptor: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            project_root: PathBuf::from("."),
            descriptor: PathBuf::from(DEFAULT_DESCRIPTOR),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, BumpError> {
        let mut config = Self {
            debug: args.debug,
            project_root: args.project_root.clone(),
            ..Self::default()
        };

        if let Some(descriptor) = &args.descriptor {
            config.descriptor = descriptor.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration.
    ///
    /// Only the project root is checked here; a missing descriptor is
    /// reported when it is opened.
    pub fn validate(&self) -> Result<(), BumpError> {
        if !self.project_root.is_dir() {
            return Err(BumpError::file_system(
                "resolve project root",
                &self.project_root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
            ));
        }

        Ok(())
    }

    /// Full path of the release descriptor
    pub fn descriptor_path(&self) -> PathBuf {
        self.project_root.join(&self.descriptor)
    }
}
