//! Error types for the release bumper
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the release bumper
#[derive(Error, Debug)]
pub enum BumpError {
    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The descriptor is not valid JSON or has an unexpected shape
    #[error("Descriptor error in {path}: {message}")]
    Descriptor {
        message: String,
        path: PathBuf,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The semantic version has a non-numeric component
    #[error("Invalid version '{version}': {message}")]
    InvalidVersion { version: String, message: String },

    /// The build number is an integer this tool cannot represent or advance
    #[error("Invalid build number '{value}': {message}")]
    InvalidBuildNumber { value: String, message: String },
}

impl BumpError {
    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new descriptor shape error
    pub fn descriptor<P: Into<PathBuf>>(message: impl Into<String>, path: P) -> Self {
        Self::Descriptor {
            message: message.into(),
            path: path.into(),
            source: None,
        }
    }

    /// Create a descriptor error caused by a JSON failure
    pub fn json<P: Into<PathBuf>>(
        message: impl Into<String>,
        path: P,
        source: serde_json::Error,
    ) -> Self {
        Self::Descriptor {
            message: message.into(),
            path: path.into(),
            source: Some(source),
        }
    }

    /// Create a new invalid version error
    pub fn invalid_version(version: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid build number error
    pub fn invalid_build_number(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidBuildNumber {
            value: value.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BumpError>;
