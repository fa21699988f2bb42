//! Core functionality for release bumping
//!
//! Contains the version and build number rules and the descriptor handling
//! that applies them.

pub mod build_number;
pub mod bumper;
pub mod descriptor;
pub mod version;

pub use build_number::BuildNumberParse;
pub use bumper::{BumpOutcome, Bumper};
pub use descriptor::{DescriptorFile, ReleaseDescriptor};
pub use version::SemVer;
