//! Command-line argument parsing and validation

use clap::Parser;
use std::path::PathBuf;

/// Bump the Expo app version and iOS build number before a release build
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "bump-ios-version")]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Project root the descriptor path is resolved against
    #[arg(long = "project-root", default_value = ".")]
    pub project_root: PathBuf,

    /// Descriptor file, relative to the project root
    #[arg(long)]
    pub descriptor: Option<PathBuf>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
