//! Command implementations for the CLI

use crate::{config::Config, core::Bumper};
use anyhow::Context;
use tracing::{info, instrument};

/// Bump the configured descriptor and print the confirmation line
#[instrument(skip(config))]
pub fn execute_command(config: &Config) -> anyhow::Result<()> {
    let path = config.descriptor_path();

    let outcome = Bumper::new()
        .bump(&path)
        .with_context(|| format!("Failed to bump {}", path.display()))?;

    println!("{}", outcome.summary());
    info!("Release descriptor updated: {}", path.display());
    Ok(())
}
