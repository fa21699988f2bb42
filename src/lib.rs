//! # App Release Bumper
//!
//! Release-pipeline helper for an Expo mobile app. Advances the patch version
//! and the iOS build number stored in `app.json` so every build uploaded to
//! the store carries fresh identifiers.
//!
//! ## Example
//!
//! ```no_run
//! use app_release_bumper::core::Bumper;
//! use std::path::Path;
//!
//! let outcome = Bumper::new().bump(Path::new("react_native/app.json"))?;
//! println!("{}", outcome.summary());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Logs go to stderr; stdout is reserved for the confirmation line.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
