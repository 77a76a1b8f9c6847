pub mod config;
pub mod error;

pub use config::{Config, ServerConfig, UiConfig, ValidationResult, WeatherConfig};
pub use error::{ConfigError, NetworkError, ReqwestErrorExt};

use anyhow::Result;

/// Environment variable consulted before `RUST_LOG` for the log filter.
pub const LOG_ENV: &str = "SKYCAST_LOG";

/// Initialize tracing/logging.
///
/// Logs go to stderr so rendered output on stdout stays clean.
pub fn init() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // A subscriber may already be installed (tests, embedding).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    tracing::debug!("SkyCast core initialized");
    Ok(())
}
