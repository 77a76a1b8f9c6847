use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use skycast_core::{Config, ConfigError};
use skycast_ui::Renderer;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    skycast_core::init()?;

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = match Config::load_validated(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {:#}", e);
            eprintln!("{}", config_failure_message(&e));
            return Ok(ExitCode::FAILURE);
        }
    };

    let renderer = if cli.no_color {
        Renderer::new(false, config.ui.show_particles)
    } else {
        Renderer::from_config(&config.ui)
    };

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Lookup { city, json } => {
            commands::lookup::run(&config, &city, json, renderer).await
        }
        Commands::Interactive => commands::interactive::run(&config, renderer).await,
        Commands::Serve { host, port } => commands::serve::run(config, host, port).await,
    }
}

/// User-facing text for a config failure; the full chain goes to the log.
fn config_failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ConfigError>() {
        Some(config_err) => format!("{} ({})", config_err.user_message(), config_err),
        None => format!("Could not load configuration: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_file_message() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_validated(Some(dir.path().join("absent.toml").as_path())).unwrap_err();

        let message = config_failure_message(&err);
        assert!(message.starts_with("Configuration file not found. Check the --config path."));
        assert!(message.contains("absent.toml"));
    }

    #[test]
    fn test_invalid_config_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 0\n").unwrap();

        let err = Config::load_validated(Some(path.as_path())).unwrap_err();
        let message = config_failure_message(&err);
        assert!(message.starts_with("Invalid configuration."));
        assert!(message.contains("server.port"));
    }

    #[test]
    fn test_malformed_config_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\n").unwrap();

        let err = Config::load_validated(Some(path.as_path())).unwrap_err();
        assert!(config_failure_message(&err).starts_with("Configuration file is malformed."));
    }
}
