use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use skycast_core::Config;

pub async fn run(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<ExitCode> {
    // CLI arguments override the config file
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    println!("{} Starting SkyCast web server...", "▶".green());
    println!("  {} http://{}", "Listening on:".dimmed(), config.server.addr());
    println!("  {} {}", "Geocoder:".dimmed(), config.weather.geocode_url);
    println!("  {} {}", "Forecast:".dimmed(), config.weather.forecast_url);
    println!();

    skycast_ui::web::run(&config).await?;

    Ok(ExitCode::SUCCESS)
}
