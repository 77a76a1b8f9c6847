use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use skycast_core::Config;
use skycast_ui::{interactive, Renderer};
use skycast_weather::WeatherLookup;
use tokio::io::BufReader;

pub async fn run(config: &Config, renderer: Renderer) -> Result<ExitCode> {
    let lookup = Arc::new(WeatherLookup::new(&config.weather)?);

    println!("SkyCast - type a city name, or :quit to exit.");

    let input = BufReader::new(tokio::io::stdin());
    let session = interactive::run(lookup, renderer, input, tokio::io::stdout()).await?;

    tracing::debug!("Session ended after {} submissions", session.generation());
    Ok(ExitCode::SUCCESS)
}
