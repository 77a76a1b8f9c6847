use std::process::ExitCode;

use anyhow::Result;
use skycast_core::Config;
use skycast_ui::{Renderer, WeatherReport};
use skycast_weather::WeatherLookup;

pub async fn run(
    config: &Config,
    city: &[String],
    json: bool,
    renderer: Renderer,
) -> Result<ExitCode> {
    let query = city.join(" ");
    let lookup = WeatherLookup::new(&config.weather)?;

    match lookup.fetch(&query).await {
        Ok(snapshot) if json => {
            let report = WeatherReport::new(snapshot, &mut rand::rng());
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(ExitCode::SUCCESS)
        }
        Ok(snapshot) => {
            println!("{}", renderer.panel(&snapshot));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!("Lookup failed: {:?}", e);
            eprintln!("{}", renderer.error(&e.user_message()));
            Ok(ExitCode::FAILURE)
        }
    }
}
