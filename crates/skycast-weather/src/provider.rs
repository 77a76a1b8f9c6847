//! Open-Meteo forecast client.

use reqwest::Client;
use serde::Deserialize;
use skycast_core::WeatherConfig;
use tracing::instrument;

use crate::error::LookupError;
use crate::http::{build_client, decode_json, endpoint};

const HOURLY_FIELDS: &str = "temperature_2m,weathercode,windspeed_10m,precipitation_probability";

/// Forecast response: current conditions plus hourly series.
#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    pub current_weather: CurrentWeather,
    #[serde(default)]
    pub hourly: HourlySeries,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub weathercode: i64,
    pub windspeed: f64,
}

/// Hourly series, index 0 = first hour of the forecast day.
///
/// Missing arrays decode as empty; null entries are kept as `None`.
/// `weathercode` and `windspeed_10m` are part of the requested field set
/// but nothing reads them yet; current conditions come from `current_weather`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub weathercode: Vec<Option<i64>>,
    #[serde(default)]
    pub windspeed_10m: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability: Vec<Option<f64>>,
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
}

impl WeatherProvider {
    pub fn new(config: &WeatherConfig) -> Result<Self, LookupError> {
        Ok(Self::with_client(build_client(config)?, &config.forecast_url))
    }

    /// Reuse an existing HTTP client
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Fetch current weather and the hourly series for a coordinate.
    #[instrument(skip(self), level = "info")]
    pub async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, LookupError> {
        let url = endpoint(&self.base_url, "forecast");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
            ])
            .send()
            .await?;

        let forecast: Forecast = decode_json(response).await?;

        tracing::debug!(
            "Forecast: {}°C code {} with {} hourly temperatures",
            forecast.current_weather.temperature,
            forecast.current_weather.weathercode,
            forecast.hourly.temperature_2m.len()
        );

        Ok(forecast)
    }
}
