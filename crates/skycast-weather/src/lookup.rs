//! Geocode → forecast orchestration.
//!
//! One lookup is two strictly sequential calls. Nothing is retried or
//! cached; every call to [`WeatherLookup::fetch`] goes to the network.

use chrono::Timelike;
use skycast_core::WeatherConfig;
use tracing::instrument;

use crate::error::LookupError;
use crate::geocode::GeocodeClient;
use crate::http::build_client;
use crate::provider::{Forecast, WeatherProvider};
use crate::types::{Location, WeatherSnapshot};

/// Number of hourly temperatures shown in the strip
pub const HOURLY_WINDOW: usize = 6;

#[derive(Debug, Clone)]
pub struct WeatherLookup {
    geocoder: GeocodeClient,
    provider: WeatherProvider,
}

impl WeatherLookup {
    /// Build both clients on one shared HTTP client
    pub fn new(config: &WeatherConfig) -> Result<Self, LookupError> {
        let client = build_client(config)?;
        Ok(Self {
            geocoder: GeocodeClient::with_client(client.clone(), &config.geocode_url),
            provider: WeatherProvider::with_client(client, &config.forecast_url),
        })
    }

    /// Look up `query` using the local wall-clock hour.
    pub async fn fetch(&self, query: &str) -> Result<WeatherSnapshot, LookupError> {
        let hour = chrono::Local::now().hour();
        self.fetch_at_hour(query, hour).await
    }

    /// Look up `query`, slicing hourly data from `hour` (0-23).
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_at_hour(
        &self,
        query: &str,
        hour: u32,
    ) -> Result<WeatherSnapshot, LookupError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let location = self
            .geocoder
            .search(query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::NotFound(query.to_string()))?;

        let forecast = self
            .provider
            .forecast(location.latitude, location.longitude)
            .await?;

        let snapshot = build_snapshot(location, &forecast, hour)?;
        tracing::info!(
            "Weather for {}: {}°C, {}",
            snapshot.location,
            snapshot.temperature,
            snapshot.category()
        );
        Ok(snapshot)
    }
}

/// Assemble a snapshot from a resolved location and a forecast.
///
/// The hourly strip is `[hour, hour + 6)` clipped to the series length.
/// Precipitation must exist at `hour`; a short or null series is an error.
pub fn build_snapshot(
    location: Location,
    forecast: &Forecast,
    hour: u32,
) -> Result<WeatherSnapshot, LookupError> {
    let index = hour as usize;
    let hourly = &forecast.hourly;

    let precipitation = hourly
        .precipitation_probability
        .get(index)
        .copied()
        .flatten()
        .ok_or(LookupError::ForecastIncomplete {
            hour: index,
            available: hourly.precipitation_probability.len(),
        })?;

    Ok(WeatherSnapshot {
        location: location.display_name,
        latitude: location.latitude,
        longitude: location.longitude,
        temperature: forecast.current_weather.temperature,
        weather_code: forecast.current_weather.weathercode,
        wind_speed: forecast.current_weather.windspeed,
        precipitation_probability: percent(precipitation),
        start_hour: hour,
        hourly_temperatures: hourly_window(&hourly.temperature_2m, index, HOURLY_WINDOW),
    })
}

/// `series[start..start + len]`, shortened (never padded) at the end.
///
/// The strip stops at the first null temperature inside the window.
pub fn hourly_window(series: &[Option<f64>], start: usize, len: usize) -> Vec<f64> {
    series.iter().skip(start).take(len).map_while(|t| *t).collect()
}

fn percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
