//! Forward geocoding: convert a city name to coordinates.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use reqwest::Client;
use serde::Deserialize;
use skycast_core::{NetworkError, WeatherConfig};
use tracing::instrument;

use crate::error::LookupError;
use crate::http::{build_client, decode_json, endpoint};
use crate::types::Location;

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: Coordinate,
    lon: Coordinate,
    display_name: String,
}

/// Nominatim sends coordinates as strings; other compatible servers send numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn value(&self, field: &str) -> Result<f64, LookupError> {
        match self {
            Coordinate::Number(v) => Ok(*v),
            Coordinate::Text(s) => s.trim().parse().map_err(|_| {
                NetworkError::InvalidResponse(format!("{} is not a number: {:?}", field, s))
                    .into()
            }),
        }
    }
}

impl TryFrom<NominatimPlace> for Location {
    type Error = LookupError;

    fn try_from(place: NominatimPlace) -> Result<Self, Self::Error> {
        Ok(Location {
            latitude: place.lat.value("lat")?,
            longitude: place.lon.value("lon")?,
            display_name: place.display_name,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl GeocodeClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, LookupError> {
        Ok(Self::with_client(build_client(config)?, &config.geocode_url))
    }

    /// Reuse an existing HTTP client
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Search for a city. Candidates keep the provider's order; the first is
    /// the best match.
    #[instrument(skip(self), level = "info")]
    pub async fn search(&self, city: &str) -> Result<Vec<Location>, LookupError> {
        let url = endpoint(&self.base_url, "search");

        let response = self
            .client
            .get(&url)
            .query(&[("city", city), ("format", "json")])
            .send()
            .await?;

        let places: Vec<NominatimPlace> = decode_json(response).await?;
        let locations = places
            .into_iter()
            .map(Location::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        if locations.is_empty() {
            tracing::warn!("No geocoding results for '{}'", city);
        } else {
            tracing::debug!(
                "Geocoded '{}' to {} candidates, first: {}",
                city,
                locations.len(),
                locations[0].display_name
            );
        }

        Ok(locations)
    }
}
