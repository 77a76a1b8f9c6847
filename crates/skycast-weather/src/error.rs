//! Lookup error types.

use skycast_core::{NetworkError, ReqwestErrorExt};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Location query is empty")]
    EmptyQuery,

    #[error("City not found: {0}")]
    NotFound(String),

    #[error("Transport error: {0}")]
    Transport(#[from] NetworkError),

    /// The hourly series does not reach the current hour.
    #[error("Forecast has no precipitation data for hour {hour} ({available} hourly entries)")]
    ForecastIncomplete { hour: usize, available: usize },
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.into_network_error())
    }
}

impl LookupError {
    /// User-friendly error message for the panel or web page.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyQuery => "Please enter a city name.".to_string(),
            Self::NotFound(_) => "City not found".to_string(),
            Self::Transport(e) => e.user_message().to_string(),
            Self::ForecastIncomplete { .. } => {
                "Forecast data for the current hour is unavailable. Please try again later."
                    .to_string()
            }
        }
    }

    /// Stable machine-readable kind, used by the web API.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "empty_query",
            Self::NotFound(_) => "not_found",
            Self::Transport(_) => "transport",
            Self::ForecastIncomplete { .. } => "forecast_incomplete",
        }
    }
}
