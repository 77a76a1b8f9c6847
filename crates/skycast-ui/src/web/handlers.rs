use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use skycast_weather::LookupError;

use super::AppState;
use crate::report::WeatherReport;

const INDEX_HTML: &str = include_str!("assets/index.html");
const APP_JS: &str = include_str!("assets/app.js");
const APP_CSS: &str = include_str!("assets/app.css");
const SERVICE_WORKER: &str = include_str!("assets/sw.js");
const MANIFEST: &str = include_str!("assets/manifest.webmanifest");

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    city: String,
    /// Browser-local hour; the server clock is used when absent
    hour: Option<String>,
}

/// Parse the `hour` parameter. Empty counts as absent.
fn parse_hour(raw: Option<&str>) -> Result<Option<u32>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => match text.parse::<u32>() {
            Ok(hour) if hour <= 23 => Ok(Some(hour)),
            _ => Err(ApiError::InvalidHour(text.to_string())),
        },
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

#[derive(Debug)]
pub enum ApiError {
    Lookup(LookupError),
    InvalidHour(String),
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        ApiError::Lookup(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidHour(hour) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "invalid_hour",
                    message: format!("Hour must be between 0 and 23, got {:?}", hour),
                },
            ),
            ApiError::Lookup(err) => {
                let status = match err {
                    LookupError::EmptyQuery => StatusCode::BAD_REQUEST,
                    LookupError::NotFound(_) => StatusCode::NOT_FOUND,
                    LookupError::Transport(_) | LookupError::ForecastIncomplete { .. } => {
                        StatusCode::BAD_GATEWAY
                    }
                };
                (
                    status,
                    ErrorBody {
                        error: err.kind(),
                        message: err.user_message(),
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Look up a city and return the snapshot with its classification and particles
pub async fn weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherReport>, ApiError> {
    let snapshot = match parse_hour(query.hour.as_deref())? {
        Some(hour) => state.lookup().fetch_at_hour(&query.city, hour).await,
        None => state.lookup().fetch(&query.city).await,
    }
    .inspect_err(|e| tracing::warn!("Weather request for '{}' failed: {}", query.city, e))?;

    let report = WeatherReport::new(snapshot, &mut rand::rng());
    Ok(Json(report))
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn app_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], APP_JS)
}

pub async fn app_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], APP_CSS)
}

pub async fn service_worker() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        SERVICE_WORKER,
    )
}

pub async fn manifest() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/manifest+json")], MANIFEST)
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "SkyCast is running"
}
