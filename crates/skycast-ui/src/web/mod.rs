//! Single-page web front end and JSON lookup API.

mod handlers;

use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use skycast_core::Config;
use skycast_weather::{LookupError, WeatherLookup};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    lookup: Arc<WeatherLookup>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        Ok(Self::from_lookup(Arc::new(WeatherLookup::new(&config.weather)?)))
    }

    pub fn from_lookup(lookup: Arc<WeatherLookup>) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &WeatherLookup {
        &self.lookup
    }
}

/// Create the router with the page, its assets and the API
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/weather", get(handlers::weather))
        .route("/sw.js", get(handlers::service_worker))
        .route("/manifest.webmanifest", get(handlers::manifest))
        .route("/assets/app.js", get(handlers::app_js))
        .route("/assets/app.css", get(handlers::app_css))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until it fails or the process exits
pub async fn run(config: &Config) -> Result<()> {
    let state = AppState::new(config)?;
    let app = router(state);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("SkyCast listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
