//! Weather lookup for SkyCast
//!
//! Resolves a city name through Nominatim, fetches current conditions and
//! an hourly series from Open-Meteo, and classifies the weather code into
//! one of five categories with matching decorative particles.

pub mod error;
pub mod geocode;
pub mod http;
pub mod lookup;
pub mod particles;
pub mod provider;
pub mod session;
pub mod types;

pub use error::LookupError;
pub use geocode::GeocodeClient;
pub use lookup::{build_snapshot, WeatherLookup, HOURLY_WINDOW};
pub use particles::{Length, Motion, Particle, ParticleField};
pub use provider::{Forecast, WeatherProvider};
pub use session::{ApplyOutcome, RequestTicket, WeatherSession};
pub use types::*;
