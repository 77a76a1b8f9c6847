//! JSON view of a lookup, shared by `lookup --json` and the web API.

use rand::Rng;
use serde::Serialize;
use skycast_weather::{Particle, ParticleField, WeatherCategory, WeatherSnapshot};

#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub snapshot: WeatherSnapshot,
    pub category: WeatherCategory,
    pub label: &'static str,
    pub icon: &'static str,
    pub particles: Vec<Particle>,
}

impl WeatherReport {
    /// Classify the snapshot and sample a fresh particle field.
    pub fn new<R: Rng>(snapshot: WeatherSnapshot, rng: &mut R) -> Self {
        let category = snapshot.category();
        let field = ParticleField::generate(category, rng);
        Self {
            snapshot,
            category,
            label: category.label(),
            icon: category.icon_name(),
            particles: field.particles,
        }
    }
}
