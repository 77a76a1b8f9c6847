//! Decorative particle parameters for the weather backdrop.
//!
//! Purely cosmetic: every value is sampled uniformly from a fixed range and
//! the front ends turn them into animated elements. The RNG is passed in so
//! callers (and tests) control seeding.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{ParticleStyle, WeatherCategory};

/// A CSS-style length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum Length {
    Px(f64),
    Percent(f64),
}

/// Keyframed motion of a single particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    /// Rotation in degrees, from/to
    pub rotate: Option<(f64, f64)>,
    /// Horizontal offset in px, from/to
    pub drift_x: Option<(f64, f64)>,
    /// Falls the full height of the viewport
    pub falls: bool,
    /// Opacity keyframes
    pub opacity: [f64; 3],
    /// Animation plays back and forth instead of restarting
    pub mirrored: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub style: ParticleStyle,
    pub width: Length,
    pub height: Length,
    pub left: Length,
    pub top: Length,
    pub motion: Motion,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

/// The full set of particles for one render of a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleField {
    pub category: WeatherCategory,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Generate the particles for `category`. Mixed conditions have none.
    pub fn generate<R: Rng>(category: WeatherCategory, rng: &mut R) -> Self {
        let particles = match category.particle_style() {
            Some(style) => (0..style.count()).map(|_| sample(style, rng)).collect(),
            None => Vec::new(),
        };

        Self {
            category,
            particles,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn style(&self) -> Option<ParticleStyle> {
        self.category.particle_style()
    }
}

fn sample<R: Rng>(style: ParticleStyle, rng: &mut R) -> Particle {
    match style {
        ParticleStyle::Ray => Particle {
            style,
            width: Length::Px(2.0),
            height: Length::Px(rng.random_range(50.0..150.0)),
            left: Length::Percent(rng.random_range(0.0..100.0)),
            top: Length::Percent(rng.random_range(0.0..100.0)),
            motion: Motion {
                rotate: Some((0.0, 360.0)),
                drift_x: None,
                falls: false,
                opacity: [0.3, 1.0, 0.3],
                mirrored: true,
            },
            duration_secs: rng.random_range(3.0..8.0),
            delay_secs: 0.0,
        },
        ParticleStyle::Cloud => Particle {
            style,
            width: Length::Px(rng.random_range(100.0..250.0)),
            height: Length::Px(rng.random_range(50.0..130.0)),
            left: Length::Percent(rng.random_range(0.0..100.0)),
            top: Length::Percent(rng.random_range(0.0..70.0)),
            motion: Motion {
                rotate: None,
                drift_x: Some((-50.0, 50.0)),
                falls: false,
                opacity: [0.4, 0.7, 0.4],
                mirrored: true,
            },
            duration_secs: rng.random_range(5.0..15.0),
            delay_secs: 0.0,
        },
        ParticleStyle::Raindrop => Particle {
            style,
            width: Length::Px(2.0),
            height: Length::Px(20.0),
            left: Length::Percent(rng.random_range(0.0..100.0)),
            top: Length::Px(-20.0),
            motion: Motion {
                rotate: None,
                drift_x: Some((sway(rng), sway(rng))),
                falls: true,
                opacity: [0.7, 1.0, 0.7],
                mirrored: false,
            },
            duration_secs: rng.random_range(1.0..3.0),
            delay_secs: rng.random_range(0.0..2.0),
        },
        ParticleStyle::Snowflake => Particle {
            style,
            width: Length::Px(4.0),
            height: Length::Px(4.0),
            left: Length::Percent(rng.random_range(0.0..100.0)),
            top: Length::Px(-10.0),
            motion: Motion {
                rotate: Some((0.0, 360.0)),
                drift_x: Some((sway(rng), sway(rng))),
                falls: true,
                opacity: [0.5, 1.0, 0.5],
                mirrored: false,
            },
            duration_secs: rng.random_range(2.0..5.0),
            delay_secs: rng.random_range(0.0..3.0),
        },
    }
}

fn sway<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(-25.0..25.0)
}
