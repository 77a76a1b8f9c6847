use serde::{Deserialize, Serialize};

/// Weather categories derived from the provider's numeric weather code.
///
/// The provider's scale is open-ended, so classification works on
/// ascending thresholds rather than an exhaustive code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCategory {
    ClearSkies,
    PartlyCloudy,
    Rainy,
    Snowy,
    MixedConditions,
}

impl WeatherCategory {
    /// Classify a weather code. First match wins, evaluated in ascending
    /// order; anything above the snow band is "Mixed Conditions".
    pub fn from_code(code: i64) -> Self {
        match code {
            i64::MIN..=1 => Self::ClearSkies,
            2..=3 => Self::PartlyCloudy,
            4..=21 => Self::Rainy,
            22..=32 => Self::Snowy,
            _ => Self::MixedConditions,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::ClearSkies => "Clear Skies",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Rainy => "Rainy",
            Self::Snowy => "Snowy",
            Self::MixedConditions => "Mixed Conditions",
        }
    }

    /// Icon name; the front ends map these to glyphs
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::ClearSkies => "sun",
            Self::PartlyCloudy => "cloud",
            Self::Rainy => "cloud_rain",
            Self::Snowy => "cloud_snow",
            Self::MixedConditions => "cloud",
        }
    }

    /// Decorative particle style, if the category has one
    pub fn particle_style(&self) -> Option<ParticleStyle> {
        match self {
            Self::ClearSkies => Some(ParticleStyle::Ray),
            Self::PartlyCloudy => Some(ParticleStyle::Cloud),
            Self::Rainy => Some(ParticleStyle::Raindrop),
            Self::Snowy => Some(ParticleStyle::Snowflake),
            Self::MixedConditions => None,
        }
    }

    /// Number of decorative particles rendered for this category
    pub fn particle_count(&self) -> usize {
        self.particle_style().map_or(0, ParticleStyle::count)
    }
}

impl std::fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Visual style of the decorative particles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleStyle {
    /// Rotating light rays
    Ray,
    /// Drifting blurred cloud blobs
    Cloud,
    /// Falling streaked drops
    Raindrop,
    /// Falling rotating flakes
    Snowflake,
}

impl ParticleStyle {
    pub fn count(self) -> usize {
        match self {
            Self::Ray => 20,
            Self::Cloud => 15,
            Self::Raindrop => 100,
            Self::Snowflake => 50,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Ray => "rotating light rays",
            Self::Cloud => "drifting cloud blobs",
            Self::Raindrop => "falling raindrops",
            Self::Snowflake => "falling snowflakes",
        }
    }
}

/// A resolved place: the first geocoder candidate for a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

/// Result of one successful lookup. Replaced wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Current temperature in °C
    pub temperature: f64,
    pub weather_code: i64,
    /// Current wind speed in km/h
    pub wind_speed: f64,
    /// Precipitation probability for the current hour, 0-100
    pub precipitation_probability: u8,
    /// Local hour the hourly strip starts at
    pub start_hour: u32,
    /// Up to six hourly temperatures starting at `start_hour`
    pub hourly_temperatures: Vec<f64>,
}

impl WeatherSnapshot {
    /// Category is derived from the code on every call, not stored.
    pub fn category(&self) -> WeatherCategory {
        WeatherCategory::from_code(self.weather_code)
    }

    /// Hour-of-day labels for the hourly strip, wrapping past midnight
    pub fn hourly_labels(&self) -> Vec<String> {
        (0..self.hourly_temperatures.len())
            .map(|offset| format!("{:02}:00", (self.start_hour as usize + offset) % 24))
            .collect()
    }
}
