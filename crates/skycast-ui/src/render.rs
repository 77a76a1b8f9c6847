//! Terminal rendering of the result panel.

use colored::{ColoredString, Colorize};
use skycast_core::UiConfig;
use skycast_weather::{WeatherCategory, WeatherSnapshot};

pub const PROMPT: &str = "city> ";

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
    show_particles: bool,
}

impl Renderer {
    pub fn new(color: bool, show_particles: bool) -> Self {
        Self {
            color,
            show_particles,
        }
    }

    pub fn from_config(config: &UiConfig) -> Self {
        Self::new(config.color, config.show_particles)
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Render a snapshot: icon, location, category, current readings and
    /// the hourly strip.
    pub fn panel(&self, snapshot: &WeatherSnapshot) -> String {
        let category = snapshot.category();
        let mut lines = Vec::new();

        lines.push(format!(
            "{}  {}",
            icon_glyph(category),
            self.paint(&snapshot.location, |s| s.bold())
        ));
        lines.push(format!("   {}", self.paint(category.label(), |s| s.cyan())));
        lines.push(format!(
            "   {}   Wind {} km/h   Precipitation {}%",
            self.paint(&format!("{:.1}°C", snapshot.temperature), |s| s.yellow().bold()),
            format_number(snapshot.wind_speed),
            snapshot.precipitation_probability
        ));

        if !snapshot.hourly_temperatures.is_empty() {
            let labels: Vec<String> = snapshot
                .hourly_labels()
                .iter()
                .map(|l| format!("{:>7}", l))
                .collect();
            let temps: Vec<String> = snapshot
                .hourly_temperatures
                .iter()
                .map(|t| format!("{:>7}", format!("{:.1}°", t)))
                .collect();
            lines.push(format!("   {}", self.paint(&labels.join(""), |s| s.dimmed())));
            lines.push(format!("   {}", temps.join("")));
        }

        if self.show_particles {
            lines.push(format!("   {}", self.paint(&particle_summary(category), |s| s.dimmed())));
        }

        lines.join("\n")
    }

    pub fn error(&self, message: &str) -> String {
        format!("{} {}", self.paint("✗", |s| s.red().bold()), message)
    }

    pub fn loading(&self, query: &str) -> String {
        self.paint(&format!("Looking up {}...", query.trim()), |s| s.dimmed())
    }
}

/// Terminal stand-in for the category icon
pub fn icon_glyph(category: WeatherCategory) -> &'static str {
    match category.icon_name() {
        "sun" => "☀",
        "cloud_rain" => "🌧",
        "cloud_snow" => "🌨",
        _ => "☁",
    }
}

fn particle_summary(category: WeatherCategory) -> String {
    match category.particle_style() {
        Some(style) => format!("✦ {} {}", style.count(), style.description()),
        None => "✦ no particles".to_string(),
    }
}

/// Whole numbers print without a trailing ".0"
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
