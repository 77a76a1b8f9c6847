//! Front ends for SkyCast: the terminal panel, the interactive prompt loop
//! and the web server.

pub mod interactive;
pub mod render;
pub mod report;
pub mod services;
pub mod web;

pub use render::Renderer;
pub use report::WeatherReport;
