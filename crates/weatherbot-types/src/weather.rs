//! Weather snapshot types.
//!
//! `WeatherSnapshot` is the provider-neutral shape the bot works with; the
//! OpenWeatherMap wire format is mapped onto it in weatherbot-infra.

use serde::{Deserialize, Serialize};

/// Normalized current-weather fields for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// City name as reported by the provider (may differ from the query).
    pub name: String,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Feels-like temperature in degrees Celsius.
    pub feels_like: f64,
    pub description: String,
    /// Relative humidity in percent.
    pub humidity: u32,
    /// Wind speed in metres per second.
    pub wind_speed: f64,
}
