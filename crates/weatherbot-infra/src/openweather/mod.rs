//! OpenWeatherMap current-weather client.

pub mod client;
pub mod types;

pub use client::OpenWeatherClient;
