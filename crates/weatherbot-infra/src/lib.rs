//! Infrastructure layer for Weatherbot.
//!
//! Contains implementations of the traits defined in `weatherbot-core`:
//! SQLite storage, the OpenWeatherMap HTTP client and the Telegram adapter,
//! plus configuration loading.

pub mod config;
pub mod openweather;
pub mod sqlite;
pub mod telegram;
