//! Configuration types for Weatherbot.
//!
//! `AppConfig` represents the optional `weatherbot.toml` that controls the
//! database location, weather provider settings and the HTTP listener.
//! Secrets are not part of this file; they come from the environment.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration. All fields have defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub http: HttpConfig,
}

impl AppConfig {
    /// Reject values that would leave a component unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "weather.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.weather.cache_capacity == 0 {
            return Err(ConfigError::Invalid(
                "weather.cache_capacity must be greater than zero".to_string(),
            ));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Invalid("database.url is empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL.
    #[serde(default = "default_database_url")]
    pub url: String,
}

fn default_database_url() -> String {
    "sqlite://./logs.db?mode=rwc".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

/// Weather provider and cache settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Provider base URL, without the `/data/2.5/weather` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Language for the textual description.
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Outbound request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How long a fetched snapshot is served from memory.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Maximum number of cached cities.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_lang() -> String {
    "ru".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_cache_capacity() -> usize {
    1024
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            lang: default_lang(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

/// Read API listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
