//! OpenWeatherClient -- concrete [`WeatherProvider`] for OpenWeatherMap.
//!
//! Issues one `GET /data/2.5/weather` per lookup with metric units and the
//! configured language. Only HTTP 200 counts as success; there are no retries.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is only exposed when
//! building the query string. Request URLs are stripped from transport errors
//! before logging because they carry the key.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use weatherbot_core::weather::provider::WeatherProvider;
use weatherbot_types::config::WeatherConfig;
use weatherbot_types::error::WeatherError;
use weatherbot_types::weather::WeatherSnapshot;

use super::types::CurrentWeatherResponse;

/// OpenWeatherMap current-weather client.
pub struct OpenWeatherClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    lang: String,
}

impl OpenWeatherClient {
    const WEATHER_PATH: &'static str = "/data/2.5/weather";

    /// Create a client from the weather config section and the provider key.
    pub fn new(api_key: SecretString, config: &WeatherConfig) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::Http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            lang: config.lang.clone(),
        })
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url, Self::WEATHER_PATH)
    }
}

impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let response = self
            .client
            .get(self.url())
            .query(&[
                ("q", city),
                ("appid", self.api_key.expose_secret()),
                ("units", "metric"),
                ("lang", self.lang.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WeatherError::Http("request timed out".to_string())
                } else {
                    WeatherError::Http(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        debug!(city, status = status.as_u16(), "Weather provider responded");

        if status != reqwest::StatusCode::OK {
            return Err(WeatherError::Provider {
                status: status.as_u16(),
            });
        }

        let body: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Deserialization(e.without_url().to_string()))?;

        WeatherSnapshot::try_from(body)
    }
}
