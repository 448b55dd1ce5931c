//! Configuration loader for Weatherbot.
//!
//! Reads `weatherbot.toml` and deserializes it into [`AppConfig`], falling back
//! to defaults when the file is missing or malformed. Secrets never live in
//! the file: [`BotSecrets`] reads them from the environment (after loading a
//! `.env` file, if present) and refuses to start without them.

use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use weatherbot_types::config::AppConfig;
use weatherbot_types::error::ConfigError;

/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_API_TOKEN";
/// Environment variable holding the OpenWeatherMap API key.
pub const WEATHER_KEY_VAR: &str = "WEATHER_API_KEY";
/// Environment variable overriding `[database] url`.
pub const DATABASE_URL_VAR: &str = "WEATHERBOT_DATABASE_URL";

/// Load `.env` into the process environment. A missing file is not an error.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to load .env: {e}"),
    }
}

/// Load configuration from `path`, apply environment overrides and validate.
///
/// - If the file does not exist, defaults are used.
/// - If the file exists but fails to read or parse, logs a warning and uses defaults.
/// - Validation failures are returned; callers treat them as fatal.
pub async fn load_app_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = read_config_file(path).await;
    let config = apply_env_overrides(config, |name| std::env::var(name).ok());
    config.validate()?;
    Ok(config)
}

async fn read_config_file(path: &Path) -> AppConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            AppConfig::default()
        }
    }
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    if let Some(url) = lookup(DATABASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
        config.database.url = url;
    }
    config
}

/// Secrets the bot process needs before it can serve traffic.
pub struct BotSecrets {
    pub telegram_token: SecretString,
    pub weather_api_key: SecretString,
}

impl BotSecrets {
    /// Read both secrets from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read both secrets through `lookup`; blank values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(SecretString::from)
                .ok_or(ConfigError::MissingSecret(name))
        };

        Ok(Self {
            telegram_token: require(TELEGRAM_TOKEN_VAR)?,
            weather_api_key: require(WEATHER_KEY_VAR)?,
        })
    }

    /// The Telegram token as a plain string, for the Bot API client.
    pub fn telegram_token(&self) -> &str {
        self.telegram_token.expose_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[tokio::test]
    async fn missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = read_config_file(&tmp.path().join("weatherbot.toml")).await;
        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn valid_toml_is_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("weatherbot.toml");
        tokio::fs::write(
            &path,
            r#"
[database]
url = "sqlite:///var/lib/weatherbot/logs.db?mode=rwc"

[weather]
lang = "en"
cache_capacity = 64
"#,
        )
        .await
        .unwrap();

        let config = read_config_file(&path).await;
        assert_eq!(config.database.url, "sqlite:///var/lib/weatherbot/logs.db?mode=rwc");
        assert_eq!(config.weather.lang, "en");
        assert_eq!(config.weather.cache_capacity, 64);
        assert_eq!(config.weather.cache_ttl_secs, 300);
    }

    #[tokio::test]
    async fn invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("weatherbot.toml");
        tokio::fs::write(&path, "this is not { valid toml !!!").await.unwrap();

        let config = read_config_file(&path).await;
        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn load_rejects_invalid_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("weatherbot.toml");
        tokio::fs::write(&path, "[weather]\ncache_capacity = 0\n").await.unwrap();

        assert!(matches!(
            load_app_config(&path).await,
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn database_url_override() {
        let config = apply_env_overrides(
            AppConfig::default(),
            env(&[(DATABASE_URL_VAR, "sqlite://./other.db?mode=rwc")]),
        );
        assert_eq!(config.database.url, "sqlite://./other.db?mode=rwc");
    }

    #[test]
    fn blank_database_url_override_is_ignored() {
        let config = apply_env_overrides(AppConfig::default(), env(&[(DATABASE_URL_VAR, "  ")]));
        assert_eq!(config.database.url, AppConfig::default().database.url);
    }

    #[test]
    fn secrets_present() {
        let secrets = BotSecrets::from_lookup(env(&[
            (TELEGRAM_TOKEN_VAR, "123:abc"),
            (WEATHER_KEY_VAR, " owm-key "),
        ]))
        .unwrap();
        assert_eq!(secrets.telegram_token(), "123:abc");
        assert_eq!(secrets.weather_api_key.expose_secret(), "owm-key");
    }

    #[test]
    fn missing_token_fails_fast() {
        let result = BotSecrets::from_lookup(env(&[(WEATHER_KEY_VAR, "owm-key")]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingSecret(TELEGRAM_TOKEN_VAR))
        ));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let result = BotSecrets::from_lookup(env(&[
            (TELEGRAM_TOKEN_VAR, "123:abc"),
            (WEATHER_KEY_VAR, "   "),
        ]));
        assert!(matches!(result, Err(ConfigError::MissingSecret(WEATHER_KEY_VAR))));
    }
}
