use thiserror::Error;

/// Errors from repository operations (used by trait definitions in weatherbot-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from the weather provider.
///
/// The dispatcher treats every variant the same way ("city not found or
/// provider error"); the split exists for logging.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather provider returned HTTP {status}")]
    Provider { status: u16 },

    #[error("weather request failed: {0}")]
    Http(String),

    #[error("invalid weather payload: {0}")]
    Deserialization(String),
}

/// Errors delivering a reply to the chat platform.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("failed to send reply: {0}")]
    Send(String),
}

/// Errors raised while assembling configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required secret '{0}' is not set")]
    MissingSecret(&'static str),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_weather_error_display() {
        let err = WeatherError::Provider { status: 404 };
        assert_eq!(err.to_string(), "weather provider returned HTTP 404");
    }

    #[test]
    fn test_missing_secret_names_variable() {
        let err = ConfigError::MissingSecret("WEATHER_API_KEY");
        assert!(err.to_string().contains("WEATHER_API_KEY"));
    }
}
