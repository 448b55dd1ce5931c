use weatherbot_types::error::WeatherError;
use weatherbot_types::weather::WeatherSnapshot;

/// A source of current weather for a named city.
///
/// One call is one outbound request: implementations do not retry and do not
/// cache. Implementations live in weatherbot-infra.
pub trait WeatherProvider: Send + Sync {
    fn current_weather(
        &self,
        city: &str,
    ) -> impl std::future::Future<Output = Result<WeatherSnapshot, WeatherError>> + Send;
}
