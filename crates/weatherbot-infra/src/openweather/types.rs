//! OpenWeatherMap `/data/2.5/weather` response body (only the fields we read).

use serde::Deserialize;
use weatherbot_types::error::WeatherError;
use weatherbot_types::weather::WeatherSnapshot;

#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: String,
    pub main: MainBlock,
    pub weather: Vec<ConditionBlock>,
    pub wind: WindBlock,
}

#[derive(Debug, Deserialize)]
pub struct MainBlock {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
}

#[derive(Debug, Deserialize)]
pub struct ConditionBlock {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct WindBlock {
    pub speed: f64,
}

impl TryFrom<CurrentWeatherResponse> for WeatherSnapshot {
    type Error = WeatherError;

    fn try_from(resp: CurrentWeatherResponse) -> Result<Self, Self::Error> {
        let description = resp
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .ok_or_else(|| WeatherError::Deserialization("empty 'weather' array".to_string()))?;

        Ok(WeatherSnapshot {
            name: resp.name,
            temperature: resp.main.temp,
            feels_like: resp.main.feels_like,
            description,
            humidity: resp.main.humidity,
            wind_speed: resp.wind.speed,
        })
    }
}
