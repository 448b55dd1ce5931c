//! Fixed reply texts and the weather reply template.

use weatherbot_types::weather::WeatherSnapshot;

pub const START: &str = "Привет! Я бот для получения информации о погоде.\n\
Используйте команду /weather <город>, чтобы узнать погоду.\n\
Установите предпочитаемый город /set_city <город>.";

pub const WEATHER_NO_CITY: &str =
    "Пожалуйста, укажите город после команды /weather или установите его после команды /set_city.";

pub const WEATHER_FAILED: &str = "Ошибка: Город не найден или указан неверно.";

pub const SET_CITY_USAGE: &str =
    "Пожалуйста, укажите город после команды /set_city. Пример: /set_city Москва.";

pub const SET_CITY_FAILED: &str = "Произошла ошибка при установке предпочитаемого города.";

pub const CITY_NOT_SET: &str = "Предпочитаемый город не установлен.";

pub const INTERNAL_ERROR: &str = "Произошла внутренняя ошибка. Попробуйте позже.";

pub fn city_set(city: &str) -> String {
    format!("Предпочитаемый город установлен на: {city}")
}

pub fn current_city(city: &str) -> String {
    format!("Ваш предпочитаемый город: {city}")
}

/// Render a snapshot into the weather reply.
pub fn weather_report(snapshot: &WeatherSnapshot) -> String {
    format!(
        "Погода в {}:\n\
         Температура: {}°C\n\
         Ощущается как: {}°C\n\
         Описание: {}\n\
         Влажность: {}%\n\
         Скорость ветра: {} м/с",
        snapshot.name,
        decimal(snapshot.temperature),
        decimal(snapshot.feels_like),
        snapshot.description,
        snapshot.humidity,
        decimal(snapshot.wind_speed),
    )
}

/// Integral values keep one fractional digit (`15.0`), others print as-is (`3.25`).
fn decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_report_contains_every_field() {
        let snapshot = WeatherSnapshot {
            name: "Paris".to_string(),
            temperature: 15.0,
            feels_like: 14.0,
            description: "clear".to_string(),
            humidity: 60,
            wind_speed: 3.2,
        };
        let text = weather_report(&snapshot);
        assert_eq!(
            text,
            "Погода в Paris:\n\
             Температура: 15.0°C\n\
             Ощущается как: 14.0°C\n\
             Описание: clear\n\
             Влажность: 60%\n\
             Скорость ветра: 3.2 м/с"
        );
    }

    #[test]
    fn decimal_formatting() {
        assert_eq!(decimal(15.0), "15.0");
        assert_eq!(decimal(-2.0), "-2.0");
        assert_eq!(decimal(3.25), "3.25");
        assert_eq!(decimal(0.5), "0.5");
    }

    #[test]
    fn start_text_mentions_commands() {
        assert!(START.contains("/weather <город>"));
        assert!(START.contains("/set_city <город>"));
        assert_eq!(START.lines().count(), 3);
    }
}
