use chrono::NaiveDate;

use crate::{
    cli::Cli,
    data::openweather::ForecastResponse,
    domain::weather::{Coordinates, CurrentConditions, ForecastSample, TemperatureScale},
};

pub(crate) fn default_test_cli() -> Cli {
    Cli {
        city: Some("London".to_string()),
        units: None,
        lat: None,
        lon: None,
        api_key: Some("test-key".to_string()),
        api_url: None,
        show_first_group: false,
        skip_first_group: false,
        date: None,
        history: false,
        forget: None,
        from_history: None,
        no_history: false,
        save_settings: false,
    }
}

pub(crate) fn nov(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, day).expect("valid fixture date")
}

pub(crate) fn sample(timestamp: &str, kelvin: f64, condition: &str) -> ForecastSample {
    ForecastSample {
        timestamp_text: timestamp.to_string(),
        temperature: kelvin,
        temperature_min: kelvin - 0.5,
        temperature_max: kelvin + 0.5,
        wind_speed: 4.0,
        humidity_percent: 75.0,
        condition_main: condition.to_string(),
        description: condition.to_lowercase(),
    }
}

pub(crate) fn london_current() -> CurrentConditions {
    CurrentConditions {
        condition_main: "Rain".to_string(),
        description: "light rain".to_string(),
        temperature: 284.25,
        temperature_min: 283.15,
        temperature_max: 285.45,
        scale: TemperatureScale::Kelvin,
        wind_speed: 5.1,
        humidity_percent: 88.0,
        city: "London".to_string(),
        country: "GB".to_string(),
        coordinates: Coordinates::new(51.5085, -0.1257),
    }
}

/// Two slots on Nov 10, then one per day through Nov 12.
pub(crate) fn november_samples() -> Vec<ForecastSample> {
    vec![
        sample("2024-11-10 18:00:00", 280.15, "Clouds"),
        sample("2024-11-10 21:00:00", 279.15, "Rain"),
        sample("2024-11-11 00:00:00", 278.15, "Snow"),
        sample("2024-11-12 00:00:00", 277.15, "Clear"),
    ]
}

pub(crate) fn forecast_response(samples: Vec<ForecastSample>) -> ForecastResponse {
    ForecastResponse { samples }
}
