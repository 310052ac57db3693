mod conditions;
mod conversions;
mod dates;

pub use conditions::{Condition, ConditionDescriptor, describe_condition};
pub use conversions::{
    celsius_to_fahrenheit, display_temperature, format_one_decimal, format_temperature,
    kelvin_to_celsius, round_one_decimal, to_celsius,
};
pub use dates::{
    DAY_KEY_LEN, day_key, day_key_date, format_display_date, short_weekday, today_key,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Units {
    Celsius,
    Fahrenheit,
}

/// Scale a raw temperature reading was reported in.
///
/// The weather API answers in Kelvin unless a `units` parameter is sent, so every
/// raw reading carries its scale explicitly instead of guessing from the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureScale {
    Kelvin,
    Celsius,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn label(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// One 3-hour slot of the 5-day forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub timestamp_text: String,
    pub temperature: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub wind_speed: f64,
    pub humidity_percent: f64,
    pub condition_main: String,
    pub description: String,
}

impl ForecastSample {
    /// `YYYY-MM-DD` prefix of the timestamp, `None` when the text is too short.
    pub fn day_key(&self) -> Option<&str> {
        day_key(&self.timestamp_text)
    }

    /// `HH:MM` part of a `YYYY-MM-DD HH:MM:SS` timestamp.
    pub fn time_of_day(&self) -> Option<&str> {
        self.timestamp_text.get(11..16)
    }

    pub fn condition(&self) -> Condition {
        Condition::from_main(&self.condition_main)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub condition_main: String,
    pub description: String,
    pub temperature: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub scale: TemperatureScale,
    pub wind_speed: f64,
    pub humidity_percent: f64,
    pub city: String,
    pub country: String,
    pub coordinates: Coordinates,
}

impl CurrentConditions {
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }

    pub fn temperature_c(&self) -> f64 {
        to_celsius(self.temperature, self.scale)
    }

    pub fn high_low_c(&self) -> (f64, f64) {
        (
            to_celsius(self.temperature_max, self.scale),
            to_celsius(self.temperature_min, self.scale),
        )
    }
}
