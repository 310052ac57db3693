use super::{TemperatureScale, Units};

const KELVIN_OFFSET: f64 = 273.15;

#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[must_use]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    round_one_decimal(kelvin - KELVIN_OFFSET)
}

/// Normalizes a raw reading to Celsius, rounded for display.
#[must_use]
pub fn to_celsius(value: f64, scale: TemperatureScale) -> f64 {
    match scale {
        TemperatureScale::Kelvin => kelvin_to_celsius(value),
        TemperatureScale::Celsius => round_one_decimal(value),
    }
}

#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    round_one_decimal(celsius * 1.8 + 32.0)
}

#[must_use]
pub fn display_temperature(celsius: f64, units: Units) -> f64 {
    match units {
        Units::Celsius => round_one_decimal(celsius),
        Units::Fahrenheit => celsius_to_fahrenheit(celsius),
    }
}

#[must_use]
pub fn format_temperature(celsius: f64, units: Units) -> String {
    let suffix = match units {
        Units::Celsius => "°C",
        Units::Fahrenheit => "°F",
    };
    format!(
        "{}{suffix}",
        format_one_decimal(display_temperature(celsius, units))
    )
}

#[must_use]
pub fn format_one_decimal(value: f64) -> String {
    let rounded = round_one_decimal(value);
    // avoid "-0.0"
    if rounded == 0.0 {
        return "0.0".to_string();
    }
    format!("{rounded:.1}")
}
