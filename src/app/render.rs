use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::{
    app::state::WeatherSnapshot,
    domain::{
        forecast::DayGroup,
        weather::{
            ForecastSample, TemperatureScale, Units, describe_condition, format_display_date,
            format_one_decimal, format_temperature, short_weekday, to_celsius,
        },
    },
};

/// Text rendering of a ready lookup: current panel, "Today", the 5-day view and a sample count.
pub fn render_report(
    snapshot: &WeatherSnapshot,
    units: Units,
    reference_date: NaiveDate,
) -> String {
    let mut out = String::new();
    render_current(&mut out, snapshot, units);
    out.push('\n');
    render_today(&mut out, &snapshot.forecast.today_series, units, reference_date);
    out.push('\n');
    render_upcoming(&mut out, &snapshot.forecast.upcoming_day_groups, units);
    out.push('\n');
    let plural = if snapshot.sample_count == 1 { "" } else { "s" };
    let _ = writeln!(out, "Based on {} forecast sample{plural}", snapshot.sample_count);
    out
}

fn render_current(out: &mut String, snapshot: &WeatherSnapshot, units: Units) {
    let current = &snapshot.current;
    let condition = describe_condition(&current.condition_main);
    let (high, low) = current.high_low_c();

    let _ = writeln!(out, "{}", current.display_name());
    if current.description.is_empty() {
        let _ = writeln!(out, "{}", condition.label);
    } else {
        let _ = writeln!(out, "{} ({})", condition.label, current.description);
    }
    let _ = writeln!(
        out,
        "Temperature  {}",
        format_temperature(current.temperature_c(), units)
    );
    let _ = writeln!(
        out,
        "High / Low   {} / {}",
        format_temperature(high, units),
        format_temperature(low, units)
    );
    let _ = writeln!(out, "Wind         {} m/s", format_one_decimal(current.wind_speed));
    let _ = writeln!(
        out,
        "Humidity     {}%",
        format_one_decimal(current.humidity_percent)
    );
}

fn render_today(out: &mut String, samples: &[ForecastSample], units: Units, today: NaiveDate) {
    let _ = writeln!(out, "Today  {}", format_display_date(today, true));
    if samples.is_empty() {
        let _ = writeln!(out, "  no remaining forecast slots today");
        return;
    }
    for sample in samples {
        render_sample(out, sample, units);
    }
}

fn render_upcoming(out: &mut String, groups: &[DayGroup], units: Units) {
    let _ = writeln!(out, "5 Day Forecast");
    if groups.is_empty() {
        let _ = writeln!(out, "  no upcoming days");
        return;
    }
    for group in groups {
        let heading = group.date().map_or_else(
            || group.key.clone(),
            |date| {
                format!(
                    "{} {}",
                    short_weekday(date),
                    format_display_date(date, false)
                )
            },
        );
        let _ = writeln!(out, "{heading}");
        for sample in &group.samples {
            render_sample(out, sample, units);
        }
    }
}

fn render_sample(out: &mut String, sample: &ForecastSample, units: Units) {
    let celsius = to_celsius(sample.temperature, TemperatureScale::Kelvin);
    let _ = writeln!(
        out,
        "  {}  {:>7}  {}",
        sample.time_of_day().unwrap_or("--:--"),
        format_temperature(celsius, units),
        describe_condition(&sample.condition_main).label
    );
}
