use chrono::{Datelike, NaiveDate};

pub const DAY_KEY_LEN: usize = 10;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// First ten characters of an API timestamp. No timezone conversion happens here,
/// the key is whatever calendar day the API reported.
#[must_use]
pub fn day_key(timestamp: &str) -> Option<&str> {
    match timestamp.char_indices().nth(DAY_KEY_LEN) {
        Some((end, _)) => Some(&timestamp[..end]),
        None if timestamp.chars().count() == DAY_KEY_LEN => Some(timestamp),
        None => None,
    }
}

#[must_use]
pub fn today_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[must_use]
pub fn day_key_date(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

#[must_use]
pub fn short_weekday(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_sunday() as usize]
}

/// `"Sun, Nov"` with the weekday, `"10, Nov"` without. Fixed English tables so the
/// output never depends on the host locale.
#[must_use]
pub fn format_display_date(date: NaiveDate, show_weekday: bool) -> String {
    let month = MONTHS[date.month0() as usize];
    if show_weekday {
        format!("{}, {month}", short_weekday(date))
    } else {
        format!("{:02}, {month}", date.day())
    }
}
