use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::domain::weather::Coordinates;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Celsius,
    Fahrenheit,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-lookup",
    version,
    about = "Current conditions and 5-day forecast for a city or coordinates"
)]
pub struct Cli {
    /// City name to search for
    pub city: Option<String>,

    /// Display units [default: celsius, or the saved setting]
    #[arg(long, value_enum)]
    pub units: Option<UnitsArg>,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Keep the first forecast day in the 5-day view
    #[arg(long, conflicts_with = "skip_first_group")]
    pub show_first_group: bool,

    /// Drop the first forecast day from the 5-day view (the default)
    #[arg(long)]
    pub skip_first_group: bool,

    /// Reference date for "today" (YYYY-MM-DD, default: current UTC date)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// List saved searches and exit
    #[arg(long, conflicts_with_all = ["city", "forget"])]
    pub history: bool,

    /// Remove a saved search and exit
    #[arg(long, value_name = "CITY", conflicts_with = "city")]
    pub forget: Option<String>,

    /// Look up a saved search again without re-recording it
    #[arg(
        long,
        value_name = "CITY",
        conflicts_with_all = ["city", "history", "forget"]
    )]
    pub from_history: Option<String>,

    /// Do not record this search
    #[arg(long)]
    pub no_history: bool,

    /// Persist --units and --show-first-group/--skip-first-group as defaults.
    /// Without a city or coordinates, saves and exits.
    #[arg(long)]
    pub save_settings: bool,
}

impl Cli {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }

    /// History maintenance runs without touching the network.
    pub fn is_history_command(&self) -> bool {
        self.history || self.forget.is_some()
    }

    pub fn has_lookup_target(&self) -> bool {
        self.city.as_deref().is_some_and(|c| !c.trim().is_empty())
            || self.lat.is_some()
            || self.from_history.is_some()
    }

    /// `--save-settings` with nothing to look up only writes the settings file.
    pub fn is_settings_only(&self) -> bool {
        self.save_settings && !self.is_history_command() && !self.has_lookup_target()
    }

    /// Only flags actually passed; `None` leaves the saved value alone.
    pub fn skip_first_group_override(&self) -> Option<bool> {
        if self.show_first_group {
            Some(false)
        } else if self.skip_first_group {
            Some(true)
        } else {
            None
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            _ => {}
        }
        if let Some(lat) = self.lat
            && !(-90.0..=90.0).contains(&lat)
        {
            anyhow::bail!("--lat must be between -90 and 90");
        }
        if let Some(lon) = self.lon
            && !(-180.0..=180.0).contains(&lon)
        {
            anyhow::bail!("--lon must be between -180 and 180");
        }
        if self.is_history_command() || self.is_settings_only() {
            return Ok(());
        }
        if !self.has_lookup_target() {
            anyhow::bail!("provide a city name or --lat/--lon");
        }
        if self.api_key.as_deref().is_none_or(str::is_empty) {
            anyhow::bail!("an API key is required (--api-key or OPENWEATHER_API_KEY)");
        }
        Ok(())
    }
}
