use chrono::NaiveDate;
use tracing::{info, warn};

use crate::{
    app::{
        history::{HistoryStore, SearchHistory, normalize_query},
        settings::RuntimeSettings,
    },
    data::openweather::{ForecastResponse, OpenWeatherClient},
    domain::{
        forecast::{AggregationResult, aggregate},
        weather::{Coordinates, CurrentConditions, ForecastSample, Units},
    },
};

pub const LOCATION_ERROR: &str = "Location not found or cannot be reached!";
pub const FORECAST_ERROR: &str = "Error fetching weather forecast data";
pub const PARSE_ERROR: &str = "Could not parse forecast";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupTarget {
    City { query: String, from_history: bool },
    Coords(Coordinates),
}

impl LookupTarget {
    pub fn city(query: impl Into<String>) -> Self {
        Self::City {
            query: query.into(),
            from_history: false,
        }
    }

    fn loading_message(&self) -> String {
        match self {
            Self::City { query, .. } => format!("Looking up {}...", query.trim()),
            Self::Coords(coords) => format!("Looking up {}...", coords.label()),
        }
    }

    /// Only typed city searches are remembered; replaying a saved one is not.
    fn history_query(&self) -> Option<&str> {
        match self {
            Self::City {
                query,
                from_history: false,
            } => Some(query.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    Location,
    Forecast,
    Parse,
}

impl FetchFailure {
    pub fn message(self) -> &'static str {
        match self {
            Self::Location => LOCATION_ERROR,
            Self::Forecast => FORECAST_ERROR,
            Self::Parse => PARSE_ERROR,
        }
    }
}

#[derive(Debug)]
pub enum AppEvent {
    FetchStarted(String),
    CurrentFetched(CurrentConditions),
    ForecastFetched(ForecastResponse),
    FetchFailed(FetchFailure),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub forecast: AggregationResult,
    pub sample_count: usize,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub loading_message: String,
    pub last_error: Option<String>,
    pub current: Option<CurrentConditions>,
    pub forecast_samples: Vec<ForecastSample>,
    pub snapshot: Option<WeatherSnapshot>,
    pub history: SearchHistory,
    pub settings: RuntimeSettings,
    pub reference_date: NaiveDate,
}

impl AppState {
    pub fn new(
        settings: RuntimeSettings,
        reference_date: NaiveDate,
        history: SearchHistory,
    ) -> Self {
        Self {
            mode: AppMode::Idle,
            loading_message: String::new(),
            last_error: None,
            current: None,
            forecast_samples: Vec::new(),
            snapshot: None,
            history,
            settings,
            reference_date,
        }
    }

    pub fn units(&self) -> Units {
        self.settings.units
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::FetchStarted(message) => {
                self.mode = AppMode::Loading;
                self.loading_message = message;
                self.last_error = None;
            }
            AppEvent::CurrentFetched(current) => {
                self.loading_message = format!("Fetching forecast for {}...", current.city);
                self.current = Some(current);
            }
            AppEvent::ForecastFetched(response) => self.apply_forecast(response),
            AppEvent::FetchFailed(failure) => {
                self.mode = AppMode::Error;
                self.last_error = Some(failure.message().to_string());
            }
        }
    }

    /// Runs one lookup to completion: current conditions, history, forecast, grouping.
    pub async fn lookup(
        &mut self,
        target: LookupTarget,
        client: &OpenWeatherClient,
        store: Option<&dyn HistoryStore>,
    ) {
        self.handle_event(AppEvent::FetchStarted(target.loading_message()));

        let fetched = match &target {
            LookupTarget::City { query, .. } => client.current_by_city(query.trim()).await,
            LookupTarget::Coords(coords) => client.current_by_coords(*coords).await,
        };
        let current = match fetched {
            Ok(current) => current,
            Err(err) => {
                warn!(error = %format!("{err:#}"), "current conditions lookup failed");
                self.handle_event(AppEvent::FetchFailed(FetchFailure::Location));
                return;
            }
        };
        let coords = current.coordinates;
        self.handle_event(AppEvent::CurrentFetched(current));

        if let Some(query) = target.history_query() {
            self.remember(query, store);
        }

        match client.forecast_by_coords(coords).await {
            Ok(response) => self.handle_event(AppEvent::ForecastFetched(response)),
            Err(err) => {
                warn!(error = %format!("{err:#}"), "forecast lookup failed");
                self.handle_event(AppEvent::FetchFailed(FetchFailure::Forecast));
            }
        }
    }

    /// A lookup for a saved search, if `query` is one.
    pub fn replay_target(&self, query: &str) -> Option<LookupTarget> {
        if !self.history.contains(query) {
            return None;
        }
        normalize_query(query).map(|query| LookupTarget::City {
            query,
            from_history: true,
        })
    }

    /// Removes a saved search and persists the result.
    pub fn forget(&mut self, query: &str, store: &dyn HistoryStore) -> anyhow::Result<bool> {
        let removed = self.history.remove(query);
        if removed {
            store.save(self.history.entries())?;
        }
        Ok(removed)
    }

    fn remember(&mut self, query: &str, store: Option<&dyn HistoryStore>) {
        if !self.history.record(query) {
            return;
        }
        let Some(store) = store else {
            return;
        };
        if let Err(err) = store.save(self.history.entries()) {
            warn!(error = %format!("{err:#}"), "saving search history failed");
        }
    }

    fn apply_forecast(&mut self, response: ForecastResponse) {
        // An empty list leaves the previous forecast in place.
        if !response.samples.is_empty() {
            self.forecast_samples = response.samples;
        }

        let Some(current) = self.current.clone() else {
            self.handle_event(AppEvent::FetchFailed(FetchFailure::Forecast));
            return;
        };

        match aggregate(
            &self.forecast_samples,
            self.reference_date,
            self.settings.aggregate_options(),
        ) {
            Ok(forecast) => {
                info!(
                    city = %current.city,
                    today = forecast.today_series.len(),
                    days = forecast.upcoming_day_groups.len(),
                    "forecast ready"
                );
                self.snapshot = Some(WeatherSnapshot {
                    current,
                    forecast,
                    sample_count: self.forecast_samples.len(),
                });
                self.mode = AppMode::Ready;
                self.loading_message.clear();
            }
            Err(err) => {
                warn!(%err, "forecast grouping failed");
                self.handle_event(AppEvent::FetchFailed(FetchFailure::Parse));
            }
        }
    }
}

#[cfg(test)]
mod tests;
