use super::*;
use crate::{
    app::history::MemoryHistoryStore,
    test_support::{forecast_response, london_current, nov, november_samples, sample},
};

fn state() -> AppState {
    AppState::new(RuntimeSettings::default(), nov(10), SearchHistory::default())
}

fn ready_state() -> AppState {
    let mut state = state();
    state.handle_event(AppEvent::FetchStarted("Looking up London...".to_string()));
    state.handle_event(AppEvent::CurrentFetched(london_current()));
    state.handle_event(AppEvent::ForecastFetched(forecast_response(
        november_samples(),
    )));
    state
}

#[test]
fn new_state_is_idle() {
    let state = state();
    assert_eq!(state.mode, AppMode::Idle);
    assert!(state.snapshot.is_none());
    assert_eq!(state.units(), Units::Celsius);
}

#[test]
fn fetch_started_enters_loading_and_clears_error() {
    let mut state = state();
    state.handle_event(AppEvent::FetchFailed(FetchFailure::Location));
    assert_eq!(state.last_error.as_deref(), Some(LOCATION_ERROR));

    state.handle_event(AppEvent::FetchStarted("Looking up Paris...".to_string()));
    assert_eq!(state.mode, AppMode::Loading);
    assert_eq!(state.loading_message, "Looking up Paris...");
    assert!(state.last_error.is_none());
}

#[test]
fn forecast_after_current_produces_ready_snapshot() {
    let state = ready_state();

    assert_eq!(state.mode, AppMode::Ready);
    let snapshot = state.snapshot.expect("snapshot");
    assert_eq!(snapshot.current.city, "London");
    assert_eq!(snapshot.sample_count, 4);
    assert_eq!(snapshot.forecast.today_series.len(), 2);
    assert_eq!(snapshot.forecast.upcoming_day_groups.len(), 2);
}

#[test]
fn empty_forecast_keeps_previous_samples() {
    let mut state = ready_state();
    state.handle_event(AppEvent::FetchStarted("refresh".to_string()));
    state.handle_event(AppEvent::CurrentFetched(london_current()));
    state.handle_event(AppEvent::ForecastFetched(forecast_response(Vec::new())));

    assert_eq!(state.mode, AppMode::Ready);
    assert_eq!(state.forecast_samples.len(), 4);
    let snapshot = state.snapshot.expect("snapshot");
    assert_eq!(snapshot.forecast.today_series.len(), 2);
}

#[test]
fn malformed_forecast_surfaces_parse_error() {
    let mut state = state();
    state.handle_event(AppEvent::CurrentFetched(london_current()));
    state.handle_event(AppEvent::ForecastFetched(forecast_response(vec![
        sample("2024-11-10 18:00:00", 280.0, "Clear"),
        sample("bad", 280.0, "Clear"),
    ])));

    assert_eq!(state.mode, AppMode::Error);
    assert_eq!(state.last_error.as_deref(), Some(PARSE_ERROR));
    assert!(state.snapshot.is_none());
}

#[test]
fn forecast_without_current_is_an_error() {
    let mut state = state();
    state.handle_event(AppEvent::ForecastFetched(forecast_response(
        november_samples(),
    )));
    assert_eq!(state.mode, AppMode::Error);
    assert_eq!(state.last_error.as_deref(), Some(FORECAST_ERROR));
}

#[test]
fn show_first_group_setting_flows_into_aggregation() {
    let settings = RuntimeSettings {
        skip_first_group: false,
        ..RuntimeSettings::default()
    };
    let mut state = AppState::new(settings, nov(9), SearchHistory::default());
    state.handle_event(AppEvent::CurrentFetched(london_current()));
    state.handle_event(AppEvent::ForecastFetched(forecast_response(
        november_samples(),
    )));

    let snapshot = state.snapshot.expect("snapshot");
    assert_eq!(snapshot.forecast.upcoming_day_groups.len(), 3);
}

#[test]
fn only_typed_city_searches_are_remembered() {
    assert_eq!(
        LookupTarget::city("Berlin").history_query(),
        Some("Berlin")
    );
    let replay = LookupTarget::City {
        query: "berlin".to_string(),
        from_history: true,
    };
    assert_eq!(replay.history_query(), None);
    let coords = LookupTarget::Coords(Coordinates::new(1.0, 2.0));
    assert_eq!(coords.history_query(), None);
}

#[test]
fn replay_target_resolves_saved_searches_only() {
    let history = SearchHistory::from_entries(vec!["berlin".to_string()]);
    let state = AppState::new(RuntimeSettings::default(), nov(10), history);

    assert_eq!(
        state.replay_target(" Berlin "),
        Some(LookupTarget::City {
            query: "berlin".to_string(),
            from_history: true,
        })
    );
    assert_eq!(state.replay_target("Paris"), None);
}

#[test]
fn remember_saves_new_entries_only() {
    let store = MemoryHistoryStore::default();
    let mut state = state();

    state.remember("  Berlin ", Some(&store));
    state.remember("BERLIN", Some(&store));

    assert_eq!(state.history.entries(), ["berlin"]);
    assert_eq!(store.load().expect("load"), vec!["berlin"]);
}

#[test]
fn forget_persists_removal() {
    let store = MemoryHistoryStore::with_entries(vec!["oslo".to_string(), "rome".to_string()]);
    let history = SearchHistory::load_from(&store).expect("load");
    let mut state = AppState::new(RuntimeSettings::default(), nov(10), history);

    assert!(state.forget("Oslo", &store).expect("forget"));
    assert!(!state.forget("tokyo", &store).expect("forget"));
    assert_eq!(store.load().expect("load"), vec!["rome"]);
}
