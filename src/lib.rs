pub mod app;
pub mod cli;
pub mod data;
pub mod domain;

#[cfg(test)]
pub(crate) mod test_support;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use tracing::warn;

use app::{
    history::{HistoryStore, JsonHistoryStore, SearchHistory},
    render::render_report,
    settings::{RuntimeSettings, history_path, prepare_runtime_settings, settings_path},
    state::{AppMode, AppState, LookupTarget},
};
use cli::Cli;
use data::openweather::OpenWeatherClient;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;

    let settings = prepare_runtime_settings(&cli, settings_path().as_deref())?;
    if cli.is_settings_only() {
        println!("Settings saved");
        return Ok(());
    }

    let store = history_path().map(JsonHistoryStore::new);
    let output = execute(
        &cli,
        settings,
        store.as_ref().map(|store| store as &dyn HistoryStore),
    )
    .await?;
    print!("{output}");
    Ok(())
}

/// Handles one invocation and returns the text to print.
pub async fn execute(
    cli: &Cli,
    settings: RuntimeSettings,
    store: Option<&dyn HistoryStore>,
) -> Result<String> {
    let history = match store {
        Some(store) => SearchHistory::load_from(store).unwrap_or_else(|err| {
            warn!(error = %format!("{err:#}"), "could not load search history");
            SearchHistory::default()
        }),
        None => SearchHistory::default(),
    };
    let reference_date = cli.date.unwrap_or_else(|| Utc::now().date_naive());
    let mut app = AppState::new(settings, reference_date, history);

    if cli.history {
        return Ok(list_history(&app.history));
    }
    if let Some(query) = cli.forget.as_deref() {
        let store = store.context("no history store available")?;
        return Ok(if app.forget(query, store)? {
            format!("Removed {} from history\n", query.trim())
        } else {
            format!("{} is not in history\n", query.trim())
        });
    }

    let target = match (cli.coordinates(), cli.from_history.as_deref(), cli.city.as_deref()) {
        (Some(coords), _, _) => LookupTarget::Coords(coords),
        (None, Some(saved), _) => app
            .replay_target(saved)
            .with_context(|| format!("{} is not in history", saved.trim()))?,
        (None, None, Some(city)) => LookupTarget::city(city),
        (None, None, None) => bail!("provide a city name or --lat/--lon"),
    };
    let api_key = cli.api_key.clone().unwrap_or_default();
    let client = match cli.api_url.as_deref() {
        Some(url) => OpenWeatherClient::with_base_url(url, api_key),
        None => OpenWeatherClient::new(api_key),
    };

    let store = if cli.no_history { None } else { store };
    app.lookup(target, &client, store).await;

    match (app.mode, app.snapshot.as_ref()) {
        (AppMode::Ready, Some(snapshot)) => {
            Ok(render_report(snapshot, app.units(), app.reference_date))
        }
        _ => bail!(
            "{}",
            app.last_error
                .as_deref()
                .unwrap_or("lookup did not complete")
        ),
    }
}

fn list_history(history: &SearchHistory) -> String {
    if history.is_empty() {
        return "No saved searches\n".to_string();
    }
    history
        .entries()
        .iter()
        .map(|entry| format!("{entry}\n"))
        .collect()
}
