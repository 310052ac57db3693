use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    cli::{Cli, UnitsArg},
    domain::{forecast::AggregateOptions, weather::Units},
};

const CONFIG_DIR_ENV: &str = "WEATHER_LOOKUP_CONFIG_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    pub units: Units,
    pub skip_first_group: bool,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            units: Units::Celsius,
            skip_first_group: true,
        }
    }
}

impl RuntimeSettings {
    pub fn from_cli_defaults(cli: &Cli) -> Self {
        let mut settings = Self::default();
        settings.apply_cli_overrides(cli);
        settings
    }

    /// Overwrites only the values whose flags were passed.
    pub fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(units) = cli.units {
            self.units = units_from_cli(units);
        }
        if let Some(skip) = cli.skip_first_group_override() {
            self.skip_first_group = skip;
        }
    }

    pub fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            skip_first_group: self.skip_first_group,
        }
    }
}

pub fn units_from_cli(units: UnitsArg) -> Units {
    match units {
        UnitsArg::Celsius => Units::Celsius,
        UnitsArg::Fahrenheit => Units::Fahrenheit,
    }
}

/// Saved settings first, then any CLI flag that was passed wins.
pub fn load_runtime_settings_from(cli: &Cli, path: &Path) -> RuntimeSettings {
    let mut settings = RuntimeSettings::default();

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<RuntimeSettings>(&content) {
            Ok(saved) => settings = saved,
            Err(err) => warn!(path = %path.display(), %err, "ignoring unreadable settings file"),
        },
        Err(_) => debug!(path = %path.display(), "no saved settings"),
    }

    settings.apply_cli_overrides(cli);
    settings
}

/// Resolves settings for this run and writes them back when `--save-settings` was passed.
pub fn prepare_runtime_settings(
    cli: &Cli,
    path: Option<&Path>,
) -> anyhow::Result<RuntimeSettings> {
    let Some(path) = path else {
        if cli.save_settings {
            anyhow::bail!("no config directory available to save settings");
        }
        return Ok(RuntimeSettings::from_cli_defaults(cli));
    };

    let settings = load_runtime_settings_from(cli, path);
    if cli.save_settings {
        save_runtime_settings(path, &settings)?;
        info!(path = %path.display(), "settings saved");
    }
    Ok(settings)
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

pub fn config_dir() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(base));
    }

    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".config").join("weather-lookup"))
}

pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.json"))
}

pub fn history_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("history.json"))
}
