use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level flexcal configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlexcalConfig {
    /// Calendar view settings.
    #[serde(default)]
    pub calendar: CalendarToml,
}

/// The `[calendar]` table. Months are 1-based here, as people write them.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    pub start_year: Option<i32>,
    pub start_month: Option<u32>,
    #[serde(default = "default_true")]
    pub show_dates_outside_month: bool,
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: String,
    /// Fixed "today" (YYYY-MM-DD); the system clock is used when absent.
    pub today: Option<String>,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            start_year: None,
            start_month: None,
            show_dates_outside_month: default_true(),
            first_day_of_week: default_first_day_of_week(),
            today: None,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_first_day_of_week() -> String {
    "sunday".to_string()
}

/// Loads the configuration at `path`, or the defaults if the file does not exist.
pub fn load(path: &Path) -> Result<FlexcalConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(FlexcalConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: FlexcalConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}
