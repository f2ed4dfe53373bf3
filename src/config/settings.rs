//! User settings for SpendLens
//!
//! Display preferences and report defaults, persisted as JSON.

use serde::{Deserialize, Serialize};

use super::paths::SpendPaths;
use crate::error::SpendError;
use crate::reports::{ReportOptions, TrendScope, DEFAULT_TREND_MONTHS};
use crate::storage::{read_json, write_json_atomic};

/// Settings that `Settings::set` accepts
pub const SETTING_KEYS: [&str; 5] = [
    "currency_symbol",
    "date_format",
    "trend_months",
    "trend_scope",
    "top_vendors",
];

fn parse_count(key: &str, value: &str, min: usize) -> Result<usize, SpendError> {
    value
        .parse::<usize>()
        .ok()
        .filter(|n| *n >= min)
        .ok_or_else(|| {
            SpendError::Validation(format!("{} must be a whole number of at least {}", key, min))
        })
}

/// User settings for SpendLens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Months in the spending trend window
    #[serde(default = "default_trend_months")]
    pub trend_months: usize,

    /// Which filters apply to the spending trend
    #[serde(default)]
    pub trend_scope: TrendScope,

    /// Vendors shown in the terminal vendor chart
    #[serde(default = "default_top_vendors")]
    pub top_vendors: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_trend_months() -> usize {
    DEFAULT_TREND_MONTHS
}

fn default_top_vendors() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            trend_months: default_trend_months(),
            trend_scope: TrendScope::default(),
            top_vendors: default_top_vendors(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &SpendPaths) -> Result<Self, SpendError> {
        read_json::<Settings>(paths.settings_file())
            .map(Option::unwrap_or_default)
            .map_err(|e| SpendError::Config(e.to_string()))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendPaths) -> Result<(), SpendError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Update one setting from its command-line spelling
    ///
    /// Keys are the field names in `config.json`; see [`SETTING_KEYS`].
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SpendError> {
        let value = value.trim();
        match key {
            "currency_symbol" => self.currency_symbol = value.to_string(),
            "date_format" => {
                if value.is_empty() {
                    return Err(SpendError::Validation("date_format cannot be empty".into()));
                }
                self.date_format = value.to_string();
            }
            "trend_months" => self.trend_months = parse_count(key, value, 1)?,
            "top_vendors" => self.top_vendors = parse_count(key, value, 1)?,
            "trend_scope" => {
                self.trend_scope = match value.to_ascii_lowercase().as_str() {
                    "filtered" => TrendScope::Filtered,
                    "all" => TrendScope::All,
                    _ => {
                        return Err(SpendError::Validation(format!(
                            "trend_scope must be 'filtered' or 'all', got '{}'",
                            value
                        )))
                    }
                }
            }
            _ => {
                return Err(SpendError::Validation(format!(
                    "Unknown setting '{}'. Known settings: {}",
                    key,
                    SETTING_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Report options for the given reference date
    pub fn report_options(&self, as_of: chrono::NaiveDate) -> ReportOptions {
        ReportOptions {
            as_of,
            trend_months: self.trend_months,
            trend_scope: self.trend_scope,
        }
    }
}
