//! User settings for Smart Expense
//!
//! Manages dashboard preferences: currency, dataset location, smoothing,
//! headline budget figures, simulated latency and external service defaults.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;

/// User settings for Smart Expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in every rendered amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Dataset to load when no path is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Initial smoothing window (days) for trend charts
    #[serde(default = "default_smoothing_window")]
    pub smoothing_window: usize,

    /// Monthly budget used for the "Remaining Budget" tile
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: Money,

    /// Sustainability score shown on the dashboard (out of 100)
    #[serde(default = "default_sustainability_score")]
    pub sustainability_score: u8,

    /// Month shown in the dashboard header (YYYY-MM)
    #[serde(default = "default_headline_period")]
    pub headline_period: String,

    /// Artificial delay before simulated results appear
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,

    /// Model id used by the `brain` command
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Spreadsheet title used by the `sheet` command
    #[serde(default = "default_spreadsheet_name")]
    pub spreadsheet_name: String,

    /// Service-account key file used by the `sheet` command
    #[serde(default = "default_credentials_file")]
    pub credentials_file: PathBuf,

    /// Default tracing filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_smoothing_window() -> usize {
    3
}

fn default_monthly_budget() -> Money {
    Money::from_major_minor(6000, 0)
}

fn default_sustainability_score() -> u8 {
    72
}

fn default_headline_period() -> String {
    "2025-12".to_string()
}

fn default_simulated_latency_ms() -> u64 {
    1000
}

fn default_gemini_model() -> String {
    "models/gemma-3-27b-it".to_string()
}

fn default_spreadsheet_name() -> String {
    "My Expenses".to_string()
}

fn default_credentials_file() -> PathBuf {
    PathBuf::from("creds.json")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            data_file: None,
            smoothing_window: default_smoothing_window(),
            monthly_budget: default_monthly_budget(),
            sustainability_score: default_sustainability_score(),
            headline_period: default_headline_period(),
            simulated_latency_ms: default_simulated_latency_ms(),
            gemini_model: default_gemini_model(),
            spreadsheet_name: default_spreadsheet_name(),
            credentials_file: default_credentials_file(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> ExpenseResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> ExpenseResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            ExpenseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// The simulated latency as a duration
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.smoothing_window, 3);
        assert_eq!(settings.monthly_budget.minor_units(), 600_000);
        assert_eq!(settings.sustainability_score, 72);
        assert_eq!(settings.simulated_latency(), Duration::from_secs(1));
        assert_eq!(settings.gemini_model, "models/gemma-3-27b-it");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.smoothing_window = 7;
        settings.spreadsheet_name = "Household".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.smoothing_window, 7);
        assert_eq!(loaded.spreadsheet_name, "Household");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"simulated_latency_ms": 0}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.simulated_latency(), Duration::ZERO);
        assert_eq!(loaded.headline_period, "2025-12");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }
}
