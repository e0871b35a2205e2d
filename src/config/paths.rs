//! Path management for Smart Expense
//!
//! ## Path Resolution Order
//!
//! 1. `SMART_EXPENSE_HOME` environment variable (if set)
//! 2. The platform config directory (`~/.config/smart-expense` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{ExpenseError, ExpenseResult};

/// Default dataset file name, looked up in the working directory
pub const DEFAULT_DATA_FILE: &str = "Cleaned_AI_Ready.csv";

/// Manages all paths used by Smart Expense
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> ExpenseResult<Self> {
        let base_dir = if let Ok(custom) = std::env::var("SMART_EXPENSE_HOME") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "smart-expense")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    ExpenseError::Config("Could not determine a config directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the log directory used while the TUI owns the terminal
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Get the TUI log file
    pub fn log_file(&self) -> PathBuf {
        self.log_dir().join("smart-expense.log")
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> ExpenseResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| ExpenseError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve which dataset file to load
///
/// An explicit path (CLI flag or `SMART_EXPENSE_DATA`) wins, then the
/// settings value, then [`DEFAULT_DATA_FILE`] in the working directory.
pub fn resolve_data_file(explicit: Option<&Path>, configured: Option<&Path>) -> PathBuf {
    explicit
        .or(configured)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.log_file(),
            temp_dir.path().join("logs").join("smart-expense.log")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.log_dir().exists());
    }

    #[test]
    fn test_resolve_data_file_precedence() {
        let explicit = PathBuf::from("/tmp/explicit.csv");
        let configured = PathBuf::from("/tmp/configured.csv");

        assert_eq!(
            resolve_data_file(Some(&explicit), Some(&configured)),
            explicit
        );
        assert_eq!(resolve_data_file(None, Some(&configured)), configured);
        assert_eq!(
            resolve_data_file(None, None),
            PathBuf::from(DEFAULT_DATA_FILE)
        );
    }
}
