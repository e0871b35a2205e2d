//! Structured logging with tracing
//!
//! One-shot commands log to stderr. The TUI owns the terminal, so it logs to
//! a file under the config directory instead.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ExpensePaths;
use crate::error::ExpenseResult;

/// Filter directive to use: `debug` when verbose, else the configured level
pub fn filter_directive(configured: &str, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        configured.to_string()
    }
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Log to stderr
pub fn init_stderr(level: &str) {
    let _ = fmt()
        .with_env_filter(build_filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

/// Log to `<config>/logs/smart-expense.log`
pub fn init_file(paths: &ExpensePaths, level: &str) -> ExpenseResult<()> {
    paths.ensure_directories()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())?;

    let _ = fmt()
        .with_env_filter(build_filter(level))
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("warn", false), "warn");
        assert_eq!(filter_directive("warn", true), "debug");
        assert_eq!(filter_directive("smart_expense=info", false), "smart_expense=info");
    }
}
