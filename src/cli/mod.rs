//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod advisor;
pub mod analytics;
pub mod brain;
pub mod dashboard;
pub mod expense;
pub mod sheet;

pub use advisor::{handle_advise_command, AdviseArgs};
pub use analytics::{handle_analytics_command, AnalyticsArgs};
pub use brain::{handle_brain_command, BrainArgs};
pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use expense::{
    handle_add_command, handle_price_command, handle_receipt_command, AddArgs, PriceArgs,
    ReceiptArgs,
};
pub use sheet::{handle_sheet_command, SheetArgs};

use crate::analytics::SmoothingWindow;
use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::services::SimulatedLatency;

/// Smoothing window from a flag, falling back to the configured default
fn smoothing_window(flag: Option<usize>, settings: &Settings) -> ExpenseResult<SmoothingWindow> {
    SmoothingWindow::new(flag.unwrap_or(settings.smoothing_window))
}

fn latency(settings: &Settings) -> SimulatedLatency {
    SimulatedLatency::new(settings.simulated_latency())
}
