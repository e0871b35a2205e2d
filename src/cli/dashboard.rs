//! Dashboard CLI command

use clap::Args;

use crate::analytics::{smoothed_trend, DashboardMetrics};
use crate::config::Settings;
use crate::display::format_dashboard;
use crate::error::ExpenseResult;
use crate::storage::Dataset;

/// Arguments for `dashboard`
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Smoothing window in days (1-14)
    #[arg(short, long)]
    pub smooth: Option<usize>,
}

/// Print the headline metrics and the latest smoothed spend per category
pub fn handle_dashboard_command(
    dataset: &Dataset,
    settings: &Settings,
    args: DashboardArgs,
) -> ExpenseResult<()> {
    let window = super::smoothing_window(args.smooth, settings)?;
    let expenses = dataset.expenses();

    let metrics = DashboardMetrics::compute(&expenses, settings)?;
    let trends = smoothed_trend(&expenses, window);

    print!(
        "{}",
        format_dashboard(&metrics, &trends, window, &settings.currency_symbol)
    );
    Ok(())
}
