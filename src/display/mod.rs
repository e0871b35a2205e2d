//! Display formatting for terminal output
//!
//! Plain-text renderings of the dashboard and analytics pages for the
//! one-shot CLI commands.

pub mod analytics;
pub mod dashboard;
pub mod report;

pub use analytics::{format_histogram, format_shares, format_trend_table};
pub use dashboard::format_dashboard;
pub use report::{format_bar, format_percentage, truncate};
