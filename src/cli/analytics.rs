//! Analytics CLI command
//!
//! Mirrors the Analytics page: date filter, smoothed trend, amount
//! distribution and category share.

use chrono::NaiveDate;
use clap::Args;

use crate::analytics::{category_shares, expenses, smoothed_trend, DateRange, Histogram, DEFAULT_BINS};
use crate::config::Settings;
use crate::display::{format_histogram, format_shares, format_trend_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::{parse_date, Dataset};

/// Arguments for `analytics`
#[derive(Args, Debug)]
pub struct AnalyticsArgs {
    /// First day to include (defaults to the earliest transaction)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Last day to include (defaults to the latest transaction)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Smoothing window in days (1-14)
    #[arg(long)]
    pub smooth: Option<usize>,

    /// Number of histogram bins
    #[arg(short, long, default_value_t = DEFAULT_BINS)]
    pub bins: usize,
}

fn parse_date_arg(label: &str, value: Option<&str>) -> ExpenseResult<Option<NaiveDate>> {
    value
        .map(|v| {
            parse_date(v).ok_or_else(|| {
                ExpenseError::Validation(format!(
                    "Invalid {} date '{}'. Use YYYY-MM-DD",
                    label, v
                ))
            })
        })
        .transpose()
}

/// Resolve the requested range against the dataset's own bounds
///
/// Missing ends default to the bounds and the result is clamped to them.
pub fn resolve_range(
    bounds: &DateRange,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> ExpenseResult<DateRange> {
    let requested = DateRange::new(start.unwrap_or(bounds.start), end.unwrap_or(bounds.end))?;
    Ok(requested.clamp_to(bounds))
}

/// Print trend, histogram and share reports for a date range
pub fn handle_analytics_command(
    dataset: &Dataset,
    settings: &Settings,
    args: AnalyticsArgs,
) -> ExpenseResult<()> {
    let window = super::smoothing_window(args.smooth, settings)?;
    if args.bins == 0 {
        return Err(ExpenseError::Validation(
            "Histogram needs at least one bin".into(),
        ));
    }

    let Some(bounds) = dataset.date_bounds() else {
        println!("No transactions in {}.", dataset.source().display());
        return Ok(());
    };

    let start = parse_date_arg("start", args.start.as_deref())?;
    let end = parse_date_arg("end", args.end.as_deref())?;
    let range = resolve_range(&bounds, start, end)?;

    let filtered = expenses(&range.filter(dataset.transactions()));
    let symbol = settings.currency_symbol.as_str();

    println!("Analytics: {} (smoothing: {})", range, window);
    println!();

    println!("Smoothed Spending Trend");
    print!("{}", format_trend_table(&smoothed_trend(&filtered, window), symbol));
    println!();

    let histogram = Histogram::build(&filtered, args.bins);
    let density = histogram.density_by_category(&filtered);
    println!("Spending Distribution ({} bins)", histogram.bins.len());
    print!("{}", format_histogram(&histogram, &density, symbol));
    println!();

    println!("Category Share");
    print!("{}", format_shares(&category_shares(&filtered), symbol));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    #[test]
    fn test_resolve_range_defaults_and_clamps() {
        let bounds = DateRange::new(d(12, 1), d(12, 31)).unwrap();

        assert_eq!(resolve_range(&bounds, None, None).unwrap(), bounds);

        let clamped = resolve_range(&bounds, Some(d(11, 1)), Some(d(12, 10))).unwrap();
        assert_eq!(clamped.start, d(12, 1));
        assert_eq!(clamped.end, d(12, 10));
    }

    #[test]
    fn test_resolve_range_rejects_reversed() {
        let bounds = DateRange::new(d(12, 1), d(12, 31)).unwrap();
        let err = resolve_range(&bounds, Some(d(12, 20)), Some(d(12, 5))).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(parse_date_arg("start", None).unwrap(), None);
        assert_eq!(
            parse_date_arg("start", Some("2025-12-05")).unwrap(),
            Some(d(12, 5))
        );
        assert!(parse_date_arg("end", Some("tomorrow")).unwrap_err().is_validation());
    }
}
