//! Spending analytics
//!
//! Pure computations behind the dashboard and analytics pages: date-range
//! filtering, per-day category totals, rolling-mean trend lines, amount
//! histograms with a density overlay, category shares and headline metrics.
//! Rendering lives in `tui` and `display`; nothing here draws.

pub mod distribution;
pub mod metrics;
pub mod range;
pub mod share;
pub mod trend;

pub use distribution::{density_curve, DensityCurve, Histogram, HistogramBin, DEFAULT_BINS};
pub use metrics::DashboardMetrics;
pub use range::{DateRange, SmoothingWindow};
pub use share::{category_shares, CategoryShare, ShareBreakdown};
pub use trend::{daily_category_totals, smoothed_trend, DailyTotal, TrendPoint, TrendSeries};

use crate::models::{Expense, Transaction};

/// Keep only expenses, with their amounts made positive
pub fn expenses(transactions: &[Transaction]) -> Vec<Expense> {
    transactions.iter().filter_map(Transaction::as_expense).collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use crate::models::{Category, Expense, Money, Transaction};

    pub fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, d).unwrap()
    }

    pub fn txn(d: u32, minor: i64, category: &str) -> Transaction {
        Transaction::new(
            day(d),
            Money::from_minor(minor),
            Category::new(category).unwrap(),
        )
    }

    pub fn expense(d: u32, major: i64, category: &str) -> Expense {
        Expense {
            date: day(d),
            category: Category::new(category).unwrap(),
            amount: Money::from_major_minor(major, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::txn;
    use super::*;

    #[test]
    fn test_expenses_drops_income_and_flips_sign() {
        let txns = vec![
            txn(1, -10_000, "Food"),
            txn(1, 500_000, "Income"),
            txn(2, -2_550, "Transport"),
            txn(3, 0, "Food"),
        ];

        let result = expenses(&txns);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|e| e.amount.is_positive()));
        assert_eq!(result[1].amount.minor_units(), 2_550);
    }
}
