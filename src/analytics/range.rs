//! Filter controls: inclusive date range and smoothing window

use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Transaction;

/// An inclusive calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> ExpenseResult<Self> {
        if start > end {
            return Err(ExpenseError::Validation(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// The smallest range covering every transaction
    pub fn spanning(transactions: &[Transaction]) -> Option<Self> {
        let start = transactions.iter().map(|t| t.date).min()?;
        let end = transactions.iter().map(|t| t.date).max()?;
        Some(Self { start, end })
    }

    /// Restrict this range to lie within `bounds`
    ///
    /// A selection entirely outside the bounds collapses onto the nearest
    /// bound day.
    pub fn clamp_to(&self, bounds: &DateRange) -> Self {
        let start = self.start.clamp(bounds.start, bounds.end);
        let end = self.end.clamp(bounds.start, bounds.end);
        Self { start, end }
    }

    /// Check if a date falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Keep the transactions dated inside the range
    pub fn filter(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let kept: Vec<Transaction> = transactions
            .iter()
            .filter(|t| self.contains(t.date))
            .cloned()
            .collect();
        debug!(range = %self, kept = kept.len(), total = transactions.len(), "filtered by date");
        kept
    }

    /// Number of days covered, counting both ends
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Number of consecutive observations averaged for a trend line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SmoothingWindow(usize);

impl SmoothingWindow {
    pub const MIN: usize = 1;
    pub const MAX: usize = 14;
    pub const DEFAULT: usize = 3;

    /// Create a window, rejecting values outside 1..=14
    pub fn new(days: usize) -> ExpenseResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&days) {
            return Err(ExpenseError::Validation(format!(
                "Smoothing window must be between {} and {} days, got {}",
                Self::MIN,
                Self::MAX,
                days
            )));
        }
        Ok(Self(days))
    }

    /// Create a window, clamping into 1..=14
    pub fn saturating(days: usize) -> Self {
        Self(days.clamp(Self::MIN, Self::MAX))
    }

    pub fn days(&self) -> usize {
        self.0
    }

    /// One day wider, stopping at the maximum
    pub fn increment(&self) -> Self {
        Self::saturating(self.0 + 1)
    }

    /// One day narrower, stopping at the minimum
    pub fn decrement(&self) -> Self {
        Self::saturating(self.0.saturating_sub(1))
    }
}

impl Default for SmoothingWindow {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for SmoothingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "1 day")
        } else {
            write!(f, "{} days", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{day, txn};

    #[test]
    fn test_new_rejects_inverted_range() {
        assert!(DateRange::new(day(5), day(1)).unwrap_err().is_validation());
        assert_eq!(DateRange::new(day(1), day(1)).unwrap().days(), 1);
    }

    #[test]
    fn test_spanning() {
        let txns = vec![txn(9, -100, "Food"), txn(2, -100, "Food"), txn(20, 5, "Income")];
        let range = DateRange::spanning(&txns).unwrap();
        assert_eq!(range.start, day(2));
        assert_eq!(range.end, day(20));
        assert!(DateRange::spanning(&[]).is_none());
    }

    #[test]
    fn test_filter_is_inclusive() {
        let txns = vec![
            txn(1, -100, "Food"),
            txn(2, -100, "Food"),
            txn(3, -100, "Food"),
            txn(4, -100, "Food"),
        ];
        let range = DateRange::new(day(2), day(3)).unwrap();
        let kept = range.filter(&txns);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].date, day(2));
        assert_eq!(kept[1].date, day(3));
    }

    #[test]
    fn test_clamp_to_bounds() {
        let bounds = DateRange::new(day(5), day(25)).unwrap();
        let wide = DateRange::new(day(1), day(31)).unwrap();
        assert_eq!(wide.clamp_to(&bounds), bounds);

        let inner = DateRange::new(day(10), day(12)).unwrap();
        assert_eq!(inner.clamp_to(&bounds), inner);
    }

    #[test]
    fn test_smoothing_window_bounds() {
        assert!(SmoothingWindow::new(0).is_err());
        assert!(SmoothingWindow::new(15).is_err());
        assert_eq!(SmoothingWindow::new(14).unwrap().days(), 14);
        assert_eq!(SmoothingWindow::default().days(), 3);
    }

    #[test]
    fn test_smoothing_window_steps_saturate() {
        let min = SmoothingWindow::saturating(0);
        assert_eq!(min.days(), 1);
        assert_eq!(min.decrement().days(), 1);

        let max = SmoothingWindow::saturating(99);
        assert_eq!(max.days(), 14);
        assert_eq!(max.increment().days(), 14);
        assert_eq!(SmoothingWindow::default().increment().days(), 4);
    }
}
