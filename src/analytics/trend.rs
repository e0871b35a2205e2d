//! Smoothed spending trend
//!
//! Expenses are summed per (date, category), then each category's daily
//! totals are smoothed with a trailing rolling mean. The window counts
//! observations, not calendar days: a category with no spending on a day
//! simply has no point for it.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::range::SmoothingWindow;
use crate::models::{Category, Expense, Money};

/// Total spent in one category on one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub category: Category,
    pub amount: Money,
}

/// One point on a category's trend line
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Raw total for the day
    pub amount: Money,
    /// Rolling mean ending at this day, in whole currency units
    pub smoothed: f64,
}

/// A category's smoothed trend line
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub category: Category,
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// The most recent point
    pub fn latest(&self) -> Option<&TrendPoint> {
        self.points.last()
    }

    /// Largest smoothed value on the line
    pub fn peak(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.smoothed)
            .fold(0.0_f64, f64::max)
    }
}

/// Sum expenses per (date, category), ordered by date then category
pub fn daily_category_totals(expenses: &[Expense]) -> Vec<DailyTotal> {
    let mut totals: BTreeMap<(NaiveDate, Category), Money> = BTreeMap::new();
    for expense in expenses {
        *totals
            .entry((expense.date, expense.category.clone()))
            .or_default() += expense.amount;
    }

    totals
        .into_iter()
        .map(|((date, category), amount)| DailyTotal {
            date,
            category,
            amount,
        })
        .collect()
}

/// Build one smoothed trend line per category, categories in name order
pub fn smoothed_trend(expenses: &[Expense], window: SmoothingWindow) -> Vec<TrendSeries> {
    let mut by_category: BTreeMap<Category, Vec<DailyTotal>> = BTreeMap::new();
    for total in daily_category_totals(expenses) {
        by_category
            .entry(total.category.clone())
            .or_default()
            .push(total);
    }

    by_category
        .into_iter()
        .map(|(category, totals)| {
            let values: Vec<f64> = totals.iter().map(|t| t.amount.as_f64()).collect();
            let smoothed = rolling_mean(&values, window.days());

            let points = totals
                .into_iter()
                .zip(smoothed)
                .map(|(total, smoothed)| TrendPoint {
                    date: total.date,
                    amount: total.amount,
                    smoothed,
                })
                .collect();

            TrendSeries { category, points }
        })
        .collect()
}

/// Trailing mean over up to `window` values, never fewer than one
fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &values[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{day, expense};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_rolling_mean_min_periods_one() {
        let out = rolling_mean(&[10.0, 20.0, 30.0, 40.0], 3);
        assert!(approx(out[0], 10.0));
        assert!(approx(out[1], 15.0));
        assert!(approx(out[2], 20.0));
        assert!(approx(out[3], 30.0));
    }

    #[test]
    fn test_window_of_one_is_identity() {
        let values = [3.0, 9.0, 4.0];
        assert_eq!(rolling_mean(&values, 1), values.to_vec());
    }

    #[test]
    fn test_daily_totals_group_and_order() {
        let expenses = vec![
            expense(2, 50, "Transport"),
            expense(1, 100, "Food"),
            expense(2, 30, "Food"),
            expense(1, 20, "Food"),
        ];

        let totals = daily_category_totals(&expenses);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].date, day(1));
        assert_eq!(totals[0].amount, Money::from_major_minor(120, 0));
        assert_eq!(totals[1].category.as_str(), "Food");
        assert_eq!(totals[2].category.as_str(), "Transport");
    }

    #[test]
    fn test_smoothing_is_per_category() {
        let expenses = vec![
            expense(1, 100, "Food"),
            expense(1, 10, "Transport"),
            expense(2, 200, "Food"),
            expense(4, 300, "Food"),
            expense(5, 40, "Transport"),
        ];

        let series = smoothed_trend(&expenses, SmoothingWindow::new(2).unwrap());
        assert_eq!(series.len(), 2);

        let food = &series[0];
        assert_eq!(food.category.as_str(), "Food");
        let food_values: Vec<f64> = food.points.iter().map(|p| p.smoothed).collect();
        assert_eq!(food_values, vec![100.0, 150.0, 250.0]);
        assert_eq!(food.latest().unwrap().date, day(4));
        assert!(approx(food.peak(), 250.0));

        // Transport's gap from day 1 to day 5 is still one observation apart
        let transport = &series[1];
        assert!(approx(transport.points[1].smoothed, 25.0));
    }

    #[test]
    fn test_empty_input() {
        assert!(smoothed_trend(&[], SmoothingWindow::default()).is_empty());
    }
}
