//! Headline dashboard metrics

use chrono::{Datelike, NaiveDate};

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

/// The three dashboard tiles plus the period they describe
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    /// First day of the headline month
    pub period_start: NaiveDate,
    /// Total spent in the headline month
    pub total_spent: Money,
    /// Monthly budget minus spending; negative when over budget
    pub remaining_budget: Money,
    /// Sustainability score out of 100
    pub sustainability_score: u8,
}

impl DashboardMetrics {
    /// Compute the tiles for the configured headline month
    pub fn compute(expenses: &[Expense], settings: &Settings) -> ExpenseResult<Self> {
        let period_start = parse_period(&settings.headline_period)?;

        let total_spent: Money = expenses
            .iter()
            .filter(|e| e.date.year() == period_start.year() && e.date.month() == period_start.month())
            .map(|e| e.amount)
            .sum();

        Ok(Self {
            period_start,
            total_spent,
            remaining_budget: settings.monthly_budget - total_spent,
            sustainability_score: settings.sustainability_score.min(100),
        })
    }

    /// Month header, e.g. "December 2025"
    pub fn period_label(&self) -> String {
        self.period_start.format("%B %Y").to_string()
    }

    /// Score formatted as "72 / 100"
    pub fn score_label(&self) -> String {
        format!("{} / 100", self.sustainability_score)
    }
}

/// Parse a "YYYY-MM" period into the first day of that month
pub fn parse_period(period: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", period.trim()), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Config(format!(
            "Invalid headline period '{}'. Use YYYY-MM (e.g., 2025-12)",
            period
        ))
    })
}
