//! Category-wise spending share

use std::collections::BTreeMap;

use crate::models::{Category, Expense, Money};

/// One category's slice of total spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Money,
    /// Percentage of all spending (0-100)
    pub percentage: f64,
}

/// Spending split by category, in category name order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShareBreakdown {
    pub shares: Vec<CategoryShare>,
    pub total: Money,
}

impl ShareBreakdown {
    /// Grand total truncated to whole currency units
    pub fn grand_total_whole(&self) -> i64 {
        self.total.major()
    }

    /// The category with the largest share
    pub fn largest(&self) -> Option<&CategoryShare> {
        self.shares.iter().max_by_key(|s| s.total)
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

/// Sum expenses per category and compute each category's percentage
pub fn category_shares(expenses: &[Expense]) -> ShareBreakdown {
    let mut totals: BTreeMap<Category, Money> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_default() += expense.amount;
    }

    let total: Money = totals.values().sum();

    let shares = totals
        .into_iter()
        .map(|(category, amount)| {
            let percentage = if total.is_zero() {
                0.0
            } else {
                (amount.minor_units() as f64 / total.minor_units() as f64) * 100.0
            };
            CategoryShare {
                category,
                total: amount,
                percentage,
            }
        })
        .collect();

    ShareBreakdown { shares, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::expense;

    #[test]
    fn test_shares_sum_to_hundred() {
        let expenses = vec![
            expense(1, 300, "Food"),
            expense(2, 100, "Transport"),
            expense(3, 100, "Food"),
            expense(3, 500, "Bills"),
        ];

        let breakdown = category_shares(&expenses);
        assert_eq!(breakdown.total, Money::from_major_minor(1000, 0));
        assert_eq!(breakdown.grand_total_whole(), 1000);

        let names: Vec<_> = breakdown.shares.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Bills", "Food", "Transport"]);

        let pct: f64 = breakdown.shares.iter().map(|s| s.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9);
        assert!((breakdown.shares[1].percentage - 40.0).abs() < 1e-9);
        assert_eq!(breakdown.largest().unwrap().category.as_str(), "Bills");
    }

    #[test]
    fn test_grand_total_truncates() {
        let mut e = expense(1, 10, "Food");
        e.amount = Money::from_minor(1099);
        assert_eq!(category_shares(&[e]).grand_total_whole(), 10);
    }

    #[test]
    fn test_empty() {
        let breakdown = category_shares(&[]);
        assert!(breakdown.is_empty());
        assert!(breakdown.total.is_zero());
        assert!(breakdown.largest().is_none());
    }
}
