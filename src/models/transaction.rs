//! Transaction model
//!
//! A transaction is one row of the dataset. Negative amounts are expenses,
//! positive amounts are income or refunds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;

/// A single dataset row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date of the transaction
    pub date: NaiveDate,

    /// Signed amount (negative = expense)
    pub amount: Money,

    /// Spending category
    pub category: Category,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(date: NaiveDate, amount: Money, category: Category) -> Self {
        Self {
            date,
            amount,
            category,
        }
    }

    /// Check if this transaction is an expense
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// View this transaction as an expense with a positive amount
    ///
    /// Returns `None` for income and zero-amount rows.
    pub fn as_expense(&self) -> Option<Expense> {
        self.is_expense().then(|| Expense {
            date: self.date,
            category: self.category.clone(),
            amount: self.amount.abs(),
        })
    }
}

/// An expense with its amount flipped to positive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub date: NaiveDate,
    pub category: Category,
    /// Always positive
    pub amount: Money,
}
