//! Manual expense entry
//!
//! Entries are validated and acknowledged but never written anywhere: the
//! dataset is read-only.

use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;

/// A filled-in expense form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseEntry {
    pub item: String,
    pub amount: Money,
}

impl ExpenseEntry {
    /// Build an entry from raw form input
    pub fn parse(item: &str, amount: &str) -> ExpenseResult<Self> {
        let amount = if amount.trim().is_empty() {
            Money::zero()
        } else {
            Money::parse(amount)
                .map_err(|e| ExpenseError::Validation(format!("Amount: {}", e)))?
        };

        Ok(Self {
            item: item.trim().to_string(),
            amount,
        })
    }
}

/// An acknowledged expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedExpense {
    pub item: String,
    pub amount: Money,
}

impl RecordedExpense {
    /// Confirmation shown after saving
    pub fn message(&self) -> String {
        format!("{} recorded successfully.", self.item)
    }
}

/// Validates and acknowledges manual entries
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpenseService;

impl ExpenseService {
    pub fn new() -> Self {
        Self
    }

    /// Validate an entry and acknowledge it
    ///
    /// The item name must not be blank and the amount must not be negative.
    pub fn record(&self, entry: ExpenseEntry) -> ExpenseResult<RecordedExpense> {
        let item = entry.item.trim();
        if item.is_empty() {
            return Err(ExpenseError::Validation("Item name cannot be empty".into()));
        }
        if entry.amount.is_negative() {
            return Err(ExpenseError::Validation(
                "Amount cannot be negative".into(),
            ));
        }

        info!(item, amount = %entry.amount, "expense recorded (not persisted)");

        Ok(RecordedExpense {
            item: item.to_string(),
            amount: entry.amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_message_contains_item() {
        let entry = ExpenseEntry::parse("  Coffee beans ", "349").unwrap();
        let recorded = ExpenseService::new().record(entry).unwrap();

        assert_eq!(recorded.item, "Coffee beans");
        assert_eq!(recorded.amount, Money::from_major_minor(349, 0));
        assert_eq!(recorded.message(), "Coffee beans recorded successfully.");
    }

    #[test]
    fn test_blank_amount_defaults_to_zero() {
        let entry = ExpenseEntry::parse("Tea", "").unwrap();
        assert!(entry.amount.is_zero());
        assert!(ExpenseService::new().record(entry).is_ok());
    }

    #[test]
    fn test_rejects_blank_item() {
        let entry = ExpenseEntry::parse("   ", "10").unwrap();
        let err = ExpenseService::new().record(entry).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_rejects_negative_and_garbage_amounts() {
        let entry = ExpenseEntry::parse("Refund", "-5").unwrap();
        assert!(ExpenseService::new().record(entry).unwrap_err().is_validation());

        assert!(ExpenseEntry::parse("Tea", "ten").unwrap_err().is_validation());
    }
}
