//! Simulated receipt scan
//!
//! Any accepted upload produces the same bakery receipt and the same
//! spending insight.

use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;

/// Upload types the scanner accepts
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["jpg", "png", "jpeg", "pdf"];

/// Spinner caption while the scan "runs"
pub const RECEIPT_CAPTION: &str = "Processing receipt...";

const INSIGHT: &str = "Spending in the food category shows frequent clustering. \
                       Reducing impulse purchases could improve savings.";

/// Fields extracted from a receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptSummary {
    pub store: String,
    pub date: NaiveDate,
    pub total: Money,
}

impl ReceiptSummary {
    /// Summary lines as displayed
    pub fn lines(&self, symbol: &str) -> Vec<String> {
        vec![
            format!("Store: {}", self.store),
            format!("Date: {}", self.date.format("%d-%m-%Y")),
            format!("Total Amount: {}", self.total.format_with_symbol(symbol)),
        ]
    }
}

/// A completed scan: the summary plus a spending warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptScan {
    pub summary: ReceiptSummary,
    pub insight: String,
}

/// Validates uploads and returns the canned scan
#[derive(Debug, Default, Clone, Copy)]
pub struct ReceiptScanner;

impl ReceiptScanner {
    pub fn new() -> Self {
        Self
    }

    /// Check that a path looks like an accepted upload
    pub fn validate(&self, path: &Path) -> ExpenseResult<()> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ExpenseError::Validation(format!(
                "Unsupported receipt type '{}'. Upload one of: {}",
                path.display(),
                ACCEPTED_EXTENSIONS.join(", ")
            )));
        }

        if !path.is_file() {
            return Err(ExpenseError::Io(format!(
                "Receipt not found: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// Scan an uploaded receipt
    pub fn scan(&self, path: &Path) -> ExpenseResult<ReceiptScan> {
        self.validate(path)?;
        info!(path = %path.display(), "receipt scanned");

        Ok(ReceiptScan {
            summary: ReceiptSummary {
                store: "Universal Bakery".to_string(),
                date: NaiveDate::from_ymd_opt(2019, 3, 24).unwrap_or_default(),
                total: Money::from_minor(47_100),
            },
            insight: INSIGHT.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_returns_canned_summary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("receipt.JPG");
        std::fs::write(&path, b"fake image").unwrap();

        let scan = ReceiptScanner::new().scan(&path).unwrap();
        assert_eq!(
            scan.summary.lines("₹"),
            vec![
                "Store: Universal Bakery".to_string(),
                "Date: 24-03-2019".to_string(),
                "Total Amount: ₹471.00".to_string(),
            ]
        );
        assert!(scan.insight.contains("food category"));
    }

    #[test]
    fn test_rejects_unsupported_type() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("receipt.gif");
        std::fs::write(&path, b"gif").unwrap();

        let err = ReceiptScanner::new().scan(&path).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_missing_file() {
        let err = ReceiptScanner::new()
            .scan(Path::new("/nowhere/receipt.pdf"))
            .unwrap_err();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
