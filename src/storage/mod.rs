//! Storage layer for Smart Expense
//!
//! The dataset is a pre-cleaned CSV that is read once at startup and then
//! shared read-only for the lifetime of the process. There is no write path.

pub mod csv_source;

pub use csv_source::{parse_date, read_transactions, REQUIRED_COLUMNS};

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::analytics::DateRange;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, Transaction};

/// The loaded, read-only transaction dataset
#[derive(Debug, Clone)]
pub struct Dataset {
    source: PathBuf,
    transactions: Vec<Transaction>,
}

impl Dataset {
    /// Load the dataset from a CSV file
    pub fn load(path: impl AsRef<Path>) -> ExpenseResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            ExpenseError::Io(format!("Failed to open dataset {}: {}", path.display(), e))
        })?;

        let transactions = read_transactions(file)?;
        debug!(
            path = %path.display(),
            rows = transactions.len(),
            "loaded transaction dataset"
        );

        Ok(Self {
            source: path.to_path_buf(),
            transactions,
        })
    }

    /// Build a dataset from already-parsed transactions
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            source: PathBuf::new(),
            transactions,
        }
    }

    /// Path the dataset was loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// All transactions in file order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// All expenses, amounts made positive
    pub fn expenses(&self) -> Vec<Expense> {
        crate::analytics::expenses(&self.transactions)
    }

    /// Earliest and latest transaction dates
    pub fn date_bounds(&self) -> Option<DateRange> {
        DateRange::spanning(&self.transactions)
    }

    /// Distinct categories in name order
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self
            .transactions
            .iter()
            .map(|t| t.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
Date,Description,Amount,Clean_Category
2025-12-01,Groceries,-420.50,Food
2025-12-01,Metro card,-150,Transport
2025-12-02,Salary,25000,Income
2025-12-03,Bakery,-80,Food
";

    fn write_sample() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_dataset() {
        let file = write_sample();
        let dataset = Dataset::load(file.path()).unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.source(), file.path());
        assert_eq!(dataset.expenses().len(), 3);
    }

    #[test]
    fn test_date_bounds_and_categories() {
        let file = write_sample();
        let dataset = Dataset::load(file.path()).unwrap();

        let bounds = dataset.date_bounds().unwrap();
        assert_eq!(bounds.start, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(bounds.end, NaiveDate::from_ymd_opt(2025, 12, 3).unwrap());

        let names: Vec<_> = dataset
            .categories()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(names, vec!["Food", "Income", "Transport"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Dataset::load("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
