//! CSV reader for the transaction dataset
//!
//! Columns are located by header name, so extra columns and any column order
//! are accepted. Every row must carry a parseable date and a numeric amount.

use std::io::Read;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Money, Transaction};

/// Columns the dataset must provide
pub const REQUIRED_COLUMNS: [&str; 3] = ["Date", "Amount", "Clean_Category"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%d/%m/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct ColumnMapping {
    date: usize,
    amount: usize,
    category: usize,
}

impl ColumnMapping {
    fn from_headers(headers: &StringRecord) -> ExpenseResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| ExpenseError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            date: find(REQUIRED_COLUMNS[0])?,
            amount: find(REQUIRED_COLUMNS[1])?,
            category: find(REQUIRED_COLUMNS[2])?,
        })
    }
}

/// Read every transaction from a CSV source
pub fn read_transactions<R: Read>(source: R) -> ExpenseResult<Vec<Transaction>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mapping = ColumnMapping::from_headers(reader.headers()?)?;

    let mut transactions = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // Line 1 is the header
        let line = idx + 2;
        let record = result?;
        transactions.push(parse_record(&record, line, mapping)?);
    }

    Ok(transactions)
}

fn parse_record(
    record: &StringRecord,
    line: usize,
    mapping: ColumnMapping,
) -> ExpenseResult<Transaction> {
    let field = |col: usize, name: &str| {
        record
            .get(col)
            .ok_or_else(|| ExpenseError::parse(line, format!("missing {} field", name)))
    };

    let date_str = field(mapping.date, "Date")?;
    let date = parse_date(date_str)
        .ok_or_else(|| ExpenseError::parse(line, format!("invalid date '{}'", date_str)))?;

    let amount_str = field(mapping.amount, "Amount")?;
    let amount = Money::parse(amount_str)
        .map_err(|_| ExpenseError::parse(line, format!("invalid amount '{}'", amount_str)))?;

    let category = Category::new(field(mapping.category, "Clean_Category")?)
        .map_err(|_| ExpenseError::parse(line, "empty category"))?;

    Ok(Transaction::new(date, amount, category))
}

/// Parse a calendar date, trying ISO formats first
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2025-12-05"), Some(ymd(2025, 12, 5)));
        assert_eq!(parse_date("2025/12/05"), Some(ymd(2025, 12, 5)));
        assert_eq!(parse_date("05-12-2025"), Some(ymd(2025, 12, 5)));
        assert_eq!(parse_date("24/03/2019"), Some(ymd(2019, 3, 24)));
        assert_eq!(parse_date("2025-12-05 00:00:00"), Some(ymd(2025, 12, 5)));
        assert_eq!(parse_date("2025-12-05T13:45:00"), Some(ymd(2025, 12, 5)));
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_columns_found_by_name() {
        let csv = "Clean_Category,Amount,Note,Date\nFood,-99.5,snack,2025-12-01\n";
        let txns = read_transactions(csv.as_bytes()).unwrap();

        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].date, ymd(2025, 12, 1));
        assert_eq!(txns[0].amount.minor_units(), -9950);
        assert_eq!(txns[0].category.as_str(), "Food");
    }

    #[test]
    fn test_missing_column() {
        let csv = "Date,Amount\n2025-12-01,-10\n";
        let err = read_transactions(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ExpenseError::MissingColumn(ref c) if c == "Clean_Category"));
    }

    #[test]
    fn test_bad_date_reports_line() {
        let csv = "Date,Amount,Clean_Category\n2025-12-01,-10,Food\nnot-a-date,-5,Food\n";
        let err = read_transactions(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ExpenseError::Parse { row: 3, .. }));
    }

    #[test]
    fn test_bad_amount() {
        let csv = "Date,Amount,Clean_Category\n2025-12-01,ten,Food\n";
        let err = read_transactions(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid amount 'ten'"));
    }

    #[test]
    fn test_malformed_amounts_are_rejected() {
        for amount in ["--250", ".", "-99999999999999999"] {
            let csv = format!("Date,Amount,Clean_Category\n2025-12-01,{},Food\n", amount);
            let err = read_transactions(csv.as_bytes()).unwrap_err();
            assert!(
                matches!(err, ExpenseError::Parse { row: 2, .. }),
                "{} should be rejected",
                amount
            );
        }
    }

    #[test]
    fn test_sign_after_currency_symbol_is_an_expense() {
        let csv = "Date,Amount,Clean_Category\n2025-12-01,₹-0.50,Food\n";
        let txns = read_transactions(csv.as_bytes()).unwrap();
        assert_eq!(txns[0].amount.minor_units(), -50);
        assert!(txns[0].is_expense());
    }

    #[test]
    fn test_header_only_is_empty() {
        let csv = "Date,Amount,Clean_Category\n";
        assert!(read_transactions(csv.as_bytes()).unwrap().is_empty());
    }
}
