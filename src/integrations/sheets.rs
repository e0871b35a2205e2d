//! Google Sheets client
//!
//! Finds a spreadsheet by title through the Drive files API, resolves its
//! first worksheet and writes literal values into single cells.

use std::fmt;
use std::str::FromStr;

use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, info};

use super::credentials::ServiceAccountKey;
use super::ensure_success;
use crate::error::{ExpenseError, ExpenseResult};

pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";
pub const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Value written by the `sheet` command when none is given
pub const ONLINE_MESSAGE: &str = "Jeeves is online and ready for the hackathon!";

const SPREADSHEET_MIME: &str = "application/vnd.google-apps.spreadsheet";

/// A single cell in A1 notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    /// 1-based column index (A = 1)
    pub column: u32,
    /// 1-based row index
    pub row: u32,
}

impl CellRef {
    pub const A1: CellRef = CellRef { column: 1, row: 1 };

    fn column_letters(&self) -> String {
        let mut n = self.column;
        let mut letters = Vec::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push((b'A' + rem as u8) as char);
            n = (n - 1) / 26;
        }
        letters.iter().rev().collect()
    }
}

impl FromStr for CellRef {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ExpenseError::Validation(format!("Invalid cell reference: '{}'", s));

        let split = s.find(|c: char| c.is_ascii_digit()).ok_or_else(invalid)?;
        let (letters, digits) = s.split_at(split);

        if letters.is_empty() || letters.len() > 3 || !letters.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        let column = letters
            .to_ascii_uppercase()
            .bytes()
            .fold(0u32, |acc, b| acc * 26 + u32::from(b - b'A' + 1));

        let row: u32 = digits.parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }

        Ok(Self { column, row })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letters(), self.row)
    }
}

/// Authenticated Sheets/Drive client
pub struct SheetsClient {
    client: Client,
    access_token: String,
    sheets_base: String,
    drive_base: String,
}

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
}

#[derive(Debug, Deserialize)]
struct Spreadsheet {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

#[derive(Debug, Deserialize)]
struct Sheet {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

impl SheetsClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            access_token: access_token.into(),
            sheets_base: SHEETS_API_BASE.to_string(),
            drive_base: DRIVE_API_BASE.to_string(),
        }
    }

    /// Authenticate with a service-account key
    pub fn authenticate(key: &ServiceAccountKey) -> ExpenseResult<Self> {
        let client = Client::new();
        let token = key.fetch_access_token(&client)?;
        Ok(Self {
            client,
            access_token: token.access_token,
            sheets_base: SHEETS_API_BASE.to_string(),
            drive_base: DRIVE_API_BASE.to_string(),
        })
    }

    /// Find a spreadsheet's id by its exact title
    pub fn open_by_title(&self, title: &str) -> ExpenseResult<String> {
        let response = self
            .client
            .get(format!("{}/files", self.drive_base))
            .bearer_auth(&self.access_token)
            .query(&[
                ("q", drive_query(title).as_str()),
                ("fields", "files(id,name)"),
                ("supportsAllDrives", "true"),
                ("includeItemsFromAllDrives", "true"),
            ])
            .send()
            .map_err(|e| ExpenseError::sheets(e.to_string()))?;

        let list: FileList = ensure_success(response, ExpenseError::sheets)?
            .json()
            .map_err(|e| ExpenseError::sheets(format!("Failed to parse file list: {}", e)))?;

        let id = list
            .files
            .into_iter()
            .next()
            .map(|f| f.id)
            .ok_or_else(|| ExpenseError::sheets(format!("spreadsheet not found: {}", title)))?;

        debug!(title, id = %id, "opened spreadsheet");
        Ok(id)
    }

    /// Title of the first worksheet in a spreadsheet
    pub fn first_worksheet(&self, spreadsheet_id: &str) -> ExpenseResult<String> {
        let response = self
            .client
            .get(format!("{}/spreadsheets/{}", self.sheets_base, spreadsheet_id))
            .bearer_auth(&self.access_token)
            .query(&[("fields", "sheets.properties.title")])
            .send()
            .map_err(|e| ExpenseError::sheets(e.to_string()))?;

        let spreadsheet: Spreadsheet = ensure_success(response, ExpenseError::sheets)?
            .json()
            .map_err(|e| ExpenseError::sheets(format!("Failed to parse spreadsheet: {}", e)))?;

        spreadsheet
            .sheets
            .into_iter()
            .next()
            .map(|s| s.properties.title)
            .ok_or_else(|| ExpenseError::sheets("spreadsheet has no worksheets"))
    }

    /// Write a literal value into one cell
    pub fn update_cell(
        &self,
        spreadsheet_id: &str,
        worksheet: &str,
        cell: CellRef,
        value: &str,
    ) -> ExpenseResult<()> {
        let range = a1_range(worksheet, cell);
        let url = self.values_url(spreadsheet_id, &range)?;

        let body = serde_json::json!({
            "range": range,
            "majorDimension": "ROWS",
            "values": [[value]],
        });

        let response = self
            .client
            .put(url)
            .bearer_auth(&self.access_token)
            .query(&[("valueInputOption", "RAW")])
            .json(&body)
            .send()
            .map_err(|e| ExpenseError::sheets(e.to_string()))?;

        ensure_success(response, ExpenseError::sheets)?;
        info!(range = %range, "updated cell");
        Ok(())
    }

    fn values_url(&self, spreadsheet_id: &str, range: &str) -> ExpenseResult<Url> {
        let mut url = Url::parse(&format!(
            "{}/spreadsheets/{}/values",
            self.sheets_base, spreadsheet_id
        ))
        .map_err(|e| ExpenseError::sheets(format!("Invalid API URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| ExpenseError::sheets("Invalid API URL"))?
            .push(range);

        Ok(url)
    }
}

/// Drive search expression matching a spreadsheet by exact name
fn drive_query(title: &str) -> String {
    let escaped = title.replace('\\', "\\\\").replace('\'', "\\'");
    format!(
        "name = '{}' and mimeType = '{}' and trashed = false",
        escaped, SPREADSHEET_MIME
    )
}

/// Sheet-qualified range, e.g. `'Sheet 1'!A1`
fn a1_range(worksheet: &str, cell: CellRef) -> String {
    format!("'{}'!{}", worksheet.replace('\'', "''"), cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_ref() {
        assert_eq!("A1".parse::<CellRef>().unwrap(), CellRef::A1);
        assert_eq!(
            "c12".parse::<CellRef>().unwrap(),
            CellRef { column: 3, row: 12 }
        );
        assert_eq!(
            "AA3".parse::<CellRef>().unwrap(),
            CellRef { column: 27, row: 3 }
        );
    }

    #[test]
    fn test_parse_cell_ref_rejects_invalid() {
        for bad in ["", "A", "1", "A0", "1A", "A1B", "ABCD1", "A-1"] {
            let err = bad.parse::<CellRef>().unwrap_err();
            assert!(err.is_validation(), "expected '{}' to be rejected", bad);
        }
    }

    #[test]
    fn test_cell_ref_display() {
        for cell in ["A1", "Z9", "AA10", "AZ2", "BA7"] {
            assert_eq!(cell.parse::<CellRef>().unwrap().to_string(), cell);
        }
    }

    #[test]
    fn test_drive_query_escapes_quotes() {
        let q = drive_query("Jeeves's Expenses");
        assert!(q.starts_with("name = 'Jeeves\\'s Expenses'"));
        assert!(q.contains("application/vnd.google-apps.spreadsheet"));
        assert!(q.ends_with("trashed = false"));
    }

    #[test]
    fn test_a1_range_quotes_sheet_title() {
        assert_eq!(a1_range("Sheet1", CellRef::A1), "'Sheet1'!A1");
        assert_eq!(
            a1_range("Bob's sheet", "B2".parse().unwrap()),
            "'Bob''s sheet'!B2"
        );
    }

    #[test]
    fn test_values_url_encodes_range() {
        let client = SheetsClient::new("token");
        let url = client.values_url("abc123", "'My Sheet'!A1").unwrap();
        let text = url.as_str();

        assert!(text.starts_with("https://sheets.googleapis.com/v4/spreadsheets/abc123/values/"));
        assert!(!text.contains(' '));
    }
}
