//! `sheet`: write a message into a Google Sheet

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::integrations::{CellRef, ServiceAccountKey, SheetsClient, ONLINE_MESSAGE};

/// Arguments for `sheet`
#[derive(Args, Debug)]
pub struct SheetArgs {
    /// Spreadsheet title (defaults to the configured name)
    #[arg(short, long)]
    pub spreadsheet: Option<String>,

    /// Target cell in A1 notation
    #[arg(short, long, default_value = "A1")]
    pub cell: String,

    /// Text to write
    #[arg(short, long, default_value = ONLINE_MESSAGE)]
    pub value: String,

    /// Service-account key file (defaults to the configured file)
    #[arg(long)]
    pub credentials: Option<PathBuf>,
}

/// Write the value into the first worksheet of the spreadsheet
pub fn handle_sheet_command(settings: &Settings, args: SheetArgs) -> ExpenseResult<()> {
    let cell: CellRef = args.cell.parse()?;
    let credentials = args
        .credentials
        .unwrap_or_else(|| settings.credentials_file.clone());
    let title = args
        .spreadsheet
        .unwrap_or_else(|| settings.spreadsheet_name.clone());

    let key = ServiceAccountKey::load(&credentials)?;
    let client = SheetsClient::authenticate(&key)?;

    let spreadsheet_id = client.open_by_title(&title)?;
    let worksheet = client.first_worksheet(&spreadsheet_id)?;
    client.update_cell(&spreadsheet_id, &worksheet, cell, &args.value)?;

    println!(
        "Master, check your Google Sheet! If you see the message in cell {}, we have succeeded.",
        cell
    );
    Ok(())
}
