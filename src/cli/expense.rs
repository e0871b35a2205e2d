//! Add Expense CLI commands
//!
//! `add` validates a manual entry; `price` and `receipt` run the simulated
//! market check and receipt scan behind the configured latency.

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::services::market::PRICE_CHECK_CAPTION;
use crate::services::receipt::RECEIPT_CAPTION;
use crate::services::{ExpenseEntry, ExpenseService, MarketService, ReceiptScanner};

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Item name
    pub item: String,
    /// Amount (e.g., "250" or "249.99")
    pub amount: String,
}

/// Arguments for `price`
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// What are you buying?
    pub product: String,
}

/// Arguments for `receipt`
#[derive(Args, Debug)]
pub struct ReceiptArgs {
    /// Receipt image or PDF (jpg, png, jpeg, pdf)
    pub file: PathBuf,
}

/// Validate and acknowledge a manual expense
pub fn handle_add_command(args: AddArgs) -> ExpenseResult<()> {
    let entry = ExpenseEntry::parse(&args.item, &args.amount)?;
    let recorded = ExpenseService::new().record(entry)?;
    println!("{}", recorded.message());
    Ok(())
}

/// Run the simulated price check
pub fn handle_price_command(settings: &Settings, args: PriceArgs) -> ExpenseResult<()> {
    let service = MarketService::new();
    let quote = service.check(&args.product)?;

    println!("{}", PRICE_CHECK_CAPTION);
    super::latency(settings).wait();
    println!("{}", quote.message(&settings.currency_symbol));
    Ok(())
}

/// Run the simulated receipt scan
pub fn handle_receipt_command(settings: &Settings, args: ReceiptArgs) -> ExpenseResult<()> {
    let scanner = ReceiptScanner::new();
    let scan = scanner.scan(&args.file)?;

    println!("{}", RECEIPT_CAPTION);
    super::latency(settings).wait();

    for line in scan.summary.lines(&settings.currency_symbol) {
        println!("{}", line);
    }
    println!();
    println!("⚠ {}", scan.insight);
    Ok(())
}
