//! Service layer for Smart Expense
//!
//! Each service is a canned, instantaneous computation: recording an expense
//! (not persisted), a market price check, a receipt scan and the advisor.
//! The artificial delay the user sees is applied by the caller through
//! [`SimulatedLatency`], so the CLI can block while the TUI keeps drawing.

pub mod advisor;
pub mod expense;
pub mod latency;
pub mod market;
pub mod receipt;

pub use advisor::{Advisor, ADVISOR_RESPONSES};
pub use expense::{ExpenseEntry, ExpenseService, RecordedExpense};
pub use latency::SimulatedLatency;
pub use market::{MarketQuote, MarketService, BEST_AVAILABLE_PRICE};
pub use receipt::{ReceiptScan, ReceiptScanner, ReceiptSummary, ACCEPTED_EXTENSIONS};
