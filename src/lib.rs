//! Smart Expense - terminal expense dashboard
//!
//! Loads a pre-cleaned transaction CSV and presents spending analytics:
//! headline budget metrics, smoothed per-category trends, amount
//! distributions and category shares. A handful of simulated assistant
//! features (market price check, receipt scan, advisor tips) sit alongside
//! two real integrations, a Gemini text prompt and a Google Sheets cell write.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, categories and transactions
//! - `storage`: Read-only CSV dataset
//! - `analytics`: Pure spending computations
//! - `services`: Expense entry and the simulated assistant features
//! - `integrations`: Gemini and Google Sheets clients
//! - `display`: Plain-text report formatting for the CLI
//! - `cli`: Command handlers
//! - `tui`: Interactive dashboard
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use smart_expense::config::{ExpensePaths, Settings};
//! use smart_expense::storage::Dataset;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let dataset = Dataset::load("Cleaned_AI_Ready.csv")?;
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod integrations;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
