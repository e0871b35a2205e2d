//! Core data models for Smart Expense
//!
//! The dataset is a flat list of transactions, each carrying a date, a signed
//! amount and a pre-normalized spending category.

pub mod category;
pub mod money;
pub mod transaction;

pub use category::Category;
pub use money::{Money, MoneyParseError};
pub use transaction::{Expense, Transaction};
