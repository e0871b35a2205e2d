//! Configuration module for Smart Expense
//!
//! This module provides configuration management including:
//! - Platform config directory resolution
//! - User settings persistence
//! - Dataset location and dashboard defaults

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
