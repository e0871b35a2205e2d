//! Terminal User Interface module
//!
//! This module provides the interactive dashboard using ratatui: four pages
//! (dashboard, add expense, analytics, advisor), a navigation sidebar and
//! modal dialogs for help and date filtering.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
