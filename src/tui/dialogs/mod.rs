//! Dialog modules for the TUI
//!
//! Contains modal dialogs drawn over the active page

pub mod date_range;
pub mod help;
