//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: sidebar, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Sidebar area (navigation, active filters)
    pub sidebar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(28), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the sidebar
pub struct SidebarLayout {
    /// Title/header area
    pub header: Rect,
    /// Page navigation
    pub navigation: Rect,
    /// Active filters
    pub filters: Rect,
}

impl SidebarLayout {
    /// Calculate sidebar layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Length(6), // Navigation
                Constraint::Min(4),    // Filters
            ])
            .split(area);

        Self {
            header: chunks[0],
            navigation: chunks[1],
            filters: chunks[2],
        }
    }
}

/// Layout for a page: title header over content
pub struct MainPanelLayout {
    /// Header area (page title, period or range)
    pub header: Rect,
    /// Content area
    pub content: Rect,
}

impl MainPanelLayout {
    /// Calculate main panel layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Content
            ])
            .split(area);

        Self {
            header: chunks[0],
            content: chunks[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// A rect in the top-right corner of `r` for toasts
pub fn top_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_splits_area() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.sidebar.width, 28);
        assert_eq!(layout.main.width, 92);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 39);
    }

    #[test]
    fn test_fixed_rects_fit_small_areas() {
        let area = Rect::new(0, 0, 30, 8);
        let dialog = centered_rect_fixed(50, 10, area);
        assert_eq!(dialog, area);

        let toast = top_right_rect(20, 4, area);
        assert_eq!(toast, Rect::new(10, 0, 20, 4));
    }
}
