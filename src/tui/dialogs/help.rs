//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    // Build help text based on current view
    let help_lines = get_help_lines(app);

    let paragraph = Paragraph::new(help_lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current context
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Global Keys",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("1-4", "Jump to page"),
        key_line("Tab", "Switch panel focus"),
        key_line("h/l", "Move focus left/right"),
        key_line("j/k", "Move selection in sidebar"),
        key_line("Esc", "Stop editing"),
        Line::from(""),
    ];

    // Page-specific help
    let (heading, keys): (&str, &[(&str, &str)]) = match app.active_view {
        ActiveView::Dashboard => (
            "Dashboard",
            &[
                ("+/]", "Widen smoothing window"),
                ("-/[", "Narrow smoothing window"),
            ],
        ),
        ActiveView::AddExpense => (
            "Add Expense",
            &[
                ("t", "Next tab"),
                ("j/k", "Move between fields"),
                ("Enter/e", "Edit focused field"),
                ("s", "Save manual entry"),
                ("p", "Check market prices"),
                ("u", "Scan receipt"),
            ],
        ),
        ActiveView::Analytics => (
            "Analytics",
            &[
                ("d", "Choose date range"),
                ("r", "Reset to all dates"),
                ("+/-", "Change smoothing window"),
            ],
        ),
        ActiveView::Advisor => (
            "Advisor",
            &[("Enter/e", "Type a question"), ("c", "Consult Jeeves")],
        ),
    };

    lines.push(Line::from(vec![Span::styled(
        heading,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )]));
    lines.push(Line::from(""));
    lines.extend(keys.iter().map(|(key, description)| key_line(key, description)));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
