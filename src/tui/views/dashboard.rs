//! Dashboard page
//!
//! Headline tiles for the configured month over the smoothed spending trend
//! of the whole dataset.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::analytics::{smoothed_trend, DashboardMetrics};
use crate::tui::app::App;

use super::{page_header, render_empty, render_trend_chart};

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Tiles
            Constraint::Min(8),    // Trend chart
        ])
        .split(area);

    let metrics = match DashboardMetrics::compute(&app.expenses, app.settings) {
        Ok(metrics) => metrics,
        Err(e) => {
            page_header(frame, chunks[0], "Financial Intelligence Dashboard", None);
            render_empty(frame, chunks[1].union(chunks[2]), "Dashboard", &e.to_string());
            return;
        }
    };

    page_header(
        frame,
        chunks[0],
        "Financial Intelligence Dashboard",
        Some(metrics.period_label()),
    );
    render_tiles(frame, app, &metrics, chunks[1]);

    let trends = smoothed_trend(&app.expenses, app.smoothing);
    let title = format!("Spending Trend (smoothing: {})", app.smoothing);
    render_trend_chart(frame, chunks[2], app, &trends, &title);
}

fn render_tiles(frame: &mut Frame, app: &App, metrics: &DashboardMetrics, area: Rect) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let symbol = app.settings.currency_symbol.as_str();
    let remaining_color = if metrics.remaining_budget.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let values = [
        ("Total Spent", metrics.total_spent.format_whole(symbol), Color::White),
        (
            "Remaining Budget",
            metrics.remaining_budget.format_whole(symbol),
            remaining_color,
        ),
        ("Sustainability Score", metrics.score_label(), Color::Cyan),
    ];

    for ((label, value, color), tile) in values.into_iter().zip(tiles.iter()) {
        let block = Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let paragraph = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .block(block);
        frame.render_widget(paragraph, *tile);
    }
}
