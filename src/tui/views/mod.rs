//! TUI Views module
//!
//! Contains the four pages (dashboard, add expense, analytics, advisor),
//! the sidebar and status bar, and chart helpers shared between pages.

pub mod add_expense;
pub mod advisor;
pub mod analytics;
pub mod dashboard;
pub mod sidebar;
pub mod status_bar;

use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::analytics::TrendSeries;
use crate::models::Category;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::{top_right_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Colors assigned to categories in name order
const PALETTE: [Color; 8] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::LightRed,
    Color::LightBlue,
    Color::LightYellow,
    Color::LightMagenta,
];

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.active_view {
        ActiveView::Dashboard => dashboard::render(frame, app, layout.main),
        ActiveView::AddExpense => add_expense::render(frame, app, layout.main),
        ActiveView::Analytics => analytics::render(frame, app, layout.main),
        ActiveView::Advisor => advisor::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::DateRange => dialogs::date_range::render(frame, app),
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        let area = top_right_rect(48, 4, layout.main);
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Stable color for a category
pub fn category_color(categories: &[Category], category: &Category) -> Color {
    let index = categories.binary_search(category).unwrap_or(0);
    PALETTE[index % PALETTE.len()]
}

/// Page title block with an optional subtitle on the right
pub fn page_header(frame: &mut Frame, area: Rect, title: &str, subtitle: Option<String>) {
    let mut spans = vec![Span::styled(
        title.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    if let Some(subtitle) = subtitle {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(subtitle, Style::default().fg(Color::White)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// "[key] action" hint span
pub fn key_hint(key: &str, action: &str) -> Span<'static> {
    Span::styled(
        format!("[{}] {}  ", key, action),
        Style::default().fg(Color::DarkGray),
    )
}

/// Render a message in place of a chart
pub fn render_empty(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(message.to_string())
            .style(Style::default().fg(Color::DarkGray))
            .block(block),
        area,
    );
}

/// Render one smoothed line per category against days since the first point
pub fn render_trend_chart(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    series: &[TrendSeries],
    title: &str,
) {
    let Some(origin) = series
        .iter()
        .filter_map(|s| s.points.first().map(|p| p.date))
        .min()
    else {
        render_empty(frame, area, title, "No expenses to chart.");
        return;
    };
    let last = series
        .iter()
        .filter_map(|s| s.points.last().map(|p| p.date))
        .max()
        .unwrap_or(origin);

    let offset = |date: NaiveDate| (date - origin).num_days() as f64;

    let points: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|s| s.points.iter().map(|p| (offset(p.date), p.smoothed)).collect())
        .collect();

    let datasets: Vec<Dataset> = series
        .iter()
        .zip(&points)
        .map(|(s, data)| {
            Dataset::default()
                .name(s.category.to_string())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(category_color(&app.categories, &s.category)))
                .data(data)
        })
        .collect();

    let max_x = offset(last).max(1.0);
    let max_y = series.iter().map(TrendSeries::peak).fold(0.0, f64::max).max(1.0) * 1.1;
    let mid = origin + chrono::Duration::days((max_x / 2.0) as i64);
    let symbol = app.settings.currency_symbol.as_str();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_x])
                .labels(vec![
                    Span::raw(origin.format("%d %b").to_string()),
                    Span::raw(mid.format("%d %b").to_string()),
                    Span::raw(last.format("%d %b").to_string()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_y])
                .labels(vec![
                    Span::raw(format!("{}0", symbol)),
                    Span::raw(format!("{}{:.0}", symbol, max_y / 2.0)),
                    Span::raw(format!("{}{:.0}", symbol, max_y)),
                ]),
        );

    frame.render_widget(chart, area);
}
