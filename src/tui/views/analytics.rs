//! Analytics page
//!
//! Everything here honours the selected date range: the smoothed trend, an
//! amount histogram stacked by category with density curves drawn over it,
//! and each category's share of the total.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::analytics::{category_shares, smoothed_trend, Histogram, ShareBreakdown, DEFAULT_BINS};
use crate::display::{format_bar, format_percentage, truncate};
use crate::models::Expense;
use crate::tui::app::App;

use super::{category_color, page_header, render_empty, render_trend_chart};

/// Render the Analytics page
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Title + filters
            Constraint::Percentage(45), // Trend
            Constraint::Min(8),         // Distribution + share
        ])
        .split(area);

    let subtitle = match app.analytics_range() {
        Some(range) => format!("{}  |  smoothing: {}", range, app.smoothing),
        None => "no data".to_string(),
    };
    page_header(frame, chunks[0], "Analytics", Some(subtitle));

    let expenses = app.filtered_expenses();

    let trends = smoothed_trend(&expenses, app.smoothing);
    render_trend_chart(frame, chunks[1], app, &trends, "Smoothed Spending Trend");

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    render_distribution(frame, app, &expenses, bottom[0]);
    render_shares(frame, app, &category_shares(&expenses), bottom[1]);
}

fn render_distribution(frame: &mut Frame, app: &App, expenses: &[Expense], area: Rect) {
    let title = "Spending Distribution";
    let histogram = Histogram::build(expenses, DEFAULT_BINS);
    let Some((lo, hi)) = histogram.span() else {
        render_empty(frame, area, title, "No expenses in this range.");
        return;
    };

    // Stack categories: series i reaches the summed count of categories 0..=i
    let categories = histogram.categories();
    let stacked: Vec<Vec<(f64, f64)>> = (0..categories.len())
        .map(|i| {
            histogram
                .bins
                .iter()
                .map(|bin| {
                    let height: usize = categories[..=i]
                        .iter()
                        .map(|c| bin.counts.get(c).copied().unwrap_or(0))
                        .sum();
                    (bin.center(), height as f64)
                })
                .collect()
        })
        .collect();

    let density = histogram.density_by_category(expenses);

    // Tallest stack first so shorter ones draw over it
    let mut datasets: Vec<Dataset> = categories
        .iter()
        .zip(&stacked)
        .rev()
        .map(|(category, data)| {
            Dataset::default()
                .name(category.to_string())
                .marker(symbols::Marker::Block)
                .graph_type(GraphType::Bar)
                .style(Style::default().fg(category_color(&app.categories, category)))
                .data(data)
        })
        .collect();

    datasets.extend(density.iter().map(|(category, curve)| {
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(
                Style::default()
                    .fg(category_color(&app.categories, category))
                    .add_modifier(Modifier::BOLD),
            )
            .data(&curve.points)
    }));

    let max_y = density
        .iter()
        .map(|(_, c)| c.peak())
        .fold(histogram.max_count() as f64, f64::max)
        .max(1.0)
        * 1.1;
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
                .bounds([lo, hi])
                .labels(vec![
                    Span::raw(format!("{}{:.0}", symbol, lo)),
                    Span::raw(format!("{}{:.0}", symbol, (lo + hi) / 2.0)),
                    Span::raw(format!("{}{:.0}", symbol, hi)),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("Count")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_y])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.0}", max_y)),
                ]),
        );

    frame.render_widget(chart, area);
}

fn render_shares(frame: &mut Frame, app: &App, breakdown: &ShareBreakdown, area: Rect) {
    let title = "Category Share";
    if breakdown.is_empty() {
        render_empty(frame, area, title, "No expenses in this range.");
        return;
    }

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner_width = area.width.saturating_sub(2) as usize;
    let bar_width = inner_width.saturating_sub(14 + 7 + 2).max(4);

    let mut lines: Vec<Line> = breakdown
        .shares
        .iter()
        .map(|share| {
            let color = category_color(&app.categories, &share.category);
            Line::from(vec![
                Span::styled(
                    format!("{:<14}", truncate(share.category.as_str(), 13)),
                    Style::default().fg(color),
                ),
                Span::styled(
                    format_bar(share.percentage, 100.0, bar_width),
                    Style::default().fg(color),
                ),
                Span::raw(format!(" {:>6}", format_percentage(share.percentage))),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "Total {}{}",
            app.settings.currency_symbol,
            breakdown.grand_total_whole()
        ),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
