//! Sidebar view
//!
//! Shows page navigation and the filters currently applied

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::truncate;
use crate::tui::app::{ActiveView, App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, app, layout.header);
    render_navigation(frame, app, layout.navigation);
    render_filters(frame, app, layout.filters);
}

/// Render sidebar header
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Smart Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let source = app
        .dataset
        .source()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(in memory)".to_string());
    let width = area.width.saturating_sub(2) as usize;

    let text = Paragraph::new(vec![
        Line::from(truncate(&source, width)),
        Line::from(format!("{} transactions", app.dataset.len())),
    ])
    .block(block)
    .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(text, area);
}

/// Render page navigation
fn render_navigation(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Pages ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let items: Vec<ListItem> = ActiveView::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let active = app.active_view == *view;
            let style = if active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let indicator = if active { "▶" } else { " " };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::Yellow)),
                Span::styled(view.title(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    if is_focused {
        state.select(Some(app.selected_nav_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the active filters
fn render_filters(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Filters ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let range = match (app.date_range, app.dataset.date_bounds()) {
        (Some(range), _) => vec![
            Line::from(format!("From {}", range.start)),
            Line::from(format!("To   {}", range.end)),
        ],
        (None, Some(_)) => vec![Line::from("All dates")],
        (None, None) => vec![Line::from("No data")],
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Smoothing ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.smoothing.to_string()),
        ]),
        Line::from(Span::styled("Date range", Style::default().fg(Color::DarkGray))),
    ];
    lines.extend(range);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
