//! AI Advisor page

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, FocusedPanel, InputMode, PendingResult};
use crate::tui::widgets::TextInput;

use super::{key_hint, page_header};

/// State of the AI Advisor page
#[derive(Debug, Clone)]
pub struct AdvisorState {
    pub query: TextInput,
    /// Last reply
    pub reply: Option<&'static str>,
}

impl AdvisorState {
    pub fn new() -> Self {
        Self {
            query: TextInput::new()
                .label("Ask for financial guidance")
                .placeholder("e.g. Where can I cut back?"),
            reply: None,
        }
    }
}

impl Default for AdvisorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the AI Advisor page
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Query
            Constraint::Min(3),    // Reply
        ])
        .split(area);

    page_header(frame, chunks[0], "AI Advisor", None);

    let query_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = query_block.inner(chunks[1]);
    frame.render_widget(query_block, chunks[1]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let editing = app.focused_panel == FocusedPanel::Main && app.input_mode == InputMode::Editing;
    frame.render_widget(app.advisor_state.query.clone().focused(editing), rows[0]);
    frame.render_widget(
        Paragraph::new(Line::from(vec![key_hint("e", "edit"), key_hint("c", "Consult")])),
        rows[1],
    );

    let pending = app
        .pending
        .as_ref()
        .filter(|p| matches!(p.result, PendingResult::Advice));

    let body = if let Some(pending) = pending {
        Paragraph::new(Line::from(Span::styled(
            format!("{} {}", app.spinner(), pending.caption),
            Style::default().fg(Color::Yellow),
        )))
    } else if let Some(reply) = app.advisor_state.reply {
        Paragraph::new(Line::from(Span::styled(
            reply,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )))
    } else {
        Paragraph::new(Line::from(Span::styled(
            "Ask a question and press c to consult.",
            Style::default().fg(Color::DarkGray),
        )))
    };

    let block = Block::default()
        .title(" Advice ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(body.block(block).wrap(Wrap { trim: true }), chunks[2]);
}
