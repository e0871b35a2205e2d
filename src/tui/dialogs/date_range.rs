//! Date range dialog
//!
//! Narrows the analytics page to an inclusive start/end date

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::analytics::DateRange;
use crate::tui::app::{App, InputMode};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which date is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRangeField {
    #[default]
    Start,
    End,
}

/// State for the date range dialog
#[derive(Debug, Clone)]
pub struct DateRangeFormState {
    pub start: TextInput,
    pub end: TextInput,
    pub focused: DateRangeField,
    /// Why the last submission was rejected
    pub error: Option<String>,
}

impl DateRangeFormState {
    pub fn new() -> Self {
        Self {
            start: TextInput::new().label("From").placeholder("YYYY-MM-DD"),
            end: TextInput::new().label("To  ").placeholder("YYYY-MM-DD"),
            focused: DateRangeField::Start,
            error: None,
        }
    }

    /// Fill both fields from an existing range
    pub fn prefill(&mut self, range: &DateRange) {
        self.start = std::mem::take(&mut self.start).content(range.start.to_string());
        self.end = std::mem::take(&mut self.end).content(range.end.to_string());
    }

    /// Switch between the start and end fields
    pub fn toggle_field(&mut self) {
        self.focused = match self.focused {
            DateRangeField::Start => DateRangeField::End,
            DateRangeField::End => DateRangeField::Start,
        };
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused {
            DateRangeField::Start => &mut self.start,
            DateRangeField::End => &mut self.end,
        }
    }
}

impl Default for DateRangeFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the date range dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(44, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Date Range ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // From
            Constraint::Length(1), // To
            Constraint::Length(1),
            Constraint::Length(1), // Error
            Constraint::Min(1),    // Hints
        ])
        .split(inner);

    let form = &app.date_range_form;
    let editing = app.input_mode == InputMode::Editing;

    frame.render_widget(
        form.start
            .clone()
            .focused(editing && form.focused == DateRangeField::Start),
        rows[0],
    );
    frame.render_widget(
        form.end
            .clone()
            .focused(editing && form.focused == DateRangeField::End),
        rows[1],
    );

    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            rows[3],
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(Color::Yellow)),
            Span::raw("Apply  "),
            Span::styled("[Tab] ", Style::default().fg(Color::Yellow)),
            Span::raw("Switch  "),
            Span::styled("[Esc] ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ])),
        rows[4],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_prefill_places_cursor_at_end() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        )
        .unwrap();

        let mut form = DateRangeFormState::new();
        form.prefill(&range);

        assert_eq!(form.start.value(), "2025-12-01");
        assert_eq!(form.end.value(), "2025-12-31");
        assert_eq!(form.start.cursor, 10);
        assert_eq!(form.start.label, "From");
    }

    #[test]
    fn test_toggle_field() {
        let mut form = DateRangeFormState::new();
        form.focused_input_mut().insert('x');
        assert_eq!(form.start.value(), "x");

        form.toggle_field();
        assert_eq!(form.focused, DateRangeField::End);
        form.focused_input_mut().insert('y');
        assert_eq!(form.end.value(), "y");

        form.toggle_field();
        assert_eq!(form.focused, DateRangeField::Start);
    }
}
