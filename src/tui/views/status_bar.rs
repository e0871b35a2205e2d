//! Status bar view
//!
//! Shows the current page, smoothing window, any action in flight and key
//! hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App, InputMode};

/// Key hints for the current page and mode
fn hints(app: &App) -> &'static str {
    if app.input_mode == InputMode::Editing {
        return " Enter:Submit  Esc:Stop editing ";
    }
    match app.active_view {
        ActiveView::Dashboard => " +/-:Smoothing  ?:Help  q:Quit ",
        ActiveView::AddExpense => " t:Tab  j/k:Field  Enter:Edit  ?:Help  q:Quit ",
        ActiveView::Analytics => " +/-:Smoothing  d:Dates  r:Reset  ?:Help  q:Quit ",
        ActiveView::Advisor => " e:Ask  c:Consult  ?:Help  q:Quit ",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.active_view.title()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("Window: {}", app.smoothing),
            Style::default().fg(Color::White),
        ),
    ];

    if let Some(pending) = &app.pending {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("{} {}", app.spinner(), pending.caption),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = hints(app);
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
