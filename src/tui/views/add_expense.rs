//! Add Expense page
//!
//! Two tabs: a manual entry form and the "Camera Scan" tab with the market
//! price check and receipt upload.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::services::{ReceiptScan, ACCEPTED_EXTENSIONS};
use crate::tui::app::{App, FocusedPanel, InputMode, PendingResult};
use crate::tui::widgets::TextInput;

use super::{key_hint, page_header};

/// Tabs on the Add Expense page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddExpenseTab {
    #[default]
    ManualEntry,
    CameraScan,
}

impl AddExpenseTab {
    pub const TITLES: [&'static str; 2] = ["Manual Entry", "Camera Scan"];

    pub fn index(&self) -> usize {
        match self {
            Self::ManualEntry => 0,
            Self::CameraScan => 1,
        }
    }

    /// Fields on this tab, in focus order
    pub fn fields(&self) -> &'static [ExpenseField] {
        match self {
            Self::ManualEntry => &[ExpenseField::Item, ExpenseField::Amount],
            Self::CameraScan => &[ExpenseField::Product, ExpenseField::ReceiptPath],
        }
    }
}

/// Input fields on the Add Expense page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Item,
    Amount,
    Product,
    ReceiptPath,
}

/// State of the Add Expense page
#[derive(Debug, Clone)]
pub struct AddExpenseState {
    pub tab: AddExpenseTab,
    pub focused_field: ExpenseField,
    pub item: TextInput,
    pub amount: TextInput,
    pub product: TextInput,
    pub receipt_path: TextInput,
    /// Last price check message
    pub quote: Option<String>,
    /// Last receipt scan
    pub scan: Option<ReceiptScan>,
}

impl AddExpenseState {
    pub fn new() -> Self {
        Self {
            tab: AddExpenseTab::default(),
            focused_field: ExpenseField::default(),
            item: TextInput::new().label("Item Name").placeholder("e.g. Coffee"),
            amount: TextInput::new().label("Amount (₹)").placeholder("0"),
            product: TextInput::new()
                .label("What are you buying?")
                .placeholder("e.g. Running shoes"),
            receipt_path: TextInput::new()
                .label("Receipt file")
                .placeholder(format!("path to {}", ACCEPTED_EXTENSIONS.join("/"))),
            quote: None,
            scan: None,
        }
    }

    /// Switch tabs, focusing the first field of the new tab
    pub fn switch_tab(&mut self) {
        self.tab = match self.tab {
            AddExpenseTab::ManualEntry => AddExpenseTab::CameraScan,
            AddExpenseTab::CameraScan => AddExpenseTab::ManualEntry,
        };
        self.focused_field = self.tab.fields()[0];
    }

    pub fn next_field(&mut self) {
        self.step_field(1);
    }

    pub fn prev_field(&mut self) {
        self.step_field(self.tab.fields().len() - 1);
    }

    fn step_field(&mut self, by: usize) {
        let fields = self.tab.fields();
        let current = fields
            .iter()
            .position(|f| *f == self.focused_field)
            .unwrap_or(0);
        self.focused_field = fields[(current + by) % fields.len()];
    }

    /// The input behind the focused field
    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused_field {
            ExpenseField::Item => &mut self.item,
            ExpenseField::Amount => &mut self.amount,
            ExpenseField::Product => &mut self.product,
            ExpenseField::ReceiptPath => &mut self.receipt_path,
        }
    }

    /// Reset the manual entry form after a save
    pub fn clear_manual(&mut self) {
        self.item.clear();
        self.amount.clear();
        self.focused_field = ExpenseField::Item;
    }
}

impl Default for AddExpenseState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the Add Expense page
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Tabs
            Constraint::Min(6),    // Tab content
        ])
        .split(area);

    page_header(frame, chunks[0], "Add Expense", None);

    let state = &app.add_expense;
    let tabs = Tabs::new(AddExpenseTab::TITLES.to_vec())
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)))
        .select(state.tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, chunks[1]);

    match state.tab {
        AddExpenseTab::ManualEntry => render_manual_entry(frame, app, chunks[2]),
        AddExpenseTab::CameraScan => render_camera_scan(frame, app, chunks[2]),
    }
}

fn field_input(app: &App, field: ExpenseField, input: &TextInput) -> TextInput {
    let is_focused = app.focused_panel == FocusedPanel::Main
        && app.add_expense.focused_field == field;
    let editing = is_focused && app.input_mode == InputMode::Editing;

    let mut rendered = input.clone().focused(editing);
    if is_focused && !editing {
        rendered.label = format!("> {}", rendered.label);
    }
    rendered
}

fn render_manual_entry(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Manual Entry ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let state = &app.add_expense;
    frame.render_widget(field_input(app, ExpenseField::Item, &state.item), rows[0]);
    frame.render_widget(field_input(app, ExpenseField::Amount, &state.amount), rows[1]);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            key_hint("Enter", "edit"),
            key_hint("Tab", "next field"),
            key_hint("s", "Save"),
        ])),
        rows[2],
    );
}

fn render_camera_scan(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Info box
            Constraint::Length(5), // Price check
            Constraint::Min(6),    // Receipt upload
        ])
        .split(area);

    let info = Paragraph::new(vec![
        Line::from(Span::styled(
            "Jeeves Search & Save",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from("Helping you make informed spending decisions."),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(info, chunks[0]);

    render_price_check(frame, app, chunks[1]);
    render_receipt_upload(frame, app, chunks[2]);
}

/// Spinner line if the pending action matches, else None
fn pending_line(app: &App, matches: fn(&PendingResult) -> bool) -> Option<Line<'static>> {
    let pending = app.pending.as_ref().filter(|p| matches(&p.result))?;
    Some(Line::from(Span::styled(
        format!("{} {}", app.spinner(), pending.caption),
        Style::default().fg(Color::Yellow),
    )))
}

fn render_price_check(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Check Market Options ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let state = &app.add_expense;
    frame.render_widget(field_input(app, ExpenseField::Product, &state.product), rows[0]);
    frame.render_widget(
        Paragraph::new(Line::from(vec![key_hint("p", "Check Market Options")])),
        rows[1],
    );

    let result = pending_line(app, |r| matches!(r, PendingResult::Quote(_))).or_else(|| {
        state.quote.as_ref().map(|q| {
            Line::from(Span::styled(q.clone(), Style::default().fg(Color::Blue)))
        })
    });
    if let Some(line) = result {
        frame.render_widget(Paragraph::new(line), rows[2]);
    }
}

fn render_receipt_upload(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Receipt Upload ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let state = &app.add_expense;
    frame.render_widget(
        field_input(app, ExpenseField::ReceiptPath, &state.receipt_path),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![key_hint(
            "u",
            "Upload receipt image or PDF",
        )])),
        rows[1],
    );

    if let Some(line) = pending_line(app, |r| matches!(r, PendingResult::Receipt(_))) {
        frame.render_widget(Paragraph::new(line), rows[2]);
        return;
    }

    if let Some(scan) = &state.scan {
        let mut lines: Vec<Line> = scan
            .summary
            .lines(&app.settings.currency_symbol)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Blue))))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("⚠ {}", scan.insight),
            Style::default().fg(Color::Yellow),
        )));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), rows[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycling_stays_on_tab() {
        let mut state = AddExpenseState::new();
        assert_eq!(state.focused_field, ExpenseField::Item);

        state.next_field();
        assert_eq!(state.focused_field, ExpenseField::Amount);
        state.next_field();
        assert_eq!(state.focused_field, ExpenseField::Item);
        state.prev_field();
        assert_eq!(state.focused_field, ExpenseField::Amount);

        state.switch_tab();
        assert_eq!(state.tab, AddExpenseTab::CameraScan);
        assert_eq!(state.focused_field, ExpenseField::Product);
        state.next_field();
        assert_eq!(state.focused_field, ExpenseField::ReceiptPath);
    }

    #[test]
    fn test_focused_input_and_clear() {
        let mut state = AddExpenseState::new();
        state.focused_input_mut().insert('T');
        state.next_field();
        state.focused_input_mut().insert('5');

        assert_eq!(state.item.value(), "T");
        assert_eq!(state.amount.value(), "5");

        state.clear_manual();
        assert!(state.item.value().is_empty());
        assert_eq!(state.focused_field, ExpenseField::Item);
    }
}
