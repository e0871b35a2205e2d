//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers
//! based on the current application state.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App, FocusedPanel, InputMode};
use super::event::Event;
use super::views::add_expense::ExpenseField;
use super::widgets::{Notification, TextInput};
use crate::storage::parse_date;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick(Instant::now());
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Tab => {
            app.toggle_panel_focus();
            return Ok(());
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.switch_view(ActiveView::ALL[index]);
            return Ok(());
        }
        KeyCode::Char('h') | KeyCode::Left if app.focused_panel == FocusedPanel::Main => {
            app.focused_panel = FocusedPanel::Sidebar;
            return Ok(());
        }
        KeyCode::Char('l') | KeyCode::Right if app.focused_panel == FocusedPanel::Sidebar => {
            app.focused_panel = FocusedPanel::Main;
            return Ok(());
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_main_panel_key(app, key),
    }
}

/// Handle keys when sidebar is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.nav_down(),
        KeyCode::Char('k') | KeyCode::Up => app.nav_up(),
        KeyCode::Enter => app.open_selected_view(),
        _ => {}
    }
    Ok(())
}

/// Handle keys when main panel is focused
fn handle_main_panel_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_view {
        ActiveView::Dashboard => handle_smoothing_key(app, key),
        ActiveView::Analytics => match key.code {
            KeyCode::Char('d') => app.open_dialog(ActiveDialog::DateRange),
            KeyCode::Char('r') => {
                app.reset_date_range();
                app.notify(Notification::info("Showing the full date range"));
            }
            _ => handle_smoothing_key(app, key),
        },
        ActiveView::AddExpense => handle_add_expense_key(app, key),
        ActiveView::Advisor => match key.code {
            KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('i') => {
                app.input_mode = InputMode::Editing;
            }
            KeyCode::Char('c') => app.consult(),
            _ => {}
        },
    }
    Ok(())
}

fn handle_smoothing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char(']') => app.increase_smoothing(),
        KeyCode::Char('-') | KeyCode::Char('[') => app.decrease_smoothing(),
        _ => {}
    }
}

/// Handle keys on the Add Expense page in normal mode
fn handle_add_expense_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('t') => app.add_expense.switch_tab(),
        KeyCode::Char('j') | KeyCode::Down => app.add_expense.next_field(),
        KeyCode::Char('k') | KeyCode::Up => app.add_expense.prev_field(),
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('i') => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Char('s') => app.submit_expense(),
        KeyCode::Char('p') => app.check_price(),
        KeyCode::Char('u') => app.scan_receipt(),
        _ => {}
    }
}

/// Handle keys while typing into a page's input field
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            return Ok(());
        }
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            submit_focused_field(app);
            return Ok(());
        }
        _ => {}
    }

    match app.active_view {
        ActiveView::AddExpense => match key.code {
            KeyCode::Tab | KeyCode::Down => app.add_expense.next_field(),
            KeyCode::BackTab | KeyCode::Up => app.add_expense.prev_field(),
            _ => {
                edit_input(app.add_expense.focused_input_mut(), key);
            }
        },
        ActiveView::Advisor => {
            edit_input(&mut app.advisor_state.query, key);
        }
        ActiveView::Dashboard | ActiveView::Analytics => {
            app.input_mode = InputMode::Normal;
        }
    }

    Ok(())
}

/// Run the action behind the field being edited
fn submit_focused_field(app: &mut App) {
    match app.active_view {
        ActiveView::AddExpense => match app.add_expense.focused_field {
            ExpenseField::Item | ExpenseField::Amount => app.submit_expense(),
            ExpenseField::Product => app.check_price(),
            ExpenseField::ReceiptPath => app.scan_receipt(),
        },
        ActiveView::Advisor => app.consult(),
        ActiveView::Dashboard | ActiveView::Analytics => {}
    }
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::DateRange => handle_date_range_key(app, key),
        ActiveDialog::None => {}
    }
    Ok(())
}

fn handle_date_range_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            app.date_range_form.toggle_field();
        }
        KeyCode::Enter => apply_date_range(app),
        _ => {
            edit_input(app.date_range_form.focused_input_mut(), key);
        }
    }
}

fn apply_date_range(app: &mut App) {
    let form = &app.date_range_form;
    let start = parse_date(form.start.value());
    let end = parse_date(form.end.value());

    let (Some(start), Some(end)) = (start, end) else {
        app.date_range_form.error = Some("Dates must look like YYYY-MM-DD".into());
        return;
    };

    match app.apply_date_range(start, end) {
        Ok(range) => {
            app.close_dialog();
            app.notify(Notification::info(format!("Showing {}", range)));
        }
        Err(e) => app.date_range_form.error = Some(e.to_string()),
    }
}

/// Apply an editing key to a text input; returns whether it was consumed
fn edit_input(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{day, txn};
    use crate::config::Settings;
    use crate::storage::Dataset;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_transactions(vec![
            txn(1, -100_000, "Food"),
            txn(15, -20_000, "Transport"),
            txn(28, -5_000, "Food"),
        ])
    }

    fn settings() -> Settings {
        Settings {
            simulated_latency_ms: 0,
            ..Settings::default()
        }
    }

    #[test]
    fn test_number_keys_switch_views() {
        let data = dataset();
        let settings = settings();
        let mut app = App::new(&data, &settings);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_view, ActiveView::Analytics);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.active_view, ActiveView::Advisor);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_sidebar_enter_opens_page() {
        let data = dataset();
        let settings = settings();
        let mut app = App::new(&data, &settings);

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.focused_panel, FocusedPanel::Sidebar);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_view, ActiveView::AddExpense);
        assert_eq!(app.focused_panel, FocusedPanel::Main);
    }

    #[test]
    fn test_smoothing_keys() {
        let data = dataset();
        let settings = settings();
        let mut app = App::new(&data, &settings);

        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.smoothing.days(), 5);
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.smoothing.days(), 4);
    }

    #[test]
    fn test_manual_entry_flow() {
        let data = dataset();
        let settings = settings();
        let mut app = App::new(&data, &settings);

        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Editing);

        type_text(&mut app, "Groceries");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "450");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(
            app.notifications.current().unwrap().message,
            "Groceries recorded successfully."
        );
    }

    #[test]
    fn test_price_check_flow() {
        let data = dataset();
        let settings = settings();
        let mut app = App::new(&data, &settings);

        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Headphones");
        press(&mut app, KeyCode::Enter);

        assert!(app.is_busy());
        handle_event(&mut app, Event::Tick).unwrap();
        assert_eq!(
            app.add_expense.quote.as_deref(),
            Some("Best available price for Headphones: ₹24,990")
        );
    }

    #[test]
    fn test_advisor_flow() {
        let data = dataset();
        let settings = settings();
        let mut app = App::new(&data, &settings);

        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "How do I save?");
        press(&mut app, KeyCode::Enter);
        handle_event(&mut app, Event::Tick).unwrap();

        assert_eq!(app.advisor_state.query.value(), "How do I save?");
        assert!(app.advisor_state.reply.is_some());
    }

    #[test]
    fn test_date_range_dialog() {
        let data = dataset();
        let settings = settings();
        let mut app = App::new(&data, &settings);

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.active_dialog, ActiveDialog::DateRange);
        assert_eq!(app.date_range_form.start.value(), "2025-12-01");

        for _ in 0.."2025-12-28".len() {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Tab);
        for _ in 0.."2025-12-28".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "2025-12-20");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "2025-12-10");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        let range = app.analytics_range().unwrap();
        assert_eq!((range.start, range.end), (day(10), day(20)));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.analytics_range().unwrap().end, day(28));
    }

    #[test]
    fn test_date_range_dialog_reports_bad_input() {
        let data = dataset();
        let settings = settings();
        let mut app = App::new(&data, &settings);

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('d'));
        type_text(&mut app, "x");
        press(&mut app, KeyCode::Enter);

        assert!(app.has_dialog());
        assert!(app.date_range_form.error.is_some());

        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let data = dataset();
        let settings = settings();
        let mut app = App::new(&data, &settings);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.has_dialog());
    }
}
