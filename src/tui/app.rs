//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Simulated flows (price check, receipt scan, advisor) are started as a
//! [`PendingAction`] and revealed by [`App::tick`] once their deadline passes,
//! so the screen keeps redrawing while the "work" happens.

use std::path::Path;
use std::time::Instant;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::analytics::{expenses, DateRange, SmoothingWindow};
use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense};
use crate::services::advisor::ADVISOR_CAPTION;
use crate::services::market::PRICE_CHECK_CAPTION;
use crate::services::receipt::RECEIPT_CAPTION;
use crate::services::{
    Advisor, ExpenseEntry, ExpenseService, MarketQuote, MarketService, ReceiptScan,
    ReceiptScanner, SimulatedLatency,
};
use crate::storage::Dataset;

use super::dialogs::date_range::DateRangeFormState;
use super::views::add_expense::AddExpenseState;
use super::views::advisor::AdvisorState;
use super::widgets::{Notification, NotificationQueue};

/// Spinner frames, advanced once per tick
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Which page is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    AddExpense,
    Analytics,
    Advisor,
}

impl ActiveView {
    /// Pages in navigation order
    pub const ALL: [ActiveView; 4] = [
        ActiveView::Dashboard,
        ActiveView::AddExpense,
        ActiveView::Analytics,
        ActiveView::Advisor,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::AddExpense => "Add Expense",
            Self::Analytics => "Analytics",
            Self::Advisor => "AI Advisor",
        }
    }

    /// Position in [`ActiveView::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::AddExpense => 1,
            Self::Analytics => 2,
            Self::Advisor => 3,
        }
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    Sidebar,
    #[default]
    Main,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    DateRange,
}

/// The result a pending action reveals when its deadline passes
#[derive(Debug, Clone)]
pub enum PendingResult {
    Quote(MarketQuote),
    Receipt(ReceiptScan),
    Advice,
}

/// A simulated action waiting for its latency to elapse
#[derive(Debug, Clone)]
pub struct PendingAction {
    /// Spinner caption
    pub caption: &'static str,
    pub deadline: Instant,
    pub result: PendingResult,
}

/// Main application state
pub struct App<'a> {
    /// The loaded dataset
    pub dataset: &'a Dataset,

    /// Application settings
    pub settings: &'a Settings,

    /// Every expense in the dataset (positive amounts)
    pub expenses: Vec<Expense>,

    /// Every category in the dataset, in name order
    pub categories: Vec<Category>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active page
    pub active_view: ActiveView,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Highlighted entry in the sidebar navigation
    pub selected_nav_index: usize,

    /// Smoothing window for trend charts
    pub smoothing: SmoothingWindow,

    /// Analytics date filter; `None` shows the whole dataset
    pub date_range: Option<DateRange>,

    /// Add Expense page state
    pub add_expense: AddExpenseState,

    /// AI Advisor page state
    pub advisor_state: AdvisorState,

    /// Date range dialog state
    pub date_range_form: DateRangeFormState,

    /// Simulated action in flight
    pub pending: Option<PendingAction>,

    /// Toast notifications
    pub notifications: NotificationQueue,

    /// Current spinner frame
    pub spinner_frame: usize,

    latency: SimulatedLatency,
    advisor: Advisor,
    rng: StdRng,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(dataset: &'a Dataset, settings: &'a Settings) -> Self {
        Self {
            dataset,
            settings,
            expenses: expenses(dataset.transactions()),
            categories: dataset.categories(),
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_nav_index: 0,
            smoothing: SmoothingWindow::saturating(settings.smoothing_window),
            date_range: None,
            add_expense: AddExpenseState::new(),
            advisor_state: AdvisorState::new(),
            date_range_form: DateRangeFormState::new(),
            pending: None,
            notifications: NotificationQueue::new(),
            spinner_frame: 0,
            latency: SimulatedLatency::new(settings.simulated_latency()),
            advisor: Advisor::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the random source (for deterministic advisor replies)
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show a toast notification
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Switch to a different page
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.selected_nav_index = view.index();
        self.input_mode = InputMode::Normal;
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
        self.input_mode = InputMode::Normal;
    }

    /// Move the sidebar highlight up
    pub fn nav_up(&mut self) {
        self.selected_nav_index = self.selected_nav_index.saturating_sub(1);
    }

    /// Move the sidebar highlight down
    pub fn nav_down(&mut self) {
        if self.selected_nav_index + 1 < ActiveView::ALL.len() {
            self.selected_nav_index += 1;
        }
    }

    /// Open the highlighted sidebar page
    pub fn open_selected_view(&mut self) {
        if let Some(view) = ActiveView::ALL.get(self.selected_nav_index).copied() {
            self.switch_view(view);
            self.focused_panel = FocusedPanel::Main;
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::DateRange {
            self.date_range_form = DateRangeFormState::new();
            if let Some(range) = self.analytics_range() {
                self.date_range_form.prefill(&range);
            }
            self.input_mode = InputMode::Editing;
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    pub fn increase_smoothing(&mut self) {
        self.smoothing = self.smoothing.increment();
    }

    pub fn decrease_smoothing(&mut self) {
        self.smoothing = self.smoothing.decrement();
    }

    /// Range the Analytics page shows: the selection, else the data bounds
    pub fn analytics_range(&self) -> Option<DateRange> {
        self.date_range.or_else(|| self.dataset.date_bounds())
    }

    /// Expenses inside the Analytics range
    pub fn filtered_expenses(&self) -> Vec<Expense> {
        match self.analytics_range() {
            Some(range) => self
                .expenses
                .iter()
                .filter(|e| range.contains(e.date))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Select a date range, clamped to the dataset bounds
    pub fn apply_date_range(&mut self, start: NaiveDate, end: NaiveDate) -> ExpenseResult<DateRange> {
        let bounds = self.dataset.date_bounds().ok_or_else(|| {
            ExpenseError::Validation("The dataset has no transactions to filter".into())
        })?;

        let range = DateRange::new(start, end)?.clamp_to(&bounds);
        self.date_range = Some(range);
        Ok(range)
    }

    /// Drop the date filter
    pub fn reset_date_range(&mut self) {
        self.date_range = None;
    }

    /// Whether a simulated action is in flight
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Spinner glyph for the current frame
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Save the manual entry form
    pub fn submit_expense(&mut self) {
        let form = &self.add_expense;
        let result = ExpenseEntry::parse(form.item.value(), form.amount.value())
            .and_then(|entry| ExpenseService::new().record(entry));

        match result {
            Ok(recorded) => {
                self.notify(Notification::success(recorded.message()));
                self.add_expense.clear_manual();
            }
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }

    /// Start the simulated market price check
    pub fn check_price(&mut self) {
        match MarketService::new().check(self.add_expense.product.value()) {
            Ok(quote) => {
                if self.start_pending(PRICE_CHECK_CAPTION, PendingResult::Quote(quote)) {
                    self.add_expense.quote = None;
                }
            }
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }

    /// Start the simulated receipt scan
    pub fn scan_receipt(&mut self) {
        let path = self.add_expense.receipt_path.value().trim().to_string();
        match ReceiptScanner::new().scan(Path::new(&path)) {
            Ok(scan) => {
                if self.start_pending(RECEIPT_CAPTION, PendingResult::Receipt(scan)) {
                    self.add_expense.scan = None;
                }
            }
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }

    /// Ask the advisor
    pub fn consult(&mut self) {
        if self.start_pending(ADVISOR_CAPTION, PendingResult::Advice) {
            self.advisor_state.reply = None;
        }
    }

    /// Schedule a result; refused (returning false) while another is in flight
    fn start_pending(&mut self, caption: &'static str, result: PendingResult) -> bool {
        if self.is_busy() {
            self.notify(Notification::warning("Still working on the last request"));
            return false;
        }

        self.pending = Some(PendingAction {
            caption,
            deadline: self.latency.deadline_from(Instant::now()),
            result,
        });
        true
    }

    /// Periodic update: spinner, toast expiry and pending results
    pub fn tick(&mut self, now: Instant) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        self.notifications.remove_expired();

        let due = matches!(&self.pending, Some(p) if p.deadline <= now);
        if !due {
            return;
        }

        if let Some(action) = self.pending.take() {
            match action.result {
                PendingResult::Quote(quote) => {
                    self.add_expense.quote = Some(quote.message(&self.settings.currency_symbol));
                }
                PendingResult::Receipt(scan) => {
                    self.add_expense.scan = Some(scan);
                }
                PendingResult::Advice => {
                    let reply = self
                        .advisor
                        .consult(self.advisor_state.query.value(), &mut self.rng);
                    self.advisor_state.reply = Some(reply);
                }
            }
        }
    }
}
