use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::core::{parse_command, Action, Command, Context, NotifyLevel};
use crate::domain::{select, DashboardError, Dataset, Tab, View};
use crate::infrastructure::{format_clock, load_or_fallback, BuiltinSource, DataSource};

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

#[derive(Debug)]
pub struct App {
    /// UI state handed to renderers
    pub ctx: Context,
    pub dataset: Dataset,
    source: Box<dyn DataSource>,
    /// Cursor per tab, indexed like `Tab::ALL`
    selections: [usize; Tab::ALL.len()],
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
}

impl App {
    /// Load from `source`, falling back to the built-in snapshot.
    pub fn new(source: Box<dyn DataSource>) -> Self {
        let (dataset, err) = load_or_fallback(source.as_ref(), &BuiltinSource);
        let mut app = Self::with_dataset(source, dataset);
        if let Some(err) = err {
            app.set_status(
                format!("{err}; showing built-in snapshot"),
                StatusLevel::Error,
            );
        }
        app
    }

    pub fn with_dataset(source: Box<dyn DataSource>, dataset: Dataset) -> Self {
        let mut ctx = Context::new();
        ctx.source_name = source.name();
        Self {
            ctx,
            dataset,
            source,
            selections: [0; Tab::ALL.len()],
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            help_open: false,
            should_quit: false,
        }
    }

    pub fn current_tab(&self) -> Tab {
        self.ctx.active_tab
    }

    /// Records for the active tab.
    pub fn view(&self) -> View<'_> {
        select(self.ctx.active_tab, &self.dataset)
    }

    pub fn set_tab(&mut self, tab: Tab) {
        if self.ctx.active_tab != tab {
            tracing::debug!(from = %self.ctx.active_tab, to = %tab, "tab changed");
        }
        self.ctx.active_tab = tab;
        self.clamp_selection();
    }

    pub fn next_tab(&mut self) {
        self.set_tab(self.ctx.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.set_tab(self.ctx.active_tab.prev());
    }

    /// Switch by name; an unknown name keeps the current tab.
    pub fn set_tab_named(&mut self, name: &str) -> Result<Tab, DashboardError> {
        match name.parse::<Tab>() {
            Ok(tab) => {
                self.set_tab(tab);
                Ok(tab)
            }
            Err(err) => {
                tracing::warn!(%err, current = %self.ctx.active_tab, "keeping current tab");
                self.set_status(
                    format!("{err}; staying on {}", self.ctx.active_tab),
                    StatusLevel::Warn,
                );
                Err(err)
            }
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn apply_clock(&mut self, now: DateTime<Local>) {
        self.ctx.clock = format_clock(&now, self.ctx.locale);
    }

    /// Reload from the source; on failure the previous dataset stays.
    pub fn reload(&mut self) {
        match self.source.load() {
            Ok(dataset) => {
                tracing::info!(source = %self.source.name(), "dataset reloaded");
                self.dataset = dataset;
                self.clamp_all_selections();
                self.set_status(
                    format!(
                        "Reloaded {}: {} flights, {} airports, {} alerts",
                        self.source.name(),
                        self.dataset.flights.len(),
                        self.dataset.airports.len(),
                        self.dataset.alerts.len()
                    ),
                    StatusLevel::Info,
                );
            }
            Err(err) => {
                tracing::warn!(source = %self.source.name(), %err, "reload failed");
                self.set_status(
                    format!("Reload failed: {err}; keeping previous data"),
                    StatusLevel::Error,
                );
            }
        }
    }

    // === Selection ===

    pub fn current_selection(&self) -> usize {
        self.selections[self.ctx.active_tab.index()]
    }

    pub fn set_list_selection(&mut self, selection: usize) {
        self.selections[self.ctx.active_tab.index()] = selection;
        self.clamp_selection();
    }

    pub fn move_selection_up(&mut self) {
        let selection = &mut self.selections[self.ctx.active_tab.index()];
        *selection = selection.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let current = self.current_selection();
        self.set_list_selection(current + 1);
    }

    pub fn go_to_top(&mut self) {
        self.set_list_selection(0);
    }

    pub fn go_to_bottom(&mut self) {
        let len = self.view().len();
        self.set_list_selection(len.saturating_sub(1));
    }

    pub fn selected_record_id(&self) -> Option<String> {
        self.view().record_id(self.current_selection())
    }

    fn clamp_selection(&mut self) {
        let len = self.view().len();
        Self::clamp(&mut self.selections[self.ctx.active_tab.index()], len);
    }

    fn clamp_all_selections(&mut self) {
        for tab in Tab::ALL {
            let len = select(tab, &self.dataset).len();
            Self::clamp(&mut self.selections[tab.index()], len);
        }
    }

    fn clamp(selection: &mut usize, len: usize) {
        if len == 0 {
            *selection = 0;
        } else if *selection >= len {
            *selection = len - 1;
        }
    }

    // === Command bar ===

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }

        let cmd = parse_command(&input);
        self.command.last = Some(input);
        self.exit_command();
        let action = self.execute_command(&cmd);
        self.apply_action(action);
    }

    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::Go(tab) => Action::Navigate(*tab),
            Command::Tab(name) => {
                // Failure is already reported in the status line.
                let _ = self.set_tab_named(name);
                Action::None
            }
            Command::Export => Action::Export,
            Command::Reload => Action::Reload,
            Command::Help => Action::ToggleHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(input) => {
                Action::Notify(format!("Unknown command: {input}"), NotifyLevel::Warn)
            }
        }
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(tab) => self.set_tab(tab),
            Action::Notify(msg, level) => self.set_status(msg, level.into()),
            Action::Export => {
                let outcome = crate::modules::export::export_current_view(self);
                self.apply_action(outcome);
            }
            Action::Reload => self.reload(),
            Action::ToggleHelp => self.help_open = !self.help_open,
            Action::Quit => self.should_quit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::source::builtin_dataset;

    #[derive(Debug)]
    struct Unavailable;

    impl DataSource for Unavailable {
        fn name(&self) -> String {
            "unavailable".to_string()
        }

        fn load(&self) -> Result<Dataset, DashboardError> {
            Err(DashboardError::MissingDataset {
                path: "snapshot.json".into(),
            })
        }
    }

    fn app() -> App {
        App::new(Box::new(BuiltinSource))
    }

    #[test]
    fn test_starts_on_dashboard_with_builtin_data() {
        let app = app();
        assert_eq!(app.current_tab(), Tab::Dashboard);
        assert_eq!(app.dataset.flights.len(), 4);
        assert!(app.status.is_none());
        assert_eq!(app.ctx.source_name, "builtin");
    }

    #[test]
    fn test_any_tab_reachable_from_any_tab() {
        let mut app = app();
        for from in Tab::ALL {
            for to in Tab::ALL {
                app.set_tab(from);
                app.set_tab(to);
                assert_eq!(app.current_tab(), to);
                assert_eq!(app.view(), select(to, &app.dataset));
            }
        }
    }

    #[test]
    fn test_reselecting_a_tab_gives_the_same_view() {
        let mut app = app();
        app.set_tab(Tab::Airports);
        let first = format!("{:?}", app.view());
        app.set_tab(Tab::Airports);
        assert_eq!(format!("{:?}", app.view()), first);
    }

    #[test]
    fn test_unknown_tab_keeps_previous_tab() {
        let mut app = app();
        app.set_tab(Tab::Weather);
        assert!(app.set_tab_named("radar").is_err());
        assert_eq!(app.current_tab(), Tab::Weather);
        let (text, level) = app.status_text().unwrap();
        assert_eq!(level, StatusLevel::Warn);
        assert!(text.contains("radar"));
    }

    #[test]
    fn test_failing_source_falls_back_to_builtin() {
        let app = App::new(Box::new(Unavailable));
        assert_eq!(app.dataset, builtin_dataset());
        let (text, level) = app.status_text().unwrap();
        assert_eq!(level, StatusLevel::Error);
        assert!(text.contains("snapshot.json"));
    }

    #[test]
    fn test_failed_reload_keeps_previous_data() {
        let mut data = builtin_dataset();
        data.flights.truncate(1);
        let mut app = App::with_dataset(Box::new(Unavailable), data.clone());
        app.reload();
        assert_eq!(app.dataset, data);
        assert_eq!(app.status_text().unwrap().1, StatusLevel::Error);
    }

    #[test]
    fn test_reload_replaces_dataset() {
        let mut app = App::with_dataset(Box::new(BuiltinSource), builtin_dataset());
        app.set_tab(Tab::Flights);
        app.go_to_bottom();
        assert_eq!(app.current_selection(), 3);

        app.dataset.flights.truncate(1);
        app.reload();
        assert_eq!(app.dataset.flights.len(), 4);
        assert_eq!(app.current_selection(), 3);
    }

    #[test]
    fn test_selection_is_clamped_per_tab() {
        let mut app = app();
        app.set_tab(Tab::Flights);
        for _ in 0..10 {
            app.move_selection_down();
        }
        assert_eq!(app.current_selection(), 3);
        assert_eq!(app.selected_record_id().as_deref(), Some("SV890"));

        app.set_tab(Tab::Alerts);
        assert_eq!(app.current_selection(), 0);
        app.move_selection_up();
        assert_eq!(app.current_selection(), 0);
        app.go_to_bottom();
        assert_eq!(app.selected_record_id().as_deref(), Some("3"));

        app.set_tab(Tab::Flights);
        assert_eq!(app.current_selection(), 3);
    }

    #[test]
    fn test_dashboard_selection_covers_preview_only() {
        let mut app = app();
        app.go_to_bottom();
        assert_eq!(app.selected_record_id().as_deref(), Some("F3789"));
    }

    #[test]
    fn test_command_bar_navigation() {
        let mut app = app();
        app.enter_command();
        app.command.input = "alerts".to_string();
        app.apply_command();
        assert_eq!(app.current_tab(), Tab::Alerts);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.command.last.as_deref(), Some("alerts"));

        app.enter_command();
        app.command.input = "tab wx".to_string();
        app.apply_command();
        assert_eq!(app.current_tab(), Tab::Weather);
    }

    #[test]
    fn test_unknown_command_warns() {
        let mut app = app();
        app.enter_command();
        app.command.input = "radar on".to_string();
        app.apply_command();
        assert_eq!(app.current_tab(), Tab::Dashboard);
        assert_eq!(app.status_text().unwrap().1, StatusLevel::Warn);
    }

    #[test]
    fn test_quit_and_help_actions() {
        let mut app = app();
        app.apply_action(Action::ToggleHelp);
        assert!(app.help_open);
        app.apply_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_clock_uses_context_locale() {
        use chrono::TimeZone;

        let mut app = app();
        assert_eq!(app.ctx.clock_or_placeholder(), "--:--:--");
        app.ctx.locale = crate::infrastructure::ClockLocale::EnGb;
        let now = Local.with_ymd_and_hms(2026, 10, 19, 21, 4, 5).unwrap();
        app.apply_clock(now);
        assert_eq!(app.ctx.clock, "21:04:05");
    }
}
