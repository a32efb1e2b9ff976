mod app;
mod config;
mod core;
mod domain;
mod infrastructure;
mod modules;
mod ui;

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::app::{App, InputMode, StatusLevel};
use crate::config::Config;
use crate::core::Action;
use crate::domain::Tab;
use crate::infrastructure::{
    BuiltinSource, ClockEvent, ClockLocale, ClockTicker, DataSource, FileSource,
};

#[derive(Debug, Parser)]
#[command(
    name = "anan",
    version,
    about = "Anan: a terminal console for Saudi aviation monitoring"
)]
struct Args {
    /// Dataset file (JSON or TOML); the built-in snapshot is used otherwise
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Initial tab (dashboard, flights, airports, weather, alerts)
    #[arg(long)]
    tab: Option<String>,

    /// Clock locale (ar-SA, en-US, en-GB)
    #[arg(long)]
    locale: Option<String>,

    /// Config file (overrides ANAN_CONFIG and the XDG location)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn log_appender(dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("anan.log")
        .build(dir)
}

/// Log to a daily-rotated file; stdout belongs to the terminal UI.
///
/// Returns a message for the status line when the log file cannot be opened;
/// the console then runs without file logging.
fn init_logging() -> Option<String> {
    let dir = config::log_dir();
    let (file_layer, failure) = match log_appender(&dir) {
        Ok(appender) => (
            Some(fmt::layer().with_writer(appender).with_ansi(false)),
            None,
        ),
        Err(err) => (
            None,
            Some(format!("File logging disabled ({}): {err}", dir.display())),
        ),
    };

    let env_filter =
        EnvFilter::try_from_env("ANAN_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    failure
}

/// `--dataset` wins over the config `dataset` key; neither means the
/// built-in snapshot.
fn dataset_source(args: &Args, config: &Config) -> Box<dyn DataSource> {
    match args.dataset.clone().or_else(|| config.dataset_path()) {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(BuiltinSource),
    }
}

/// Apply links, clock locale and initial tab. Flags win over config keys;
/// invalid values keep the defaults and leave a warning in the status line.
fn apply_startup(app: &mut App, args: &Args, config: &Config) {
    app.ctx.links = config.links.clone();

    if let Some(tag) = args.locale.as_deref().or(config.clock_locale.as_deref()) {
        match tag.parse::<ClockLocale>() {
            Ok(locale) => app.ctx.locale = locale,
            Err(err) => {
                tracing::warn!(%err, "using default clock locale");
                app.set_status(err.to_string(), StatusLevel::Warn);
            }
        }
    }

    if let Some(name) = args.tab.as_deref().or(config.initial_tab.as_deref()) {
        // Failure is already reported in the status line.
        let _ = app.set_tab_named(name);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_failure = init_logging();

    let config = match args.config.as_deref() {
        Some(path) => config::load_from(path),
        None => config::load(),
    };

    let source = dataset_source(&args, &config);
    tracing::info!(source = %source.name(), "starting");

    let mut app = App::new(source);
    apply_startup(&mut app, &args, &config);
    if let Some(message) = log_failure {
        app.set_status(message, StatusLevel::Warn);
    }

    let ticker = ClockTicker::start(config.tick_period())?;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, &ticker);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Stops the clock thread before the process exits.
    drop(ticker);

    if let Err(err) = res {
        tracing::error!(?err, "terminal loop failed");
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    ticker: &ClockTicker,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        pump_clock(&mut app, ticker);
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            tracing::info!("quit requested");
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                handle_key(&mut app, key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn pump_clock(app: &mut App, ticker: &ClockTicker) {
    for event in ticker.poll_events() {
        match event {
            ClockEvent::Tick(now) => app.apply_clock(now),
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            app.apply_action(Action::Quit)
        }
        (KeyCode::Char('q'), _) => app.apply_action(Action::Quit),
        (KeyCode::Char('?'), _) => app.apply_action(Action::ToggleHelp),
        (KeyCode::Char(':'), _) | (KeyCode::Char('/'), _) => app.enter_command(),
        (KeyCode::Char(ch @ '1'..='5'), _) => {
            if let Some(tab) = Tab::from_shortcut(ch) {
                app.apply_action(Action::Navigate(tab));
            }
        }
        (KeyCode::Tab, _) | (KeyCode::Char(']'), _) => app.next_tab(),
        (KeyCode::BackTab, _) | (KeyCode::Char('['), _) => app.prev_tab(),
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => app.move_selection_down(),
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => app.move_selection_up(),
        (KeyCode::Char('g'), _) | (KeyCode::Home, _) => app.go_to_top(),
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => app.go_to_bottom(),
        (KeyCode::Char('e'), _) => app.apply_action(Action::Export),
        (KeyCode::Char('r'), _) => app.apply_action(Action::Reload),
        (KeyCode::Char('y'), _) => handle_copy_to_clipboard(app),
        (KeyCode::Esc, _) => app.status = None,
        _ => {}
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

fn handle_copy_to_clipboard(app: &mut App) {
    use arboard::Clipboard;

    let Some(text) = app.selected_record_id() else {
        app.set_status("Nothing selected to copy", StatusLevel::Warn);
        return;
    };

    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
        Ok(()) => app.set_status(format!("Copied: {text}"), StatusLevel::Info),
        Err(err) => {
            tracing::warn!(%err, "clipboard unavailable");
            app.set_status(
                format!("Failed to copy to clipboard: {err}"),
                StatusLevel::Error,
            );
        }
    }
}
