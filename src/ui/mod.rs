use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod tabs;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel};
use crate::domain::View;

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    tabs::draw_tab_bar(f, areas.tabs, app);
    draw_main(f, areas.main, app);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

fn draw_main(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.current_selection();
    match app.view() {
        View::Dashboard(dash) => tabs::draw_dashboard_tab(f, area, &dash, selected),
        View::Flights(flights) => tabs::draw_flights_tab(f, area, flights, selected),
        View::Airports(airports) => tabs::draw_airports_tab(f, area, airports, selected),
        View::Weather(panels) => tabs::draw_weather_tab(f, area, &panels, selected),
        View::Alerts(alerts) => tabs::draw_alerts_tab(f, area, alerts, selected),
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Anan",
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                "Saudi aviation monitoring",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("Live ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{}  ", app.ctx.links.live_site)),
            Span::styled("Source ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.ctx.links.repository.clone()),
        ]),
    ];
    let left = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let right_lines = vec![
        Line::from(Span::styled(
            app.ctx.clock_or_placeholder().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Locale ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.ctx.locale.tag()),
        ]),
    ];
    let right = Paragraph::new(right_lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Right);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let view = app.view();
    let position = if view.is_empty() {
        "--".to_string()
    } else {
        format!("{}/{}", app.current_selection() + 1, view.len())
    };

    let line = Line::from(vec![
        Span::styled("Source ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.ctx.source_name)),
        Span::styled("Tab ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.current_tab().title())),
        Span::styled("Row ", Style::default().fg(Color::DarkGray)),
        Span::raw(position),
    ]);

    let paragraph = Paragraph::new(line)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("dashboard", "Go to dashboard"),
        ("flights", "Go to flights"),
        ("airports", "Go to airports"),
        ("weather", "Go to weather"),
        ("alerts", "Go to alerts"),
        ("tab", "Switch tab by name"),
        ("export", "Export current view"),
        ("reload", "Reload dataset"),
        ("help", "Toggle help"),
        ("quit", "Quit"),
    ];

    for (cmd, desc) in commands {
        if cmd.starts_with(&input) {
            return Some(desc);
        }
    }
    None
}

fn action_hints() -> Line<'static> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let text = |t: &'static str| Span::styled(t, Style::default().fg(Color::DarkGray));
    Line::from(vec![
        key("1-5"),
        text(" tabs  "),
        key("j/k"),
        text(" move  "),
        key("y"),
        text(" copy  "),
        key("e"),
        text(" export  "),
        key("r"),
        text(" reload  "),
        key(":"),
        text(" command  "),
        key("?"),
        text(" help  "),
        key("q"),
        text(" quit"),
    ])
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint_text =
                command_hint(&app.command.input).unwrap_or("dashboard | tab <name> | export");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.clone()),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text.to_string(), Style::default().fg(color)),
                ])
            } else {
                action_hints()
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  1-5          Jump to tab"),
        Line::from("  Tab / S-Tab  Next / previous tab"),
        Line::from("  [ / ]        Previous / next tab"),
        Line::from("  j / k        Move selection"),
        Line::from("  g / G        Top / bottom"),
        Line::from("  Esc          Close"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  :            Command bar"),
        Line::from("  y            Copy selected id"),
        Line::from("  e            Export current view"),
        Line::from("  r            Reload dataset"),
        Line::from("  ?            Toggle help"),
        Line::from("  q            Quit"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :flights  :tab weather  :export  :reload"),
        Line::from(""),
        Line::from(format!("Active tab: {}", app.current_tab().title())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
