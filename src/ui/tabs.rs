//! Tab-based UI rendering

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Bar, BarChart, BarGroup, Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Row,
    Table, TableState, Tabs as RataTabs,
};
use ratatui::Frame;

use crate::app::App;
use crate::domain::{
    Airport, Alert, DashboardView, Flight, FlightStatus, KpiCard, Severity, Tab, WeatherPanel,
};

use super::layout::{card_grid, columns};
use super::widgets::{trend_text, TrendColumns};

const AIRPORT_CARD_HEIGHT: u16 = 6;
const WEATHER_CARD_HEIGHT: u16 = 7;

/// Draw the tab bar at the top
pub fn draw_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            Line::from(vec![
                Span::styled(
                    format!("{}:", tab.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(tab.title()),
            ])
        })
        .collect();

    let tabs = RataTabs::new(titles)
        .select(app.current_tab().index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" │ ");

    f.render_widget(tabs, area);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
}

fn selected_style() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

fn flight_status_color(status: FlightStatus) -> Color {
    match status {
        FlightStatus::EnRoute => Color::Blue,
        FlightStatus::Departed => Color::Green,
        FlightStatus::Landing => Color::Yellow,
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::Red,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Blue,
    }
}

// === Dashboard ===

pub fn draw_dashboard_tab(f: &mut Frame, area: Rect, dash: &DashboardView<'_>, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // KPI cards
            Constraint::Min(8),     // Charts
            Constraint::Length(7),  // Preview + alerts
        ])
        .split(area);

    let cards = dash.kpis.cards();
    for (card, card_area) in cards.iter().zip(columns(chunks[0], cards.len())) {
        draw_kpi_card(f, card_area, card);
    }

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let trend_title = format!("Flights today {}", trend_text(dash.trend));
    let trend_block = panel(&trend_title);
    let trend_inner = trend_block.inner(charts[0]);
    f.render_widget(trend_block, charts[0]);
    f.render_widget(TrendColumns::new(dash.trend), trend_inner);

    draw_capacity_chart(f, charts[1], dash);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    draw_flight_preview(f, bottom[0], dash.flight_preview, selected);
    draw_alert_list(f, bottom[1], dash.alerts, None, "Recent alerts");
}

fn draw_kpi_card(f: &mut Frame, area: Rect, card: &KpiCard) {
    let change_color = if card.is_rise() {
        Color::Green
    } else {
        Color::Red
    };
    let lines = vec![
        Line::from(Span::styled(
            card.value.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.change, Style::default().fg(change_color))),
    ];
    f.render_widget(Paragraph::new(lines).block(panel(card.title)), area);
}

fn draw_capacity_chart(f: &mut Frame, area: Rect, dash: &DashboardView<'_>) {
    let bars: Vec<Bar> = dash
        .capacity
        .iter()
        .map(|sample| {
            let pct = (sample.utilization() * 100.0).round() as u64;
            Bar::default()
                .label(Line::from(sample.name.clone()))
                .value(pct)
                .text_value(format!("{pct}%"))
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Airport capacity"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(2)
        .max(100);

    f.render_widget(chart, area);
}

fn draw_flight_preview(f: &mut Frame, area: Rect, flights: &[Flight], selected: usize) {
    let items: Vec<ListItem> = flights
        .iter()
        .map(|flight| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<6} ", flight.id),
                    Style::default().fg(Color::White),
                ),
                Span::raw(format!("{} → {}  ", flight.origin, flight.destination)),
                Span::styled(
                    flight.status.label(),
                    Style::default().fg(flight_status_color(flight.status)),
                ),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if !flights.is_empty() {
        state.select(Some(selected));
    }
    let list = List::new(items)
        .block(panel("Live flights"))
        .highlight_style(selected_style());
    f.render_stateful_widget(list, area, &mut state);
}

// === Flights ===

pub fn draw_flights_tab(f: &mut Frame, area: Rect, flights: &[Flight], selected: usize) {
    let header = Row::new(vec![
        "Flight",
        "Carrier",
        "From",
        "To",
        "Status",
        "Altitude",
        "Speed",
    ])
    .style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = flights
        .iter()
        .map(|flight| {
            Row::new(vec![
                Line::from(flight.id.clone()),
                Line::from(flight.carrier.clone()),
                Line::from(flight.origin.clone()),
                Line::from(flight.destination.clone()),
                Line::from(Span::styled(
                    flight.status.label(),
                    Style::default().fg(flight_status_color(flight.status)),
                )),
                Line::from(format!("{} ft", flight.altitude_ft)),
                Line::from(format!("{} km/h", flight.speed_kmh)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Min(12),
        Constraint::Min(10),
        Constraint::Min(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
    ];

    let title = format!("Flights ({})", flights.len());
    let table = Table::new(rows, widths)
        .header(header)
        .block(panel(&title))
        .highlight_style(selected_style())
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if !flights.is_empty() {
        state.select(Some(selected));
    }
    f.render_stateful_widget(table, area, &mut state);
}

// === Airports ===

pub fn draw_airports_tab(f: &mut Frame, area: Rect, airports: &[Airport], selected: usize) {
    if airports.is_empty() {
        draw_empty(f, area, "No airports in the dataset");
        return;
    }
    for (i, card) in card_grid(area, airports.len(), 2, AIRPORT_CARD_HEIGHT, selected) {
        draw_airport_card(f, card, &airports[i], i == selected);
    }
}

fn draw_airport_card(f: &mut Frame, area: Rect, airport: &Airport, selected: bool) {
    let border = if selected { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!("{} · {}", airport.id, airport.name));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let info = Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Green)),
        Span::raw(airport.status.label()),
        Span::raw("   "),
        Span::styled("Flights ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}/{}", airport.active_flights, airport.capacity)),
    ]);
    f.render_widget(Paragraph::new(info), rows[0]);

    let ratio = airport.utilization();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(ratio)
        .label(format!("{:.1}%", ratio * 100.0));
    f.render_widget(gauge, rows[1]);
}

// === Weather ===

pub fn draw_weather_tab(f: &mut Frame, area: Rect, panels: &[WeatherPanel<'_>], selected: usize) {
    if panels.is_empty() {
        draw_empty(f, area, "No airports in the dataset");
        return;
    }
    for (i, card) in card_grid(area, panels.len(), 2, WEATHER_CARD_HEIGHT, selected) {
        draw_weather_card(f, card, &panels[i], i == selected);
    }
}

fn draw_weather_card(f: &mut Frame, area: Rect, weather: &WeatherPanel<'_>, selected: bool) {
    let border = if selected { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(weather.airport.name.as_str());

    let reading = &weather.reading;
    let label = |name: &'static str| Span::styled(name, Style::default().fg(Color::DarkGray));
    let lines = vec![
        Line::from(vec![
            label("Temperature  "),
            Span::raw(format!("{}°C", reading.temperature_c)),
        ]),
        Line::from(vec![
            label("Visibility   "),
            Span::raw(format!("{} km", reading.visibility_km)),
        ]),
        Line::from(vec![
            label("Wind         "),
            Span::raw(format!("{} km/h", reading.wind_kmh)),
        ]),
        Line::from(vec![
            label("Pressure     "),
            Span::raw(format!("{} hPa", reading.pressure_hpa)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

// === Alerts ===

pub fn draw_alerts_tab(f: &mut Frame, area: Rect, alerts: &[Alert], selected: usize) {
    let title = format!("Alerts ({})", alerts.len());
    draw_alert_list(f, area, alerts, Some(selected), &title);
}

fn draw_alert_list(
    f: &mut Frame,
    area: Rect,
    alerts: &[Alert],
    selected: Option<usize>,
    title: &str,
) {
    let items: Vec<ListItem> = alerts
        .iter()
        .map(|alert| {
            let color = severity_color(alert.severity);
            ListItem::new(Line::from(vec![
                Span::styled("▌", Style::default().fg(color)),
                Span::styled(
                    format!(" {:<6} ", alert.severity.label()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:<12}", alert.category.label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(alert.message.clone()),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if !alerts.is_empty() {
        state.select(selected);
    }
    let list = List::new(items)
        .block(panel(title))
        .highlight_style(selected_style());
    f.render_stateful_widget(list, area, &mut state);
}

pub fn draw_empty(f: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(Color::DarkGray),
    )))
    .block(panel(""));
    f.render_widget(paragraph, area);
}
