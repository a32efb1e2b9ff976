//! View selection: which records and KPIs a tab shows.
//!
//! [`select`] is a pure function of the tab and the dataset. It never
//! filters or reorders the source collections, so selecting the same tab
//! twice over the same data yields the same [`View`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::dataset::Dataset;
use super::error::DashboardError;
use super::model::{
    Airport, AirportStatus, Alert, CapacitySample, Flight, TrendPoint, WeatherReading,
};

/// Number of flights previewed on the dashboard.
pub const FLIGHT_PREVIEW_LEN: usize = 3;

/// Operational efficiency figure shown on the dashboard.
pub const EFFICIENCY_PERCENT: f64 = 98.7;

/// Main tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    Flights,
    Airports,
    Weather,
    Alerts,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Flights,
        Tab::Airports,
        Tab::Weather,
        Tab::Alerts,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Flights => "Flights",
            Tab::Airports => "Airports",
            Tab::Weather => "Weather",
            Tab::Alerts => "Alerts",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Dashboard => '1',
            Tab::Flights => '2',
            Tab::Airports => '3',
            Tab::Weather => '4',
            Tab::Alerts => '5',
        }
    }

    pub fn from_shortcut(ch: char) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.shortcut() == ch)
    }

    pub fn next(self) -> Tab {
        let idx = self.index();
        Tab::ALL[(idx + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        let idx = self.index();
        Tab::ALL[(idx + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Tab {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" | "dash" | "home" => Ok(Tab::Dashboard),
            "flights" | "flight" | "fl" => Ok(Tab::Flights),
            "airports" | "airport" | "apt" => Ok(Tab::Airports),
            "weather" | "wx" => Ok(Tab::Weather),
            "alerts" | "alert" | "al" => Ok(Tab::Alerts),
            _ => Err(DashboardError::UnknownTab(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kpis {
    pub active_flights: usize,
    pub operational_airports: usize,
    pub alert_count: usize,
    pub efficiency_percent: f64,
}

/// A KPI as displayed: title, value and the period-over-period change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
    pub change: &'static str,
}

impl KpiCard {
    pub fn is_rise(&self) -> bool {
        self.change.starts_with('+')
    }
}

impl Kpis {
    pub fn compute(data: &Dataset) -> Self {
        Self {
            active_flights: data.flights.len(),
            operational_airports: data
                .airports
                .iter()
                .filter(|airport| airport.status == AirportStatus::Operational)
                .count(),
            alert_count: data.alerts.len(),
            efficiency_percent: EFFICIENCY_PERCENT,
        }
    }

    pub fn cards(&self) -> [KpiCard; 4] {
        [
            KpiCard {
                title: "Active flights",
                value: self.active_flights.to_string(),
                change: "+12%",
            },
            KpiCard {
                title: "Operational airports",
                value: self.operational_airports.to_string(),
                change: "100%",
            },
            KpiCard {
                title: "Alerts",
                value: self.alert_count.to_string(),
                change: "-5%",
            },
            KpiCard {
                title: "Operational efficiency",
                value: format!("{:.1}%", self.efficiency_percent),
                change: "+2.1%",
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView<'a> {
    pub kpis: Kpis,
    pub flight_preview: &'a [Flight],
    pub alerts: &'a [Alert],
    pub trend: &'a [TrendPoint],
    pub capacity: &'a [CapacitySample],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherPanel<'a> {
    pub airport: &'a Airport,
    pub reading: WeatherReading,
}

/// Records to render for one tab, borrowed from the dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Dashboard(DashboardView<'a>),
    Flights(&'a [Flight]),
    Airports(&'a [Airport]),
    Weather(Vec<WeatherPanel<'a>>),
    Alerts(&'a [Alert]),
}

impl View<'_> {
    /// Number of selectable rows in a list view.
    pub fn len(&self) -> usize {
        match self {
            View::Dashboard(dash) => dash.flight_preview.len(),
            View::Flights(flights) => flights.len(),
            View::Airports(airports) => airports.len(),
            View::Weather(panels) => panels.len(),
            View::Alerts(alerts) => alerts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Identifier of the record at `index`, for copying.
    pub fn record_id(&self, index: usize) -> Option<String> {
        match self {
            View::Dashboard(dash) => dash.flight_preview.get(index).map(|f| f.id.clone()),
            View::Flights(flights) => flights.get(index).map(|f| f.id.clone()),
            View::Airports(airports) => airports.get(index).map(|a| a.id.clone()),
            View::Weather(panels) => panels.get(index).map(|p| p.airport.id.clone()),
            View::Alerts(alerts) => alerts.get(index).map(|a| a.id.to_string()),
        }
    }
}

pub fn select(tab: Tab, data: &Dataset) -> View<'_> {
    match tab {
        Tab::Dashboard => View::Dashboard(DashboardView {
            kpis: Kpis::compute(data),
            flight_preview: &data.flights[..data.flights.len().min(FLIGHT_PREVIEW_LEN)],
            alerts: &data.alerts,
            trend: &data.trend,
            capacity: &data.capacity,
        }),
        Tab::Flights => View::Flights(&data.flights),
        Tab::Airports => View::Airports(&data.airports),
        Tab::Weather => View::Weather(
            data.airports
                .iter()
                .map(|airport| WeatherPanel {
                    airport,
                    reading: data.weather_for(&airport.id),
                })
                .collect(),
        ),
        Tab::Alerts => View::Alerts(&data.alerts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AlertCategory, FlightStatus, Severity};
    use crate::infrastructure::source::builtin_dataset;

    fn ids(flights: &[Flight]) -> Vec<&str> {
        flights.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_selection_is_idempotent() {
        let data = builtin_dataset();
        for tab in Tab::ALL {
            assert_eq!(select(tab, &data), select(tab, &data), "tab {tab}");
        }
    }

    #[test]
    fn test_each_tab_maps_to_its_view() {
        let data = builtin_dataset();
        for tab in Tab::ALL {
            let matched = match select(tab, &data) {
                View::Dashboard(_) => Tab::Dashboard,
                View::Flights(_) => Tab::Flights,
                View::Airports(_) => Tab::Airports,
                View::Weather(_) => Tab::Weather,
                View::Alerts(_) => Tab::Alerts,
            };
            assert_eq!(matched, tab);
        }
    }

    #[test]
    fn test_dashboard_kpis() {
        let data = builtin_dataset();
        let View::Dashboard(dash) = select(Tab::Dashboard, &data) else {
            panic!("expected dashboard view");
        };
        assert_eq!(dash.kpis.active_flights, 4);
        assert_eq!(dash.kpis.operational_airports, 4);
        assert_eq!(dash.kpis.alert_count, 3);
        assert_eq!(dash.kpis.efficiency_percent, 98.7);
    }

    #[test]
    fn test_active_flights_counts_every_flight() {
        let mut data = builtin_dataset();
        for flight in &mut data.flights {
            flight.status = FlightStatus::Landing;
        }
        assert_eq!(Kpis::compute(&data).active_flights, data.flights.len());
    }

    #[test]
    fn test_dashboard_previews_first_three_flights() {
        let data = builtin_dataset();
        let View::Dashboard(dash) = select(Tab::Dashboard, &data) else {
            panic!("expected dashboard view");
        };
        assert_eq!(ids(dash.flight_preview), vec!["SV123", "MS456", "F3789"]);
        assert_eq!(dash.alerts, data.alerts.as_slice());
        assert_eq!(dash.trend, data.trend.as_slice());
        assert_eq!(dash.capacity, data.capacity.as_slice());
    }

    #[test]
    fn test_dashboard_preview_with_fewer_flights() {
        let mut data = builtin_dataset();
        data.flights.truncate(2);
        let View::Dashboard(dash) = select(Tab::Dashboard, &data) else {
            panic!("expected dashboard view");
        };
        assert_eq!(ids(dash.flight_preview), vec!["SV123", "MS456"]);

        data.flights.clear();
        let View::Dashboard(dash) = select(Tab::Dashboard, &data) else {
            panic!("expected dashboard view");
        };
        assert!(dash.flight_preview.is_empty());
        assert_eq!(dash.kpis.active_flights, 0);
    }

    #[test]
    fn test_list_views_keep_source_order() {
        let data = builtin_dataset();
        assert_eq!(select(Tab::Flights, &data), View::Flights(&data.flights));
        assert_eq!(select(Tab::Airports, &data), View::Airports(&data.airports));
        assert_eq!(select(Tab::Alerts, &data), View::Alerts(&data.alerts));

        let View::Flights(flights) = select(Tab::Flights, &data) else {
            panic!("expected flights view");
        };
        assert_eq!(ids(flights), vec!["SV123", "MS456", "F3789", "SV890"]);
    }

    #[test]
    fn test_weather_pairs_every_airport_with_placeholder() {
        let data = builtin_dataset();
        let View::Weather(panels) = select(Tab::Weather, &data) else {
            panic!("expected weather view");
        };
        let airport_ids: Vec<&str> = panels.iter().map(|p| p.airport.id.as_str()).collect();
        assert_eq!(airport_ids, vec!["RUH", "JED", "DMM", "NEOM"]);
        assert!(panels
            .iter()
            .all(|p| p.reading == WeatherReading::PLACEHOLDER));
    }

    #[test]
    fn test_alerts_keep_declared_severity() {
        let data = builtin_dataset();
        let View::Alerts(alerts) = select(Tab::Alerts, &data) else {
            panic!("expected alerts view");
        };
        let congestion = alerts.iter().find(|a| a.id == 2).unwrap();
        assert_eq!(congestion.severity, Severity::High);
        assert_eq!(congestion.category, AlertCategory::Traffic);
    }

    #[test]
    fn test_tab_parsing_and_cycling() {
        assert_eq!("wx".parse::<Tab>().unwrap(), Tab::Weather);
        assert!(matches!(
            "radar".parse::<Tab>(),
            Err(DashboardError::UnknownTab(name)) if name == "radar"
        ));
        assert_eq!(Tab::Alerts.next(), Tab::Dashboard);
        assert_eq!(Tab::Dashboard.prev(), Tab::Alerts);
        assert_eq!(Tab::from_shortcut('3'), Some(Tab::Airports));
        assert_eq!(Tab::from_shortcut('9'), None);
    }

    #[test]
    fn test_kpi_cards() {
        let data = builtin_dataset();
        let cards = Kpis::compute(&data).cards();
        assert_eq!(cards[0].value, "4");
        assert_eq!(cards[3].value, "98.7%");
        assert!(cards[0].is_rise());
        assert!(!cards[2].is_rise());
    }

    #[test]
    fn test_record_ids() {
        let data = builtin_dataset();
        assert_eq!(select(Tab::Alerts, &data).record_id(1), Some("2".to_string()));
        assert_eq!(select(Tab::Airports, &data).record_id(1), Some("JED".to_string()));
        assert_eq!(select(Tab::Flights, &data).record_id(9), None);
    }
}
