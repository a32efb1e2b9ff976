use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::error::DashboardError;
use super::model::{
    Airport, AirportWeather, Alert, CapacitySample, Flight, TrendPoint, WeatherReading,
};

/// Read-only snapshot of everything the console can show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub flights: Vec<Flight>,
    #[serde(default)]
    pub airports: Vec<Airport>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub trend: Vec<TrendPoint>,
    #[serde(default)]
    pub capacity: Vec<CapacitySample>,
    #[serde(default)]
    pub weather: Vec<AirportWeather>,
}

impl Dataset {
    /// Reading for an airport, or the placeholder when none was supplied.
    pub fn weather_for(&self, airport_id: &str) -> WeatherReading {
        self.weather
            .iter()
            .find(|entry| entry.airport_id == airport_id)
            .map(|entry| entry.reading)
            .unwrap_or(WeatherReading::PLACEHOLDER)
    }

    /// Check the record invariants; the first violation is returned.
    pub fn validate(&self) -> Result<(), DashboardError> {
        let mut seen = BTreeSet::new();
        for flight in &self.flights {
            if flight.id.trim().is_empty() {
                return Err(DashboardError::malformed("flight", "", "empty id"));
            }
            if !seen.insert(flight.id.as_str()) {
                return Err(DashboardError::malformed("flight", &flight.id, "duplicate id"));
            }
        }

        let mut seen = BTreeSet::new();
        for airport in &self.airports {
            if airport.id.trim().is_empty() {
                return Err(DashboardError::malformed("airport", "", "empty id"));
            }
            if !seen.insert(airport.id.as_str()) {
                return Err(DashboardError::malformed("airport", &airport.id, "duplicate id"));
            }
            if airport.capacity == 0 {
                return Err(DashboardError::malformed(
                    "airport",
                    &airport.id,
                    "capacity must be positive",
                ));
            }
            if airport.active_flights > airport.capacity {
                return Err(DashboardError::malformed(
                    "airport",
                    &airport.id,
                    format!(
                        "{} active flights exceed capacity {}",
                        airport.active_flights, airport.capacity
                    ),
                ));
            }
        }

        let mut seen = BTreeSet::new();
        for alert in &self.alerts {
            if !seen.insert(alert.id) {
                return Err(DashboardError::malformed(
                    "alert",
                    alert.id.to_string(),
                    "duplicate id",
                ));
            }
        }

        for point in &self.trend {
            if point.label.trim().is_empty() {
                return Err(DashboardError::malformed("trend point", "", "empty label"));
            }
        }

        for sample in &self.capacity {
            if sample.capacity == 0 {
                return Err(DashboardError::malformed(
                    "capacity sample",
                    &sample.name,
                    "capacity must be positive",
                ));
            }
        }

        Ok(())
    }
}
