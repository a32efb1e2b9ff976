//! CSV Export
//!
//! Writes flights, airports, weather panels and alerts to CSV files.

use std::path::Path;

use crate::domain::{Airport, Alert, DashboardError, Flight, WeatherPanel};

pub fn write_flights(path: &Path, flights: &[Flight]) -> Result<usize, DashboardError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "carrier",
        "origin",
        "destination",
        "status",
        "altitude_ft",
        "speed_kmh",
    ])?;

    for flight in flights {
        wtr.write_record([
            flight.id.clone(),
            flight.carrier.clone(),
            flight.origin.clone(),
            flight.destination.clone(),
            flight.status.label().to_string(),
            flight.altitude_ft.to_string(),
            flight.speed_kmh.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(flights.len())
}

pub fn write_airports(path: &Path, airports: &[Airport]) -> Result<usize, DashboardError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "status",
        "active_flights",
        "capacity",
        "utilization_pct",
    ])?;

    for airport in airports {
        wtr.write_record([
            airport.id.clone(),
            airport.name.clone(),
            airport.status.label().to_string(),
            airport.active_flights.to_string(),
            airport.capacity.to_string(),
            format!("{:.1}", airport.utilization() * 100.0),
        ])?;
    }

    wtr.flush()?;
    Ok(airports.len())
}

pub fn write_weather(path: &Path, panels: &[WeatherPanel<'_>]) -> Result<usize, DashboardError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "airport_id",
        "airport_name",
        "temperature_c",
        "visibility_km",
        "wind_kmh",
        "pressure_hpa",
    ])?;

    for panel in panels {
        wtr.write_record([
            panel.airport.id.clone(),
            panel.airport.name.clone(),
            panel.reading.temperature_c.to_string(),
            panel.reading.visibility_km.to_string(),
            panel.reading.wind_kmh.to_string(),
            panel.reading.pressure_hpa.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(panels.len())
}

pub fn write_alerts(path: &Path, alerts: &[Alert]) -> Result<usize, DashboardError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["id", "category", "severity", "message"])?;

    for alert in alerts {
        wtr.write_record([
            alert.id.to_string(),
            alert.category.label().to_string(),
            alert.severity.label().to_string(),
            alert.message.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(alerts.len())
}
