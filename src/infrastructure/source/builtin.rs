//! Static snapshot compiled into the binary

use crate::domain::{
    Airport, AirportStatus, Alert, AlertCategory, CapacitySample, DashboardError, Dataset,
    Flight, FlightStatus, Severity, TrendPoint,
};

use super::DataSource;

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl DataSource for BuiltinSource {
    fn name(&self) -> String {
        "builtin".to_string()
    }

    fn load(&self) -> Result<Dataset, DashboardError> {
        Ok(builtin_dataset())
    }
}

fn flight(
    id: &str,
    carrier: &str,
    origin: &str,
    destination: &str,
    status: FlightStatus,
    altitude_ft: u32,
    speed_kmh: u32,
) -> Flight {
    Flight {
        id: id.to_string(),
        carrier: carrier.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        status,
        altitude_ft,
        speed_kmh,
    }
}

fn airport(id: &str, name: &str, active_flights: u32, capacity: u32) -> Airport {
    Airport {
        id: id.to_string(),
        name: name.to_string(),
        status: AirportStatus::Operational,
        active_flights,
        capacity,
    }
}

fn alert(id: u32, category: AlertCategory, message: &str, severity: Severity) -> Alert {
    Alert {
        id,
        category,
        message: message.to_string(),
        severity,
    }
}

pub fn builtin_dataset() -> Dataset {
    let flights = vec![
        flight("SV123", "Saudia", "Riyadh", "Jeddah", FlightStatus::EnRoute, 35_000, 520),
        flight("MS456", "flynas", "Dammam", "Riyadh", FlightStatus::Departed, 15_000, 480),
        flight("F3789", "flyadeal", "Jeddah", "Dammam", FlightStatus::Landing, 8_000, 320),
        flight("SV890", "Saudia", "Riyadh", "NEOM", FlightStatus::EnRoute, 38_000, 550),
    ];

    let airports = vec![
        airport("RUH", "Riyadh Airport", 45, 80),
        airport("JED", "Jeddah Airport", 62, 90),
        airport("DMM", "Dammam Airport", 38, 70),
        airport("NEOM", "NEOM Airport", 15, 50),
    ];

    let alerts = vec![
        alert(
            1,
            AlertCategory::Weather,
            "Strong winds at Jeddah airport",
            Severity::Medium,
        ),
        alert(
            2,
            AlertCategory::Traffic,
            "Traffic congestion, Riyadh airspace",
            Severity::High,
        ),
        alert(
            3,
            AlertCategory::Maintenance,
            "Runway 2 maintenance, Dammam airport",
            Severity::Low,
        ),
    ];

    let trend = [
        ("06:00", 12),
        ("09:00", 28),
        ("12:00", 45),
        ("15:00", 52),
        ("18:00", 38),
        ("21:00", 25),
    ]
    .into_iter()
    .map(|(label, flights)| TrendPoint {
        label: label.to_string(),
        flights,
    })
    .collect();

    let capacity = [
        ("Riyadh", 80, 45),
        ("Jeddah", 90, 62),
        ("Dammam", 70, 38),
        ("NEOM", 50, 15),
    ]
    .into_iter()
    .map(|(name, capacity, current)| CapacitySample {
        name: name.to_string(),
        capacity,
        current,
    })
    .collect();

    Dataset {
        flights,
        airports,
        alerts,
        trend,
        capacity,
        weather: Vec::new(),
    }
}
