//! Aviation records shown by the console.
//!
//! Every record is immutable once a [`Dataset`](super::Dataset) is loaded.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    EnRoute,
    Departed,
    Landing,
}

impl FlightStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FlightStatus::EnRoute => "en route",
            FlightStatus::Departed => "departed",
            FlightStatus::Landing => "landing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub id: String,
    pub carrier: String,
    pub origin: String,
    pub destination: String,
    pub status: FlightStatus,
    /// Feet.
    pub altitude_ft: u32,
    /// Kilometres per hour.
    pub speed_kmh: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AirportStatus {
    Operational,
}

impl AirportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AirportStatus::Operational => "operational",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    pub id: String,
    pub name: String,
    pub status: AirportStatus,
    pub active_flights: u32,
    pub capacity: u32,
}

impl Airport {
    /// Active flights over capacity, clamped to `[0, 1]`.
    pub fn utilization(&self) -> f64 {
        utilization_ratio(self.active_flights, self.capacity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertCategory {
    Weather,
    Traffic,
    Maintenance,
}

impl AlertCategory {
    pub fn label(&self) -> &'static str {
        match self {
            AlertCategory::Weather => "weather",
            AlertCategory::Traffic => "traffic",
            AlertCategory::Maintenance => "maintenance",
        }
    }
}

/// Ordered by urgency: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    pub category: AlertCategory,
    pub message: String,
    pub severity: Severity,
}

/// One point of the daily flight-traffic trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub flights: u32,
}

/// One bar of the airport capacity chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacitySample {
    pub name: String,
    pub capacity: u32,
    pub current: u32,
}

impl CapacitySample {
    pub fn utilization(&self) -> f64 {
        utilization_ratio(self.current, self.capacity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub visibility_km: f64,
    pub wind_kmh: f64,
    pub pressure_hpa: f64,
}

impl WeatherReading {
    /// Fixed reading shown for airports without a weather feed.
    pub const PLACEHOLDER: WeatherReading = WeatherReading {
        temperature_c: 28.0,
        visibility_km: 10.0,
        wind_kmh: 15.0,
        pressure_hpa: 1013.0,
    };
}

impl Default for WeatherReading {
    fn default() -> Self {
        Self::PLACEHOLDER
    }
}

/// Weather override for one airport in a file dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportWeather {
    pub airport_id: String,
    #[serde(flatten)]
    pub reading: WeatherReading,
}

pub fn utilization_ratio(active: u32, capacity: u32) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    (active as f64 / capacity as f64).clamp(0.0, 1.0)
}
