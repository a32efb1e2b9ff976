pub mod dataset;
pub mod error;
pub mod model;
pub mod selector;

pub use dataset::Dataset;
pub use error::DashboardError;
pub use model::{
    Airport, AirportStatus, AirportWeather, Alert, AlertCategory, CapacitySample, Flight,
    FlightStatus, Severity, TrendPoint, WeatherReading,
};
pub use selector::{select, DashboardView, KpiCard, Kpis, Tab, View, WeatherPanel};
