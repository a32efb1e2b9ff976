//! Dataset loaded from a JSON or TOML snapshot file

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{DashboardError, Dataset};

use super::DataSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    /// `.json` is JSON, everything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Toml,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Dataset, DashboardError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(DashboardError::MissingDataset {
                    path: self.path.clone(),
                })
            }
            Err(err) => return Err(err.into()),
        };
        let dataset = parse_dataset(&content, FileFormat::from_path(&self.path))?;
        dataset.validate()?;
        tracing::debug!(
            path = %self.path.display(),
            flights = dataset.flights.len(),
            airports = dataset.airports.len(),
            alerts = dataset.alerts.len(),
            "dataset file parsed"
        );
        Ok(dataset)
    }
}

pub fn parse_dataset(content: &str, format: FileFormat) -> Result<Dataset, DashboardError> {
    match format {
        FileFormat::Json => serde_json::from_str(content)
            .map_err(|err| DashboardError::malformed("dataset", "json", err.to_string())),
        FileFormat::Toml => toml::from_str(content)
            .map_err(|err| DashboardError::malformed("dataset", "toml", err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FlightStatus, Severity, WeatherReading};
    use std::io::Write;

    const JSON_DATASET: &str = r#"{
        "flights": [
            {"id": "SV123", "carrier": "Saudia", "origin": "Riyadh", "destination": "Jeddah",
             "status": "EN_ROUTE", "altitude_ft": 35000, "speed_kmh": 520}
        ],
        "airports": [
            {"id": "JED", "name": "Jeddah Airport", "status": "OPERATIONAL",
             "active_flights": 62, "capacity": 90}
        ],
        "alerts": [
            {"id": 2, "category": "TRAFFIC", "message": "Congestion", "severity": "HIGH"}
        ],
        "weather": [
            {"airport_id": "JED", "temperature_c": 34.0, "visibility_km": 8.0,
             "wind_kmh": 40.0, "pressure_hpa": 1008.0}
        ]
    }"#;

    const TOML_DATASET: &str = r#"
[[flights]]
id = "MS456"
carrier = "flynas"
origin = "Dammam"
destination = "Riyadh"
status = "DEPARTED"
altitude_ft = 15000
speed_kmh = 480

[[trend]]
label = "06:00"
flights = 12
"#;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(FileFormat::from_path(Path::new("a.JSON")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("a.toml")), FileFormat::Toml);
        assert_eq!(FileFormat::from_path(Path::new("dataset")), FileFormat::Toml);
    }

    #[test]
    fn test_load_json_dataset() {
        let file = write_temp(".json", JSON_DATASET);
        let data = FileSource::new(file.path()).load().unwrap();
        assert_eq!(data.flights[0].status, FlightStatus::EnRoute);
        assert_eq!(data.alerts[0].severity, Severity::High);
        assert_eq!(data.weather_for("JED").wind_kmh, 40.0);
        assert!(data.trend.is_empty());
    }

    #[test]
    fn test_load_toml_dataset() {
        let file = write_temp(".toml", TOML_DATASET);
        let data = FileSource::new(file.path()).load().unwrap();
        assert_eq!(data.flights[0].id, "MS456");
        assert_eq!(data.trend[0].flights, 12);
        assert_eq!(data.weather_for("RUH"), WeatherReading::PLACEHOLDER);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::new(dir.path().join("nope.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, DashboardError::MissingDataset { .. }));
    }

    #[test]
    fn test_unparseable_file_is_malformed() {
        let file = write_temp(".json", "{\"flights\": [{\"id\": 7}]}");
        let err = FileSource::new(file.path()).load().unwrap_err();
        assert!(matches!(err, DashboardError::MalformedRecord { .. }));
    }

    #[test]
    fn test_invariant_violation_is_malformed() {
        let json = r#"{"airports": [{"id": "JED", "name": "Jeddah", "status": "OPERATIONAL",
            "active_flights": 95, "capacity": 90}]}"#;
        let file = write_temp(".json", json);
        let err = FileSource::new(file.path()).load().unwrap_err();
        assert!(matches!(
            err,
            DashboardError::MalformedRecord { entity: "airport", .. }
        ));
    }
}
