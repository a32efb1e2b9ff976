//! Export Module
//!
//! Writes the records of the current view to disk.
//!
//! - 'e' key or `:export` triggers export of the active tab
//! - Flights, Airports, Weather, Alerts → CSV
//! - Dashboard → JSON (KPIs, preview, alerts, chart data)
//! - Files saved to `<data_dir>/exports/`

mod csv_export;
mod json_export;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::app::App;
use crate::config;
use crate::core::{Action, NotifyLevel};
use crate::domain::{DashboardError, View};

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub records: usize,
    pub path: PathBuf,
}

/// Generate a timestamped filename
fn generate_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{}-{}.{}", prefix, timestamp, extension)
}

/// Path for a new export in `dir`; a `-N` suffix keeps earlier files from
/// the same second.
fn unique_path(dir: &Path, prefix: &str, extension: &str) -> PathBuf {
    let path = dir.join(generate_filename(prefix, extension));
    if !path.exists() {
        return path;
    }
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| prefix.to_string());
    (1..)
        .map(|n| dir.join(format!("{stem}-{n}.{extension}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or(path)
}

/// Write `view` into `dir`, creating the directory if needed.
pub fn export_view(view: &View<'_>, dir: &Path) -> Result<ExportReport, DashboardError> {
    let nothing = || DashboardError::Export("nothing to export in this view".to_string());
    let (prefix, extension) = match view {
        View::Dashboard(_) => ("dashboard", "json"),
        _ if view.is_empty() => return Err(nothing()),
        View::Flights(_) => ("flights", "csv"),
        View::Airports(_) => ("airports", "csv"),
        View::Weather(_) => ("weather", "csv"),
        View::Alerts(_) => ("alerts", "csv"),
    };

    fs::create_dir_all(dir)?;
    let path = unique_path(dir, prefix, extension);

    let records = match view {
        View::Dashboard(dash) => json_export::write_dashboard(&path, dash)?,
        View::Flights(flights) => csv_export::write_flights(&path, flights)?,
        View::Airports(airports) => csv_export::write_airports(&path, airports)?,
        View::Weather(panels) => csv_export::write_weather(&path, panels)?,
        View::Alerts(alerts) => csv_export::write_alerts(&path, alerts)?,
    };

    tracing::info!(path = %path.display(), records, "view exported");
    Ok(ExportReport { records, path })
}

/// Export the active tab to the configured export directory
pub fn export_current_view(app: &App) -> Action {
    let dir = config::export_dir();
    match export_view(&app.view(), &dir) {
        Ok(report) => {
            let filename = report
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            Action::Notify(
                format!("Exported {} records to {}", report.records, filename),
                NotifyLevel::Info,
            )
        }
        Err(err) => {
            tracing::warn!(%err, "export failed");
            Action::Notify(err.to_string(), NotifyLevel::Error)
        }
    }
}
