//! JSON Export
//!
//! Writes the dashboard snapshot to a JSON file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::{DashboardError, DashboardView};

#[derive(Serialize)]
struct ExportableDashboard<'a> {
    generated_at: DateTime<Local>,
    #[serde(flatten)]
    view: &'a DashboardView<'a>,
}

/// Returns the number of records written (preview flights plus alerts).
pub fn write_dashboard(path: &Path, view: &DashboardView<'_>) -> Result<usize, DashboardError> {
    let exportable = ExportableDashboard {
        generated_at: Local::now(),
        view,
    };

    let json = serde_json::to_string_pretty(&exportable)?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    Ok(view.flight_preview.len() + view.alerts.len())
}
