use std::path::PathBuf;

use thiserror::Error;

/// Conditions the console recovers from locally.
///
/// None of these terminate the process: sources fall back to the built-in
/// snapshot, reloads keep the previous dataset and an unknown tab keeps the
/// previous view.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("dataset not found at {}", path.display())]
    MissingDataset { path: PathBuf },

    #[error("malformed {entity} record '{id}': {reason}")]
    MalformedRecord {
        entity: &'static str,
        id: String,
        reason: String,
    },

    #[error("unknown tab '{0}'")]
    UnknownTab(String),

    #[error("unknown clock locale '{0}'")]
    UnknownLocale(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("export failed: {0}")]
    Export(String),
}

impl DashboardError {
    pub(crate) fn malformed(
        entity: &'static str,
        id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DashboardError::MalformedRecord {
            entity,
            id: id.into(),
            reason: reason.into(),
        }
    }
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        DashboardError::Export(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Export(err.to_string())
    }
}
