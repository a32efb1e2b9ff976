//! Data sources feeding the view selector
//!
//! The selector only ever sees a [`Dataset`]; where it came from is decided
//! here so a live backend can replace the snapshot without touching views.

mod builtin;
mod file;

pub use builtin::{builtin_dataset, BuiltinSource};
pub use file::{parse_dataset, FileFormat, FileSource};

use crate::domain::{DashboardError, Dataset};

/// Anything that can produce a dataset snapshot.
pub trait DataSource: std::fmt::Debug {
    /// Short description shown in the status line.
    fn name(&self) -> String;

    fn load(&self) -> Result<Dataset, DashboardError>;
}

/// Load from `primary`, falling back to `fallback` when it fails.
///
/// The primary error is returned alongside the dataset so the caller can
/// surface it.
pub fn load_or_fallback(
    primary: &dyn DataSource,
    fallback: &dyn DataSource,
) -> (Dataset, Option<DashboardError>) {
    match primary.load() {
        Ok(dataset) => {
            tracing::info!(source = %primary.name(), "dataset loaded");
            (dataset, None)
        }
        Err(err) => {
            tracing::warn!(source = %primary.name(), %err, "dataset load failed, using fallback");
            let dataset = fallback.load().unwrap_or_else(|fallback_err| {
                tracing::error!(source = %fallback.name(), err = %fallback_err, "fallback failed");
                Dataset::default()
            });
            (dataset, Some(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Failing;

    impl DataSource for Failing {
        fn name(&self) -> String {
            "failing".to_string()
        }

        fn load(&self) -> Result<Dataset, DashboardError> {
            Err(DashboardError::MissingDataset {
                path: "gone.json".into(),
            })
        }
    }

    #[test]
    fn test_primary_success_has_no_error() {
        let (data, err) = load_or_fallback(&BuiltinSource, &Failing);
        assert_eq!(data, builtin_dataset());
        assert!(err.is_none());
    }

    #[test]
    fn test_falls_back_on_primary_failure() {
        let (data, err) = load_or_fallback(&Failing, &BuiltinSource);
        assert_eq!(data.flights.len(), 4);
        assert!(matches!(err, Some(DashboardError::MissingDataset { .. })));
    }

    #[test]
    fn test_both_failing_yields_empty_dataset() {
        let (data, err) = load_or_fallback(&Failing, &Failing);
        assert_eq!(data, Dataset::default());
        assert!(err.is_some());
    }
}
