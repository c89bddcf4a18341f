//! Initial record sets from JSON fixtures.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

use sample_tracker_core::{Sample, ValidationError};

/// Sample data shipped with the binary.
pub const BUNDLED_SAMPLES: &str = include_str!("../data/samples.json");

/// Fixture errors.
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate sample id: {0}")]
    DuplicateId(String),
}

pub type FixtureResult<T> = Result<T, FixtureError>;

/// Parse a JSON array of sample records. Ids must be unique.
pub fn parse_fixture(json: &str) -> FixtureResult<Vec<Sample>> {
    let records: Vec<Sample> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id.as_str()) {
            return Err(FixtureError::DuplicateId(record.id.clone()));
        }
    }

    debug!(count = records.len(), "fixture parsed");
    Ok(records)
}

/// Read and parse a fixture file.
pub fn load_fixture(path: impl AsRef<Path>) -> FixtureResult<Vec<Sample>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_fixture(&json)?;
    info!(path = %path.display(), count = records.len(), "fixture loaded");
    Ok(records)
}

/// The bundled sample data set.
pub fn bundled_samples() -> FixtureResult<Vec<Sample>> {
    parse_fixture(BUNDLED_SAMPLES)
}

/// A fixture record the add/edit form would have refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureIssue {
    pub id: String,
    pub problem: ValidationError,
}

/// Find records with blank names or collection dates after `today`.
pub fn check_records(records: &[Sample], today: NaiveDate) -> Vec<FixtureIssue> {
    let mut issues = Vec::new();
    for record in records {
        if record.name.trim().is_empty() {
            issues.push(FixtureIssue {
                id: record.id.clone(),
                problem: ValidationError::MissingField("name"),
            });
        }
        if record.collected_on > today {
            issues.push(FixtureIssue {
                id: record.id.clone(),
                problem: ValidationError::FutureDate {
                    date: record.collected_on,
                    today,
                },
            });
        }
    }
    issues
}
