//! Name and status filters.

use std::fmt;
use std::str::FromStr;

use crate::models::{Sample, SampleStatus};

/// Status dropdown selection: everything, or exactly one status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SampleStatus),
}

impl StatusFilter {
    /// Check whether a record passes this filter.
    pub fn matches(&self, sample: &Sample) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => sample.status == *status,
        }
    }
}

impl From<SampleStatus> for StatusFilter {
    fn from(status: SampleStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(StatusFilter::All);
        }
        SampleStatus::from_str(s).map(StatusFilter::Only)
    }
}

/// Keep records whose name contains `query`, ignoring case.
///
/// An empty query keeps everything.
pub fn filter_by_name<'a>(records: &'a [Sample], query: &str) -> Vec<&'a Sample> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| needle.is_empty() || r.folded_name().contains(&needle))
        .collect()
}

/// Keep records passing the status filter.
pub fn filter_by_status(mut records: Vec<&Sample>, filter: StatusFilter) -> Vec<&Sample> {
    records.retain(|r| filter.matches(r));
    records
}
