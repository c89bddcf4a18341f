//! Sample record models.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Prefix shared by every system-assigned sample id.
pub const SAMPLE_ID_PREFIX: &str = "SMP";

/// Numeric suffix used when no `SMP` id exists yet (first id is `SMP101`).
pub const DEFAULT_ID_BASE: u128 = 100;

/// Kind of specimen collected.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter, AsRefStr,
)]
pub enum SampleType {
    #[default]
    Blood,
    Urine,
    Tissue,
}

/// Processing status of a sample.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter, AsRefStr,
)]
pub enum SampleStatus {
    /// Collected, not yet picked up by the lab
    #[default]
    Pending,
    /// In the lab
    Processing,
    /// Results available
    Completed,
}

/// A laboratory sample record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sample {
    /// Unique id (`SMP` + integer)
    pub id: String,
    /// Display name; fixtures may omit it, in which case it is empty
    #[serde(default)]
    pub name: String,
    /// Specimen type
    #[serde(rename = "type")]
    pub sample_type: SampleType,
    /// Collection date (ISO 8601 calendar date)
    #[serde(rename = "collectedOn")]
    pub collected_on: NaiveDate,
    /// Processing status
    pub status: SampleStatus,
}

impl Sample {
    /// Create a new pending sample.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sample_type: SampleType,
        collected_on: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sample_type,
            collected_on,
            status: SampleStatus::Pending,
        }
    }

    /// Builder-style status override.
    pub fn with_status(mut self, status: SampleStatus) -> Self {
        self.status = status;
        self
    }

    /// Name folded for case-insensitive matching and sorting.
    pub fn folded_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Apply a single-field partial update.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(name) => self.name = name,
            FieldUpdate::Type(sample_type) => self.sample_type = sample_type,
            FieldUpdate::CollectedOn(date) => self.collected_on = date,
            FieldUpdate::Status(status) => self.status = status,
        }
    }
}

/// Partial update of one mutable sample field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Type(SampleType),
    CollectedOn(NaiveDate),
    Status(SampleStatus),
}

/// Numeric suffix of an `SMP` id, if it has one.
pub fn id_number(id: &str) -> Option<u128> {
    id.strip_prefix(SAMPLE_ID_PREFIX)?.parse().ok()
}

/// Next free sample id: one past the highest `SMP` suffix, `SMP101` when none exist.
///
/// Ids without the prefix or with a non-numeric suffix are ignored. If the
/// highest suffix is `u128::MAX`, the lowest unused suffix above the base is
/// taken instead, so the result never matches an existing id.
pub fn next_sample_id<'a, I>(existing_ids: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let numbers: BTreeSet<u128> = existing_ids.into_iter().filter_map(id_number).collect();
    let next = match numbers.last() {
        None => DEFAULT_ID_BASE + 1,
        Some(max) => max
            .checked_add(1)
            .unwrap_or_else(|| lowest_free_number(&numbers)),
    };
    format!("{}{}", SAMPLE_ID_PREFIX, next)
}

fn lowest_free_number(taken: &BTreeSet<u128>) -> u128 {
    (DEFAULT_ID_BASE + 1..=u128::MAX)
        .find(|n| !taken.contains(n))
        .unwrap_or(DEFAULT_ID_BASE + 1)
}
