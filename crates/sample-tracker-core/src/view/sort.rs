//! Sort keys and the list comparator.

use std::cmp::{Ordering, Reverse};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::models::Sample;

/// Column the list is sorted by.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter, AsRefStr,
)]
pub enum SortKey {
    #[default]
    #[serde(rename = "name")]
    #[strum(serialize = "name")]
    Name,
    #[serde(rename = "collectedOn")]
    #[strum(serialize = "collectedOn")]
    CollectedOn,
}

/// Sort direction.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Label for the order toggle button.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "▲ Asc",
            SortOrder::Desc => "▼ Desc",
        }
    }
}

/// Compare two samples by `key` in ascending order.
pub fn compare_by(key: SortKey, a: &Sample, b: &Sample) -> Ordering {
    match key {
        SortKey::Name => a.folded_name().cmp(&b.folded_name()),
        SortKey::CollectedOn => a.collected_on.cmp(&b.collected_on),
    }
}

/// Stable sort in place. Equal keys keep their incoming order in both directions.
///
/// Names are case-folded once per record.
pub fn sort_samples(records: &mut [&Sample], key: SortKey, order: SortOrder) {
    match (key, order) {
        (SortKey::Name, SortOrder::Asc) => records.sort_by_cached_key(|s| s.folded_name()),
        (SortKey::Name, SortOrder::Desc) => {
            records.sort_by_cached_key(|s| Reverse(s.folded_name()))
        }
        (SortKey::CollectedOn, SortOrder::Asc) => records.sort_by_key(|s| s.collected_on),
        (SortKey::CollectedOn, SortOrder::Desc) => {
            records.sort_by_key(|s| Reverse(s.collected_on))
        }
    }
}
