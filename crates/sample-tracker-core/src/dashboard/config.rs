//! Dashboard start-up configuration.

use serde::{Deserialize, Serialize};

use super::Theme;
use crate::view::{SortKey, SortOrder};

/// Initial state of the dashboard controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub theme: Theme,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}
