//! List view pipeline.
//!
//! Pipeline: name filter → status filter → sort → paginate
//!
//! [`derive_view`] is a pure function of the record set and the
//! [`ListOptions`]; callers recompute it after every mutation.

mod filter;
mod page;
mod sort;

pub use filter::*;
pub use page::*;
pub use sort::*;

use serde::Serialize;
use tracing::debug;

use crate::models::Sample;

/// Everything the list controls can set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Free-text name search
    pub query: String,
    /// Status dropdown
    pub status_filter: StatusFilter,
    /// Sort column
    pub sort_key: SortKey,
    /// Sort direction
    pub sort_order: SortOrder,
    /// 1-based page
    pub page: usize,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            query: String::new(),
            status_filter: StatusFilter::All,
            sort_key: SortKey::Name,
            sort_order: SortOrder::Asc,
            page: 1,
        }
    }
}

/// The derived, render-ready page of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    /// Rows on the current page
    pub rows: Vec<Sample>,
    /// Records passing both filters
    pub total_matches: usize,
    /// `ceil(total_matches / PAGE_SIZE)`; zero when nothing matches
    pub total_pages: usize,
    /// Clamped 1-based page actually shown
    pub current_page: usize,
    /// Prev / Next / numbered buttons
    pub controls: PageControls,
}

impl ListView {
    /// True when no record passes the filters ("No samples found.").
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }
}

/// Run the full pipeline over `records`.
pub fn derive_view(records: &[Sample], options: &ListOptions) -> ListView {
    let matched = matching_samples(records, options);

    let total_matches = matched.len();
    let total_pages = page_count(total_matches);
    let current_page = clamp_page(options.page, total_pages);
    let rows: Vec<Sample> = paginate(&matched, current_page)
        .iter()
        .copied()
        .cloned()
        .collect();

    debug!(
        query = %options.query,
        status = %options.status_filter,
        sort_key = %options.sort_key,
        sort_order = %options.sort_order,
        total_matches,
        current_page,
        "list view recomputed"
    );

    ListView {
        rows,
        total_matches,
        total_pages,
        current_page,
        controls: PageControls::new(current_page, total_pages),
    }
}

/// Filtered and sorted records across all pages.
pub fn matching_samples<'a>(records: &'a [Sample], options: &ListOptions) -> Vec<&'a Sample> {
    let by_name = filter_by_name(records, &options.query);
    let mut matched = filter_by_status(by_name, options.status_filter);
    sort_samples(&mut matched, options.sort_key, options.sort_order);
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SampleStatus, SampleType};
    use chrono::{Duration, NaiveDate};

    fn make_store_records() -> Vec<Sample> {
        vec![
            Sample::new(
                "SMP1001",
                "Sample A",
                SampleType::Blood,
                NaiveDate::from_ymd_opt(2025, 5, 25).unwrap(),
            ),
            Sample::new(
                "SMP1002",
                "Sample B",
                SampleType::Urine,
                NaiveDate::from_ymd_opt(2025, 5, 24).unwrap(),
            )
            .with_status(SampleStatus::Processing),
        ]
    }

    fn make_many(count: usize) -> Vec<Sample> {
        let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        (0..count)
            .map(|i| {
                Sample::new(
                    format!("SMP{}", 101 + i),
                    format!("Sample {:03}", i),
                    SampleType::Blood,
                    base + Duration::days(i as i64),
                )
            })
            .collect()
    }

    #[test]
    fn test_query_a_matches_both() {
        let records = make_store_records();
        let options = ListOptions {
            query: "a".into(),
            ..ListOptions::default()
        };
        let view = derive_view(&records, &options);
        assert_eq!(view.total_matches, 2);
        assert_eq!(view.rows[0].id, "SMP1001");
        assert_eq!(view.rows[1].id, "SMP1002");
    }

    #[test]
    fn test_pending_filter() {
        let records = make_store_records();
        let options = ListOptions {
            status_filter: StatusFilter::Only(SampleStatus::Pending),
            ..ListOptions::default()
        };
        let view = derive_view(&records, &options);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].id, "SMP1001");
    }

    #[test]
    fn test_date_sort_ascending() {
        let records = make_store_records();
        let options = ListOptions {
            sort_key: SortKey::CollectedOn,
            sort_order: SortOrder::Asc,
            ..ListOptions::default()
        };
        let view = derive_view(&records, &options);
        assert_eq!(view.rows[0].id, "SMP1002");
    }

    #[test]
    fn test_empty_result_state() {
        let records = make_store_records();
        let options = ListOptions {
            query: "zzz".into(),
            page: 4,
            ..ListOptions::default()
        };
        let view = derive_view(&records, &options);
        assert!(view.is_empty());
        assert!(view.rows.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.current_page, 1);
        assert!(!view.controls.prev_enabled);
        assert!(!view.controls.next_enabled);
        assert!(view.controls.pages.is_empty());
    }

    #[test]
    fn test_pagination_of_many() {
        let records = make_many(45);
        let options = ListOptions {
            page: 3,
            ..ListOptions::default()
        };
        let view = derive_view(&records, &options);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.current_page, 3);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows[0].name, "Sample 040");
        assert!(view.controls.prev_enabled);
        assert!(!view.controls.next_enabled);
    }

    #[test]
    fn test_page_beyond_range_is_clamped() {
        let records = make_many(25);
        let options = ListOptions {
            page: 10,
            ..ListOptions::default()
        };
        let view = derive_view(&records, &options);
        assert_eq!(view.current_page, 2);
        assert_eq!(view.rows.len(), 5);
    }
}
