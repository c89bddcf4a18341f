//! Sample Tracker Core Library
//!
//! In-memory laboratory sample tracking: record store, list view pipeline,
//! add/edit form and the dashboard controller that ties them together.
//!
//! # Architecture
//!
//! ```text
//!   search / status / sort / page controls        row actions / form
//!                  │                                     │
//!                  ▼                                     ▼
//!          ┌───────────────┐   on_save / on_delete   ┌─────────────┐
//!          │  ListOptions  │ ◄────── page reset ──── │ RecordStore │
//!          └───────┬───────┘                         └──────┬──────┘
//!                  │                                        │
//!                  └──────────────┬─────────────────────────┘
//!                                 ▼
//!                 name filter → status filter → sort → paginate
//!                                 │
//!                                 ▼
//!                      ListView (rows + page controls)
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (Sample, SampleType, SampleStatus)
//! - [`store`]: In-memory record store with upsert/delete
//! - [`view`]: Filter → sort → paginate pipeline
//! - [`form`]: Add/edit draft, validation and id generation
//! - [`dashboard`]: Application state and UI event boundary

pub mod dashboard;
pub mod form;
pub mod models;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use dashboard::{Dashboard, DashboardConfig, Modal, Theme};
pub use form::{SampleForm, ValidationError};
pub use models::{FieldUpdate, Sample, SampleStatus, SampleType};
pub use store::{RecordStore, Upsert};
pub use view::{
    derive_view, ListOptions, ListView, PageControls, SortKey, SortOrder, StatusFilter, PAGE_SIZE,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use strum::IntoEnumIterator;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum SampleTrackerError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<ValidationError> for SampleTrackerError {
    fn from(e: ValidationError) -> Self {
        SampleTrackerError::Validation(e.to_string())
    }
}

impl From<serde_json::Error> for SampleTrackerError {
    fn from(e: serde_json::Error) -> Self {
        SampleTrackerError::Serialization(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for SampleTrackerError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        SampleTrackerError::InvalidInput(format!("Lock poisoned: {}", e))
    }
}

fn parse<T: FromStr<Err = strum::ParseError>>(
    field: &str,
    value: &str,
) -> Result<T, SampleTrackerError> {
    value
        .parse()
        .map_err(|_| SampleTrackerError::InvalidInput(format!("{}: {}", field, value)))
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create an empty dashboard.
#[uniffi::export]
pub fn new_dashboard() -> Arc<SampleTrackerCore> {
    Arc::new(SampleTrackerCore::wrap(Dashboard::default()))
}

/// Create a dashboard seeded from a JSON array of sample records.
#[uniffi::export]
pub fn new_dashboard_from_json(json: String) -> Result<Arc<SampleTrackerCore>, SampleTrackerError> {
    let records: Vec<Sample> = serde_json::from_str(&json)?;
    let dashboard = Dashboard::new(&DashboardConfig::default(), records);
    Ok(Arc::new(SampleTrackerCore::wrap(dashboard)))
}

/// Options for the status dropdown, "All" first.
#[uniffi::export]
pub fn status_filter_options() -> Vec<String> {
    std::iter::once(StatusFilter::All.to_string())
        .chain(SampleStatus::iter().map(|s| s.to_string()))
        .collect()
}

/// Options for the sample type dropdown.
#[uniffi::export]
pub fn sample_type_options() -> Vec<String> {
    SampleType::iter().map(|t| t.to_string()).collect()
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe dashboard wrapper for FFI.
#[derive(uniffi::Object)]
pub struct SampleTrackerCore {
    dashboard: Mutex<Dashboard>,
}

impl SampleTrackerCore {
    fn wrap(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Mutex::new(dashboard),
        }
    }
}

#[uniffi::export]
impl SampleTrackerCore {
    // =========================================================================
    // List Operations
    // =========================================================================

    /// Derive the current page.
    pub fn list_view(&self) -> Result<FfiListView, SampleTrackerError> {
        let dashboard = self.dashboard.lock()?;
        Ok(dashboard.view().into())
    }

    pub fn set_query(&self, query: String) -> Result<(), SampleTrackerError> {
        let mut dashboard = self.dashboard.lock()?;
        dashboard.set_query(query);
        Ok(())
    }

    /// Set the status dropdown ("All", "Pending", ...).
    pub fn set_status_filter(&self, filter: String) -> Result<(), SampleTrackerError> {
        let filter: StatusFilter = parse("status filter", &filter)?;
        let mut dashboard = self.dashboard.lock()?;
        dashboard.set_status_filter(filter);
        Ok(())
    }

    /// Set the sort column ("name" or "collectedOn").
    pub fn set_sort_key(&self, key: String) -> Result<(), SampleTrackerError> {
        let key: SortKey = parse("sort key", &key)?;
        let mut dashboard = self.dashboard.lock()?;
        dashboard.set_sort_key(key);
        Ok(())
    }

    /// Set the sort direction ("asc" or "desc").
    pub fn set_sort_order(&self, order: String) -> Result<(), SampleTrackerError> {
        let order: SortOrder = parse("sort order", &order)?;
        let mut dashboard = self.dashboard.lock()?;
        dashboard.set_sort_order(order);
        Ok(())
    }

    /// Flip the sort direction and return the new button label.
    pub fn toggle_sort_order(&self) -> Result<String, SampleTrackerError> {
        let mut dashboard = self.dashboard.lock()?;
        dashboard.toggle_sort_order();
        Ok(dashboard.options().sort_order.label().to_string())
    }

    pub fn go_to_page(&self, page: u32) -> Result<(), SampleTrackerError> {
        let mut dashboard = self.dashboard.lock()?;
        dashboard.go_to_page(page as usize);
        Ok(())
    }

    pub fn next_page(&self) -> Result<(), SampleTrackerError> {
        let mut dashboard = self.dashboard.lock()?;
        dashboard.next_page();
        Ok(())
    }

    pub fn prev_page(&self) -> Result<(), SampleTrackerError> {
        let mut dashboard = self.dashboard.lock()?;
        dashboard.prev_page();
        Ok(())
    }

    // =========================================================================
    // Form Operations
    // =========================================================================

    /// Open an empty "Add Sample" form.
    pub fn open_create_form(&self) -> Result<(), SampleTrackerError> {
        let mut dashboard = self.dashboard.lock()?;
        dashboard.open_create();
        Ok(())
    }

    /// Open the edit form for a record.
    pub fn open_edit_form(&self, id: String) -> Result<(), SampleTrackerError> {
        let mut dashboard = self.dashboard.lock()?;
        if dashboard.on_edit(&id) {
            Ok(())
        } else {
            Err(SampleTrackerError::NotFound(id))
        }
    }

    /// Snapshot of the open form, if any.
    pub fn current_form(&self) -> Result<Option<FfiSampleForm>, SampleTrackerError> {
        let dashboard = self.dashboard.lock()?;
        Ok(dashboard.form().map(FfiSampleForm::from))
    }

    /// Overwrite the open form's draft fields.
    pub fn update_form(&self, draft: FfiSampleDraft) -> Result<(), SampleTrackerError> {
        let sample_type: SampleType = parse("sample type", &draft.sample_type)?;
        let status: SampleStatus = parse("status", &draft.status)?;

        let mut dashboard = self.dashboard.lock()?;
        let form = dashboard
            .form_mut()
            .ok_or_else(|| SampleTrackerError::NotFound("no open form".into()))?;
        form.set_name(draft.name);
        form.set_type(sample_type);
        form.set_collected_on(draft.collected_on);
        form.set_status(status);
        Ok(())
    }

    /// Validate and save the open form.
    pub fn save_form(&self) -> Result<FfiSample, SampleTrackerError> {
        let mut dashboard = self.dashboard.lock()?;
        dashboard
            .on_save()?
            .map(FfiSample::from)
            .ok_or_else(|| SampleTrackerError::NotFound("no open form".into()))
    }

    /// Close the form without saving.
    pub fn cancel_form(&self) -> Result<(), SampleTrackerError> {
        let mut dashboard = self.dashboard.lock()?;
        dashboard.on_cancel();
        Ok(())
    }

    // =========================================================================
    // Row Actions
    // =========================================================================

    /// Delete a record. Returns false if it did not exist.
    pub fn delete_sample(&self, id: String) -> Result<bool, SampleTrackerError> {
        let mut dashboard = self.dashboard.lock()?;
        Ok(dashboard.on_delete(&id))
    }

    /// Change a record's status. Returns false if it did not exist.
    pub fn change_status(&self, id: String, status: String) -> Result<bool, SampleTrackerError> {
        let status: SampleStatus = parse("status", &status)?;
        let mut dashboard = self.dashboard.lock()?;
        Ok(dashboard.on_status_change(&id, status))
    }

    // =========================================================================
    // Theme
    // =========================================================================

    pub fn theme(&self) -> Result<String, SampleTrackerError> {
        let dashboard = self.dashboard.lock()?;
        Ok(dashboard.theme().to_string())
    }

    /// Flip the theme and return the new one.
    pub fn toggle_theme(&self) -> Result<String, SampleTrackerError> {
        let mut dashboard = self.dashboard.lock()?;
        Ok(dashboard.toggle_theme().to_string())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe sample record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSample {
    pub id: String,
    pub name: String,
    pub sample_type: String,
    pub collected_on: String,
    pub status: String,
}

impl From<Sample> for FfiSample {
    fn from(sample: Sample) -> Self {
        Self {
            id: sample.id,
            name: sample.name,
            sample_type: sample.sample_type.to_string(),
            collected_on: sample.collected_on.format(form::DATE_FORMAT).to_string(),
            status: sample.status.to_string(),
        }
    }
}

/// FFI-safe page controls.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPageControls {
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub pages: Vec<u32>,
    pub active_page: Option<u32>,
}

impl From<PageControls> for FfiPageControls {
    fn from(controls: PageControls) -> Self {
        Self {
            prev_enabled: controls.prev_enabled,
            next_enabled: controls.next_enabled,
            active_page: controls
                .pages
                .iter()
                .find(|p| p.active)
                .map(|p| p.number as u32),
            pages: controls.pages.iter().map(|p| p.number as u32).collect(),
        }
    }
}

/// FFI-safe list view.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiListView {
    pub rows: Vec<FfiSample>,
    pub total_matches: u32,
    pub total_pages: u32,
    pub current_page: u32,
    pub controls: FfiPageControls,
}

impl From<ListView> for FfiListView {
    fn from(view: ListView) -> Self {
        Self {
            total_matches: view.total_matches as u32,
            total_pages: view.total_pages as u32,
            current_page: view.current_page as u32,
            rows: view.rows.into_iter().map(FfiSample::from).collect(),
            controls: view.controls.into(),
        }
    }
}

/// FFI-safe snapshot of the open form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSampleForm {
    pub title: String,
    pub editing_id: Option<String>,
    pub name: String,
    pub sample_type: String,
    pub collected_on: String,
    pub status: String,
}

impl From<&SampleForm> for FfiSampleForm {
    fn from(form: &SampleForm) -> Self {
        Self {
            title: form.title().to_string(),
            editing_id: form.editing_id().map(str::to_string),
            name: form.name().to_string(),
            sample_type: form.sample_type().to_string(),
            collected_on: form.collected_on().to_string(),
            status: form.status().to_string(),
        }
    }
}

/// FFI-safe draft values entered by the user.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSampleDraft {
    pub name: String,
    pub sample_type: String,
    pub collected_on: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"[
        {"id":"SMP1001","name":"Sample A","type":"Blood","collectedOn":"2025-05-25","status":"Pending"},
        {"id":"SMP1002","name":"Sample B","type":"Urine","collectedOn":"2025-05-24","status":"Processing"}
    ]"#;

    #[test]
    fn test_ffi_list_and_filter() {
        let core = new_dashboard_from_json(FIXTURE.into()).unwrap();
        let view = core.list_view().unwrap();
        assert_eq!(view.total_matches, 2);
        assert_eq!(view.controls.active_page, Some(1));

        core.set_status_filter("Pending".into()).unwrap();
        let view = core.list_view().unwrap();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].id, "SMP1001");
    }

    #[test]
    fn test_ffi_rejects_unknown_enum_strings() {
        let core = new_dashboard();
        assert!(matches!(
            core.set_status_filter("Lost".into()),
            Err(SampleTrackerError::InvalidInput(_))
        ));
        assert!(matches!(
            core.set_sort_key("weight".into()),
            Err(SampleTrackerError::InvalidInput(_))
        ));
        assert!(matches!(
            core.set_sort_order("sideways".into()),
            Err(SampleTrackerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_ffi_set_sort_order() {
        let core = new_dashboard_from_json(FIXTURE.into()).unwrap();
        core.set_sort_key("collectedOn".into()).unwrap();

        core.set_sort_order("asc".into()).unwrap();
        let view = core.list_view().unwrap();
        assert_eq!(view.rows[0].id, "SMP1002");

        core.set_sort_order("desc".into()).unwrap();
        let view = core.list_view().unwrap();
        assert_eq!(view.rows[0].id, "SMP1001");
        assert_eq!(core.toggle_sort_order().unwrap(), "▲ Asc");
    }

    #[test]
    fn test_ffi_form_round() {
        let core = new_dashboard_from_json(FIXTURE.into()).unwrap();
        core.open_create_form().unwrap();
        assert_eq!(core.current_form().unwrap().unwrap().title, "Add Sample");

        core.update_form(FfiSampleDraft {
            name: "Sample C".into(),
            sample_type: "Tissue".into(),
            collected_on: "2025-05-20".into(),
            status: "Completed".into(),
        })
        .unwrap();
        let saved = core.save_form().unwrap();
        assert_eq!(saved.id, "SMP1003");
        assert_eq!(saved.collected_on, "2025-05-20");
        assert!(core.current_form().unwrap().is_none());
        assert_eq!(core.list_view().unwrap().total_matches, 3);
    }

    #[test]
    fn test_ffi_validation_error() {
        let core = new_dashboard();
        core.open_create_form().unwrap();
        assert!(matches!(
            core.save_form(),
            Err(SampleTrackerError::Validation(_))
        ));
        assert!(core.current_form().unwrap().is_some());
    }

    #[test]
    fn test_ffi_edit_unknown() {
        let core = new_dashboard();
        assert!(matches!(
            core.open_edit_form("SMP1".into()),
            Err(SampleTrackerError::NotFound(_))
        ));
    }

    #[test]
    fn test_ffi_row_actions_and_theme() {
        let core = new_dashboard_from_json(FIXTURE.into()).unwrap();
        assert!(core.change_status("SMP1001".into(), "Completed".into()).unwrap());
        assert!(core.delete_sample("SMP1002".into()).unwrap());
        assert!(!core.delete_sample("SMP1002".into()).unwrap());

        assert_eq!(core.theme().unwrap(), "light");
        assert_eq!(core.toggle_theme().unwrap(), "dark");
        assert_eq!(core.toggle_sort_order().unwrap(), "▼ Desc");
    }

    #[test]
    fn test_dropdown_options() {
        assert_eq!(
            status_filter_options(),
            ["All", "Pending", "Processing", "Completed"]
        );
        assert_eq!(sample_type_options(), ["Blood", "Urine", "Tissue"]);
    }
}
