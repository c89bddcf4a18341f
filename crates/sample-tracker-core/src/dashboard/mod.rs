//! Top-level dashboard controller.
//!
//! Owns all application state (records, list controls, theme and the form
//! modal) and exposes the row-action and form boundaries to the rendering
//! layer. Every mutating call leaves the state ready for a fresh
//! [`Dashboard::view`].

mod config;
mod theme;

pub use config::*;
pub use theme::*;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::form::{SampleForm, ValidationResult};
use crate::models::{Sample, SampleStatus};
use crate::store::RecordStore;
use crate::view::{
    clamp_page, derive_view, matching_samples, page_count, ListOptions, ListView, SortKey,
    SortOrder, StatusFilter,
};

/// The add/edit modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Open(SampleForm),
}

/// Dashboard application state.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: RecordStore,
    options: ListOptions,
    theme: Theme,
    modal: Modal,
}

impl Dashboard {
    /// Create a dashboard over the initial record set.
    pub fn new(config: &DashboardConfig, records: impl IntoIterator<Item = Sample>) -> Self {
        let store = RecordStore::from_records(records);
        info!(records = store.len(), theme = %config.theme, "dashboard started");
        Self {
            store,
            options: ListOptions {
                sort_key: config.sort_key,
                sort_order: config.sort_order,
                ..ListOptions::default()
            },
            theme: config.theme,
            modal: Modal::Closed,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// Derive the current page.
    pub fn view(&self) -> ListView {
        derive_view(self.store.records(), &self.options)
    }

    // =========================================================================
    // List controls
    // =========================================================================

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.options.query = query.into();
        self.reset_page();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.options.status_filter = filter;
        self.reset_page();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.options.sort_key = key;
        self.reset_page();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.options.sort_order = order;
        self.reset_page();
    }

    pub fn toggle_sort_order(&mut self) {
        self.set_sort_order(self.options.sort_order.toggled());
    }

    /// Jump to a page, clamped to the pages that exist.
    pub fn go_to_page(&mut self, page: usize) {
        self.options.page = clamp_page(page, self.total_pages());
    }

    /// Advance one page; no-op on the last page.
    pub fn next_page(&mut self) {
        if self.options.page < self.total_pages() {
            self.options.page += 1;
        }
    }

    /// Go back one page; no-op on the first page.
    pub fn prev_page(&mut self) {
        if self.options.page > 1 {
            self.options.page -= 1;
        }
    }

    fn total_pages(&self) -> usize {
        page_count(matching_samples(self.store.records(), &self.options).len())
    }

    fn reset_page(&mut self) {
        self.options.page = 1;
    }

    // =========================================================================
    // Form boundary
    // =========================================================================

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// The open form, if any.
    pub fn form(&self) -> Option<&SampleForm> {
        match &self.modal {
            Modal::Open(form) => Some(form),
            Modal::Closed => None,
        }
    }

    /// Mutable access to the open form's draft.
    pub fn form_mut(&mut self) -> Option<&mut SampleForm> {
        match &mut self.modal {
            Modal::Open(form) => Some(form),
            Modal::Closed => None,
        }
    }

    /// Open an empty "Add Sample" form.
    pub fn open_create(&mut self) {
        self.modal = Modal::Open(SampleForm::create());
    }

    /// Open the form pre-filled with a record. Unknown ids are ignored.
    pub fn on_edit(&mut self, id: &str) -> bool {
        match self.store.get(id) {
            Some(sample) => {
                self.modal = Modal::Open(SampleForm::edit(sample));
                true
            }
            None => {
                debug!(id, "edit ignored, no such sample");
                false
            }
        }
    }

    /// Submit the open form against today's local date.
    pub fn on_save(&mut self) -> ValidationResult<Option<Sample>> {
        self.on_save_at(Local::now().date_naive())
    }

    /// Submit the open form against `today`.
    ///
    /// On success the record is upserted, the modal closes and the page
    /// resets; on failure nothing changes and the modal stays open. Returns
    /// `Ok(None)` when no form is open.
    pub fn on_save_at(&mut self, today: NaiveDate) -> ValidationResult<Option<Sample>> {
        let Some(form) = self.form() else {
            return Ok(None);
        };
        let sample = form.submit(self.store.ids(), today)?;

        self.store.upsert(sample.clone());
        self.modal = Modal::Closed;
        self.reset_page();
        Ok(Some(sample))
    }

    /// Close the form, discarding the draft.
    pub fn on_cancel(&mut self) {
        self.modal = Modal::Closed;
    }

    // =========================================================================
    // Row actions
    // =========================================================================

    /// Delete a record, closing the form if it was editing that record.
    pub fn on_delete(&mut self, id: &str) -> bool {
        if !self.store.delete(id) {
            return false;
        }
        if self.form().and_then(SampleForm::editing_id) == Some(id) {
            debug!(id, "closing form for deleted sample");
            self.modal = Modal::Closed;
        }
        self.reset_page();
        true
    }

    /// Change a record's status in place.
    pub fn on_status_change(&mut self, id: &str, status: SampleStatus) -> bool {
        let changed = self.store.update_status(id, status);
        if changed {
            self.reset_page();
        }
        changed
    }

    // =========================================================================
    // Theme
    // =========================================================================

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(&DashboardConfig::default(), Vec::<Sample>::new())
    }
}
