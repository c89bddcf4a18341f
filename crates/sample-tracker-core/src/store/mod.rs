//! In-memory record store for samples.

use tracing::{debug, info};

use crate::models::{next_sample_id, FieldUpdate, Sample, SampleStatus};

/// Outcome of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new record was appended
    Inserted,
    /// An existing record with the same id was replaced
    Replaced,
}

/// Ordered in-memory collection of samples, unique by id.
///
/// Insertion order is preserved; it is the tie-breaker for every sort in
/// the list pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Sample>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an initial record list.
    ///
    /// Duplicate ids collapse with upsert semantics: the last record wins and
    /// keeps the position of the first.
    pub fn from_records(records: impl IntoIterator<Item = Sample>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.upsert(record);
        }
        debug!(count = store.len(), "record store seeded");
        store
    }

    /// Replace the record with the same id, or append it.
    pub fn upsert(&mut self, record: Sample) -> Upsert {
        match self.position(&record.id) {
            Some(idx) => {
                info!(id = %record.id, "replacing sample");
                self.records[idx] = record;
                Upsert::Replaced
            }
            None => {
                info!(id = %record.id, "inserting sample");
                self.records.push(record);
                Upsert::Inserted
            }
        }
    }

    /// Remove the record with this id. Returns `false` if it was absent.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.records.remove(idx);
                info!(id, "deleted sample");
                true
            }
            None => {
                debug!(id, "delete ignored, no such sample");
                false
            }
        }
    }

    /// Merge a single-field update into the record with this id.
    ///
    /// Returns `false` (and changes nothing) if the id is unknown.
    pub fn update_field(&mut self, id: &str, update: FieldUpdate) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                info!(id, ?update, "updating sample field");
                record.apply(update);
                true
            }
            None => {
                debug!(id, "field update ignored, no such sample");
                false
            }
        }
    }

    /// Change only the status of a record.
    pub fn update_status(&mut self, id: &str, status: SampleStatus) -> bool {
        self.update_field(id, FieldUpdate::Status(status))
    }

    /// Get a record by id.
    pub fn get(&self, id: &str) -> Option<&Sample> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Check whether a record with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// All records in store order.
    pub fn records(&self) -> &[Sample] {
        &self.records
    }

    /// Iterate over ids in store order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    /// Id a newly created record would receive.
    pub fn next_id(&self) -> String {
        next_sample_id(self.ids())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}
