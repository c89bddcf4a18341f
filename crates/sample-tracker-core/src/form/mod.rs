//! Add / edit form for sample records.
//!
//! The form holds a mutable draft. Submitting validates it and produces a
//! [`Sample`] ready for the store; cancelling just drops the draft.

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::warn;

use crate::models::{next_sample_id, Sample, SampleStatus, SampleType};

/// Date format of the `collectedOn` input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation errors raised on submit. None of them mutate anything.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields ({0} is empty).")]
    MissingField(&'static str),

    #[error("Invalid date for 'Collected On': {0}")]
    InvalidDate(String),

    #[error("Future dates are not allowed for 'Collected On' ({date} is after {today}).")]
    FutureDate { date: NaiveDate, today: NaiveDate },
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Editable draft behind the sample modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleForm {
    /// Id of the record being edited; `None` when creating
    id: Option<String>,
    name: String,
    sample_type: SampleType,
    /// Raw text of the date input
    collected_on: String,
    status: SampleStatus,
}

impl SampleForm {
    /// Empty draft for "Add Sample".
    pub fn create() -> Self {
        Self {
            id: None,
            name: String::new(),
            sample_type: SampleType::Blood,
            collected_on: String::new(),
            status: SampleStatus::Pending,
        }
    }

    /// Draft pre-filled from an existing record.
    pub fn edit(sample: &Sample) -> Self {
        Self {
            id: Some(sample.id.clone()),
            name: sample.name.clone(),
            sample_type: sample.sample_type,
            collected_on: sample.collected_on.format(DATE_FORMAT).to_string(),
            status: sample.status,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Sample"
        } else {
            "Add Sample"
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Id of the record under edit.
    pub fn editing_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sample_type(&self) -> SampleType {
        self.sample_type
    }

    pub fn collected_on(&self) -> &str {
        &self.collected_on
    }

    pub fn status(&self) -> SampleStatus {
        self.status
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_type(&mut self, sample_type: SampleType) {
        self.sample_type = sample_type;
    }

    /// Set the raw date text; parsed on submit.
    pub fn set_collected_on(&mut self, collected_on: impl Into<String>) {
        self.collected_on = collected_on.into();
    }

    pub fn set_status(&mut self, status: SampleStatus) {
        self.status = status;
    }

    /// Latest date the date picker should offer.
    pub fn max_date(today: NaiveDate) -> String {
        today.format(DATE_FORMAT).to_string()
    }

    /// Validate against `today` and build the record.
    ///
    /// A new id is generated from `existing_ids` when creating.
    pub fn submit<'a, I>(&self, existing_ids: I, today: NaiveDate) -> ValidationResult<Sample>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(self.reject(ValidationError::MissingField("name")));
        }
        let date_text = self.collected_on.trim();
        if date_text.is_empty() {
            return Err(self.reject(ValidationError::MissingField("collectedOn")));
        }

        let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT)
            .map_err(|_| self.reject(ValidationError::InvalidDate(date_text.to_string())))?;
        if date > today {
            return Err(self.reject(ValidationError::FutureDate { date, today }));
        }

        let id = match &self.id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => next_sample_id(existing_ids),
        };

        Ok(Sample {
            id,
            name: name.to_string(),
            sample_type: self.sample_type,
            collected_on: date,
            status: self.status,
        })
    }

    /// [`submit`](Self::submit) against the local calendar date.
    pub fn submit_now<'a, I>(&self, existing_ids: I) -> ValidationResult<Sample>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.submit(existing_ids, Local::now().date_naive())
    }

    fn reject(&self, err: ValidationError) -> ValidationError {
        warn!(id = ?self.id, error = %err, "sample form rejected");
        err
    }
}

impl Default for SampleForm {
    fn default() -> Self {
        Self::create()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn filled_form() -> SampleForm {
        let mut form = SampleForm::create();
        form.set_name("  Sample C  ");
        form.set_type(SampleType::Tissue);
        form.set_collected_on("2025-05-30");
        form
    }

    #[test]
    fn test_create_defaults() {
        let form = SampleForm::create();
        assert_eq!(form.title(), "Add Sample");
        assert_eq!(form.sample_type(), SampleType::Blood);
        assert_eq!(form.status(), SampleStatus::Pending);
        assert!(form.editing_id().is_none());
    }

    #[test]
    fn test_submit_generates_id_and_trims() {
        let form = filled_form();
        let sample = form.submit(["SMP1001", "SMP1002"], today()).unwrap();
        assert_eq!(sample.id, "SMP1003");
        assert_eq!(sample.name, "Sample C");
        assert_eq!(sample.sample_type, SampleType::Tissue);
        assert_eq!(sample.collected_on, NaiveDate::from_ymd_opt(2025, 5, 30).unwrap());
    }

    #[test]
    fn test_submit_first_id() {
        let sample = filled_form().submit(std::iter::empty::<&str>(), today()).unwrap();
        assert_eq!(sample.id, "SMP101");
    }

    #[test]
    fn test_edit_keeps_id() {
        let existing = Sample::new("SMP1001", "Sample A", SampleType::Blood, today());
        let mut form = SampleForm::edit(&existing);
        assert_eq!(form.title(), "Edit Sample");
        assert_eq!(form.collected_on(), "2025-06-01");

        form.set_status(SampleStatus::Completed);
        let sample = form.submit(["SMP1001"], today()).unwrap();
        assert_eq!(sample.id, "SMP1001");
        assert_eq!(sample.status, SampleStatus::Completed);
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut form = filled_form();
        form.set_name("   ");
        assert_eq!(
            form.submit(std::iter::empty::<&str>(), today()),
            Err(ValidationError::MissingField("name"))
        );
    }

    #[test]
    fn test_missing_date_rejected() {
        let mut form = filled_form();
        form.set_collected_on("");
        assert_eq!(
            form.submit(std::iter::empty::<&str>(), today()),
            Err(ValidationError::MissingField("collectedOn"))
        );
    }

    #[test]
    fn test_unparseable_date_rejected() {
        let mut form = filled_form();
        form.set_collected_on("25/05/2025");
        assert!(matches!(
            form.submit(std::iter::empty::<&str>(), today()),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_future_date_rejected() {
        let tomorrow = today() + Duration::days(1);
        let mut form = filled_form();
        form.set_collected_on(SampleForm::max_date(tomorrow));
        assert_eq!(
            form.submit(std::iter::empty::<&str>(), today()),
            Err(ValidationError::FutureDate {
                date: tomorrow,
                today: today()
            })
        );
    }

    #[test]
    fn test_today_accepted() {
        let mut form = filled_form();
        form.set_collected_on(SampleForm::max_date(today()));
        assert!(form.submit(std::iter::empty::<&str>(), today()).is_ok());
    }
}
