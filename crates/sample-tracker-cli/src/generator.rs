//! Deterministic mock records for demos and paging.

use chrono::{Duration, NaiveDate};

use sample_tracker_core::models::{DEFAULT_ID_BASE, SAMPLE_ID_PREFIX};
use sample_tracker_core::{Sample, SampleStatus, SampleType};

const TYPES: [SampleType; 3] = [SampleType::Blood, SampleType::Urine, SampleType::Tissue];

const STATUSES: [SampleStatus; 3] = [
    SampleStatus::Pending,
    SampleStatus::Processing,
    SampleStatus::Completed,
];

/// Mock generator for testing and demo data without a fixture file.
pub struct MockGenerator;

impl MockGenerator {
    /// Generate `count` records with ids from `SMP101`, one day apart going
    /// back from `newest`. Types cycle every record, statuses every two.
    pub fn generate(count: usize, newest: NaiveDate) -> Vec<Sample> {
        let mut records: Vec<Sample> = Vec::with_capacity(count);
        for i in 0..count {
            let id = format!("{}{}", SAMPLE_ID_PREFIX, DEFAULT_ID_BASE + 1 + i as u128);
            let sample_type = TYPES[i % TYPES.len()];
            let status = STATUSES[(i / 2) % STATUSES.len()];
            let collected_on = newest - Duration::days(i as i64);

            records.push(
                Sample::new(id, format!("{} #{}", sample_type, i + 1), sample_type, collected_on)
                    .with_status(status),
            );
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn newest() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_generate_ids_and_dates() {
        let records = MockGenerator::generate(4, newest());
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["SMP101", "SMP102", "SMP103", "SMP104"]);
        assert_eq!(records[0].collected_on, newest());
        assert_eq!(records[3].collected_on, newest() - Duration::days(3));
    }

    #[test]
    fn test_generate_cycles_types_and_statuses() {
        let records = MockGenerator::generate(6, newest());
        assert_eq!(records[0].sample_type, SampleType::Blood);
        assert_eq!(records[3].sample_type, SampleType::Blood);
        assert_eq!(records[1].status, SampleStatus::Pending);
        assert_eq!(records[2].status, SampleStatus::Processing);
        assert_eq!(records[5].status, SampleStatus::Completed);
        assert_eq!(records[2].name, "Tissue #3");
    }

    #[test]
    fn test_generate_large_set_matches_store_ids() {
        let records = MockGenerator::generate(20_000, newest());
        assert_eq!(records[19_999].id, "SMP20100");

        let next = sample_tracker_core::models::next_sample_id(
            records.iter().map(|r| r.id.as_str()),
        );
        assert_eq!(next, "SMP20101");
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(
            MockGenerator::generate(30, newest()),
            MockGenerator::generate(30, newest())
        );
        assert!(MockGenerator::generate(0, newest()).is_empty());
    }
}
