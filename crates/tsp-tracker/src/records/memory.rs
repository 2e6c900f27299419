use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{QuarterlyRecord, RecordKey};
use super::quarter::Quarter;
use super::repository::{QuarterlyRecordRepository, RepositoryError};
use crate::directory::FacilityId;

/// Process-local record store used by the API binary and tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryQuarterlyRecordRepository {
    records: Arc<Mutex<BTreeMap<RecordKey, QuarterlyRecord>>>,
}

impl InMemoryQuarterlyRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = QuarterlyRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.key(), record))
            .collect();
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().map(|records| records.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<RecordKey, QuarterlyRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("record store lock poisoned".to_string()))
    }
}

impl QuarterlyRecordRepository for InMemoryQuarterlyRecordRepository {
    fn upsert(&self, record: QuarterlyRecord) -> Result<Option<QuarterlyRecord>, RepositoryError> {
        let mut records = self.lock()?;
        Ok(records.insert(record.key(), record))
    }

    fn fetch(&self, key: &RecordKey) -> Result<Option<QuarterlyRecord>, RepositoryError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn for_facility(
        &self,
        facility_id: FacilityId,
    ) -> Result<Vec<QuarterlyRecord>, RepositoryError> {
        // Keys order by facility first, then quarter.
        Ok(self
            .lock()?
            .values()
            .filter(|record| record.facility_id == facility_id)
            .cloned()
            .collect())
    }

    fn for_quarter(&self, quarter: Quarter) -> Result<Vec<QuarterlyRecord>, RepositoryError> {
        Ok(self
            .lock()?
            .values()
            .filter(|record| record.quarter == quarter)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::{aggregate, ReadingSet};
    use crate::program::Pathway;
    use chrono::Utc;

    fn record(facility: u32, quarter: &str, pathway: Pathway) -> QuarterlyRecord {
        let readings = ReadingSet::new();
        QuarterlyRecord {
            facility_id: FacilityId(facility),
            quarter: quarter.parse().expect("valid quarter"),
            summary: aggregate(&readings),
            readings,
            patients_on_treatment: 0,
            pathway,
            mentors: Vec::new(),
            created_by: None,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn upsert_is_last_writer_wins() {
        let repository = InMemoryQuarterlyRecordRepository::new();
        let first = repository
            .upsert(record(71, "2025-Q1", Pathway::Prioritization))
            .expect("upsert succeeds");
        assert!(first.is_none());

        let replaced = repository
            .upsert(record(71, "2025-Q1", Pathway::Rationalization))
            .expect("upsert succeeds")
            .expect("previous record returned");
        assert_eq!(replaced.pathway, Pathway::Prioritization);
        assert_eq!(repository.len(), 1);

        let key = RecordKey {
            facility_id: FacilityId(71),
            quarter: "2025-Q1".parse().expect("valid quarter"),
        };
        let stored = repository
            .fetch(&key)
            .expect("fetch succeeds")
            .expect("record present");
        assert_eq!(stored.pathway, Pathway::Rationalization);
    }

    #[test]
    fn listings_are_ordered() {
        let repository = InMemoryQuarterlyRecordRepository::with_records([
            record(71, "2025-Q1", Pathway::Rationalization),
            record(71, "2024-Q3", Pathway::Prioritization),
            record(2, "2025-Q1", Pathway::Graduation),
        ]);

        let history: Vec<String> = repository
            .for_facility(FacilityId(71))
            .expect("listing succeeds")
            .iter()
            .map(|record| record.quarter.to_string())
            .collect();
        assert_eq!(history, vec!["2024-Q3", "2025-Q1"]);

        let quarter: Vec<u32> = repository
            .for_quarter("2025-Q1".parse().expect("valid quarter"))
            .expect("listing succeeds")
            .iter()
            .map(|record| record.facility_id.0)
            .collect();
        assert_eq!(quarter, vec![2, 71]);
    }
}
