use super::domain::{QuarterlyRecord, RecordKey};
use super::quarter::Quarter;
use crate::directory::{Facility, FacilityDirectory, FacilityFilter, FacilityId};

/// Storage for saved facility-quarter records.
///
/// `upsert` is last-writer-wins on [`RecordKey`] and hands back whatever it
/// replaced.
pub trait QuarterlyRecordRepository: Send + Sync {
    fn upsert(&self, record: QuarterlyRecord) -> Result<Option<QuarterlyRecord>, RepositoryError>;
    fn fetch(&self, key: &RecordKey) -> Result<Option<QuarterlyRecord>, RepositoryError>;
    /// Records for one facility, oldest quarter first.
    fn for_facility(&self, facility_id: FacilityId)
        -> Result<Vec<QuarterlyRecord>, RepositoryError>;
    /// Records for one quarter, ordered by facility id.
    fn for_quarter(&self, quarter: Quarter) -> Result<Vec<QuarterlyRecord>, RepositoryError>;
}

/// Lookup seam over the facility directory.
pub trait FacilityRepository: Send + Sync {
    fn fetch(&self, facility_id: FacilityId) -> Result<Option<Facility>, RepositoryError>;
    fn list(&self, filter: &FacilityFilter) -> Result<Vec<Facility>, RepositoryError>;
}

impl FacilityRepository for FacilityDirectory {
    fn fetch(&self, facility_id: FacilityId) -> Result<Option<Facility>, RepositoryError> {
        Ok(self.get(facility_id).cloned())
    }

    fn list(&self, filter: &FacilityFilter) -> Result<Vec<Facility>, RepositoryError> {
        Ok(self.facilities(filter).into_iter().cloned().collect())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
