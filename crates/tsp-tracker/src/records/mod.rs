//! Quarterly performance entry: submission validation, facility-quarter
//! records and their storage seam.

pub mod domain;
mod memory;
mod quarter;
pub mod repository;
pub mod router;
pub mod service;
mod validation;

#[cfg(test)]
mod tests;

pub use domain::{QuarterlyRecord, QuarterlyRecordView, QuarterlySubmission, RecordKey};
pub use memory::InMemoryQuarterlyRecordRepository;
pub use quarter::{Quarter, QuarterParseError};
pub use repository::{FacilityRepository, QuarterlyRecordRepository, RepositoryError};
pub use router::quarterly_record_router;
pub use service::{EntryServiceError, QuarterlyEntryService, RecordPreview, SavedRecord};
pub use validation::{validate_mentors, validate_readings, RecordViolation, PERCENT_RANGE};
