use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::directory::{Facility, FacilityDirectory, FacilityFilter, FacilityId};
use crate::performance::ReadingInput;
use crate::program::{MentorId, Pathway};
use crate::records::{
    quarterly_record_router, FacilityRepository, InMemoryQuarterlyRecordRepository, Quarter,
    QuarterlyEntryService, QuarterlyRecord, QuarterlyRecordRepository, QuarterlySubmission,
    RecordKey, RepositoryError,
};

/// PKM Kramat Jati in the standard directory.
pub(super) const KRAMAT_JATI: FacilityId = FacilityId(50);

pub(super) fn quarter(raw: &str) -> Quarter {
    raw.parse().expect("valid quarter")
}

pub(super) fn reading(value: f64) -> ReadingInput {
    ReadingInput {
        value: Some(value),
        is_na: false,
    }
}

pub(super) fn not_applicable() -> ReadingInput {
    ReadingInput {
        value: None,
        is_na: true,
    }
}

pub(super) fn readings(entries: &[(&str, ReadingInput)]) -> BTreeMap<String, ReadingInput> {
    entries
        .iter()
        .map(|(code, input)| (code.to_string(), *input))
        .collect()
}

/// Kramat Jati's first quarter of 2025: three indicators at target.
pub(super) fn submission() -> QuarterlySubmission {
    QuarterlySubmission {
        facility_id: KRAMAT_JATI,
        quarter: quarter("2025-Q1"),
        readings: readings(&[
            ("1.1", reading(92.0)),
            ("2.1", reading(65.0)),
            ("3.1", reading(78.0)),
            ("4.1", reading(87.0)),
            ("5.1", reading(58.0)),
            ("6.1", reading(82.0)),
        ]),
        patients_on_treatment: 342,
        pathway: Some(Pathway::Rationalization),
        mentors: vec![MentorId("dewi".to_string())],
        created_by: Some("dewi".to_string()),
    }
}

pub(super) fn strong_submission() -> QuarterlySubmission {
    let mut submission = submission();
    submission.readings = readings(&[
        ("1.1", reading(97.0)),
        ("2.1", reading(95.0)),
        ("3.1", reading(92.0)),
        ("4.1", reading(96.0)),
        ("5.1", not_applicable()),
        ("6.1", reading(60.0)),
    ]);
    submission.pathway = Some(Pathway::TransitionReady);
    submission
}

pub(super) type MemoryService =
    QuarterlyEntryService<InMemoryQuarterlyRecordRepository, FacilityDirectory>;

pub(super) fn build_service() -> (MemoryService, Arc<InMemoryQuarterlyRecordRepository>) {
    let records = Arc::new(InMemoryQuarterlyRecordRepository::new());
    let service =
        QuarterlyEntryService::new(records.clone(), Arc::new(FacilityDirectory::standard()));
    (service, records)
}

pub(super) fn router_with_service(service: MemoryService) -> axum::Router {
    quarterly_record_router(Arc::new(service))
}

pub(super) struct UnavailableRepository;

impl QuarterlyRecordRepository for UnavailableRepository {
    fn upsert(&self, _record: QuarterlyRecord) -> Result<Option<QuarterlyRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _key: &RecordKey) -> Result<Option<QuarterlyRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_facility(
        &self,
        _facility_id: FacilityId,
    ) -> Result<Vec<QuarterlyRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_quarter(&self, _quarter: Quarter) -> Result<Vec<QuarterlyRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct OfflineDirectory;

impl FacilityRepository for OfflineDirectory {
    fn fetch(&self, _facility_id: FacilityId) -> Result<Option<Facility>, RepositoryError> {
        Err(RepositoryError::Unavailable("directory offline".to_string()))
    }

    fn list(&self, _filter: &FacilityFilter) -> Result<Vec<Facility>, RepositoryError> {
        Err(RepositoryError::Unavailable("directory offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 16)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
