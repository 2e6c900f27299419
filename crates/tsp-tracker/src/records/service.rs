use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::{QuarterlyRecord, QuarterlySubmission, RecordKey};
use super::quarter::Quarter;
use super::repository::{FacilityRepository, QuarterlyRecordRepository, RepositoryError};
use super::validation::{require_pathway, validate_mentors, validate_readings, RecordViolation};
use crate::directory::{Facility, FacilityId};
use crate::performance::{
    aggregate, indicator_views, reading_set_lossy, IndicatorStatusView, PerformanceSummary,
    ReadingInput,
};
use crate::program::{mentor_roster, Mentor};

/// Service composing submission validation, aggregation and record storage.
pub struct QuarterlyEntryService<R, F> {
    records: Arc<R>,
    facilities: Arc<F>,
    roster: Vec<Mentor>,
}

/// Live feedback for a form that has not been saved.
#[derive(Debug, Clone, Serialize)]
pub struct RecordPreview {
    pub summary: PerformanceSummary,
    pub hint: &'static str,
    pub indicators: Vec<IndicatorStatusView>,
}

#[derive(Debug, Clone)]
pub struct SavedRecord {
    pub record: QuarterlyRecord,
    pub previous: Option<QuarterlyRecord>,
}

impl SavedRecord {
    pub fn replaced_existing(&self) -> bool {
        self.previous.is_some()
    }
}

impl<R, F> QuarterlyEntryService<R, F>
where
    R: QuarterlyRecordRepository + 'static,
    F: FacilityRepository + 'static,
{
    pub fn new(records: Arc<R>, facilities: Arc<F>) -> Self {
        Self {
            records,
            facilities,
            roster: mentor_roster(),
        }
    }

    /// Recompute the summary for in-progress readings. Unknown codes are
    /// ignored, each indicator counts once and a value flagged N/A counts as N/A.
    pub fn preview(&self, readings: &BTreeMap<String, ReadingInput>) -> RecordPreview {
        let readings = reading_set_lossy(readings);
        let summary = aggregate(&readings);

        RecordPreview {
            summary,
            hint: summary.hint.message(),
            indicators: indicator_views(&readings),
        }
    }

    /// Validate and store a submission, replacing any record for the same
    /// facility and quarter.
    pub fn submit(
        &self,
        submission: QuarterlySubmission,
    ) -> Result<SavedRecord, EntryServiceError> {
        let facility = self.facility(submission.facility_id)?;
        let checked = require_pathway(&submission).and_then(|pathway| {
            validate_mentors(&submission.mentors, &self.roster)?;
            validate_readings(&submission.readings).map(|readings| (pathway, readings))
        });
        let (pathway, readings) = match checked {
            Ok(valid) => valid,
            Err(violation) => {
                warn!(
                    facility_id = %submission.facility_id,
                    quarter = %submission.quarter,
                    %violation,
                    "quarterly submission rejected"
                );
                return Err(violation.into());
            }
        };

        let summary = aggregate(&readings);
        let record = QuarterlyRecord {
            facility_id: facility.id,
            quarter: submission.quarter,
            readings,
            patients_on_treatment: submission.patients_on_treatment,
            pathway,
            mentors: submission.mentors,
            created_by: submission.created_by,
            summary,
            recorded_at: Utc::now(),
        };

        let previous = self.records.upsert(record.clone())?;
        if previous.is_some() {
            info!(
                facility_id = %record.facility_id,
                quarter = %record.quarter,
                at_target = summary.at_target,
                "quarterly record overwritten"
            );
        } else {
            info!(
                facility_id = %record.facility_id,
                quarter = %record.quarter,
                at_target = summary.at_target,
                "quarterly record saved"
            );
        }

        Ok(SavedRecord { record, previous })
    }

    pub fn get(
        &self,
        facility_id: FacilityId,
        quarter: Quarter,
    ) -> Result<QuarterlyRecord, EntryServiceError> {
        let key = RecordKey {
            facility_id,
            quarter,
        };
        let record = self.records.fetch(&key)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Saved record for the quarter, if any. Missing records are not an error.
    pub fn find(
        &self,
        facility_id: FacilityId,
        quarter: Quarter,
    ) -> Result<Option<QuarterlyRecord>, EntryServiceError> {
        let key = RecordKey {
            facility_id,
            quarter,
        };
        Ok(self.records.fetch(&key)?)
    }

    /// Every saved quarter for a known facility, oldest first.
    pub fn history(
        &self,
        facility_id: FacilityId,
    ) -> Result<Vec<QuarterlyRecord>, EntryServiceError> {
        self.facility(facility_id)?;
        let records = self.records.for_facility(facility_id)?;
        debug!(facility_id = %facility_id, count = records.len(), "loaded record history");
        Ok(records)
    }

    pub fn for_quarter(&self, quarter: Quarter) -> Result<Vec<QuarterlyRecord>, EntryServiceError> {
        Ok(self.records.for_quarter(quarter)?)
    }

    pub fn facility(&self, facility_id: FacilityId) -> Result<Facility, EntryServiceError> {
        self.facilities
            .fetch(facility_id)?
            .ok_or_else(|| RecordViolation::UnknownFacility(facility_id).into())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EntryServiceError {
    #[error(transparent)]
    Violation(#[from] RecordViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
