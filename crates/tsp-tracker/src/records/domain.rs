use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::quarter::Quarter;
use crate::directory::{Facility, FacilityId, FacilityType};
use crate::performance::{
    indicator_views, IndicatorStatusView, PerformanceSummary, ReadingInput, ReadingSet,
};
use crate::program::{MentorId, Pathway, PathwayView};

/// Payload captured by the quarterly entry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlySubmission {
    pub facility_id: FacilityId,
    pub quarter: Quarter,
    #[serde(default)]
    pub readings: BTreeMap<String, ReadingInput>,
    #[serde(default)]
    pub patients_on_treatment: u32,
    #[serde(default)]
    pub pathway: Option<Pathway>,
    #[serde(default)]
    pub mentors: Vec<MentorId>,
    #[serde(default)]
    pub created_by: Option<String>,
}

/// Storage key; one record per facility and quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    pub facility_id: FacilityId,
    pub quarter: Quarter,
}

/// Validated facility-quarter performance with its derived summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyRecord {
    pub facility_id: FacilityId,
    pub quarter: Quarter,
    pub readings: ReadingSet,
    pub patients_on_treatment: u32,
    pub pathway: Pathway,
    pub mentors: Vec<MentorId>,
    pub created_by: Option<String>,
    pub summary: PerformanceSummary,
    pub recorded_at: DateTime<Utc>,
}

impl QuarterlyRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey {
            facility_id: self.facility_id,
            quarter: self.quarter,
        }
    }

    pub fn view(&self, facility: Option<&Facility>) -> QuarterlyRecordView {
        QuarterlyRecordView {
            facility_id: self.facility_id,
            facility_name: facility.map(|facility| facility.name.clone()),
            facility_type: facility.map(|facility| facility.facility_type),
            quarter: self.quarter,
            quarter_label: self.quarter.label(),
            indicators: indicator_views(&self.readings),
            summary: self.summary,
            hint: self.summary.hint.message(),
            pathway: self.pathway.view(),
            mentors: self.mentors.clone(),
            patients_on_treatment: self.patients_on_treatment,
            created_by: self.created_by.clone(),
            recorded_at: self.recorded_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuarterlyRecordView {
    pub facility_id: FacilityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_type: Option<FacilityType>,
    pub quarter: Quarter,
    pub quarter_label: String,
    pub indicators: Vec<IndicatorStatusView>,
    pub summary: PerformanceSummary,
    pub hint: &'static str,
    pub pathway: PathwayView,
    pub mentors: Vec<MentorId>,
    pub patients_on_treatment: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub recorded_at: DateTime<Utc>,
}
