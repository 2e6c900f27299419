use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::mentor::MentorId;
use crate::directory::FacilityId;
use crate::performance::IndicatorCode;
use crate::records::Quarter;

/// Barrier categories mentors tag against a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootCause {
    Staffing,
    Capacity,
    MeData,
    SupplyChain,
    PolicySops,
    ServiceDelivery,
    PatientFactors,
    Leadership,
}

impl RootCause {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Staffing,
            Self::Capacity,
            Self::MeData,
            Self::SupplyChain,
            Self::PolicySops,
            Self::ServiceDelivery,
            Self::PatientFactors,
            Self::Leadership,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Staffing => "Staffing",
            Self::Capacity => "Capacity",
            Self::MeData => "M&E / Data",
            Self::SupplyChain => "Supply Chain",
            Self::PolicySops => "Policy / SOPs",
            Self::ServiceDelivery => "Service Delivery",
            Self::PatientFactors => "Patient Factors",
            Self::Leadership => "Leadership",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootCauseStatus {
    Active,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootCauseLog {
    pub facility_id: FacilityId,
    pub quarter: Quarter,
    pub root_cause: RootCause,
    pub status: RootCauseStatus,
    pub identified_date: NaiveDate,
    pub resolved_date: Option<NaiveDate>,
}

impl RootCauseLog {
    /// Still affecting the facility on `as_of`.
    pub fn is_open_on(&self, as_of: NaiveDate) -> bool {
        self.identified_date <= as_of
            && match self.resolved_date {
                Some(resolved) => resolved > as_of,
                None => self.status == RootCauseStatus::Active,
            }
    }
}

/// Kind of mentoring activity delivered to a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupportModality {
    FaceToFace,
    Remote,
    DataReview,
    Training,
    PeerLearning,
    SopDevelopment,
}

impl SupportModality {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::FaceToFace,
            Self::Remote,
            Self::DataReview,
            Self::Training,
            Self::PeerLearning,
            Self::SopDevelopment,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::FaceToFace => "Face-to-face mentoring",
            Self::Remote => "Remote support (WhatsApp/phone)",
            Self::DataReview => "Data review session",
            Self::Training => "Targeted training",
            Self::PeerLearning => "Peer learning facilitation",
            Self::SopDevelopment => "SOP/tool development",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportLog {
    pub facility_id: FacilityId,
    pub mentor_id: MentorId,
    pub quarter: Quarter,
    pub support_date: NaiveDate,
    pub modality: SupportModality,
    pub duration_minutes: u32,
    #[serde(default)]
    pub indicators_addressed: Vec<IndicatorCode>,
    #[serde(default)]
    pub root_causes_identified: Vec<RootCause>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalityHours {
    pub modality: SupportModality,
    pub name: &'static str,
    pub hours: f64,
}

/// Total delivered hours per modality, in catalogue order, omitting unused modalities.
pub fn support_hours_by_modality(logs: &[SupportLog]) -> Vec<ModalityHours> {
    let mut minutes: BTreeMap<SupportModality, u32> = BTreeMap::new();
    for log in logs {
        *minutes.entry(log.modality).or_default() += log.duration_minutes;
    }

    SupportModality::ordered()
        .into_iter()
        .filter_map(|modality| {
            minutes.get(&modality).map(|total| ModalityHours {
                modality,
                name: modality.name(),
                hours: f64::from(*total) / 60.0,
            })
        })
        .collect()
}
