//! Reference dataset shown before a site or district has saved records.

use chrono::{Days, NaiveDate};

use crate::directory::FacilityId;
use crate::performance::{IndicatorCode, IndicatorReading, ReadingSet};
use crate::program::{
    MentorId, Pathway, RootCause, RootCauseLog, RootCauseStatus, SupportLog, SupportModality,
};
use crate::records::Quarter;

pub(crate) struct SampleSite {
    pub(crate) patients_on_treatment: u32,
    pub(crate) mentor_id: &'static str,
    pub(crate) mentor: &'static str,
    pub(crate) pathway: Pathway,
    pub(crate) performance: [(IndicatorCode, f64); 6],
    /// Oldest first; the last entry is the displayed quarter.
    pub(crate) pathway_history: [Pathway; 5],
    pub(crate) support_hours: [f64; 4],
    pub(crate) sessions: [SampleSession; 3],
    pub(crate) root_causes: [SampleRootCause; 4],
    pub(crate) at_target_history: [usize; 4],
}

/// A mentoring session in the displayed quarter.
pub(crate) struct SampleSession {
    pub(crate) modality: SupportModality,
    pub(crate) duration_minutes: u32,
    pub(crate) day_of_quarter: u64,
    pub(crate) indicator: IndicatorCode,
}

/// Offsets count back from the displayed quarter.
pub(crate) struct SampleRootCause {
    pub(crate) root_cause: RootCause,
    pub(crate) identified_quarters_ago: u8,
    pub(crate) resolved_quarters_ago: Option<u8>,
}

fn back(quarter: Quarter, steps: u8) -> Option<Quarter> {
    (0..steps).try_fold(quarter, |cursor, _| cursor.previous())
}

fn day_in(quarter: Quarter, day: u64) -> Option<NaiveDate> {
    quarter.start_date()?.checked_add_days(Days::new(day))
}

impl SampleSite {
    pub(crate) fn readings(&self) -> ReadingSet {
        self.performance
            .iter()
            .map(|(code, value)| (*code, IndicatorReading::Value(*value)))
            .collect()
    }

    pub(crate) fn support_logs(
        &self,
        facility_id: FacilityId,
        quarter: Quarter,
    ) -> Vec<SupportLog> {
        self.sessions
            .iter()
            .filter_map(|session| {
                Some(SupportLog {
                    facility_id,
                    mentor_id: MentorId(self.mentor_id.to_string()),
                    quarter,
                    support_date: day_in(quarter, session.day_of_quarter)?,
                    modality: session.modality,
                    duration_minutes: session.duration_minutes,
                    indicators_addressed: vec![session.indicator],
                    root_causes_identified: Vec::new(),
                    notes: None,
                })
            })
            .collect()
    }

    pub(crate) fn root_cause_logs(
        &self,
        facility_id: FacilityId,
        quarter: Quarter,
    ) -> Vec<RootCauseLog> {
        self.root_causes
            .iter()
            .filter_map(|entry| {
                let identified = back(quarter, entry.identified_quarters_ago)?;
                let resolved_date = match entry.resolved_quarters_ago {
                    Some(ago) => Some(day_in(back(quarter, ago)?, 20)?),
                    None => None,
                };
                Some(RootCauseLog {
                    facility_id,
                    quarter: identified,
                    root_cause: entry.root_cause,
                    status: if resolved_date.is_some() {
                        RootCauseStatus::Resolved
                    } else {
                        RootCauseStatus::Active
                    },
                    identified_date: day_in(identified, 10)?,
                    resolved_date,
                })
            })
            .collect()
    }
}

pub(crate) const SAMPLE_SITE: SampleSite = SampleSite {
    patients_on_treatment: 342,
    mentor_id: "dewi",
    mentor: "Dewi Suryani",
    pathway: Pathway::Rationalization,
    performance: [
        (IndicatorCode::TestingEnrollment, 92.0),
        (IndicatorCode::ArtInitiation, 65.0),
        (IndicatorCode::AdvancedHivDisease, 78.0),
        (IndicatorCode::TreatmentContinuity, 87.0),
        (IndicatorCode::MultiMonthDispensing, 58.0),
        (IndicatorCode::ViralLoadTesting, 82.0),
    ],
    pathway_history: [
        Pathway::Prioritization,
        Pathway::Prioritization,
        Pathway::Rationalization,
        Pathway::Rationalization,
        Pathway::Rationalization,
    ],
    support_hours: [12.0, 9.0, 7.5, 6.5],
    sessions: [
        SampleSession {
            modality: SupportModality::FaceToFace,
            duration_minutes: 210,
            day_of_quarter: 12,
            indicator: IndicatorCode::ArtInitiation,
        },
        SampleSession {
            modality: SupportModality::Remote,
            duration_minutes: 90,
            day_of_quarter: 33,
            indicator: IndicatorCode::MultiMonthDispensing,
        },
        SampleSession {
            modality: SupportModality::DataReview,
            duration_minutes: 90,
            day_of_quarter: 61,
            indicator: IndicatorCode::ViralLoadTesting,
        },
    ],
    root_causes: [
        SampleRootCause {
            root_cause: RootCause::Staffing,
            identified_quarters_ago: 4,
            resolved_quarters_ago: None,
        },
        SampleRootCause {
            root_cause: RootCause::MeData,
            identified_quarters_ago: 0,
            resolved_quarters_ago: None,
        },
        SampleRootCause {
            root_cause: RootCause::Capacity,
            identified_quarters_ago: 3,
            resolved_quarters_ago: Some(1),
        },
        SampleRootCause {
            root_cause: RootCause::SupplyChain,
            identified_quarters_ago: 4,
            resolved_quarters_ago: Some(2),
        },
    ],
    at_target_history: [1, 2, 2, 3],
};

/// Band counts per indicator: optimal, effective, improving, stressed.
pub(crate) struct SampleIndicatorBands {
    pub(crate) indicator: IndicatorCode,
    pub(crate) optimal: usize,
    pub(crate) effective: usize,
    pub(crate) improving: usize,
    pub(crate) stressed: usize,
}

pub(crate) struct SampleEscalation {
    pub(crate) indicator: IndicatorCode,
    pub(crate) affected_sites: [(&'static str, f64); 4],
}

pub(crate) struct SampleDistrict {
    pub(crate) sites_meeting_target: usize,
    pub(crate) change_from_last_quarter: i64,
    pub(crate) pathway_distribution: [(Pathway, usize); 5],
    pub(crate) indicator_bands: [SampleIndicatorBands; 6],
    pub(crate) total_support_hours: f64,
    pub(crate) total_visits: u32,
    pub(crate) support_by_modality: [(&'static str, f64); 5],
    pub(crate) root_cause_counts: [(RootCause, usize); 8],
    pub(crate) mentor_loads: [(&'static str, usize, f64); 3],
    pub(crate) escalation: SampleEscalation,
}

const fn bands(
    indicator: IndicatorCode,
    optimal: usize,
    effective: usize,
    improving: usize,
    stressed: usize,
) -> SampleIndicatorBands {
    SampleIndicatorBands {
        indicator,
        optimal,
        effective,
        improving,
        stressed,
    }
}

pub(crate) const SAMPLE_DISTRICT: SampleDistrict = SampleDistrict {
    sites_meeting_target: 16,
    change_from_last_quarter: 3,
    pathway_distribution: [
        (Pathway::Prioritization, 6),
        (Pathway::Rationalization, 8),
        (Pathway::TransitionReady, 7),
        (Pathway::Graduation, 2),
        (Pathway::ReEngagement, 1),
    ],
    indicator_bands: [
        bands(IndicatorCode::TestingEnrollment, 12, 6, 4, 2),
        bands(IndicatorCode::ArtInitiation, 8, 7, 5, 4),
        bands(IndicatorCode::AdvancedHivDisease, 9, 6, 6, 3),
        bands(IndicatorCode::TreatmentContinuity, 14, 5, 3, 2),
        bands(IndicatorCode::MultiMonthDispensing, 6, 8, 6, 4),
        bands(IndicatorCode::ViralLoadTesting, 10, 7, 5, 2),
    ],
    total_support_hours: 87.5,
    total_visits: 42,
    support_by_modality: [
        ("Face-to-face", 48.0),
        ("Remote", 18.0),
        ("Data Review", 12.0),
        ("Training", 6.0),
        ("Other", 3.5),
    ],
    root_cause_counts: [
        (RootCause::Staffing, 14),
        (RootCause::Capacity, 11),
        (RootCause::MeData, 9),
        (RootCause::SupplyChain, 5),
        (RootCause::ServiceDelivery, 4),
        (RootCause::PatientFactors, 3),
        (RootCause::PolicySops, 2),
        (RootCause::Leadership, 2),
    ],
    mentor_loads: [
        ("Dewi Suryani", 8, 32.0),
        ("Budi Santoso", 8, 28.0),
        ("Rina Wijaya", 8, 27.5),
    ],
    escalation: SampleEscalation {
        indicator: IndicatorCode::MultiMonthDispensing,
        affected_sites: [
            ("RS Persahabatan", 42.0),
            ("RS Islam Jakarta", 38.0),
            ("RS Harapan Kita", 45.0),
            ("RS Budhi Asih", 35.0),
        ],
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::aggregate;

    #[test]
    fn sample_site_summary_matches_reference_dashboard() {
        let summary = aggregate(&SAMPLE_SITE.readings());
        assert_eq!(summary.at_target, 3);
        assert_eq!(summary.improving, 2);
        assert_eq!(summary.stressed, 1);
        assert_eq!(SAMPLE_SITE.at_target_history.last(), Some(&summary.at_target));
    }

    #[test]
    fn sample_district_bands_cover_every_site() {
        let total: usize = SAMPLE_DISTRICT
            .pathway_distribution
            .iter()
            .map(|(_, count)| count)
            .sum();
        assert_eq!(total, 24);
        for band in &SAMPLE_DISTRICT.indicator_bands {
            assert_eq!(
                band.optimal + band.effective + band.improving + band.stressed,
                24
            );
        }
    }
}
