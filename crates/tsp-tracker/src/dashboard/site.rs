use serde::Serialize;

use super::sample::SAMPLE_SITE;
use super::DataSource;
use crate::directory::{Facility, FacilityId, FacilityType};
use crate::performance::{aggregate, indicator_views, IndicatorStatusView, PerformanceSummary};
use crate::program::{
    support_hours_by_modality, Mentor, ModalityHours, Pathway, PathwayView, RootCause,
    RootCauseLog, RootCauseStatus, SupportLog,
};
use crate::records::{Quarter, QuarterlyRecord};

const PATHWAY_HISTORY_LEN: usize = 5;
const TREND_LEN: usize = 4;

#[derive(Debug, Clone, Serialize)]
pub struct SiteDashboard {
    pub facility_id: FacilityId,
    pub name: String,
    pub province: String,
    pub district: String,
    pub facility_type: FacilityType,
    pub quarter: Quarter,
    pub quarter_label: String,
    pub data_source: DataSource,
    pub patients_on_treatment: u32,
    pub mentor: Option<String>,
    pub indicators: Vec<IndicatorStatusView>,
    pub summary: PerformanceSummary,
    pub hint: &'static str,
    pub pathway: PathwayView,
    pub pathway_history: Vec<PathwayHistoryEntry>,
    pub support_history: Vec<SupportHoursEntry>,
    pub current_support: Vec<ModalityHours>,
    pub root_causes: Vec<RootCauseEntry>,
    pub at_target_history: Vec<AtTargetEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathwayHistoryEntry {
    pub quarter: Quarter,
    pub label: String,
    pub pathway: Pathway,
    pub abbreviation: &'static str,
    pub current: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupportHoursEntry {
    pub quarter: Quarter,
    pub label: String,
    pub hours: f64,
    pub current: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RootCauseEntry {
    pub root_cause: RootCause,
    pub name: &'static str,
    pub status: RootCauseStatus,
    /// Quarter first identified (active) or resolved (resolved).
    pub since: Option<Quarter>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AtTargetEntry {
    pub quarter: Quarter,
    pub label: String,
    pub at_target: usize,
}

/// Build a facility's dashboard for `quarter`.
///
/// `history` is the facility's saved records in any order. Indicator cards,
/// pathway and trends come from them when the quarter was recorded, otherwise
/// from the reference dataset laid over the trailing quarters. Support and
/// root cause panels are derived from the reference support and root cause logs.
pub fn site_dashboard(
    facility: &Facility,
    quarter: Quarter,
    history: &[QuarterlyRecord],
    roster: &[Mentor],
) -> SiteDashboard {
    let mut history: Vec<&QuarterlyRecord> = history
        .iter()
        .filter(|record| record.facility_id == facility.id && record.quarter <= quarter)
        .collect();
    history.sort_by_key(|record| record.quarter);

    let current = history.last().copied().filter(|record| record.quarter == quarter);
    let (data_source, readings, pathway, patients_on_treatment, mentor) = match current {
        Some(record) => (
            DataSource::Recorded,
            record.readings.clone(),
            record.pathway,
            record.patients_on_treatment,
            record.mentors.first().and_then(|id| {
                roster
                    .iter()
                    .find(|mentor| &mentor.id == id)
                    .map(|mentor| mentor.name.clone())
            }),
        ),
        None => (
            DataSource::Sample,
            SAMPLE_SITE.readings(),
            SAMPLE_SITE.pathway,
            SAMPLE_SITE.patients_on_treatment,
            Some(SAMPLE_SITE.mentor.to_string()),
        ),
    };

    let summary = aggregate(&readings);
    let (pathway_history, at_target_history) = match data_source {
        DataSource::Recorded => recorded_trends(&history, quarter),
        DataSource::Sample => sample_trends(quarter),
    };

    let support_logs = SAMPLE_SITE.support_logs(facility.id, quarter);
    let root_cause_logs = SAMPLE_SITE.root_cause_logs(facility.id, quarter);

    SiteDashboard {
        facility_id: facility.id,
        name: facility.name.clone(),
        province: facility.province.clone(),
        district: facility.district.clone(),
        facility_type: facility.facility_type,
        quarter,
        quarter_label: quarter.label(),
        data_source,
        patients_on_treatment,
        mentor,
        indicators: indicator_views(&readings),
        summary,
        hint: summary.hint.message(),
        pathway: pathway.view(),
        pathway_history,
        support_history: sample_support_history(quarter),
        current_support: current_support(&support_logs, quarter),
        root_causes: root_cause_entries(&root_cause_logs, quarter),
        at_target_history,
    }
}

/// Hours delivered during `quarter`, per modality.
pub fn current_support(logs: &[SupportLog], quarter: Quarter) -> Vec<ModalityHours> {
    let in_quarter: Vec<SupportLog> = logs
        .iter()
        .filter(|log| log.quarter == quarter)
        .cloned()
        .collect();
    support_hours_by_modality(&in_quarter)
}

/// Root causes known by the end of `quarter`. A cause is active when it is
/// still open on that date; `since` is the quarter it was identified, or the
/// quarter it was resolved in.
pub fn root_cause_entries(logs: &[RootCauseLog], quarter: Quarter) -> Vec<RootCauseEntry> {
    let Some(as_of) = quarter.end_date() else {
        return Vec::new();
    };
    logs.iter()
        .filter(|log| log.identified_date <= as_of)
        .map(|log| {
            let (status, since) = if log.is_open_on(as_of) {
                (RootCauseStatus::Active, Some(log.quarter))
            } else {
                (
                    RootCauseStatus::Resolved,
                    log.resolved_date
                        .and_then(|date| Quarter::containing(date).ok()),
                )
            };
            RootCauseEntry {
                root_cause: log.root_cause,
                name: log.root_cause.name(),
                status,
                since,
            }
        })
        .collect()
}

fn pathway_entry(quarter: Quarter, pathway: Pathway, current: bool) -> PathwayHistoryEntry {
    PathwayHistoryEntry {
        quarter,
        label: quarter.short_label(),
        pathway,
        abbreviation: pathway.abbreviation(),
        current,
    }
}

fn within<'a>(history: &[&'a QuarterlyRecord], quarters: &[Quarter]) -> Vec<&'a QuarterlyRecord> {
    history
        .iter()
        .copied()
        .filter(|record| quarters.contains(&record.quarter))
        .collect()
}

fn recorded_trends(
    history: &[&QuarterlyRecord],
    quarter: Quarter,
) -> (Vec<PathwayHistoryEntry>, Vec<AtTargetEntry>) {
    let pathways = within(history, &quarter.trailing(PATHWAY_HISTORY_LEN))
        .into_iter()
        .map(|record| pathway_entry(record.quarter, record.pathway, record.quarter == quarter))
        .collect();
    let at_target = within(history, &quarter.trailing(TREND_LEN))
        .into_iter()
        .map(|record| AtTargetEntry {
            quarter: record.quarter,
            label: record.quarter.short_label(),
            at_target: record.summary.at_target,
        })
        .collect();
    (pathways, at_target)
}

fn sample_trends(quarter: Quarter) -> (Vec<PathwayHistoryEntry>, Vec<AtTargetEntry>) {
    let pathway_quarters = quarter.trailing(PATHWAY_HISTORY_LEN);
    let pathway_offset = PATHWAY_HISTORY_LEN - pathway_quarters.len();
    let pathways = pathway_quarters
        .iter()
        .zip(&SAMPLE_SITE.pathway_history[pathway_offset..])
        .map(|(q, pathway)| pathway_entry(*q, *pathway, *q == quarter))
        .collect();

    let trend_quarters = quarter.trailing(TREND_LEN);
    let trend_offset = TREND_LEN - trend_quarters.len();
    let at_target = trend_quarters
        .iter()
        .zip(&SAMPLE_SITE.at_target_history[trend_offset..])
        .map(|(q, count)| AtTargetEntry {
            quarter: *q,
            label: q.short_label(),
            at_target: *count,
        })
        .collect();
    (pathways, at_target)
}

fn sample_support_history(quarter: Quarter) -> Vec<SupportHoursEntry> {
    let quarters = quarter.trailing(TREND_LEN);
    let offset = TREND_LEN - quarters.len();
    quarters
        .iter()
        .zip(&SAMPLE_SITE.support_hours[offset..])
        .map(|(q, hours)| SupportHoursEntry {
            quarter: *q,
            label: q.short_label(),
            hours: *hours,
            current: *q == quarter,
        })
        .collect()
}
