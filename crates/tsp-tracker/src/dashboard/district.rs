use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::sample::SAMPLE_DISTRICT;
use super::DataSource;
use crate::directory::{Facility, FacilityDirectory, FacilityFilter, FacilityId, FacilityType};
use crate::performance::{
    IndicatorCode, PerformanceStatus, StatusBand, LIGHTER_PATHWAY_MIN_AT_TARGET,
};
use crate::program::{mentor_roster, Pathway, RootCause};
use crate::records::{Quarter, QuarterlyRecord};

/// Smallest group of same-type facilities that can raise an escalation.
pub const ESCALATION_MIN_SITES: usize = 2;

#[derive(Debug, Clone, Serialize)]
pub struct DistrictDashboard {
    pub name: String,
    pub province: Option<String>,
    pub district: Option<String>,
    pub quarter: Quarter,
    pub quarter_label: String,
    pub data_source: DataSource,
    pub total_sites: usize,
    pub sites_by_type: Vec<TypeCount>,
    pub reporting_sites: usize,
    pub sites_meeting_target: usize,
    pub change_from_last_quarter: Option<i64>,
    pub pathway_distribution: Vec<PathwayCount>,
    pub indicator_distribution: Vec<IndicatorDistribution>,
    pub support_delivered: SupportDelivered,
    pub root_cause_counts: Vec<RootCauseCount>,
    pub mentors: Vec<MentorLoad>,
    pub escalations: Vec<Escalation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub facility_type: FacilityType,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathwayCount {
    pub pathway: Pathway,
    pub name: &'static str,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorDistribution {
    pub indicator: IndicatorCode,
    pub name: &'static str,
    pub optimal: usize,
    pub effective: usize,
    /// Improving and sub-improving sites together.
    pub improving: usize,
    pub stressed: usize,
    pub percent_at_target: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupportShare {
    pub label: &'static str,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupportDelivered {
    pub total_hours: f64,
    pub total_visits: u32,
    pub by_modality: Vec<SupportShare>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootCauseCount {
    pub root_cause: RootCause,
    pub name: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentorLoad {
    pub name: String,
    pub initials: String,
    pub sites: usize,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffectedSite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<FacilityId>,
    pub name: String,
    pub value: f64,
}

/// An indicator on which every reporting facility of one type sits below
/// the effective threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Escalation {
    pub indicator: IndicatorCode,
    pub indicator_name: &'static str,
    pub facility_type: FacilityType,
    pub percent_below_effective: u32,
    pub affected_sites: Vec<AffectedSite>,
    pub description: String,
}

fn plural(facility_type: FacilityType, count: usize) -> &'static str {
    match (facility_type, count) {
        (FacilityType::Hospital, 1) => "hospital",
        (FacilityType::Hospital, _) => "hospitals",
        (FacilityType::NgoClinic, 1) => "NGO clinic",
        (FacilityType::NgoClinic, _) => "NGO clinics",
        (FacilityType::Puskesmas, _) => "puskesmas",
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

fn scope_name(scope: &FacilityFilter) -> String {
    let non_blank = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };
    match (non_blank(&scope.province), non_blank(&scope.district)) {
        (_, Some(district)) => format!("{district} District"),
        (Some(province), None) => format!("{province} Province"),
        (None, None) => "All supported facilities".to_string(),
    }
}

/// Build the district view for facilities matching `scope`.
///
/// `current` and `previous` are saved records for `quarter` and the quarter
/// before it; records outside the scope are ignored. Without in-scope records
/// for `quarter` the performance panels fall back to the reference dataset.
pub fn district_dashboard(
    directory: &FacilityDirectory,
    scope: &FacilityFilter,
    quarter: Quarter,
    current: &[QuarterlyRecord],
    previous: &[QuarterlyRecord],
) -> DistrictDashboard {
    let facilities: BTreeMap<FacilityId, &Facility> = directory
        .facilities(scope)
        .into_iter()
        .map(|facility| (facility.id, facility))
        .collect();

    let mut sites_by_type: BTreeMap<FacilityType, usize> = BTreeMap::new();
    for facility in facilities.values() {
        *sites_by_type.entry(facility.facility_type).or_default() += 1;
    }
    let sites_by_type = FacilityType::ordered()
        .into_iter()
        .map(|facility_type| TypeCount {
            facility_type,
            count: sites_by_type.get(&facility_type).copied().unwrap_or_default(),
        })
        .collect();

    let reporting = in_scope(&facilities, current, Some(quarter));
    let prior = in_scope(&facilities, previous, quarter.previous());

    let performance = if reporting.is_empty() {
        sample_performance()
    } else {
        recorded_performance(&reporting, &prior)
    };

    DistrictDashboard {
        name: scope_name(scope),
        province: scope.province.clone(),
        district: scope.district.clone(),
        quarter,
        quarter_label: quarter.label(),
        data_source: performance.data_source,
        total_sites: facilities.len(),
        sites_by_type,
        reporting_sites: reporting.len(),
        sites_meeting_target: performance.sites_meeting_target,
        change_from_last_quarter: performance.change_from_last_quarter,
        pathway_distribution: performance.pathway_distribution,
        indicator_distribution: performance.indicator_distribution,
        support_delivered: SupportDelivered {
            total_hours: SAMPLE_DISTRICT.total_support_hours,
            total_visits: SAMPLE_DISTRICT.total_visits,
            by_modality: SAMPLE_DISTRICT
                .support_by_modality
                .iter()
                .map(|(label, hours)| SupportShare {
                    label: *label,
                    hours: *hours,
                })
                .collect(),
        },
        root_cause_counts: SAMPLE_DISTRICT
            .root_cause_counts
            .iter()
            .map(|(root_cause, count)| RootCauseCount {
                root_cause: *root_cause,
                name: root_cause.name(),
                count: *count,
            })
            .collect(),
        mentors: sample_mentor_loads(),
        escalations: performance.escalations,
    }
}

fn in_scope<'a>(
    facilities: &BTreeMap<FacilityId, &'a Facility>,
    records: &'a [QuarterlyRecord],
    quarter: Option<Quarter>,
) -> Vec<(&'a Facility, &'a QuarterlyRecord)> {
    records
        .iter()
        .filter(|record| Some(record.quarter) == quarter)
        .filter_map(|record| {
            facilities
                .get(&record.facility_id)
                .map(|facility| (*facility, record))
        })
        .collect()
}

struct PerformancePanels {
    data_source: DataSource,
    sites_meeting_target: usize,
    change_from_last_quarter: Option<i64>,
    pathway_distribution: Vec<PathwayCount>,
    indicator_distribution: Vec<IndicatorDistribution>,
    escalations: Vec<Escalation>,
}

fn meeting_target(records: &[(&Facility, &QuarterlyRecord)]) -> usize {
    records
        .iter()
        .filter(|(_, record)| record.summary.at_target >= LIGHTER_PATHWAY_MIN_AT_TARGET)
        .count()
}

fn pathway_counts(counts: impl Fn(Pathway) -> usize) -> Vec<PathwayCount> {
    let total: usize = Pathway::ordered().into_iter().map(&counts).sum();
    Pathway::ordered()
        .into_iter()
        .map(|pathway| {
            let count = counts(pathway);
            PathwayCount {
                pathway,
                name: pathway.name(),
                count,
                percent: percent(count, total),
            }
        })
        .collect()
}

fn distribution(
    indicator: IndicatorCode,
    optimal: usize,
    effective: usize,
    improving: usize,
    stressed: usize,
) -> IndicatorDistribution {
    let classified = optimal + effective + improving + stressed;
    IndicatorDistribution {
        indicator,
        name: indicator.name(),
        optimal,
        effective,
        improving,
        stressed,
        percent_at_target: percent(optimal + effective, classified).round() as u32,
    }
}

fn recorded_performance(
    reporting: &[(&Facility, &QuarterlyRecord)],
    prior: &[(&Facility, &QuarterlyRecord)],
) -> PerformancePanels {
    let sites_meeting_target = meeting_target(reporting);
    let change_from_last_quarter = (!prior.is_empty())
        .then(|| sites_meeting_target as i64 - meeting_target(prior) as i64);

    let pathway_distribution = pathway_counts(|pathway| {
        reporting
            .iter()
            .filter(|(_, record)| record.pathway == pathway)
            .count()
    });

    let indicator_distribution = IndicatorCode::ordered()
        .into_iter()
        .map(|indicator| {
            let mut counts = [0usize; 4];
            for (_, record) in reporting {
                let status = record
                    .readings
                    .get(&indicator)
                    .and_then(|reading| reading.status(indicator));
                let slot = match status {
                    Some(PerformanceStatus::Optimal) => 0,
                    Some(PerformanceStatus::Effective) => 1,
                    Some(status) if status.band() == StatusBand::Improving => 2,
                    Some(_) => 3,
                    None => continue,
                };
                counts[slot] += 1;
            }
            distribution(indicator, counts[0], counts[1], counts[2], counts[3])
        })
        .collect();

    PerformancePanels {
        data_source: DataSource::Recorded,
        sites_meeting_target,
        change_from_last_quarter,
        pathway_distribution,
        indicator_distribution,
        escalations: escalations(reporting),
    }
}

/// Indicators where every reporting facility of a type, with at least
/// [`ESCALATION_MIN_SITES`] reporting, sits below effective.
pub fn escalations(reporting: &[(&Facility, &QuarterlyRecord)]) -> Vec<Escalation> {
    let facility_types: BTreeSet<FacilityType> = reporting
        .iter()
        .map(|(facility, _)| facility.facility_type)
        .collect();

    let mut escalations = Vec::new();
    for indicator in IndicatorCode::ordered() {
        for facility_type in &facility_types {
            let classified: Vec<(&Facility, f64, PerformanceStatus)> = reporting
                .iter()
                .filter(|(facility, _)| facility.facility_type == *facility_type)
                .filter_map(|(facility, record)| {
                    let reading = record.readings.get(&indicator)?;
                    let value = reading.value()?;
                    let status = reading.status(indicator)?;
                    Some((*facility, value, status))
                })
                .collect();

            if classified.len() < ESCALATION_MIN_SITES
                || classified
                    .iter()
                    .any(|(_, _, status)| *status >= PerformanceStatus::Effective)
            {
                continue;
            }

            let count = classified.len();
            escalations.push(Escalation {
                indicator,
                indicator_name: indicator.name(),
                facility_type: *facility_type,
                percent_below_effective: 100,
                affected_sites: classified
                    .iter()
                    .map(|(facility, value, _)| AffectedSite {
                        facility_id: Some(facility.id),
                        name: facility.name.clone(),
                        value: *value,
                    })
                    .collect(),
                description: escalation_description(indicator, *facility_type, count),
            });
        }
    }
    escalations
}

fn escalation_description(
    indicator: IndicatorCode,
    facility_type: FacilityType,
    count: usize,
) -> String {
    format!(
        "All {count} {} (100%) are performing below Effective threshold on {}. \
         This suggests a systemic barrier requiring provincial-level coordination.",
        plural(facility_type, count),
        indicator.name()
    )
}

fn sample_performance() -> PerformancePanels {
    let pathway_distribution = pathway_counts(|pathway| {
        SAMPLE_DISTRICT
            .pathway_distribution
            .iter()
            .find(|(candidate, _)| *candidate == pathway)
            .map_or(0, |(_, count)| *count)
    });

    let indicator_distribution = SAMPLE_DISTRICT
        .indicator_bands
        .iter()
        .map(|bands| {
            distribution(
                bands.indicator,
                bands.optimal,
                bands.effective,
                bands.improving,
                bands.stressed,
            )
        })
        .collect();

    let sample = &SAMPLE_DISTRICT.escalation;
    let escalation = Escalation {
        indicator: sample.indicator,
        indicator_name: sample.indicator.name(),
        facility_type: FacilityType::Hospital,
        percent_below_effective: 100,
        affected_sites: sample
            .affected_sites
            .iter()
            .map(|(name, value)| AffectedSite {
                facility_id: None,
                name: name.to_string(),
                value: *value,
            })
            .collect(),
        description: escalation_description(
            sample.indicator,
            FacilityType::Hospital,
            sample.affected_sites.len(),
        ),
    };

    PerformancePanels {
        data_source: DataSource::Sample,
        sites_meeting_target: SAMPLE_DISTRICT.sites_meeting_target,
        change_from_last_quarter: Some(SAMPLE_DISTRICT.change_from_last_quarter),
        pathway_distribution,
        indicator_distribution,
        escalations: vec![escalation],
    }
}

fn sample_mentor_loads() -> Vec<MentorLoad> {
    let roster = mentor_roster();
    SAMPLE_DISTRICT
        .mentor_loads
        .iter()
        .map(|(name, sites, hours)| MentorLoad {
            name: name.to_string(),
            initials: roster
                .iter()
                .find(|mentor| mentor.name == *name)
                .map(|mentor| mentor.initials())
                .unwrap_or_default(),
            sites: *sites,
            hours: *hours,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::{aggregate, IndicatorReading, ReadingSet};
    use chrono::Utc;

    const GOOD: [f64; 6] = [97.0, 85.0, 82.0, 99.0, 80.0, 90.0];
    const MIXED: [f64; 6] = [92.0, 65.0, 78.0, 87.0, 58.0, 82.0];

    fn quarter(raw: &str) -> Quarter {
        raw.parse().expect("valid quarter")
    }

    fn east_jakarta() -> FacilityFilter {
        FacilityFilter::default()
            .province("Jakarta")
            .district("East Jakarta")
    }

    fn record(facility: u32, raw_quarter: &str, pathway: Pathway, values: [f64; 6]) -> QuarterlyRecord {
        let readings: ReadingSet = IndicatorCode::ordered()
            .into_iter()
            .zip(values)
            .map(|(code, value)| (code, IndicatorReading::Value(value)))
            .collect();
        QuarterlyRecord {
            facility_id: FacilityId(facility),
            quarter: quarter(raw_quarter),
            summary: aggregate(&readings),
            readings,
            patients_on_treatment: 100,
            pathway,
            mentors: Vec::new(),
            created_by: None,
            recorded_at: Utc::now(),
        }
    }

    fn with_mmd(value: f64) -> [f64; 6] {
        let mut values = GOOD;
        values[4] = value;
        values
    }

    #[test]
    fn sample_panels_fill_an_unreported_district() {
        let directory = FacilityDirectory::standard();
        let dashboard =
            district_dashboard(&directory, &east_jakarta(), quarter("2025-Q1"), &[], &[]);

        assert_eq!(dashboard.name, "East Jakarta District");
        assert_eq!(dashboard.data_source, DataSource::Sample);
        assert_eq!(dashboard.total_sites, 27);
        assert_eq!(
            dashboard.sites_by_type,
            vec![
                TypeCount {
                    facility_type: FacilityType::Hospital,
                    count: 17
                },
                TypeCount {
                    facility_type: FacilityType::NgoClinic,
                    count: 0
                },
                TypeCount {
                    facility_type: FacilityType::Puskesmas,
                    count: 10
                },
            ]
        );
        assert_eq!(dashboard.sites_meeting_target, 16);
        assert_eq!(dashboard.change_from_last_quarter, Some(3));

        let pathways: Vec<usize> = dashboard
            .pathway_distribution
            .iter()
            .map(|entry| entry.count)
            .collect();
        assert_eq!(pathways, vec![6, 8, 7, 2, 1]);

        let at_target: Vec<u32> = dashboard
            .indicator_distribution
            .iter()
            .map(|entry| entry.percent_at_target)
            .collect();
        assert_eq!(at_target, vec![75, 63, 63, 79, 58, 71]);

        assert_eq!(dashboard.escalations.len(), 1);
        assert!(dashboard.escalations[0]
            .description
            .starts_with("All 4 hospitals (100%)"));
        assert_eq!(dashboard.support_delivered.total_hours, 87.5);
        assert_eq!(dashboard.root_cause_counts[0].count, 14);
        assert_eq!(dashboard.mentors[2].initials, "RW");
    }

    #[test]
    fn recorded_panels_follow_saved_records() {
        let directory = FacilityDirectory::standard();
        let current = vec![
            record(55, "2025-Q1", Pathway::Rationalization, with_mmd(42.0)),
            record(56, "2025-Q1", Pathway::TransitionReady, with_mmd(38.0)),
            record(50, "2025-Q1", Pathway::Prioritization, MIXED),
            // South Jakarta, outside the scope.
            record(1, "2025-Q1", Pathway::Graduation, GOOD),
        ];
        let previous = vec![record(55, "2024-Q4", Pathway::Prioritization, MIXED)];

        let dashboard = district_dashboard(
            &directory,
            &east_jakarta(),
            quarter("2025-Q1"),
            &current,
            &previous,
        );

        assert_eq!(dashboard.data_source, DataSource::Recorded);
        assert_eq!(dashboard.reporting_sites, 3);
        assert_eq!(dashboard.sites_meeting_target, 2);
        assert_eq!(dashboard.change_from_last_quarter, Some(2));

        let pathways: Vec<usize> = dashboard
            .pathway_distribution
            .iter()
            .map(|entry| entry.count)
            .collect();
        assert_eq!(pathways, vec![1, 1, 1, 0, 0]);

        let testing = &dashboard.indicator_distribution[0];
        assert_eq!((testing.optimal, testing.effective), (2, 1));
        assert_eq!(testing.percent_at_target, 100);
        let mmd = &dashboard.indicator_distribution[4];
        assert_eq!((mmd.improving, mmd.stressed), (1, 2));
        assert_eq!(mmd.percent_at_target, 0);

        assert_eq!(dashboard.escalations.len(), 1);
        let escalation = &dashboard.escalations[0];
        assert_eq!(escalation.indicator, IndicatorCode::MultiMonthDispensing);
        assert_eq!(escalation.facility_type, FacilityType::Hospital);
        let affected: Vec<Option<FacilityId>> = escalation
            .affected_sites
            .iter()
            .map(|site| site.facility_id)
            .collect();
        assert_eq!(affected, vec![Some(FacilityId(55)), Some(FacilityId(56))]);
    }

    #[test]
    fn a_single_struggling_site_does_not_escalate() {
        let directory = FacilityDirectory::standard();
        let current = vec![
            record(55, "2025-Q1", Pathway::Rationalization, with_mmd(42.0)),
            record(56, "2025-Q1", Pathway::Rationalization, GOOD),
        ];
        let dashboard = district_dashboard(
            &directory,
            &east_jakarta(),
            quarter("2025-Q1"),
            &current,
            &[],
        );
        assert!(dashboard.escalations.is_empty());
        assert_eq!(dashboard.change_from_last_quarter, None);
    }

    #[test]
    fn scope_names_fall_back_to_province_and_program() {
        assert_eq!(
            scope_name(&FacilityFilter::default().province("Banten")),
            "Banten Province"
        );
        assert_eq!(
            scope_name(&FacilityFilter::default()),
            "All supported facilities"
        );
    }
}
