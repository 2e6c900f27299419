use std::collections::BTreeMap;
use std::sync::Arc;

use tsp_tracker::dashboard::{DashboardError, DashboardService, DataSource};
use tsp_tracker::directory::{FacilityDirectory, FacilityFilter, FacilityId, FacilityType};
use tsp_tracker::performance::{IndicatorCode, ReadingInput};
use tsp_tracker::program::{MentorId, Pathway};
use tsp_tracker::records::{
    InMemoryQuarterlyRecordRepository, Quarter, QuarterlyEntryService, QuarterlySubmission,
};

const KRAMAT_JATI: u32 = 50;
const RS_FK_UKI: u32 = 55;
const RS_HARAPAN_BUNDA: u32 = 56;

struct Tracker {
    entry: QuarterlyEntryService<InMemoryQuarterlyRecordRepository, FacilityDirectory>,
    dashboards: DashboardService<InMemoryQuarterlyRecordRepository>,
}

fn quarter(raw: &str) -> Quarter {
    raw.parse().expect("valid quarter")
}

fn tracker() -> Tracker {
    let directory = Arc::new(FacilityDirectory::standard());
    let records = Arc::new(InMemoryQuarterlyRecordRepository::new());
    Tracker {
        entry: QuarterlyEntryService::new(records.clone(), directory.clone()),
        dashboards: DashboardService::new(directory, records, quarter("2025-Q1")),
    }
}

fn submit(tracker: &Tracker, facility: u32, period: &str, values: [f64; 6], pathway: Pathway) {
    let readings: BTreeMap<String, ReadingInput> = IndicatorCode::ordered()
        .into_iter()
        .zip(values)
        .map(|(code, value)| {
            (
                code.code().to_string(),
                ReadingInput {
                    value: Some(value),
                    is_na: false,
                },
            )
        })
        .collect();
    tracker
        .entry
        .submit(QuarterlySubmission {
            facility_id: FacilityId(facility),
            quarter: quarter(period),
            readings,
            patients_on_treatment: 250,
            pathway: Some(pathway),
            mentors: vec![MentorId("budi".to_string())],
            created_by: None,
        })
        .expect("submission saved");
}

fn east_jakarta() -> FacilityFilter {
    FacilityFilter::default()
        .province("Jakarta")
        .district("East Jakarta")
}

fn seed_east_jakarta(tracker: &Tracker) {
    submit(
        tracker,
        RS_FK_UKI,
        "2024-Q4",
        [85.0, 55.0, 62.0, 91.0, 50.0, 72.0],
        Pathway::Prioritization,
    );
    submit(
        tracker,
        KRAMAT_JATI,
        "2024-Q4",
        [90.0, 62.0, 71.0, 92.0, 55.0, 78.0],
        Pathway::Rationalization,
    );
    submit(
        tracker,
        KRAMAT_JATI,
        "2025-Q1",
        [92.0, 65.0, 78.0, 87.0, 58.0, 82.0],
        Pathway::Rationalization,
    );
    submit(
        tracker,
        RS_FK_UKI,
        "2025-Q1",
        [97.0, 85.0, 85.0, 97.0, 42.0, 88.0],
        Pathway::TransitionReady,
    );
    submit(
        tracker,
        RS_HARAPAN_BUNDA,
        "2025-Q1",
        [97.0, 85.0, 85.0, 97.0, 38.0, 88.0],
        Pathway::TransitionReady,
    );
}

#[test]
fn site_dashboard_uses_saved_quarters() {
    let tracker = tracker();
    seed_east_jakarta(&tracker);

    let site = tracker
        .dashboards
        .site(FacilityId(KRAMAT_JATI), None)
        .expect("dashboard builds");

    assert_eq!(site.data_source, DataSource::Recorded);
    assert_eq!(site.quarter, quarter("2025-Q1"));
    assert_eq!(site.summary.at_target, 3);
    assert_eq!(site.pathway.pathway, Pathway::Rationalization);
    assert_eq!(site.mentor.as_deref(), Some("Budi Santoso"));
    assert_eq!(site.patients_on_treatment, 250);

    let trend: Vec<usize> = site
        .at_target_history
        .iter()
        .map(|entry| entry.at_target)
        .collect();
    assert_eq!(trend, vec![2, 3]);
    assert_eq!(site.pathway_history.len(), 2);
    assert!(site.pathway_history.last().is_some_and(|entry| entry.current));
}

#[test]
fn site_dashboard_for_an_unrecorded_quarter_shows_reference_data() {
    let tracker = tracker();
    seed_east_jakarta(&tracker);

    let site = tracker
        .dashboards
        .site(FacilityId(KRAMAT_JATI), Some(quarter("2025-Q2")))
        .expect("dashboard builds");

    assert_eq!(site.data_source, DataSource::Sample);
    assert_eq!(site.patients_on_treatment, 342);
    assert_eq!(site.mentor.as_deref(), Some("Dewi Suryani"));
    assert_eq!(site.root_causes.len(), 4);
    assert_eq!(site.support_history.len(), 4);

    assert!(matches!(
        tracker.dashboards.site(FacilityId(9999), None),
        Err(DashboardError::UnknownFacility(FacilityId(9999)))
    ));
}

#[test]
fn district_dashboard_summarizes_reporting_sites() {
    let tracker = tracker();
    seed_east_jakarta(&tracker);

    let district = tracker
        .dashboards
        .district(&east_jakarta(), None)
        .expect("dashboard builds");

    assert_eq!(district.name, "East Jakarta District");
    assert_eq!(district.data_source, DataSource::Recorded);
    assert_eq!(district.total_sites, 27);
    assert_eq!(district.reporting_sites, 3);
    assert_eq!(district.sites_meeting_target, 2);
    assert_eq!(district.change_from_last_quarter, Some(2));

    let transition_ready = district
        .pathway_distribution
        .iter()
        .find(|entry| entry.pathway == Pathway::TransitionReady)
        .expect("pathway listed");
    assert_eq!(transition_ready.count, 2);

    let mmd = district
        .indicator_distribution
        .iter()
        .find(|entry| entry.indicator == IndicatorCode::MultiMonthDispensing)
        .expect("indicator listed");
    assert_eq!(mmd.stressed, 2);
    assert_eq!(mmd.improving, 1);
    assert_eq!(mmd.percent_at_target, 0);
}

#[test]
fn district_dashboard_escalates_systemic_hospital_gaps() {
    let tracker = tracker();
    seed_east_jakarta(&tracker);

    let district = tracker
        .dashboards
        .district(&east_jakarta(), Some(quarter("2025-Q1")))
        .expect("dashboard builds");

    assert_eq!(district.escalations.len(), 1);
    let escalation = &district.escalations[0];
    assert_eq!(escalation.indicator, IndicatorCode::MultiMonthDispensing);
    assert_eq!(escalation.facility_type, FacilityType::Hospital);
    assert_eq!(escalation.affected_sites.len(), 2);
    assert!(escalation.description.starts_with("All 2 hospitals"));
}

#[test]
fn district_without_records_falls_back_to_reference_data() {
    let tracker = tracker();
    seed_east_jakarta(&tracker);

    let scope = FacilityFilter::default()
        .province("Jakarta")
        .district("West Jakarta");
    let district = tracker
        .dashboards
        .district(&scope, None)
        .expect("dashboard builds");

    assert_eq!(district.data_source, DataSource::Sample);
    assert_eq!(district.total_sites, 19);
    assert_eq!(district.reporting_sites, 0);
    assert_eq!(district.sites_meeting_target, 16);
    assert_eq!(district.escalations.len(), 1);
}
