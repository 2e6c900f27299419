use crate::infra::{load_directory, parse_facility_type, parse_quarter, TrackerServices};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use tsp_tracker::config::AppConfig;
use tsp_tracker::dashboard::{DistrictDashboard, SiteDashboard};
use tsp_tracker::directory::{
    Facility, FacilityDirectory, FacilityFilter, FacilityId, FacilitySelection, FacilityType,
};
use tsp_tracker::error::AppError;
use tsp_tracker::performance::{classify_code, IndicatorCode, ReadingInput};
use tsp_tracker::program::{MentorId, Pathway};
use tsp_tracker::records::{Quarter, QuarterlySubmission};

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Indicator code such as 4.1
    pub(crate) indicator: String,
    /// Percentage value to classify; omit to see the threshold table
    pub(crate) value: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DirectoryArgs {
    #[arg(long)]
    pub(crate) province: Option<String>,
    #[arg(long)]
    pub(crate) district: Option<String>,
    /// Hospital, Puskesmas or NGO clinic
    #[arg(long, value_parser = parse_facility_type)]
    pub(crate) facility_type: Option<FacilityType>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum DashboardCommand {
    /// Dashboard for one facility
    Site(SiteDashboardArgs),
    /// Dashboard for a province, a district, or the whole directory
    District(DistrictDashboardArgs),
}

#[derive(Args, Debug)]
pub(crate) struct SiteDashboardArgs {
    #[arg(long)]
    pub(crate) facility_id: u32,
    /// Reporting quarter (YYYY-QN). Defaults to the configured quarter.
    #[arg(long, value_parser = parse_quarter)]
    pub(crate) quarter: Option<Quarter>,
}

#[derive(Args, Debug)]
pub(crate) struct DistrictDashboardArgs {
    #[arg(long)]
    pub(crate) province: Option<String>,
    #[arg(long)]
    pub(crate) district: Option<String>,
    /// Reporting quarter (YYYY-QN). Defaults to the configured quarter.
    #[arg(long, value_parser = parse_quarter)]
    pub(crate) quarter: Option<Quarter>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Facility to walk through the entry form.
    #[arg(long, default_value_t = 50)]
    pub(crate) facility_id: u32,
    /// Reporting quarter (YYYY-QN). Defaults to the configured quarter.
    #[arg(long, value_parser = parse_quarter)]
    pub(crate) quarter: Option<Quarter>,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(|err| AppError::Io(err.into()))?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let Some(indicator) = IndicatorCode::parse(&args.indicator) else {
        println!("{}: unknown indicator, no status", args.indicator);
        return Ok(());
    };
    println!("{} {}", indicator.code(), indicator.name());

    match args.value {
        Some(value) => {
            let label = classify_code(&args.indicator, Some(value))
                .map(|status| status.label())
                .unwrap_or("no status");
            println!("  {value:.1}%: {label}");
        }
        None => {
            let labels = indicator.thresholds().range_labels();
            for (status, range) in [
                ("Optimal", labels.optimal),
                ("Effective", labels.effective),
                ("Improving", labels.improving),
                ("Sub", labels.sub_improving),
                ("Stressed", labels.stressed),
            ] {
                println!("  {status:<10} {range}");
            }
        }
    }
    Ok(())
}

pub(crate) fn run_directory(args: DirectoryArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let directory = load_directory(&config.directory)?;
    let filter = FacilityFilter {
        province: args.province,
        district: args.district,
        facility_type: args.facility_type,
    };
    match (filter.province.as_deref(), filter.district.as_deref()) {
        (None, _) => println!("Provinces: {}", directory.provinces().join(", ")),
        (Some(province), None) => println!(
            "Districts in {province}: {}",
            directory.districts(province).join(", ")
        ),
        (Some(_), Some(_)) => {}
    }
    let facilities = directory.facilities(&filter);
    println!("{} supported facilities", facilities.len());
    for facility in facilities {
        println!(
            "{:>4}  {:<40} {:<12} {} / {}",
            facility.id.0,
            facility.name,
            facility.facility_type.label(),
            facility.province,
            facility.district
        );
    }
    Ok(())
}

pub(crate) fn run_dashboard(command: DashboardCommand) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let services = TrackerServices::new(
        load_directory(&config.directory)?,
        config.reporting.default_quarter,
    );
    match command {
        DashboardCommand::Site(args) => {
            let dashboard = services
                .dashboards
                .site(FacilityId(args.facility_id), args.quarter)?;
            print_json(&dashboard)
        }
        DashboardCommand::District(args) => {
            let scope = FacilityFilter {
                province: args.province,
                district: args.district,
                facility_type: None,
            };
            let dashboard = services.dashboards.district(&scope, args.quarter)?;
            print_json(&dashboard)
        }
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let quarter = args.quarter.unwrap_or(config.reporting.default_quarter);
    let services = TrackerServices::new(load_directory(&config.directory)?, quarter);
    let facility = services.entry.facility(FacilityId(args.facility_id))?;

    println!("TSP tracker demo for {}", quarter.label());
    render_selection(&services.directory, &facility);

    let current = sample_readings([92.0, 65.0, 78.0, 87.0, 58.0, 82.0]);
    let preview = services.entry.preview(&current);
    println!("\nLive preview for {}", facility.name);
    for view in &preview.indicators {
        let value = view
            .value
            .map(|value| format!("{value:.1}%"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {} {:<38} {:>7}  {}",
            view.code.code(),
            view.name,
            value,
            view.status_label.unwrap_or("no status")
        );
    }
    println!(
        "  {} at target | {} improving | {} stressed | {}",
        preview.summary.at_target,
        preview.summary.improving,
        preview.summary.stressed,
        preview.hint
    );

    if let Some(previous) = quarter.previous() {
        services.entry.submit(submission(
            &facility,
            previous,
            sample_readings([88.0, 60.0, 70.0, 85.0, 50.0, 78.0]),
            Pathway::Prioritization,
        ))?;
    }
    let saved = services
        .entry
        .submit(submission(&facility, quarter, current, Pathway::Rationalization))?;
    println!(
        "\nSaved {} for {} ({} indicators at target)",
        quarter,
        facility.name,
        saved.record.summary.at_target
    );

    for (peer, mmd) in district_hospitals(&services.directory, &facility)
        .into_iter()
        .zip([42.0, 38.0, 45.0])
    {
        services.entry.submit(submission(
            peer,
            quarter,
            sample_readings([90.0, 72.0, 74.0, 93.0, mmd, 80.0]),
            Pathway::Prioritization,
        ))?;
    }

    let site = services.dashboards.site(facility.id, Some(quarter))?;
    render_site(&site);

    let scope = FacilityFilter::default()
        .province(facility.province.clone())
        .district(facility.district.clone());
    let district = services.dashboards.district(&scope, Some(quarter))?;
    render_district(&district);

    println!("\n{} quarterly records stored", services.records.len());
    Ok(())
}

fn render_selection(directory: &FacilityDirectory, facility: &Facility) {
    let mut selection = FacilitySelection::default();
    selection.select_province(directory, Some(&facility.province));
    selection.select_district(directory, Some(&facility.district));
    selection.select_facility_type(directory, Some(facility.facility_type));
    selection.select_facility(directory, Some(facility.id));
    let options = selection.options(directory);
    println!(
        "Facility picker: {} provinces > {} districts in {} > {} facility types > {} {} sites",
        options.provinces.options.len(),
        options.districts.options.len(),
        facility.province,
        options.facility_types.options.len(),
        options.facilities.options.len(),
        facility.facility_type.label()
    );
}

fn district_hospitals<'a>(directory: &'a FacilityDirectory, facility: &Facility) -> Vec<&'a Facility> {
    let filter = FacilityFilter::default()
        .province(facility.province.clone())
        .district(facility.district.clone())
        .facility_type(FacilityType::Hospital);
    directory
        .facilities(&filter)
        .into_iter()
        .filter(|peer| peer.id != facility.id)
        .take(3)
        .collect()
}

fn sample_readings(values: [f64; 6]) -> BTreeMap<String, ReadingInput> {
    IndicatorCode::ordered()
        .into_iter()
        .zip(values)
        .map(|(indicator, value)| {
            (
                indicator.code().to_string(),
                ReadingInput {
                    value: Some(value),
                    is_na: false,
                },
            )
        })
        .collect()
}

fn submission(
    facility: &Facility,
    quarter: Quarter,
    readings: BTreeMap<String, ReadingInput>,
    pathway: Pathway,
) -> QuarterlySubmission {
    QuarterlySubmission {
        facility_id: facility.id,
        quarter,
        readings,
        patients_on_treatment: 342,
        pathway: Some(pathway),
        mentors: vec![MentorId("dewi".to_string())],
        created_by: Some("demo".to_string()),
    }
}

fn render_site(site: &SiteDashboard) {
    println!("\nSite dashboard: {} ({:?} data)", site.name, site.data_source);
    println!("  Pathway: {} ({})", site.pathway.name, site.pathway.contact_frequency);
    let trend: Vec<String> = site
        .at_target_history
        .iter()
        .map(|entry| format!("{} {}", entry.label, entry.at_target))
        .collect();
    println!("  Indicators at target: {}", trend.join(" | "));
    let history: Vec<&str> = site
        .pathway_history
        .iter()
        .map(|entry| entry.abbreviation)
        .collect();
    println!("  Pathway history: {}", history.join(" > "));
    for cause in &site.root_causes {
        println!("  Root cause: {} ({:?})", cause.name, cause.status);
    }
}

fn render_district(district: &DistrictDashboard) {
    println!(
        "\nDistrict dashboard: {} ({:?} data)",
        district.name, district.data_source
    );
    println!(
        "  {} supported sites | {} reporting | {} meeting target",
        district.total_sites, district.reporting_sites, district.sites_meeting_target
    );
    if let Some(change) = district.change_from_last_quarter {
        println!("  Change from last quarter: {change:+}");
    }
    for escalation in &district.escalations {
        println!("  Escalation: {}", escalation.description);
        for site in &escalation.affected_sites {
            println!("    - {} at {:.0}%", site.name, site.value);
        }
    }
}
