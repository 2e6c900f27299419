use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;
use tsp_tracker::config::DirectoryConfig;
use tsp_tracker::dashboard::DashboardService;
use tsp_tracker::directory::{DirectoryError, FacilityDirectory, FacilityType};
use tsp_tracker::records::{InMemoryQuarterlyRecordRepository, QuarterlyEntryService, Quarter};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type EntryService =
    QuarterlyEntryService<InMemoryQuarterlyRecordRepository, FacilityDirectory>;
pub(crate) type Dashboards = DashboardService<InMemoryQuarterlyRecordRepository>;

/// Services sharing one facility directory and one record store.
#[derive(Clone)]
pub(crate) struct TrackerServices {
    pub(crate) directory: Arc<FacilityDirectory>,
    pub(crate) records: Arc<InMemoryQuarterlyRecordRepository>,
    pub(crate) entry: Arc<EntryService>,
    pub(crate) dashboards: Arc<Dashboards>,
}

impl TrackerServices {
    pub(crate) fn new(directory: FacilityDirectory, default_quarter: Quarter) -> Self {
        let directory = Arc::new(directory);
        let records = Arc::new(InMemoryQuarterlyRecordRepository::new());
        let entry = Arc::new(QuarterlyEntryService::new(
            records.clone(),
            directory.clone(),
        ));
        let dashboards = Arc::new(DashboardService::new(
            directory.clone(),
            records.clone(),
            default_quarter,
        ));
        Self {
            directory,
            records,
            entry,
            dashboards,
        }
    }
}

/// The configured CSV export when one is set, otherwise the built-in list.
pub(crate) fn load_directory(config: &DirectoryConfig) -> Result<FacilityDirectory, DirectoryError> {
    let directory = match &config.facility_csv {
        Some(path) => FacilityDirectory::from_path(path)?,
        None => FacilityDirectory::standard(),
    };
    let source = match &config.facility_csv {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    };
    info!(
        facilities = directory.len(),
        %source,
        "facility directory loaded"
    );
    Ok(directory)
}

pub(crate) fn parse_quarter(raw: &str) -> Result<Quarter, String> {
    raw.trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-QN ({err})"))
}

pub(crate) fn parse_facility_type(raw: &str) -> Result<FacilityType, String> {
    raw.parse().map_err(|err| format!("{err}"))
}
