//! Site and district dashboards assembled from saved quarterly records, with the
//! program's reference dataset filling panels that have nothing recorded.

mod district;
pub mod router;
mod sample;
mod site;

pub use district::{
    district_dashboard, escalations, AffectedSite, DistrictDashboard, Escalation,
    IndicatorDistribution, MentorLoad, PathwayCount, RootCauseCount, SupportDelivered,
    SupportShare, TypeCount, ESCALATION_MIN_SITES,
};
pub use router::dashboard_router;
pub use site::{
    current_support, root_cause_entries, site_dashboard, AtTargetEntry, PathwayHistoryEntry,
    RootCauseEntry, SiteDashboard, SupportHoursEntry,
};

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::directory::{FacilityDirectory, FacilityFilter, FacilityId};
use crate::program::{mentor_roster, Mentor};
use crate::records::{Quarter, QuarterlyRecordRepository, RepositoryError};

/// Where a dashboard's performance panels came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Recorded,
    Sample,
}

/// Reads the directory and record store to build dashboards.
pub struct DashboardService<R> {
    directory: Arc<FacilityDirectory>,
    records: Arc<R>,
    roster: Vec<Mentor>,
    default_quarter: Quarter,
}

impl<R> DashboardService<R>
where
    R: QuarterlyRecordRepository + 'static,
{
    pub fn new(directory: Arc<FacilityDirectory>, records: Arc<R>, default_quarter: Quarter) -> Self {
        Self {
            directory,
            records,
            roster: mentor_roster(),
            default_quarter,
        }
    }

    pub fn default_quarter(&self) -> Quarter {
        self.default_quarter
    }

    pub fn site(
        &self,
        facility_id: FacilityId,
        quarter: Option<Quarter>,
    ) -> Result<SiteDashboard, DashboardError> {
        let facility = self
            .directory
            .get(facility_id)
            .ok_or(DashboardError::UnknownFacility(facility_id))?;
        let quarter = quarter.unwrap_or(self.default_quarter);
        let history = self.records.for_facility(facility_id)?;
        debug!(facility_id = %facility_id, %quarter, records = history.len(), "building site dashboard");
        Ok(site_dashboard(facility, quarter, &history, &self.roster))
    }

    pub fn district(
        &self,
        scope: &FacilityFilter,
        quarter: Option<Quarter>,
    ) -> Result<DistrictDashboard, DashboardError> {
        let quarter = quarter.unwrap_or(self.default_quarter);
        let current = self.records.for_quarter(quarter)?;
        let previous = match quarter.previous() {
            Some(previous) => self.records.for_quarter(previous)?,
            None => Vec::new(),
        };
        debug!(%quarter, records = current.len(), "building district dashboard");
        Ok(district_dashboard(
            &self.directory,
            scope,
            quarter,
            &current,
            &previous,
        ))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("facility {0} is not in the supported facility directory")]
    UnknownFacility(FacilityId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
