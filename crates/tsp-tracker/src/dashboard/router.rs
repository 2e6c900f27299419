use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::{DashboardError, DashboardService};
use crate::directory::{FacilityFilter, FacilityId};
use crate::records::{Quarter, QuarterlyRecordRepository};

pub fn dashboard_router<R>(service: Arc<DashboardService<R>>) -> Router
where
    R: QuarterlyRecordRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/dashboards/site/:facility_id",
            get(site_handler::<R>),
        )
        .route("/api/v1/dashboards/district", get(district_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DashboardQuery {
    #[serde(default)]
    pub(crate) province: Option<String>,
    #[serde(default)]
    pub(crate) district: Option<String>,
    #[serde(default)]
    pub(crate) quarter: Option<String>,
}

impl DashboardQuery {
    fn quarter(&self) -> Result<Option<Quarter>, Response> {
        match self.quarter.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|err| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("{err}") })),
                )
                    .into_response()
            }),
        }
    }
}

fn dashboard_error_response(error: DashboardError) -> Response {
    let status = match error {
        DashboardError::UnknownFacility(_) => StatusCode::NOT_FOUND,
        DashboardError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

pub(crate) async fn site_handler<R>(
    State(service): State<Arc<DashboardService<R>>>,
    Path(facility_id): Path<u32>,
    Query(query): Query<DashboardQuery>,
) -> Response
where
    R: QuarterlyRecordRepository + 'static,
{
    let quarter = match query.quarter() {
        Ok(quarter) => quarter,
        Err(response) => return response,
    };
    match service.site(FacilityId(facility_id), quarter) {
        Ok(dashboard) => (StatusCode::OK, Json(dashboard)).into_response(),
        Err(error) => dashboard_error_response(error),
    }
}

pub(crate) async fn district_handler<R>(
    State(service): State<Arc<DashboardService<R>>>,
    Query(query): Query<DashboardQuery>,
) -> Response
where
    R: QuarterlyRecordRepository + 'static,
{
    let quarter = match query.quarter() {
        Ok(quarter) => quarter,
        Err(response) => return response,
    };
    let scope = FacilityFilter {
        province: query.province,
        district: query.district,
        facility_type: None,
    };
    match service.district(&scope, quarter) {
        Ok(dashboard) => (StatusCode::OK, Json(dashboard)).into_response(),
        Err(error) => dashboard_error_response(error),
    }
}
