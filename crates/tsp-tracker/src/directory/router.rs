use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::selection::{FacilitySelection, SelectionChange, SelectionOptions};
use super::{non_blank, Facility, FacilityDirectory, FacilityFilter, FacilityId, FacilityType};

/// Read-only endpoints backing the province/district/type/facility pickers.
pub fn directory_router(directory: Arc<FacilityDirectory>) -> Router {
    Router::new()
        .route("/api/v1/directory/provinces", get(provinces_handler))
        .route("/api/v1/directory/districts", get(districts_handler))
        .route(
            "/api/v1/directory/facility-types",
            get(facility_types_handler),
        )
        .route("/api/v1/directory/facilities", get(facilities_handler))
        .route(
            "/api/v1/directory/facilities/:facility_id",
            get(facility_handler),
        )
        .route("/api/v1/directory/selection", post(selection_handler))
        .with_state(directory)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DirectoryQuery {
    #[serde(default)]
    pub(crate) province: Option<String>,
    #[serde(default)]
    pub(crate) district: Option<String>,
    #[serde(default)]
    pub(crate) facility_type: Option<String>,
}

impl DirectoryQuery {
    fn filter(&self) -> Result<FacilityFilter, Response> {
        let facility_type = match non_blank(self.facility_type.as_deref()) {
            Some(raw) => Some(raw.parse::<FacilityType>().map_err(|err| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response()
            })?),
            None => None,
        };

        Ok(FacilityFilter {
            province: self.province.clone(),
            district: self.district.clone(),
            facility_type,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SelectionRequest {
    #[serde(default)]
    pub(crate) current: FacilitySelection,
    pub(crate) change: SelectionChange,
}

#[derive(Debug, Serialize)]
pub(crate) struct SelectionResponse {
    pub(crate) selection: FacilitySelection,
    pub(crate) options: SelectionOptions,
}

pub(crate) async fn provinces_handler(
    State(directory): State<Arc<FacilityDirectory>>,
) -> Json<Vec<String>> {
    Json(
        directory
            .provinces()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

pub(crate) async fn districts_handler(
    State(directory): State<Arc<FacilityDirectory>>,
    Query(query): Query<DirectoryQuery>,
) -> Json<Vec<String>> {
    let province = query.province.unwrap_or_default();
    Json(
        directory
            .districts(&province)
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

pub(crate) async fn facility_types_handler(
    State(directory): State<Arc<FacilityDirectory>>,
    Query(query): Query<DirectoryQuery>,
) -> Json<Vec<FacilityType>> {
    Json(directory.facility_types(query.province.as_deref(), query.district.as_deref()))
}

pub(crate) async fn facilities_handler(
    State(directory): State<Arc<FacilityDirectory>>,
    Query(query): Query<DirectoryQuery>,
) -> Response {
    match query.filter() {
        Ok(filter) => {
            let facilities: Vec<Facility> = directory
                .facilities(&filter)
                .into_iter()
                .cloned()
                .collect();
            (StatusCode::OK, Json(facilities)).into_response()
        }
        Err(response) => response,
    }
}

pub(crate) async fn facility_handler(
    State(directory): State<Arc<FacilityDirectory>>,
    Path(facility_id): Path<u32>,
) -> Response {
    let id = FacilityId(facility_id);
    match directory.get(id) {
        Some(facility) => (StatusCode::OK, Json(facility.clone())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("facility {id} not found") })),
        )
            .into_response(),
    }
}

pub(crate) async fn selection_handler(
    State(directory): State<Arc<FacilityDirectory>>,
    Json(request): Json<SelectionRequest>,
) -> Json<SelectionResponse> {
    let SelectionRequest {
        mut current,
        change,
    } = request;
    current.reconcile(&directory);
    current.apply(&directory, change);
    let options = current.options(&directory);
    Json(SelectionResponse {
        selection: current,
        options,
    })
}
