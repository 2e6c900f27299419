use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{QuarterlyRecordView, QuarterlySubmission};
use super::quarter::Quarter;
use super::repository::{FacilityRepository, QuarterlyRecordRepository, RepositoryError};
use super::service::{EntryServiceError, QuarterlyEntryService};
use super::validation::RecordViolation;
use crate::directory::FacilityId;
use crate::performance::ReadingInput;

/// Endpoints behind the quarterly entry form.
pub fn quarterly_record_router<R, F>(service: Arc<QuarterlyEntryService<R, F>>) -> Router
where
    R: QuarterlyRecordRepository + 'static,
    F: FacilityRepository + 'static,
{
    Router::new()
        .route("/api/v1/quarterly-records", post(submit_handler::<R, F>))
        .route(
            "/api/v1/quarterly-records/preview",
            post(preview_handler::<R, F>),
        )
        .route(
            "/api/v1/quarterly-records/:facility_id/:quarter",
            get(record_handler::<R, F>),
        )
        .route(
            "/api/v1/facilities/:facility_id/records",
            get(history_handler::<R, F>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PreviewRequest {
    #[serde(default)]
    pub(crate) readings: BTreeMap<String, ReadingInput>,
}

fn error_response(status: StatusCode, message: impl ToString) -> Response {
    (status, Json(json!({ "error": message.to_string() }))).into_response()
}

fn service_error_response(error: EntryServiceError) -> Response {
    match error {
        EntryServiceError::Violation(violation @ RecordViolation::UnknownFacility(_)) => {
            error_response(StatusCode::NOT_FOUND, violation)
        }
        EntryServiceError::Violation(violation) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, violation)
        }
        EntryServiceError::Repository(RepositoryError::NotFound) => {
            error_response(StatusCode::NOT_FOUND, "quarterly record not found")
        }
        other => error_response(StatusCode::INTERNAL_SERVER_ERROR, other),
    }
}

pub(crate) async fn submit_handler<R, F>(
    State(service): State<Arc<QuarterlyEntryService<R, F>>>,
    Json(submission): Json<QuarterlySubmission>,
) -> Response
where
    R: QuarterlyRecordRepository + 'static,
    F: FacilityRepository + 'static,
{
    match service.submit(submission) {
        Ok(saved) => {
            let status = if saved.replaced_existing() {
                StatusCode::OK
            } else {
                StatusCode::CREATED
            };
            let facility = service.facility(saved.record.facility_id).ok();
            (status, Json(saved.record.view(facility.as_ref()))).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn preview_handler<R, F>(
    State(service): State<Arc<QuarterlyEntryService<R, F>>>,
    Json(request): Json<PreviewRequest>,
) -> Response
where
    R: QuarterlyRecordRepository + 'static,
    F: FacilityRepository + 'static,
{
    (StatusCode::OK, Json(service.preview(&request.readings))).into_response()
}

pub(crate) async fn record_handler<R, F>(
    State(service): State<Arc<QuarterlyEntryService<R, F>>>,
    Path((facility_id, quarter)): Path<(u32, String)>,
) -> Response
where
    R: QuarterlyRecordRepository + 'static,
    F: FacilityRepository + 'static,
{
    let quarter = match quarter.parse::<Quarter>() {
        Ok(quarter) => quarter,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, err),
    };
    let facility_id = FacilityId(facility_id);

    let lookup = service
        .facility(facility_id)
        .and_then(|facility| {
            service
                .get(facility_id, quarter)
                .map(|record| (record, facility))
        });
    match lookup {
        Ok((record, facility)) => {
            (StatusCode::OK, Json(record.view(Some(&facility)))).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn history_handler<R, F>(
    State(service): State<Arc<QuarterlyEntryService<R, F>>>,
    Path(facility_id): Path<u32>,
) -> Response
where
    R: QuarterlyRecordRepository + 'static,
    F: FacilityRepository + 'static,
{
    let facility_id = FacilityId(facility_id);
    let lookup = service
        .facility(facility_id)
        .and_then(|facility| {
            service
                .history(facility_id)
                .map(|records| (records, facility))
        });
    match lookup {
        Ok((records, facility)) => {
            let views: Vec<QuarterlyRecordView> = records
                .iter()
                .map(|record| record.view(Some(&facility)))
                .collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}
