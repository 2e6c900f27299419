use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

use crate::directory::FacilityDirectory;
use crate::records::router::{record_handler, submit_handler};
use crate::records::QuarterlyEntryService;

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn submit_route_creates_then_overwrites() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let body = serde_json::to_value(submission()).expect("submission serializes");

    let created = router
        .clone()
        .oneshot(json_request("/api/v1/quarterly-records", body.clone()))
        .await
        .expect("route executes");
    assert_eq!(created.status(), StatusCode::CREATED);
    let payload = read_json_body(created).await;
    assert_eq!(payload["facility_name"], "PUSKESMAS KEC. KRAMAT JATI");
    assert_eq!(payload["quarter"], "2025-Q1");
    assert_eq!(payload["summary"]["at_target"], 3);
    assert_eq!(payload["pathway"]["name"], "Rationalization");

    let replaced = router
        .oneshot(json_request("/api/v1/quarterly-records", body))
        .await
        .expect("route executes");
    assert_eq!(replaced.status(), StatusCode::OK);
}

#[tokio::test]
async fn submit_handler_returns_unprocessable_without_pathway() {
    let (service, _) = build_service();
    let mut submission = submission();
    submission.pathway = None;

    let response = submit_handler(State(Arc::new(service)), axum::Json(submission)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("pathway"));
}

#[tokio::test]
async fn submit_handler_maps_violations_like_lookups() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let mut unknown_facility = submission();
    unknown_facility.facility_id = crate::directory::FacilityId(4242);
    let response = submit_handler(State(service.clone()), axum::Json(unknown_facility)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let mut duplicated = submission();
    duplicated.readings.insert(" 4.1".to_string(), reading(99.0));
    let response = submit_handler(State(service.clone()), axum::Json(duplicated)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("more than once"));

    let mut unknown_mentor = submission();
    unknown_mentor.mentors = vec![crate::program::MentorId("agus".to_string())];
    let response = submit_handler(State(service), axum::Json(unknown_mentor)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(QuarterlyEntryService::new(
        Arc::new(UnavailableRepository),
        Arc::new(FacilityDirectory::standard()),
    ));

    let response = submit_handler(State(service), axum::Json(submission())).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn preview_route_recomputes_summary() {
    let (service, _) = build_service();
    let response = router_with_service(service)
        .oneshot(json_request(
            "/api/v1/quarterly-records/preview",
            serde_json::json!({
                "readings": {
                    "1.1": { "value": 96.0 },
                    "2.1": { "value": 85.0 },
                    "3.1": { "value": 81.0 },
                    "4.1": { "value": 99.0 },
                    "6.1": { "is_na": true }
                }
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["summary"]["at_target"], 4);
    assert_eq!(payload["summary"]["na"], 1);
    assert_eq!(payload["summary"]["eligible_for_lighter_pathway"], true);
    assert_eq!(payload["hint"], "Eligible for Rationalization or higher");
}

#[tokio::test]
async fn preview_route_counts_padded_codes_once() {
    let (service, _) = build_service();
    let response = router_with_service(service)
        .oneshot(json_request(
            "/api/v1/quarterly-records/preview",
            serde_json::json!({
                "readings": {
                    "1.1": { "value": 99.0 },
                    " 1.1": { "value": 99.0 },
                    "1.1 ": { "value": 99.0 },
                    "\t1.1": { "value": 99.0 }
                }
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["summary"]["at_target"], 1);
    assert_eq!(payload["summary"]["eligible_for_lighter_pathway"], false);
    let views_at_target = payload["indicators"]
        .as_array()
        .map(|views| {
            views
                .iter()
                .filter(|view| view["status"] == "optimal")
                .count()
        })
        .unwrap_or_default();
    assert_eq!(views_at_target, 1);
}

#[tokio::test]
async fn record_route_returns_saved_quarter() {
    let (service, _) = build_service();
    service.submit(submission()).expect("submission saves");

    let response = router_with_service(service)
        .oneshot(
            Request::get("/api/v1/quarterly-records/50/2025-Q1")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["indicators"][0]["status"], "effective");
    assert_eq!(payload["indicators"][3]["status"], "stressed");
}

#[tokio::test]
async fn record_handler_distinguishes_bad_quarter_and_missing_record() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let bad = record_handler(
        State(service.clone()),
        Path((KRAMAT_JATI.0, "2025-Q7".to_string())),
    )
    .await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

    let missing = record_handler(
        State(service.clone()),
        Path((KRAMAT_JATI.0, "2024-Q1".to_string())),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let unknown = record_handler(State(service), Path((4242, "2025-Q1".to_string()))).await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn history_route_lists_saved_quarters() {
    let (service, _) = build_service();
    service.submit(submission()).expect("submission saves");

    let response = router_with_service(service)
        .oneshot(
            Request::get("/api/v1/facilities/50/records")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(1));
    assert_eq!(payload[0]["quarter_label"], "Q1 2025 (Jan - Mar)");
}
