use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::classifier::classify_code;
use super::indicator::{indicator_catalogue, IndicatorDefinitionView};
use super::status::PerformanceStatus;

/// Indicator catalogue and ad-hoc classification endpoints.
pub fn indicator_router() -> Router {
    Router::new()
        .route("/api/v1/indicators", get(catalogue_handler))
        .route("/api/v1/indicators/classify", post(classify_handler))
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyRequest {
    pub(crate) indicator: String,
    #[serde(default)]
    pub(crate) value: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ClassifyResponse {
    pub(crate) indicator: String,
    pub(crate) value: Option<f64>,
    pub(crate) status: Option<PerformanceStatus>,
    pub(crate) status_label: Option<&'static str>,
}

pub(crate) async fn catalogue_handler() -> Json<Vec<IndicatorDefinitionView>> {
    Json(indicator_catalogue())
}

pub(crate) async fn classify_handler(
    Json(request): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let status = classify_code(&request.indicator, request.value);
    Json(ClassifyResponse {
        indicator: request.indicator,
        value: request.value,
        status,
        status_label: status.map(PerformanceStatus::label),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn classify_handler_reports_null_for_unknown_indicator() {
        let Json(body) = classify_handler(Json(ClassifyRequest {
            indicator: "9.9".to_string(),
            value: Some(50.0),
        }))
        .await;
        assert!(body.status.is_none());
        assert!(body.status_label.is_none());
    }

    #[tokio::test]
    async fn classify_handler_labels_known_indicator() {
        let Json(body) = classify_handler(Json(ClassifyRequest {
            indicator: "4.1".to_string(),
            value: Some(98.5),
        }))
        .await;
        assert_eq!(body.status, Some(PerformanceStatus::Optimal));
        assert_eq!(body.status_label, Some("Optimal"));
    }

    #[tokio::test]
    async fn catalogue_lists_six_indicators() {
        let Json(body) = catalogue_handler().await;
        assert_eq!(body.len(), 6);
        assert_eq!(body[3].code.code(), "4.1");
        assert_eq!(body[3].ranges.optimal, ">98%");
    }
}
