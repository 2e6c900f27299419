use crate::config::ConfigError;
use crate::dashboard::DashboardError;
use crate::directory::DirectoryError;
use crate::records::{EntryServiceError, QuarterParseError, RecordViolation, RepositoryError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Directory(DirectoryError),
    Entry(EntryServiceError),
    Dashboard(DashboardError),
    Quarter(QuarterParseError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Directory(err) => write!(f, "facility directory error: {}", err),
            AppError::Entry(err) => write!(f, "quarterly entry error: {}", err),
            AppError::Dashboard(err) => write!(f, "dashboard error: {}", err),
            AppError::Quarter(err) => write!(f, "invalid quarter: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Directory(err) => Some(err),
            AppError::Entry(err) => Some(err),
            AppError::Dashboard(err) => Some(err),
            AppError::Quarter(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Quarter(_) => StatusCode::BAD_REQUEST,
            AppError::Entry(EntryServiceError::Violation(RecordViolation::UnknownFacility(_)))
            | AppError::Entry(EntryServiceError::Repository(RepositoryError::NotFound))
            | AppError::Dashboard(DashboardError::UnknownFacility(_)) => StatusCode::NOT_FOUND,
            AppError::Entry(EntryServiceError::Violation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Directory(_)
            | AppError::Entry(EntryServiceError::Repository(_))
            | AppError::Dashboard(DashboardError::Repository(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<DirectoryError> for AppError {
    fn from(value: DirectoryError) -> Self {
        Self::Directory(value)
    }
}

impl From<EntryServiceError> for AppError {
    fn from(value: EntryServiceError) -> Self {
        Self::Entry(value)
    }
}

impl From<DashboardError> for AppError {
    fn from(value: DashboardError) -> Self {
        Self::Dashboard(value)
    }
}

impl From<QuarterParseError> for AppError {
    fn from(value: QuarterParseError) -> Self {
        Self::Quarter(value)
    }
}
