//! Quarterly performance tracking for HIV-care technical support mentoring.
//!
//! Facilities report six indicator percentages each quarter; the tracker
//! classifies them against fixed thresholds, summarizes the quarter, and feeds
//! site and district dashboards.

pub mod config;
pub mod dashboard;
pub mod directory;
pub mod error;
pub mod performance;
pub mod program;
pub mod records;
pub mod telemetry;

pub use config::AppConfig;
pub use error::AppError;
