//! Indicator thresholds, performance classification, and facility-quarter aggregation.
//!
//! Everything here is a pure function of its inputs. Callers recompute on every
//! edit; nothing is cached.

mod aggregate;
mod classifier;
mod indicator;
pub mod router;
mod status;

pub use aggregate::{
    aggregate, aggregate_inputs, indicator_views, reading_set_lossy, ConflictingReading,
    EligibilityHint, IndicatorReading, IndicatorStatusView, PerformanceSummary, ReadingInput,
    ReadingSet, LIGHTER_PATHWAY_MIN_AT_TARGET,
};
pub use classifier::{classify, classify_code};
pub use indicator::{
    indicator_catalogue, IndicatorCode, IndicatorDefinitionView, ThresholdRangeLabels,
    Thresholds, UnknownIndicator,
};
pub use router::indicator_router;
pub use status::{PerformanceStatus, StatusBand};
