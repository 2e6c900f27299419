use super::indicator::{IndicatorCode, Thresholds};
use super::status::PerformanceStatus;

impl Thresholds {
    /// Apply the tier chain. The optimal boundary is exclusive, every lower boundary inclusive.
    pub fn classify(&self, value: f64) -> PerformanceStatus {
        if value > self.optimal {
            PerformanceStatus::Optimal
        } else if value >= self.effective {
            PerformanceStatus::Effective
        } else if value >= self.improving {
            PerformanceStatus::Improving
        } else if value >= self.sub {
            PerformanceStatus::SubImproving
        } else {
            PerformanceStatus::Stressed
        }
    }
}

/// Classify a percentage for a known indicator.
///
/// Absent and non-finite values are not classified. Finite values outside
/// `0..=100` pass through the comparison chain unchanged; range checks belong
/// to the record boundary.
pub fn classify(indicator: IndicatorCode, value: Option<f64>) -> Option<PerformanceStatus> {
    let value = value.filter(|value| value.is_finite())?;
    Some(indicator.thresholds().classify(value))
}

/// Classify against a dynamic indicator code. Unknown codes yield `None`.
pub fn classify_code(code: &str, value: Option<f64>) -> Option<PerformanceStatus> {
    IndicatorCode::parse(code).and_then(|indicator| classify(indicator, value))
}
