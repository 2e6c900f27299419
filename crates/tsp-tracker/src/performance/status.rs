use serde::{Deserialize, Serialize};

/// Performance tier assigned to an indicator value.
///
/// Variants are declared from worst to best so the derived ordering reads
/// `Stressed < SubImproving < Improving < Effective < Optimal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerformanceStatus {
    Stressed,
    SubImproving,
    Improving,
    Effective,
    Optimal,
}

impl PerformanceStatus {
    /// Best tier first, matching how dashboards list the bands.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Optimal,
            Self::Effective,
            Self::Improving,
            Self::SubImproving,
            Self::Stressed,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::Effective => "Effective",
            Self::Improving => "Improving",
            Self::SubImproving => "Sub",
            Self::Stressed => "Stressed",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Effective => "effective",
            Self::Improving => "improving",
            Self::SubImproving => "sub-improving",
            Self::Stressed => "stressed",
        }
    }

    pub const fn band(self) -> StatusBand {
        match self {
            Self::Optimal | Self::Effective => StatusBand::AtTarget,
            Self::Improving | Self::SubImproving => StatusBand::Improving,
            Self::Stressed => StatusBand::Stressed,
        }
    }

    pub const fn is_at_target(self) -> bool {
        matches!(self.band(), StatusBand::AtTarget)
    }
}

/// Coarse grouping used by the summary counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBand {
    AtTarget,
    Improving,
    Stressed,
}
