use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six core HIV-care indicators tracked each quarter, keyed by their `"N.M"` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndicatorCode {
    #[serde(rename = "1.1")]
    TestingEnrollment,
    #[serde(rename = "2.1")]
    ArtInitiation,
    #[serde(rename = "3.1")]
    AdvancedHivDisease,
    #[serde(rename = "4.1")]
    TreatmentContinuity,
    #[serde(rename = "5.1")]
    MultiMonthDispensing,
    #[serde(rename = "6.1")]
    ViralLoadTesting,
}

impl IndicatorCode {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::TestingEnrollment,
            Self::ArtInitiation,
            Self::AdvancedHivDisease,
            Self::TreatmentContinuity,
            Self::MultiMonthDispensing,
            Self::ViralLoadTesting,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::TestingEnrollment => "1.1",
            Self::ArtInitiation => "2.1",
            Self::AdvancedHivDisease => "3.1",
            Self::TreatmentContinuity => "4.1",
            Self::MultiMonthDispensing => "5.1",
            Self::ViralLoadTesting => "6.1",
        }
    }

    /// Resolve a dynamic code such as `"4.1"`. Unknown codes yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|indicator| indicator.code() == raw)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::TestingEnrollment => "HIV Testing and Service Enrollment",
            Self::ArtInitiation => "ART Initiation",
            Self::AdvancedHivDisease => "Advanced HIV Disease (CD4 Testing)",
            Self::TreatmentContinuity => "Treatment Continuity",
            Self::MultiMonthDispensing => "Multi-Month Dispensing (MMD)",
            Self::ViralLoadTesting => "Viral Load Testing",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::TestingEnrollment => {
                "Percentage of newly diagnosed PLHIV enrolled in HIV treatment services"
            }
            Self::ArtInitiation => "Percentage of enrolled PLHIV that initiate ART within 1-7 days",
            Self::AdvancedHivDisease => {
                "Percentage of newly enrolled PLHIV that receive baseline CD4 testing"
            }
            Self::TreatmentContinuity => {
                "Percentage of current-on-treatment PLHIV that continue treatment"
            }
            Self::MultiMonthDispensing => {
                "Percentage of eligible PLHIV that receive multi-month dispensing (3-6 months)"
            }
            Self::ViralLoadTesting => {
                "Percentage of eligible PLHIV (>=6 months on ART) that receive viral load testing"
            }
        }
    }

    pub const fn thresholds(self) -> Thresholds {
        match self {
            Self::TestingEnrollment => Thresholds::new(95.0, 90.0, 85.0, 80.0),
            Self::ArtInitiation => Thresholds::new(80.0, 70.0, 60.0, 50.0),
            Self::AdvancedHivDisease => Thresholds::new(80.0, 70.0, 60.0, 50.0),
            Self::TreatmentContinuity => Thresholds::new(98.0, 96.0, 92.0, 90.0),
            Self::MultiMonthDispensing => Thresholds::new(75.0, 65.0, 55.0, 45.0),
            Self::ViralLoadTesting => Thresholds::new(86.0, 80.0, 75.0, 70.0),
        }
    }
}

impl fmt::Display for IndicatorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for IndicatorCode {
    type Err = UnknownIndicator;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw).ok_or_else(|| UnknownIndicator(raw.trim().to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown indicator code '{0}'")]
pub struct UnknownIndicator(pub String);

/// Percentage cut points for one indicator, strictly decreasing from `optimal` to `sub`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub optimal: f64,
    pub effective: f64,
    pub improving: f64,
    pub sub: f64,
}

impl Thresholds {
    pub const fn new(optimal: f64, effective: f64, improving: f64, sub: f64) -> Self {
        Self {
            optimal,
            effective,
            improving,
            sub,
        }
    }

    pub fn is_strictly_decreasing(&self) -> bool {
        self.optimal > self.effective
            && self.effective > self.improving
            && self.improving > self.sub
            && self.sub >= 0.0
    }

    /// Range labels shown in the entry form's threshold reference table.
    pub fn range_labels(&self) -> ThresholdRangeLabels {
        ThresholdRangeLabels {
            optimal: format!(">{}%", self.optimal),
            effective: format!("{}-{}%", self.effective, self.optimal - 1.0),
            improving: format!("{}-{}%", self.improving, self.effective - 1.0),
            sub_improving: format!("{}-{}%", self.sub, self.improving - 1.0),
            stressed: format!("<{}%", self.sub),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThresholdRangeLabels {
    pub optimal: String,
    pub effective: String,
    pub improving: String,
    pub sub_improving: String,
    pub stressed: String,
}

/// Catalogue entry exposed to the entry form and the indicator API.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorDefinitionView {
    pub code: IndicatorCode,
    pub name: &'static str,
    pub description: &'static str,
    pub thresholds: Thresholds,
    pub ranges: ThresholdRangeLabels,
}

pub fn indicator_catalogue() -> Vec<IndicatorDefinitionView> {
    IndicatorCode::ordered()
        .into_iter()
        .map(|code| {
            let thresholds = code.thresholds();
            IndicatorDefinitionView {
                code,
                name: code.name(),
                description: code.description(),
                thresholds,
                ranges: thresholds.range_labels(),
            }
        })
        .collect()
}
