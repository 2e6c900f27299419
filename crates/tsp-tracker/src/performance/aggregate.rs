use super::classifier::classify;
use super::indicator::IndicatorCode;
use super::status::{PerformanceStatus, StatusBand};
use crate::program::Pathway;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Indicators at target required before a lighter-touch pathway is suggested.
pub const LIGHTER_PATHWAY_MIN_AT_TARGET: usize = 4;

/// One indicator's entry for a facility-quarter.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "ReadingInput", try_from = "ReadingInput")]
pub enum IndicatorReading {
    Value(f64),
    NotApplicable,
    #[default]
    Missing,
}

impl IndicatorReading {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(*value),
            Self::NotApplicable | Self::Missing => None,
        }
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }

    pub fn status(&self, indicator: IndicatorCode) -> Option<PerformanceStatus> {
        classify(indicator, self.value())
    }
}

/// Wire shape of a reading: an optional value plus an explicit N/A flag.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReadingInput {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub is_na: bool,
}

impl ReadingInput {
    /// Loose conversion used by live aggregation: the N/A flag wins over a value.
    pub fn to_reading_lossy(self) -> IndicatorReading {
        match (self.is_na, self.value) {
            (true, _) => IndicatorReading::NotApplicable,
            (false, Some(value)) => IndicatorReading::Value(value),
            (false, None) => IndicatorReading::Missing,
        }
    }
}

impl From<IndicatorReading> for ReadingInput {
    fn from(reading: IndicatorReading) -> Self {
        match reading {
            IndicatorReading::Value(value) => Self {
                value: Some(value),
                is_na: false,
            },
            IndicatorReading::NotApplicable => Self {
                value: None,
                is_na: true,
            },
            IndicatorReading::Missing => Self::default(),
        }
    }
}

impl TryFrom<ReadingInput> for IndicatorReading {
    type Error = ConflictingReading;

    fn try_from(input: ReadingInput) -> Result<Self, Self::Error> {
        if input.is_na && input.value.is_some() {
            return Err(ConflictingReading);
        }
        Ok(input.to_reading_lossy())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a reading cannot carry both a value and a not-applicable flag")]
pub struct ConflictingReading;

pub type ReadingSet = BTreeMap<IndicatorCode, IndicatorReading>;

/// Advisory text derived from the at-target count. It never selects a pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityHint {
    LighterPathwayEligible,
    #[default]
    PrioritizationRecommended,
}

impl EligibilityHint {
    pub const fn message(self) -> &'static str {
        match self {
            Self::LighterPathwayEligible => "Eligible for Rationalization or higher",
            Self::PrioritizationRecommended => "Prioritization recommended",
        }
    }

    pub const fn candidate_pathways(self) -> &'static [Pathway] {
        match self {
            Self::LighterPathwayEligible => &[
                Pathway::Rationalization,
                Pathway::TransitionReady,
                Pathway::Graduation,
            ],
            Self::PrioritizationRecommended => &[Pathway::Prioritization],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub at_target: usize,
    pub improving: usize,
    pub stressed: usize,
    pub na: usize,
    pub eligible_for_lighter_pathway: bool,
    pub hint: EligibilityHint,
}

#[derive(Default)]
struct Tally {
    at_target: usize,
    improving: usize,
    stressed: usize,
    na: usize,
}

impl Tally {
    fn record(&mut self, indicator: IndicatorCode, reading: IndicatorReading) {
        if reading.is_not_applicable() {
            self.na += 1;
            return;
        }
        match reading.status(indicator).map(PerformanceStatus::band) {
            Some(StatusBand::AtTarget) => self.at_target += 1,
            Some(StatusBand::Improving) => self.improving += 1,
            Some(StatusBand::Stressed) => self.stressed += 1,
            None => {}
        }
    }

    fn finish(self) -> PerformanceSummary {
        let eligible = self.at_target >= LIGHTER_PATHWAY_MIN_AT_TARGET;
        PerformanceSummary {
            at_target: self.at_target,
            improving: self.improving,
            stressed: self.stressed,
            na: self.na,
            eligible_for_lighter_pathway: eligible,
            hint: if eligible {
                EligibilityHint::LighterPathwayEligible
            } else {
                EligibilityHint::PrioritizationRecommended
            },
        }
    }
}

pub fn aggregate(readings: &ReadingSet) -> PerformanceSummary {
    let mut tally = Tally::default();
    for (indicator, reading) in readings {
        tally.record(*indicator, *reading);
    }
    tally.finish()
}

/// Resolve dynamic codes into one reading per indicator. Unknown codes are
/// skipped. When several keys name the same indicator, the exact code wins,
/// otherwise the first key in map order.
pub fn reading_set_lossy(readings: &BTreeMap<String, ReadingInput>) -> ReadingSet {
    let mut set = ReadingSet::new();
    for (raw, input) in readings {
        let Some(indicator) = IndicatorCode::parse(raw) else {
            continue;
        };
        if raw == indicator.code() {
            set.insert(indicator, input.to_reading_lossy());
        } else {
            set.entry(indicator).or_insert_with(|| input.to_reading_lossy());
        }
    }
    set
}

/// Aggregate readings keyed by dynamic codes, counting each indicator once.
pub fn aggregate_inputs(readings: &BTreeMap<String, ReadingInput>) -> PerformanceSummary {
    aggregate(&reading_set_lossy(readings))
}

#[derive(Debug, Clone, Serialize)]
pub struct IndicatorStatusView {
    pub code: IndicatorCode,
    pub name: &'static str,
    pub value: Option<f64>,
    pub not_applicable: bool,
    pub target: f64,
    pub status: Option<PerformanceStatus>,
    pub status_label: Option<&'static str>,
}

/// One view per catalogue indicator, in code order, including unreported ones.
pub fn indicator_views(readings: &ReadingSet) -> Vec<IndicatorStatusView> {
    IndicatorCode::ordered()
        .into_iter()
        .map(|code| {
            let reading = readings.get(&code).copied().unwrap_or_default();
            let status = reading.status(code);
            IndicatorStatusView {
                code,
                name: code.name(),
                value: reading.value(),
                not_applicable: reading.is_not_applicable(),
                target: code.thresholds().optimal,
                status,
                status_label: status.map(PerformanceStatus::label),
            }
        })
        .collect()
}
