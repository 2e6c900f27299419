use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Technical support pathway chosen by program staff for a facility-quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pathway {
    Prioritization,
    Rationalization,
    TransitionReady,
    Graduation,
    ReEngagement,
}

impl Pathway {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Prioritization,
            Self::Rationalization,
            Self::TransitionReady,
            Self::Graduation,
            Self::ReEngagement,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Prioritization => "prioritization",
            Self::Rationalization => "rationalization",
            Self::TransitionReady => "transition-ready",
            Self::Graduation => "graduation",
            Self::ReEngagement => "re-engagement",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Prioritization => "Prioritization",
            Self::Rationalization => "Rationalization",
            Self::TransitionReady => "Transition-Ready",
            Self::Graduation => "Graduation",
            Self::ReEngagement => "Re-engagement",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Prioritization => "Intensive weekly support",
            Self::Rationalization => "Targeted monthly support",
            Self::TransitionReady => "Light-touch quarterly support",
            Self::Graduation => "On-request support only",
            Self::ReEngagement => "Time-limited targeted support",
        }
    }

    pub const fn contact_frequency(self) -> &'static str {
        match self {
            Self::Prioritization => "Weekly",
            Self::Rationalization => "Monthly",
            Self::TransitionReady => "Quarterly",
            Self::Graduation => "On-request",
            Self::ReEngagement => "Weekly (time-limited)",
        }
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Prioritization => "PRI",
            Self::Rationalization => "RAT",
            Self::TransitionReady => "TRA",
            Self::Graduation => "GRA",
            Self::ReEngagement => "REE",
        }
    }

    pub fn view(self) -> PathwayView {
        PathwayView {
            pathway: self,
            name: self.name(),
            description: self.description(),
            contact_frequency: self.contact_frequency(),
        }
    }
}

impl fmt::Display for Pathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Pathway {
    type Err = UnknownPathway;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|pathway| pathway.key().eq_ignore_ascii_case(raw))
            .ok_or_else(|| UnknownPathway(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pathway '{0}'")]
pub struct UnknownPathway(pub String);

#[derive(Debug, Clone, Serialize)]
pub struct PathwayView {
    pub pathway: Pathway,
    pub name: &'static str,
    pub description: &'static str,
    pub contact_frequency: &'static str,
}
