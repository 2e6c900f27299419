//! Supported facility directory and the cascading province/district/type filters
//! that feed every facility picker.

mod import;
pub mod router;
mod seed;
mod selection;

pub use import::DirectoryError;
pub use router::directory_router;
pub use selection::{
    Dropdown, FacilityOption, FacilitySelection, SelectionChange, SelectionOptions,
};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacilityId(pub u32);

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Facility category. Variants are declared alphabetically by label so the
/// derived ordering matches the sorted dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacilityType {
    Hospital,
    #[serde(rename = "NGO clinic")]
    NgoClinic,
    Puskesmas,
}

impl FacilityType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Hospital, Self::NgoClinic, Self::Puskesmas]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hospital => "Hospital",
            Self::NgoClinic => "NGO clinic",
            Self::Puskesmas => "Puskesmas",
        }
    }
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FacilityType {
    type Err = UnknownFacilityType;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().replace(['-', '_'], " ");
        Self::ordered()
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownFacilityType(raw.trim().to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown facility type '{0}'")]
pub struct UnknownFacilityType(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    pub province: String,
    pub district: String,
    pub facility_type: FacilityType,
}

/// Optional filters; blank strings count as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacilityFilter {
    pub province: Option<String>,
    pub district: Option<String>,
    pub facility_type: Option<FacilityType>,
}

impl FacilityFilter {
    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    pub fn district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    pub fn facility_type(mut self, facility_type: FacilityType) -> Self {
        self.facility_type = Some(facility_type);
        self
    }

    fn matches(&self, facility: &Facility) -> bool {
        non_blank(self.province.as_deref()).map_or(true, |p| facility.province == p)
            && non_blank(self.district.as_deref()).map_or(true, |d| facility.district == d)
            && self
                .facility_type
                .map_or(true, |kind| facility.facility_type == kind)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn by_display_name(a: &&Facility, b: &&Facility) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then(a.id.cmp(&b.id))
}

/// Read-only facility list kept sorted by id.
#[derive(Debug, Clone)]
pub struct FacilityDirectory {
    facilities: Vec<Facility>,
}

impl FacilityDirectory {
    pub fn new(mut facilities: Vec<Facility>) -> Result<Self, DirectoryError> {
        facilities.sort_by_key(|facility| facility.id);
        if let Some(pair) = facilities
            .windows(2)
            .find(|pair| pair[0].id == pair[1].id)
        {
            return Err(DirectoryError::DuplicateFacility(pair[1].id));
        }
        Ok(Self { facilities })
    }

    /// The 146 facilities supported by the program.
    pub fn standard() -> Self {
        let mut facilities = seed::supported_facilities();
        facilities.sort_by_key(|facility| facility.id);
        Self { facilities }
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Facility> {
        self.facilities.iter()
    }

    pub fn get(&self, id: FacilityId) -> Option<&Facility> {
        self.facilities
            .binary_search_by_key(&id, |facility| facility.id)
            .ok()
            .map(|index| &self.facilities[index])
    }

    pub fn provinces(&self) -> Vec<&str> {
        self.facilities
            .iter()
            .map(|facility| facility.province.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn districts(&self, province: &str) -> Vec<&str> {
        let Some(province) = non_blank(Some(province)) else {
            return Vec::new();
        };
        self.facilities
            .iter()
            .filter(|facility| facility.province == province)
            .map(|facility| facility.district.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn facility_types(
        &self,
        province: Option<&str>,
        district: Option<&str>,
    ) -> Vec<FacilityType> {
        let filter = FacilityFilter {
            province: province.map(str::to_string),
            district: district.map(str::to_string),
            facility_type: None,
        };
        self.facilities
            .iter()
            .filter(|facility| filter.matches(facility))
            .map(|facility| facility.facility_type)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Facilities matching every supplied filter, sorted by display name.
    pub fn facilities(&self, filter: &FacilityFilter) -> Vec<&Facility> {
        let mut matches: Vec<&Facility> = self
            .facilities
            .iter()
            .filter(|facility| filter.matches(facility))
            .collect();
        matches.sort_by(by_display_name);
        matches
    }
}
