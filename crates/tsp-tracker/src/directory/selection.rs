use serde::{Deserialize, Serialize};

use super::{non_blank, Facility, FacilityDirectory, FacilityFilter, FacilityId, FacilityType};

/// Picker state shared by the entry form and dashboards.
///
/// Every setter re-runs [`FacilitySelection::reconcile`], so a downstream choice
/// never survives an upstream filter it no longer matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilitySelection {
    pub province: Option<String>,
    pub district: Option<String>,
    pub facility_type: Option<FacilityType>,
    pub facility: Option<FacilityId>,
}

/// Options for one picker. A picker with nothing to offer is disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dropdown<T> {
    pub enabled: bool,
    pub options: Vec<T>,
}

impl<T> Dropdown<T> {
    fn from_options(options: Vec<T>) -> Self {
        Self {
            enabled: !options.is_empty(),
            options,
        }
    }

    fn disabled() -> Self {
        Self {
            enabled: false,
            options: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilityOption {
    pub id: FacilityId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionOptions {
    pub provinces: Dropdown<String>,
    pub districts: Dropdown<String>,
    pub facility_types: Dropdown<FacilityType>,
    pub facilities: Dropdown<FacilityOption>,
}

/// A single picker edit, as sent by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum SelectionChange {
    Province(Option<String>),
    District(Option<String>),
    FacilityType(Option<FacilityType>),
    Facility(Option<FacilityId>),
}

fn owned(value: Option<&str>) -> Option<String> {
    non_blank(value).map(str::to_string)
}

impl FacilitySelection {
    pub fn apply(&mut self, directory: &FacilityDirectory, change: SelectionChange) {
        match change {
            SelectionChange::Province(province) => {
                self.select_province(directory, province.as_deref())
            }
            SelectionChange::District(district) => {
                self.select_district(directory, district.as_deref())
            }
            SelectionChange::FacilityType(kind) => self.select_facility_type(directory, kind),
            SelectionChange::Facility(id) => self.select_facility(directory, id),
        }
    }

    pub fn select_province(&mut self, directory: &FacilityDirectory, province: Option<&str>) {
        let province = owned(province);
        if province != self.province {
            self.province = province;
            self.district = None;
            self.facility_type = None;
            self.facility = None;
        }
        self.reconcile(directory);
    }

    pub fn select_district(&mut self, directory: &FacilityDirectory, district: Option<&str>) {
        let district = owned(district);
        if district != self.district {
            self.district = district;
            self.facility_type = None;
            self.facility = None;
        }
        self.reconcile(directory);
    }

    pub fn select_facility_type(
        &mut self,
        directory: &FacilityDirectory,
        facility_type: Option<FacilityType>,
    ) {
        if facility_type != self.facility_type {
            self.facility_type = facility_type;
            self.facility = None;
        }
        self.reconcile(directory);
    }

    pub fn select_facility(&mut self, directory: &FacilityDirectory, facility: Option<FacilityId>) {
        self.facility = facility;
        self.reconcile(directory);
    }

    /// Drop, top to bottom, every selection the directory no longer offers.
    pub fn reconcile(&mut self, directory: &FacilityDirectory) {
        if let Some(province) = self.province.as_deref() {
            if !directory.provinces().contains(&province) {
                self.province = None;
            }
        }

        let district_valid = match (self.province.as_deref(), self.district.as_deref()) {
            (Some(province), Some(district)) => directory.districts(province).contains(&district),
            (_, None) => true,
            (None, Some(_)) => false,
        };
        if !district_valid {
            self.district = None;
        }

        if let Some(facility_type) = self.facility_type {
            let available =
                directory.facility_types(self.province.as_deref(), self.district.as_deref());
            if !available.contains(&facility_type) {
                self.facility_type = None;
            }
        }

        if let Some(id) = self.facility {
            let filter = self.filter();
            let still_listed = directory
                .get(id)
                .is_some_and(|facility| filter.matches(facility));
            if !still_listed {
                self.facility = None;
            }
        }
    }

    pub fn filter(&self) -> FacilityFilter {
        FacilityFilter {
            province: self.province.clone(),
            district: self.district.clone(),
            facility_type: self.facility_type,
        }
    }

    pub fn selected_facility<'a>(&self, directory: &'a FacilityDirectory) -> Option<&'a Facility> {
        self.facility.and_then(|id| directory.get(id))
    }

    pub fn options(&self, directory: &FacilityDirectory) -> SelectionOptions {
        let provinces = directory
            .provinces()
            .into_iter()
            .map(str::to_string)
            .collect();

        let districts = match self.province.as_deref() {
            Some(province) => Dropdown::from_options(
                directory
                    .districts(province)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            ),
            None => Dropdown::disabled(),
        };

        let facility_types = Dropdown::from_options(
            directory.facility_types(self.province.as_deref(), self.district.as_deref()),
        );

        let facilities = Dropdown::from_options(
            directory
                .facilities(&self.filter())
                .into_iter()
                .map(|facility| FacilityOption {
                    id: facility.id,
                    name: facility.name.clone(),
                })
                .collect(),
        );

        SelectionOptions {
            provinces: Dropdown::from_options(provinces),
            districts,
            facility_types,
            facilities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn east_jakarta_hospital() -> (FacilityDirectory, FacilitySelection) {
        let directory = FacilityDirectory::standard();
        let mut selection = FacilitySelection::default();
        selection.select_province(&directory, Some("Jakarta"));
        selection.select_district(&directory, Some("East Jakarta"));
        selection.select_facility_type(&directory, Some(FacilityType::Hospital));
        selection.select_facility(&directory, Some(FacilityId(71)));
        (directory, selection)
    }

    #[test]
    fn changing_province_clears_everything_downstream() {
        let (directory, mut selection) = east_jakarta_hospital();
        assert_eq!(selection.facility, Some(FacilityId(71)));

        selection.select_province(&directory, Some("Banten"));
        assert_eq!(selection.province.as_deref(), Some("Banten"));
        assert!(selection.district.is_none());
        assert!(selection.facility_type.is_none());
        assert!(selection.facility.is_none());
    }

    #[test]
    fn reselecting_same_province_keeps_matching_choices() {
        let (directory, mut selection) = east_jakarta_hospital();
        selection.select_province(&directory, Some("Jakarta"));
        assert_eq!(selection.district.as_deref(), Some("East Jakarta"));
        assert_eq!(selection.facility, Some(FacilityId(71)));
    }

    #[test]
    fn changing_district_clears_type_and_facility() {
        let (directory, mut selection) = east_jakarta_hospital();
        selection.select_district(&directory, Some("West Jakarta"));
        assert!(selection.facility_type.is_none());
        assert!(selection.facility.is_none());
    }

    #[test]
    fn changing_type_clears_facility() {
        let (directory, mut selection) = east_jakarta_hospital();
        selection.select_facility_type(&directory, Some(FacilityType::Puskesmas));
        assert!(selection.facility.is_none());
        assert_eq!(selection.district.as_deref(), Some("East Jakarta"));
    }

    #[test]
    fn facility_outside_filters_is_rejected() {
        let (directory, mut selection) = east_jakarta_hospital();
        // Facility 1 is a South Jakarta NGO clinic.
        selection.select_facility(&directory, Some(FacilityId(1)));
        assert!(selection.facility.is_none());
    }

    #[test]
    fn unknown_province_is_dropped() {
        let directory = FacilityDirectory::standard();
        let mut selection = FacilitySelection::default();
        selection.select_province(&directory, Some("Bali"));
        assert!(selection.province.is_none());
        let options = selection.options(&directory);
        assert!(!options.districts.enabled);
        assert!(options.districts.options.is_empty());
    }

    #[test]
    fn apply_deserialized_change_runs_cascade() {
        let (directory, mut selection) = east_jakarta_hospital();
        let change: SelectionChange =
            serde_json::from_str(r#"{"field": "province", "value": "West Java"}"#)
                .expect("change parses");
        selection.apply(&directory, change);
        assert_eq!(selection.province.as_deref(), Some("West Java"));
        assert!(selection.district.is_none());
        assert!(selection.facility.is_none());
    }

    #[test]
    fn options_disable_empty_dependent_dropdowns() {
        let directory = FacilityDirectory::standard();
        let mut selection = FacilitySelection::default();
        selection.select_province(&directory, Some("Jakarta"));
        selection.select_district(&directory, Some("East Jakarta"));

        let options = selection.options(&directory);
        assert!(options.districts.enabled);
        assert_eq!(
            options.facility_types.options,
            vec![FacilityType::Hospital, FacilityType::Puskesmas]
        );
        assert_eq!(options.facilities.options.len(), 27);
        assert_eq!(options.facilities.options[0].name, "PUSKESMAS KEC. CAKUNG");
    }
}
