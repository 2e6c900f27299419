use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::{Facility, FacilityDirectory, FacilityId, FacilityType};

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read facility directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid facility directory CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("facility {0} appears more than once")]
    DuplicateFacility(FacilityId),
    #[error("facility {id} has unknown facility type '{value}'")]
    UnknownFacilityType { id: FacilityId, value: String },
    #[error("facility {id} is missing a {field}")]
    MissingField { id: FacilityId, field: &'static str },
}

#[derive(Debug, Deserialize)]
struct FacilityRow {
    id: u32,
    name: String,
    province: String,
    district: String,
    facility_type: String,
}

impl FacilityRow {
    fn into_facility(self) -> Result<Facility, DirectoryError> {
        let id = FacilityId(self.id);
        for (field, value) in [
            ("name", &self.name),
            ("province", &self.province),
            ("district", &self.district),
        ] {
            if value.is_empty() {
                return Err(DirectoryError::MissingField { id, field });
            }
        }

        let facility_type = self
            .facility_type
            .parse::<FacilityType>()
            .map_err(|err| DirectoryError::UnknownFacilityType { id, value: err.0 })?;

        Ok(Facility {
            id,
            name: self.name,
            province: self.province,
            district: self.district,
            facility_type,
        })
    }
}

impl FacilityDirectory {
    /// Load a directory export with header `id,name,province,district,facility_type`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DirectoryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut facilities = Vec::new();
        for row in csv_reader.deserialize::<FacilityRow>() {
            facilities.push(row?.into_facility()?);
        }

        Self::new(facilities)
    }
}
