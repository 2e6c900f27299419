use tsp_tracker::directory::{
    DirectoryError, FacilityDirectory, FacilityFilter, FacilityId, FacilitySelection,
    FacilityType, SelectionChange,
};
use tsp_tracker::records::FacilityRepository;

#[test]
fn standard_directory_covers_program_sites() {
    let directory = FacilityDirectory::standard();
    assert_eq!(directory.len(), 146);

    let east_jakarta = FacilityFilter::default()
        .province("Jakarta")
        .district("East Jakarta");
    let facilities = directory.facilities(&east_jakarta);
    assert_eq!(facilities.len(), 27);
    assert!(facilities
        .iter()
        .all(|facility| facility.district == "East Jakarta"));

    let hospitals = directory.facilities(&east_jakarta.facility_type(FacilityType::Hospital));
    assert_eq!(hospitals.len(), 17);
}

#[test]
fn facility_lookup_resolves_names() {
    let directory = FacilityDirectory::standard();
    let facility = directory.get(FacilityId(50)).expect("known facility");
    assert_eq!(facility.name, "PUSKESMAS KEC. KRAMAT JATI");
    assert_eq!(facility.facility_type, FacilityType::Puskesmas);
    assert!(directory.get(FacilityId(9999)).is_none());
}

#[test]
fn csv_export_replaces_the_built_in_list() {
    let csv = "id,name,province,district,facility_type\n\
               12,PUSKESMAS CIPUTAT,Banten,Kota Tangerang Selatan,Puskesmas\n\
               4,RS QADR,Banten,Tangerang,Hospital\n";
    let directory = FacilityDirectory::from_csv_reader(csv.as_bytes()).expect("import succeeds");

    assert_eq!(directory.len(), 2);
    assert_eq!(directory.provinces(), vec!["Banten"]);
    let ids: Vec<FacilityId> = directory.iter().map(|facility| facility.id).collect();
    assert_eq!(ids, vec![FacilityId(4), FacilityId(12)]);
}

#[test]
fn csv_export_rejects_duplicate_ids_and_unknown_types() {
    let duplicate = "id,name,province,district,facility_type\n\
                     1,A,Banten,Tangerang,Hospital\n\
                     1,B,Banten,Tangerang,Hospital\n";
    assert!(matches!(
        FacilityDirectory::from_csv_reader(duplicate.as_bytes()),
        Err(DirectoryError::DuplicateFacility(FacilityId(1)))
    ));

    let unknown_type = "id,name,province,district,facility_type\n\
                        2,B,Banten,Tangerang,Pharmacy\n";
    assert!(matches!(
        FacilityDirectory::from_csv_reader(unknown_type.as_bytes()),
        Err(DirectoryError::UnknownFacilityType { .. })
    ));
}

#[test]
fn selection_cascade_clears_downstream_choices() {
    let directory = FacilityDirectory::standard();
    let mut selection = FacilitySelection::default();

    let options = selection.options(&directory);
    assert!(!options.districts.enabled);

    selection.apply(
        &directory,
        SelectionChange::Province(Some("Jakarta".to_string())),
    );
    selection.apply(
        &directory,
        SelectionChange::District(Some("East Jakarta".to_string())),
    );
    selection.apply(
        &directory,
        SelectionChange::FacilityType(Some(FacilityType::Hospital)),
    );
    selection.apply(&directory, SelectionChange::Facility(Some(FacilityId(71))));
    assert_eq!(
        selection
            .selected_facility(&directory)
            .map(|facility| facility.name.as_str()),
        Some("RSUP PERSAHABATAN")
    );

    let options = selection.options(&directory);
    assert_eq!(options.facilities.options.len(), 17);
    assert_eq!(
        options.facility_types.options,
        vec![FacilityType::Hospital, FacilityType::Puskesmas]
    );

    selection.apply(
        &directory,
        SelectionChange::Province(Some("Banten".to_string())),
    );
    assert_eq!(selection.province.as_deref(), Some("Banten"));
    assert!(selection.district.is_none());
    assert!(selection.facility_type.is_none());
    assert!(selection.facility.is_none());
}

#[test]
fn facility_outside_the_filter_is_dropped() {
    let directory = FacilityDirectory::standard();
    let mut selection = FacilitySelection::default();
    selection.select_province(&directory, Some("Jakarta"));
    selection.select_district(&directory, Some("South Jakarta"));
    selection.select_facility(&directory, Some(FacilityId(71)));
    assert!(selection.facility.is_none());

    selection.select_facility(&directory, Some(FacilityId(1)));
    assert_eq!(selection.facility, Some(FacilityId(1)));
}

#[test]
fn directory_serves_as_facility_repository() {
    let directory = FacilityDirectory::standard();
    let repository: &dyn FacilityRepository = &directory;

    let ngo_clinics = repository
        .list(&FacilityFilter::default().facility_type(FacilityType::NgoClinic))
        .expect("listing succeeds");
    assert!(!ngo_clinics.is_empty());
    assert!(ngo_clinics
        .iter()
        .all(|facility| facility.facility_type == FacilityType::NgoClinic));

    let blank_scope = FacilityFilter {
        province: Some("  ".to_string()),
        district: None,
        facility_type: None,
    };
    assert_eq!(
        repository.list(&blank_scope).expect("listing succeeds").len(),
        146
    );
    assert!(repository
        .fetch(FacilityId(9999))
        .expect("lookup succeeds")
        .is_none());
}
