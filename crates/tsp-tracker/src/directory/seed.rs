use super::{Facility, FacilityId, FacilityType};

/// Supported facilities as `(id, name, province, district, type)`, ordered by id.
const SUPPORTED_FACILITIES: &[(u32, &str, &str, &str, FacilityType)] = &[
    (1, "KLINIK GLOBALINDO", "Jakarta", "South Jakarta", FacilityType::NgoClinic),
    (2, "KLINIK YAYASAN ANGSA MERAH", "Jakarta", "South Jakarta", FacilityType::NgoClinic),
    (3, "PUSKESMAS KEC. CILANDAK", "Jakarta", "South Jakarta", FacilityType::Puskesmas),
    (4, "PUSKESMAS KEC. JAGAKARSA", "Jakarta", "South Jakarta", FacilityType::Puskesmas),
    (5, "PUSKESMAS KEC. KEBAYORAN BARU", "Jakarta", "South Jakarta", FacilityType::Puskesmas),
    (6, "PUSKESMAS KEC. KEBAYORAN LAMA", "Jakarta", "South Jakarta", FacilityType::Puskesmas),
    (7, "PUSKESMAS KEC. MAMPANG", "Jakarta", "South Jakarta", FacilityType::Puskesmas),
    (8, "PUSKESMAS KEC. PANCORAN", "Jakarta", "South Jakarta", FacilityType::Puskesmas),
    (9, "PUSKESMAS KEC. PASAR MINGGU", "Jakarta", "South Jakarta", FacilityType::Puskesmas),
    (10, "PUSKESMAS KEC. PESANGGRAHAN", "Jakarta", "South Jakarta", FacilityType::Puskesmas),
    (11, "PUSKESMAS KEC. SETIABUDI", "Jakarta", "South Jakarta", FacilityType::Puskesmas),
    (12, "PUSKESMAS KEC. TEBET", "Jakarta", "South Jakarta", FacilityType::Puskesmas),
    (13, "RS BRAWIJAYA W&CHILD HOSPITAL", "Jakarta", "South Jakarta", FacilityType::Hospital),
    (14, "RS FATMAWATI", "Jakarta", "South Jakarta", FacilityType::Hospital),
    (15, "RS MEDISTRA", "Jakarta", "South Jakarta", FacilityType::Hospital),
    (16, "RS MMC", "Jakarta", "South Jakarta", FacilityType::Hospital),
    (17, "RS MUHAMMADIYAH TAMAN PURING", "Jakarta", "South Jakarta", FacilityType::Hospital),
    (18, "RS PUSAT PERTAMINA", "Jakarta", "South Jakarta", FacilityType::Hospital),
    (19, "RSUD JAGAKARSA", "Jakarta", "South Jakarta", FacilityType::Hospital),
    (20, "RSUD JATI PADANG", "Jakarta", "South Jakarta", FacilityType::Hospital),
    (21, "RSUD KEBAYORAN BARU", "Jakarta", "South Jakarta", FacilityType::Hospital),
    (22, "RSUD MAMPANG PRAPATAN", "Jakarta", "South Jakarta", FacilityType::Hospital),
    (23, "RSUD PASAR MINGGU", "Jakarta", "South Jakarta", FacilityType::Hospital),
    (24, "RSUD PESANGGRAHAN", "Jakarta", "South Jakarta", FacilityType::Hospital),
    (25, "RSUK TEBET", "Jakarta", "South Jakarta", FacilityType::Hospital),
    (26, "PUSKESMAS KEC. CENGKARENG", "Jakarta", "West Jakarta", FacilityType::Puskesmas),
    (27, "PUSKESMAS KEC. GROGOL PETAMBURAN", "Jakarta", "West Jakarta", FacilityType::Puskesmas),
    (28, "PUSKESMAS KEC. KALIDERES", "Jakarta", "West Jakarta", FacilityType::Puskesmas),
    (29, "PUSKESMAS KEC. KEBON JERUK", "Jakarta", "West Jakarta", FacilityType::Puskesmas),
    (30, "PUSKESMAS KEC. KEMBANGAN", "Jakarta", "West Jakarta", FacilityType::Puskesmas),
    (31, "PUSKESMAS KEC. PALMERAH", "Jakarta", "West Jakarta", FacilityType::Puskesmas),
    (32, "PUSKESMAS KEC. TAMAN SARI", "Jakarta", "West Jakarta", FacilityType::Puskesmas),
    (33, "PUSKESMAS KEC. TAMBORA", "Jakarta", "West Jakarta", FacilityType::Puskesmas),
    (34, "RS GRHA KEDOYA", "Jakarta", "West Jakarta", FacilityType::Hospital),
    (35, "RS HERMINA DAAN MOGOT", "Jakarta", "West Jakarta", FacilityType::Hospital),
    (36, "RS KANKER DHARMAIS", "Jakarta", "West Jakarta", FacilityType::Hospital),
    (37, "RS ROYAL TARUMA", "Jakarta", "West Jakarta", FacilityType::Hospital),
    (38, "RS SILOAM HOSPITALS KEBON JERUK", "Jakarta", "West Jakarta", FacilityType::Hospital),
    (39, "RSAB HARAPAN KITA", "Jakarta", "West Jakarta", FacilityType::Hospital),
    (40, "RSU PELNI PETAMBURAN", "Jakarta", "West Jakarta", FacilityType::Hospital),
    (41, "RSUD CENGKARENG", "Jakarta", "West Jakarta", FacilityType::Hospital),
    (42, "RSUD KALIDERES", "Jakarta", "West Jakarta", FacilityType::Hospital),
    (43, "RSUD KEMBANGAN", "Jakarta", "West Jakarta", FacilityType::Hospital),
    (44, "RSUD TAMAN SARI", "Jakarta", "West Jakarta", FacilityType::Hospital),
    (45, "PUSKESMAS KEC. CAKUNG", "Jakarta", "East Jakarta", FacilityType::Puskesmas),
    (46, "PUSKESMAS KEC. CIPAYUNG", "Jakarta", "East Jakarta", FacilityType::Puskesmas),
    (47, "PUSKESMAS KEC. CIRACAS", "Jakarta", "East Jakarta", FacilityType::Puskesmas),
    (48, "PUSKESMAS KEC. DUREN SAWIT", "Jakarta", "East Jakarta", FacilityType::Puskesmas),
    (49, "PUSKESMAS KEC. JATINEGARA", "Jakarta", "East Jakarta", FacilityType::Puskesmas),
    (50, "PUSKESMAS KEC. KRAMAT JATI", "Jakarta", "East Jakarta", FacilityType::Puskesmas),
    (51, "PUSKESMAS KEC. MAKASAR", "Jakarta", "East Jakarta", FacilityType::Puskesmas),
    (52, "PUSKESMAS KEC. MATRAMAN", "Jakarta", "East Jakarta", FacilityType::Puskesmas),
    (53, "PUSKESMAS KEC. PASAR REBO", "Jakarta", "East Jakarta", FacilityType::Puskesmas),
    (54, "PUSKESMAS KEC. PULO GADUNG", "Jakarta", "East Jakarta", FacilityType::Puskesmas),
    (55, "RS FK UKI", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (56, "RS HARAPAN BUNDA", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (57, "RS HERMINA JATINEGARA", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (58, "RSKD DUREN SAWIT", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (59, "RS MOH RIDWAN MEURAKSA", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (60, "RS PENGAYOMAN", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (61, "RS POLRI", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (62, "RS PREMIER JATINEGARA", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (63, "RS PUSAT OTAK NASIONAL", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (64, "RS TK IV CIJANTUNG KESDAM JAYA", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (65, "RSAU DR. ESNAWAN ANTARIKSA", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (66, "RSKO", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (67, "RSUD CIRACAS", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (68, "RSUD BUDHI ASIH", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (69, "RSUD MATRAMAN", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (70, "RSUD PASAR REBO", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (71, "RSUP PERSAHABATAN", "Jakarta", "East Jakarta", FacilityType::Hospital),
    (72, "ANGSAMERAH", "Jakarta", "Central Jakarta", FacilityType::NgoClinic),
    (73, "RUANG CARLO", "Jakarta", "Central Jakarta", FacilityType::NgoClinic),
    (74, "PUSKESMAS KEC. CEMPAKA PUTIH", "Jakarta", "Central Jakarta", FacilityType::Puskesmas),
    (75, "PUSKESMAS KEC. GAMBIR", "Jakarta", "Central Jakarta", FacilityType::Puskesmas),
    (76, "PUSKESMAS KEC. JOHAR BARU", "Jakarta", "Central Jakarta", FacilityType::Puskesmas),
    (77, "PUSKESMAS KEC. KEMAYORAN", "Jakarta", "Central Jakarta", FacilityType::Puskesmas),
    (78, "PUSKESMAS KEC. MENTENG", "Jakarta", "Central Jakarta", FacilityType::Puskesmas),
    (79, "PUSKESMAS KEC. SAWAH BESAR", "Jakarta", "Central Jakarta", FacilityType::Puskesmas),
    (80, "PUSKESMAS KEC. SENEN", "Jakarta", "Central Jakarta", FacilityType::Puskesmas),
    (81, "PUSKESMAS KEC. TANAH ABANG", "Jakarta", "Central Jakarta", FacilityType::Puskesmas),
    (82, "RS HERMINA KEMAYORAN", "Jakarta", "Central Jakarta", FacilityType::Hospital),
    (83, "RS HUSADA", "Jakarta", "Central Jakarta", FacilityType::Hospital),
    (84, "RS ISLAM JAKARTA CEMPAKA PUTIH", "Jakarta", "Central Jakarta", FacilityType::Hospital),
    (85, "RS KRAMAT 128", "Jakarta", "Central Jakarta", FacilityType::Hospital),
    (86, "RS PGI CIKINI", "Jakarta", "Central Jakarta", FacilityType::Hospital),
    (87, "RSIA BUDI KEMULIAAN JAKARTA", "Jakarta", "Central Jakarta", FacilityType::Hospital),
    (88, "RSU PAD GATOT SOEBROTO", "Jakarta", "Central Jakarta", FacilityType::Hospital),
    (89, "RSUD CEMPAKA PUTIH", "Jakarta", "Central Jakarta", FacilityType::Hospital),
    (90, "RSUD JOHAR BARU", "Jakarta", "Central Jakarta", FacilityType::Hospital),
    (91, "RSUD SAWAH BESAR", "Jakarta", "Central Jakarta", FacilityType::Hospital),
    (92, "RSUD TARAKAN", "Jakarta", "Central Jakarta", FacilityType::Hospital),
    (93, "RSUP NASIONAL DR. CIPTO MANGUNKUSUMO", "Jakarta", "Central Jakarta", FacilityType::Hospital),
    (94, "PUSKESMAS KEC. CILINCING", "Jakarta", "North Jakarta", FacilityType::Puskesmas),
    (95, "PUSKESMAS KEC. KELAPA GADING", "Jakarta", "North Jakarta", FacilityType::Puskesmas),
    (96, "PUSKESMAS KEC. KOJA", "Jakarta", "North Jakarta", FacilityType::Puskesmas),
    (97, "PUSKESMAS KEC. PADEMANGAN", "Jakarta", "North Jakarta", FacilityType::Puskesmas),
    (98, "PUSKESMAS KEC. PENJARINGAN", "Jakarta", "North Jakarta", FacilityType::Puskesmas),
    (99, "PUSKESMAS KEC. TANJUNG PRIOK", "Jakarta", "North Jakarta", FacilityType::Puskesmas),
    (100, "RS AKADEMIK ATMA JAYA", "Jakarta", "North Jakarta", FacilityType::Hospital),
    (101, "RS FIRDAUS", "Jakarta", "North Jakarta", FacilityType::Hospital),
    (102, "RS ISLAM JAKARTA UTARA", "Jakarta", "North Jakarta", FacilityType::Hospital),
    (103, "RS PLUIT", "Jakarta", "North Jakarta", FacilityType::Hospital),
    (104, "RSPI SS", "Jakarta", "North Jakarta", FacilityType::Hospital),
    (105, "RSUD CILINCING", "Jakarta", "North Jakarta", FacilityType::Hospital),
    (106, "RSUD KOJA", "Jakarta", "North Jakarta", FacilityType::Hospital),
    (107, "RSUD PADEMANGAN", "Jakarta", "North Jakarta", FacilityType::Hospital),
    (108, "RSUD TANJUNG PRIOK", "Jakarta", "North Jakarta", FacilityType::Hospital),
    (109, "RSUD TUGU KOJA", "Jakarta", "North Jakarta", FacilityType::Hospital),
    (110, "RS PARU DR. GOENAWAN PARTOWIDIGDO CISARUA", "West Java", "Bogor", FacilityType::Hospital),
    (111, "RSU CIAWI", "West Java", "Bogor", FacilityType::Hospital),
    (112, "RSU CIBINONG", "West Java", "Bogor", FacilityType::Hospital),
    (113, "RSUD CILEUNGSI", "West Java", "Bogor", FacilityType::Hospital),
    (114, "RSUD LEUWILIANG BOGOR", "West Java", "Bogor", FacilityType::Hospital),
    (115, "PUSKESMAS CILEUNGSI", "West Java", "Bogor", FacilityType::Puskesmas),
    (116, "PUSKESMAS MEKARMUKTI", "West Java", "Bekasi", FacilityType::Puskesmas),
    (117, "RSUD KAB. BEKASI", "West Java", "Bekasi", FacilityType::Hospital),
    (118, "PUSKESMAS BOGOR TENGAH", "West Java", "Kota Bogor", FacilityType::Puskesmas),
    (119, "PUSKESMAS BOGOR TIMUR", "West Java", "Kota Bogor", FacilityType::Puskesmas),
    (120, "PUSKESMAS KEDUNG BADAK BOGOR", "West Java", "Kota Bogor", FacilityType::Puskesmas),
    (121, "PUSKESMAS SINDANG BARANG BOGOR", "West Java", "Kota Bogor", FacilityType::Puskesmas),
    (122, "RSJ DR. H. MARZOEKI MAHDI", "West Java", "Kota Bogor", FacilityType::Hospital),
    (123, "RSUD KOTA BOGOR", "West Java", "Kota Bogor", FacilityType::Hospital),
    (124, "PUSKESMAS KARANG KITRI", "West Java", "Kota Bekasi", FacilityType::Puskesmas),
    (125, "PUSKESMAS MUSTIKA JAYA", "West Java", "Kota Bekasi", FacilityType::Puskesmas),
    (126, "PUSKESMAS PERUMNAS II", "West Java", "Kota Bekasi", FacilityType::Puskesmas),
    (127, "RS ST ELISABETH", "West Java", "Kota Bekasi", FacilityType::Hospital),
    (128, "RSUD KOTA BEKASI", "West Java", "Kota Bekasi", FacilityType::Hospital),
    (129, "PUSKESMAS CIMANGGIS", "West Java", "Kota Depok", FacilityType::Puskesmas),
    (130, "PUSKESMAS PANCORAN MAS", "West Java", "Kota Depok", FacilityType::Puskesmas),
    (131, "RS SENTRA MEDIKA CISALAK", "West Java", "Kota Depok", FacilityType::Hospital),
    (132, "RSUD KOTA DEPOK", "West Java", "Kota Depok", FacilityType::Hospital),
    (133, "PUSKESMAS CURUG TANGERANG", "Banten", "Tangerang", FacilityType::Puskesmas),
    (134, "PUSKESMAS KELAPA DUA TANGERANG", "Banten", "Tangerang", FacilityType::Puskesmas),
    (135, "PUSKESMAS MAUK TANGERANG", "Banten", "Tangerang", FacilityType::Puskesmas),
    (136, "PUSKESMAS BALARAJA", "Banten", "Tangerang", FacilityType::Puskesmas),
    (137, "RS QADR", "Banten", "Tangerang", FacilityType::Hospital),
    (138, "RS SILOAM GLENEAGLES", "Banten", "Tangerang", FacilityType::Hospital),
    (139, "RSU TANGERANG", "Banten", "Tangerang", FacilityType::Hospital),
    (140, "RSUD BALARAJA", "Banten", "Tangerang", FacilityType::Hospital),
    (141, "PUSKESMAS CIBODASARI TANGERANG", "Banten", "Kota Tangerang", FacilityType::Puskesmas),
    (142, "PUSKESMAS KUNCIRAN BARU", "Banten", "Kota Tangerang", FacilityType::Puskesmas),
    (143, "PUSKESMAS TANAH TINGGI", "Banten", "Kota Tangerang", FacilityType::Puskesmas),
    (144, "RSUD KOTA TANGERANG", "Banten", "Kota Tangerang", FacilityType::Hospital),
    (145, "PUSKESMAS CIPUTAT", "Banten", "Kota Tangerang Selatan", FacilityType::Puskesmas),
    (146, "RSUD TANGERANG SELATAN", "Banten", "Kota Tangerang Selatan", FacilityType::Hospital),
];

pub(super) fn supported_facilities() -> Vec<Facility> {
    SUPPORTED_FACILITIES
        .iter()
        .map(|&(id, name, province, district, facility_type)| Facility {
            id: FacilityId(id),
            name: name.to_string(),
            province: province.to_string(),
            district: district.to_string(),
            facility_type,
        })
        .collect()
}
