use std::io::Write;
use tablon_core::{Announcement, AnnouncementStore, Category, StoreError};

const FIXTURE: &str = include_str!("fixtures/announcements.json");

#[test]
fn fixture_loads_in_data_source_order() {
    let store = AnnouncementStore::from_json_str(FIXTURE).unwrap();
    let ids: Vec<_> = store.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    assert_eq!(store.len(), 3);
}

#[test]
fn wire_fields_map_onto_the_model() {
    let store = AnnouncementStore::from_json_str(FIXTURE).unwrap();
    let beca = store.get("1").unwrap();

    assert_eq!(beca.category, Category::Convocatorias);
    assert_eq!(beca.date_label, "12 mar 2024");
    assert_eq!(beca.achievements.len(), 2);
    assert_eq!(beca.achievements[0].name, "Postulación temprana");
    assert_eq!(beca.achievements[0].difficulty, "baja");
    assert_eq!(beca.achievements[0].potential, "alto");
}

#[test]
fn missing_achievements_field_defaults_to_empty() {
    let store = AnnouncementStore::from_json_str(FIXTURE).unwrap();
    assert!(store.get("2").unwrap().achievements.is_empty());
}

#[test]
fn unknown_category_string_degrades_instead_of_failing_the_load() {
    let json = r#"[{
        "id": "x",
        "title": "Promo",
        "summary": "Fuera de esquema",
        "category": "promociones",
        "tags": [],
        "dateLabel": "1 abr 2024"
    }]"#;

    let store = AnnouncementStore::from_json_str(json).unwrap();
    assert_eq!(store.get("x").unwrap().category, Category::Unknown);
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = r#"[
        {"id": "1", "title": "a", "summary": "", "category": "general", "tags": [], "dateLabel": ""},
        {"id": "1", "title": "b", "summary": "", "category": "general", "tags": [], "dateLabel": ""}
    ]"#;

    let err = AnnouncementStore::from_json_str(json).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId(id) if id == "1"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = AnnouncementStore::from_json_str("{not an array").unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));
}

#[test]
fn store_loads_from_a_data_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();

    let store = AnnouncementStore::from_json_file(file.path()).unwrap();
    assert_eq!(store.len(), 3);
}

#[test]
fn missing_data_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AnnouncementStore::from_json_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
}

#[test]
fn records_round_trip_through_serialization() {
    let store = AnnouncementStore::from_json_str(FIXTURE).unwrap();
    let json = serde_json::to_string(store.records()).unwrap();
    let parsed: Vec<Announcement> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, store.records());
}
