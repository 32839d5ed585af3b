use std::collections::HashSet;
use std::fs;

use chrono::{TimeZone, Utc};
use mars_clock::config::ConfigError;
use mars_clock::rovers::{CatalogError, OperationalState, RoverCatalog, RoverRecord};

fn record(name: &str, longitude_deg: f64, latitude_deg: f64) -> RoverRecord {
    RoverRecord {
        name: name.to_string(),
        landing: Utc.with_ymd_and_hms(2004, 1, 25, 5, 5, 0).unwrap(),
        longitude_deg,
        latitude_deg,
        state: OperationalState::Inactive,
    }
}

#[test]
fn builtin_catalog_respects_invariants() {
    let catalog = RoverCatalog::builtin().expect("built-in catalog");
    assert_eq!(catalog.len(), 5);

    let mut names = HashSet::new();
    for rover in &catalog {
        assert!((0.0..360.0).contains(&rover.longitude_deg), "{}", rover.name);
        assert!((-90.0..=90.0).contains(&rover.latitude_deg), "{}", rover.name);
        assert!(names.insert(rover.name.clone()), "duplicate {}", rover.name);
    }
}

#[test]
fn builtin_catalog_contents() {
    let catalog = RoverCatalog::builtin().expect("built-in catalog");
    let curiosity = catalog.find("curiosity").expect("Curiosity present");
    assert_eq!(curiosity.landing, Utc.with_ymd_and_hms(2012, 8, 6, 5, 17, 57).unwrap());
    assert_eq!(curiosity.longitude_deg, 137.4);
    assert_eq!(curiosity.latitude_deg, -4.6);
    assert_eq!(curiosity.state, OperationalState::Active);

    let active: Vec<_> = catalog.active().map(|r| r.name.as_str()).collect();
    assert_eq!(active, ["Zhurong", "Perseverance", "Curiosity"]);
    assert!(catalog.find("Sojourner").is_none());
}

#[test]
fn records_outside_coordinate_ranges_are_rejected() {
    let err = RoverCatalog::from_records(vec![record("Opportunity", 360.0, -1.95)]).unwrap_err();
    assert!(matches!(err, CatalogError::LongitudeOutOfRange { value, .. } if value == 360.0));

    let err = RoverCatalog::from_records(vec![record("Opportunity", -5.53, -1.95)]).unwrap_err();
    assert!(matches!(err, CatalogError::LongitudeOutOfRange { .. }));

    let err = RoverCatalog::from_records(vec![record("Opportunity", 354.47, 91.0)]).unwrap_err();
    assert!(matches!(err, CatalogError::LatitudeOutOfRange { .. }));

    let err = RoverCatalog::from_records(vec![record("Opportunity", f64::NAN, 0.0)]).unwrap_err();
    assert!(matches!(err, CatalogError::LongitudeOutOfRange { .. }));
}

#[test]
fn duplicate_names_are_rejected() {
    let err = RoverCatalog::from_records(vec![
        record("Spirit", 175.47, -14.57),
        record("Spirit", 175.47, -14.57),
    ])
    .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateName { name } if name == "Spirit"));
}

#[test]
fn catalog_files_are_loaded_and_validated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rovers.yaml");
    fs::write(
        &path,
        "- name: Spirit\n  landing: \"2004-01-04T04:35:00Z\"\n  longitude_deg: 175.47\n  latitude_deg: -14.57\n  state: inactive\n",
    )
    .unwrap();
    let catalog = RoverCatalog::load(&path).expect("yaml catalog");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.find("SPIRIT").unwrap().state, OperationalState::Inactive);

    fs::write(
        &path,
        "- name: Spirit\n  landing: \"2004-01-04T04:35:00Z\"\n  longitude_deg: 175.47\n  latitude_deg: -14.57\n  state: asleep\n",
    )
    .unwrap();
    let err = RoverCatalog::load(&path).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedState { .. }));

    let err = RoverCatalog::load(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, CatalogError::Config(ConfigError::Io(_))));
}
