use std::fs;

use mars_config::{
    ClockSettings, ConfigError, RoverStateConfig, SolNumbering, load_rovers, load_settings,
    parse_rovers_yaml,
};

const YAML: &str = r#"
- name: Curiosity
  landing: "2012-08-06T05:17:57Z"
  longitude_deg: 137.4
  latitude_deg: -4.6
  state: active
- name: Opportunity
  landing: "2004-01-25T05:05:00Z"
  longitude_deg: 354.47
  latitude_deg: -1.95
  state: inactive
"#;

#[test]
fn yaml_catalog_parses_states_and_dates() {
    let rovers = parse_rovers_yaml(YAML).expect("yaml catalog");
    assert_eq!(rovers.len(), 2);
    assert_eq!(rovers[0].name, "Curiosity");
    assert_eq!(rovers[0].state, RoverStateConfig::Active);
    assert_eq!(rovers[1].state, RoverStateConfig::Inactive);
    assert_eq!(rovers[0].landing.timestamp(), 1_344_230_277);
}

#[test]
fn unknown_state_is_kept_as_unsupported() {
    let yaml = YAML.replace("state: inactive", "state: hibernating");
    let rovers = parse_rovers_yaml(&yaml).expect("yaml catalog");
    assert_eq!(rovers[1].state, RoverStateConfig::Unsupported);
}

#[test]
fn toml_directory_is_read_in_file_name_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("b_spirit.toml"),
        "name = \"Spirit\"\nlanding = \"2004-01-04T04:35:00Z\"\nlongitude_deg = 175.47\nlatitude_deg = -14.57\nstate = \"inactive\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("a_sojourner.toml"),
        "name = \"Sojourner\"\nlanding = \"1997-07-04T16:56:55Z\"\nlongitude_deg = 326.78\nlatitude_deg = 19.13\nstate = \"inactive\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let rovers = load_rovers(dir.path()).expect("toml directory");
    let names: Vec<_> = rovers.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Sojourner", "Spirit"]);
}

#[test]
fn yaml_file_and_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rovers.yaml");
    fs::write(&path, YAML).unwrap();
    assert_eq!(load_rovers(&path).expect("yaml file").len(), 2);

    let missing = load_rovers(dir.path().join("absent.yaml"));
    assert!(matches!(missing, Err(ConfigError::Io(_))));
}

#[test]
fn malformed_yaml_reports_parse_error() {
    let err = parse_rovers_yaml("- name: [unterminated").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn settings_fill_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("clock.toml");
    fs::write(&path, "sol_numbering = \"mission\"\n").unwrap();
    let settings = load_settings(&path).expect("settings");
    assert_eq!(settings.sol_numbering, SolNumbering::Mission);
    assert_eq!(settings.refresh_interval_ms, 1_000);
    assert!(settings.catalog.is_none());

    fs::write(&path, "refresh_interval_ms = \"fast\"\n").unwrap();
    assert!(matches!(load_settings(&path), Err(ConfigError::Toml(_))));
}

#[test]
fn default_settings() {
    let settings = ClockSettings::default();
    assert_eq!(settings.refresh_interval_ms, 1_000);
    assert_eq!(settings.sol_numbering, SolNumbering::Elapsed);
}

#[test]
fn single_toml_file_is_one_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("opportunity.toml");
    fs::write(
        &path,
        "name = \"Opportunity\"\nlanding = \"2004-01-25T05:05:00Z\"\nlongitude_deg = 354.47\nlatitude_deg = -1.95\nstate = \"inactive\"\n",
    )
    .unwrap();

    let rovers = load_rovers(&path).expect("toml file");
    assert_eq!(rovers.len(), 1);
    assert_eq!(rovers[0].name, "Opportunity");

    fs::write(&path, "name = \"Opportunity\"\n").unwrap();
    assert!(matches!(load_rovers(&path), Err(ConfigError::Toml(_))));
}
