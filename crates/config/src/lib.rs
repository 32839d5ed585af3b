//! Configuration models and loaders for the Mars Clock.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Rover record as written in catalog files.
#[derive(Debug, Deserialize, Clone)]
pub struct RoverConfig {
    pub name: String,
    /// Landing instant, RFC 3339 (quote it in TOML).
    pub landing: DateTime<Utc>,
    /// East-positive longitude in degrees.
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub state: RoverStateConfig,
}

/// Operational state in catalog files.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RoverStateConfig {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "inactive")]
    Inactive,
    #[serde(other)]
    Unsupported,
}

/// How sols are numbered when reported per rover.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SolNumbering {
    /// Landing sol is 0.
    #[default]
    Elapsed,
    /// Landing sol is 1, as most missions publish it.
    Mission,
}

/// Front-end settings parsed from a TOML file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ClockSettings {
    /// Rover catalog to use instead of the built-in table.
    pub catalog: Option<PathBuf>,
    pub refresh_interval_ms: u64,
    pub sol_numbering: SolNumbering,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            catalog: None,
            refresh_interval_ms: 1_000,
            sol_numbering: SolNumbering::Elapsed,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load rover records from a YAML file, a TOML file, or a directory of TOML files.
///
/// Directory entries are read in file-name order; files without a `.toml`
/// extension are skipped.
pub fn load_rovers<P: AsRef<Path>>(path: P) -> Result<Vec<RoverConfig>, ConfigError> {
    let path = path.as_ref();
    let rovers = if path.is_dir() {
        let mut files: Vec<PathBuf> = std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<_, _>>()?;
        files.retain(|file| is_toml(file));
        files.sort();
        files
            .iter()
            .map(|file| read_toml_rover(file))
            .collect::<Result<Vec<_>, _>>()?
    } else if is_toml(path) {
        vec![read_toml_rover(path)?]
    } else {
        serde_yaml::from_reader(File::open(path)?)?
    };
    tracing::debug!(path = %path.display(), count = rovers.len(), "loaded rover catalog");
    Ok(rovers)
}

/// Parse rover records from an in-memory YAML document.
pub fn parse_rovers_yaml(contents: &str) -> Result<Vec<RoverConfig>, ConfigError> {
    Ok(serde_yaml::from_str(contents)?)
}

/// Load front-end settings from a TOML file. Missing keys take their defaults.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<ClockSettings, ConfigError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let settings: ClockSettings = toml::from_str(&contents)?;
    tracing::debug!(?settings, "loaded settings");
    Ok(settings)
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

fn read_toml_rover(path: &Path) -> Result<RoverConfig, ConfigError> {
    Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
}
