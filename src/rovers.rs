//! Rover catalog: landing instants and surface coordinates of Mars missions.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use mars_config::{ConfigError, RoverConfig, RoverStateConfig};
use serde::Serialize;
use thiserror::Error;

const BUILTIN_CATALOG: &str = include_str!("../data/rovers.yaml");

/// Whether a mission is still operating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationalState {
    Active,
    Inactive,
}

impl std::fmt::Display for OperationalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationalState::Active => f.write_str("active"),
            OperationalState::Inactive => f.write_str("inactive"),
        }
    }
}

/// A validated rover record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoverRecord {
    pub name: String,
    pub landing: DateTime<Utc>,
    /// East-positive, within `[0, 360)`.
    pub longitude_deg: f64,
    /// Within `[-90, 90]`.
    pub latitude_deg: f64,
    pub state: OperationalState,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("rover `{name}` longitude {value} is outside [0, 360)")]
    LongitudeOutOfRange { name: String, value: f64 },
    #[error("rover `{name}` latitude {value} is outside [-90, 90]")]
    LatitudeOutOfRange { name: String, value: f64 },
    #[error("rover `{name}` appears more than once")]
    DuplicateName { name: String },
    #[error("rover `{name}` has an unsupported operational state")]
    UnsupportedState { name: String },
}

impl TryFrom<RoverConfig> for RoverRecord {
    type Error = CatalogError;

    fn try_from(value: RoverConfig) -> Result<Self, Self::Error> {
        let state = match value.state {
            RoverStateConfig::Active => OperationalState::Active,
            RoverStateConfig::Inactive => OperationalState::Inactive,
            RoverStateConfig::Unsupported => {
                return Err(CatalogError::UnsupportedState { name: value.name });
            }
        };

        Ok(RoverRecord {
            name: value.name,
            landing: value.landing,
            longitude_deg: value.longitude_deg,
            latitude_deg: value.latitude_deg,
            state,
        })
    }
}

/// Ordered set of rovers with unique names.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RoverCatalog {
    rovers: Vec<RoverRecord>,
}

impl RoverCatalog {
    /// The missions shown on the dashboard by default.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_configs(mars_config::parse_rovers_yaml(BUILTIN_CATALOG)?)
    }

    /// Load a catalog from a YAML file, a TOML file, or a directory of TOML files.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        Self::from_configs(mars_config::load_rovers(path)?)
    }

    pub fn from_configs(configs: Vec<RoverConfig>) -> Result<Self, CatalogError> {
        let records = configs
            .into_iter()
            .map(RoverRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_records(records)
    }

    /// Validate coordinates and name uniqueness of already-built records.
    pub fn from_records(records: Vec<RoverRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for rover in &records {
            if !(0.0..360.0).contains(&rover.longitude_deg) {
                return Err(CatalogError::LongitudeOutOfRange {
                    name: rover.name.clone(),
                    value: rover.longitude_deg,
                });
            }
            if !(-90.0..=90.0).contains(&rover.latitude_deg) {
                return Err(CatalogError::LatitudeOutOfRange {
                    name: rover.name.clone(),
                    value: rover.latitude_deg,
                });
            }
            if !seen.insert(rover.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: rover.name.clone(),
                });
            }
        }
        tracing::debug!(count = records.len(), "rover catalog validated");
        Ok(Self { rovers: records })
    }

    /// Case-insensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&RoverRecord> {
        self.rovers.iter().find(|rover| rover.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoverRecord> {
        self.rovers.iter()
    }

    pub fn active(&self) -> impl Iterator<Item = &RoverRecord> {
        self.iter().filter(|rover| rover.state == OperationalState::Active)
    }

    pub fn len(&self) -> usize {
        self.rovers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rovers.is_empty()
    }
}

impl<'a> IntoIterator for &'a RoverCatalog {
    type Item = &'a RoverRecord;
    type IntoIter = std::slice::Iter<'a, RoverRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rovers.iter()
    }
}
