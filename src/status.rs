//! Per-rover status and whole-dashboard snapshots.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clock::{MarsTime, compute_mars_time, elapsed_sols, local_mars_time};
use crate::rovers::{OperationalState, RoverCatalog, RoverRecord};

pub use mars_config::SolNumbering;

/// What the dashboard shows for one rover.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoverStatus {
    pub name: String,
    pub state: OperationalState,
    pub sol: i64,
    /// Local mean solar time at the rover, `HH:MM:SS`.
    pub lmst: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl RoverStatus {
    pub fn at(rover: &RoverRecord, mars: &MarsTime, numbering: SolNumbering) -> Self {
        let elapsed = elapsed_sols(rover.landing, mars.msd);
        if elapsed < 0 {
            tracing::warn!(rover = %rover.name, elapsed, "current time precedes landing");
        }
        let sol = match numbering {
            SolNumbering::Elapsed => elapsed,
            SolNumbering::Mission => elapsed + 1,
        };

        Self {
            name: rover.name.clone(),
            state: rover.state,
            sol,
            lmst: local_mars_time(mars.msd, rover.longitude_deg),
            latitude_deg: rover.latitude_deg,
            longitude_deg: rover.longitude_deg,
        }
    }
}

/// Earth time, Mars time and every rover's status at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub earth_utc: DateTime<Utc>,
    pub mars: MarsTime,
    pub rovers: Vec<RoverStatus>,
}

impl Snapshot {
    /// Compute the Mars time once and derive each rover's status from it.
    pub fn at(instant: DateTime<Utc>, catalog: &RoverCatalog, numbering: SolNumbering) -> Self {
        let mars = compute_mars_time(instant);
        let rovers = catalog
            .iter()
            .map(|rover| RoverStatus::at(rover, &mars, numbering))
            .collect();

        Self {
            earth_utc: instant,
            mars,
            rovers,
        }
    }

    pub fn now(catalog: &RoverCatalog, numbering: SolNumbering) -> Self {
        Self::at(Utc::now(), catalog, numbering)
    }
}
