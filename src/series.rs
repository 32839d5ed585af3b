//! Mars time sampled over a range of Earth instants.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::clock::{MarsTime, compute_mars_time};

#[derive(Debug, Clone)]
pub struct SeriesSample {
    pub utc: DateTime<Utc>,
    pub mars: MarsTime,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("sampling step must be positive")]
    NonPositiveStep,
    #[error("series end precedes its start")]
    InvertedRange,
}

/// Sample `[start, end]` every `step`. The end is included when a step lands on it.
pub fn sample(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    step: Duration,
) -> Result<Vec<SeriesSample>, SeriesError> {
    if step <= Duration::zero() {
        return Err(SeriesError::NonPositiveStep);
    }
    if end < start {
        return Err(SeriesError::InvertedRange);
    }

    let mut samples = Vec::new();
    let mut next = Some(start);
    while let Some(utc) = next.filter(|utc| *utc <= end) {
        samples.push(SeriesSample {
            utc,
            mars: compute_mars_time(utc),
        });
        // Stops at the last representable instant.
        next = utc.checked_add_signed(step);
    }
    tracing::debug!(count = samples.len(), %start, %end, "sampled mars time series");
    Ok(samples)
}

impl SeriesSample {
    /// Flatten into a CSV row borrowing the formatted `utc` string.
    pub fn to_row<'a>(&'a self, utc: &'a str) -> mars_export::series::Row<'a> {
        mars_export::series::Row {
            utc,
            msd: self.mars.msd,
            mtc: &self.mars.mtc,
            ls_deg: self.mars.ls,
            mars_year: self.mars.my,
            season: self.mars.season().label(),
        }
    }
}
