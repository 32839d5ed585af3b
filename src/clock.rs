//! Mars Sol Date, Coordinated Mars Time, solar longitude, and Mars Year.
//!
//! Implements the low-order series of Allison & McEwen (2000). Every function
//! here is pure: the same input always yields the same output, and there is no
//! shared state, so callers may invoke them from any thread at any rate.
//!
//! Remainders follow `fmod` semantics (`%` on `f64`): the result carries the
//! sign of the dividend. Instants before the MSD epoch (late 1873) therefore
//! produce a negative MTC hour count that is passed to [`format_time`] as is.

use chrono::{DateTime, Utc};
use mars_core::constants::{
    DEGREES_PER_CIRCLE, HOURS_PER_SOL, MARS_YEAR_ONE_MSD, MSD_AT_REFERENCE, MSD_CORRECTION,
    MSD_J2000_OFFSET_DAYS, SOL_TO_DAY_RATIO, SOLS_PER_MARS_YEAR,
};
use mars_core::time::{days_since_j2000, frac, trunc_rem};
use mars_core::units::{deg_to_rad, longitude_to_hours};
use serde::Serialize;

/// One periodic perturbation term of the equation of center.
#[derive(Debug, Clone, Copy)]
pub struct Perturbation {
    /// Amplitude in degrees.
    pub amplitude_deg: f64,
    /// Period in Julian years.
    pub period_years: f64,
    /// Phase in degrees.
    pub phase_deg: f64,
}

/// Perturbations by Jupiter, Earth and Venus, in table order.
pub const PERTURBATIONS: [Perturbation; 7] = [
    term(0.0071, 2.2353, 49.409),
    term(0.0057, 2.7543, 168.173),
    term(0.0039, 1.1177, 191.837),
    term(0.0037, 15.7866, 21.736),
    term(0.0021, 2.1354, 15.704),
    term(0.0020, 2.4694, 95.528),
    term(0.0018, 32.8493, 49.095),
];

const fn term(amplitude_deg: f64, period_years: f64, phase_deg: f64) -> Perturbation {
    Perturbation {
        amplitude_deg,
        period_years,
        phase_deg,
    }
}

/// Mars calendar and clock reading for a single terrestrial instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarsTime {
    /// Mars Sol Date.
    pub msd: f64,
    /// Coordinated Mars Time, `HH:MM:SS`.
    pub mtc: String,
    /// Areocentric solar longitude in degrees, within `[0, 360)`.
    pub ls: f64,
    /// Mars Year (Year 1 starts 11 April 1955).
    pub my: i64,
}

impl MarsTime {
    /// Northern-hemisphere season for this reading's solar longitude.
    pub fn season(&self) -> Season {
        Season::from_solar_longitude(self.ls)
    }
}

/// Martian season, named for the northern hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    NorthernSpring,
    NorthernSummer,
    NorthernAutumn,
    NorthernWinter,
}

impl Season {
    /// Season covering `ls_deg`. Values outside `[0, 360)` are wrapped first.
    pub fn from_solar_longitude(ls_deg: f64) -> Self {
        match ls_deg.rem_euclid(DEGREES_PER_CIRCLE) {
            ls if ls < 90.0 => Season::NorthernSpring,
            ls if ls < 180.0 => Season::NorthernSummer,
            ls if ls < 270.0 => Season::NorthernAutumn,
            _ => Season::NorthernWinter,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::NorthernSpring => "northern spring",
            Season::NorthernSummer => "northern summer",
            Season::NorthernAutumn => "northern autumn",
            Season::NorthernWinter => "northern winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Compute the Mars time for `instant`.
pub fn compute_mars_time(instant: DateTime<Utc>) -> MarsTime {
    compute_mars_time_millis(instant.timestamp_millis() as f64)
}

/// Compute the Mars time for the current wall-clock instant.
pub fn compute_mars_time_now() -> MarsTime {
    compute_mars_time(Utc::now())
}

/// Compute the Mars time for a Unix timestamp in milliseconds.
///
/// Non-finite input yields NaN `msd` and `ls`; nothing panics.
pub fn compute_mars_time_millis(epoch_millis: f64) -> MarsTime {
    let delta_j2000 = days_since_j2000(epoch_millis);
    let msd = mars_sol_date(delta_j2000);

    MarsTime {
        msd,
        mtc: format_time(mtc_hours(msd)),
        ls: solar_longitude(delta_j2000),
        my: mars_year(msd),
    }
}

/// Mars Sol Date for a number of days since J2000.0.
pub fn mars_sol_date(delta_j2000: f64) -> f64 {
    (delta_j2000 - MSD_J2000_OFFSET_DAYS) / SOL_TO_DAY_RATIO + MSD_AT_REFERENCE - MSD_CORRECTION
}

/// Decimal MTC hours of `msd`; negative when `msd` is negative.
pub fn mtc_hours(msd: f64) -> f64 {
    frac(msd) * HOURS_PER_SOL
}

/// Areocentric solar longitude in degrees, normalized into `[0, 360)`.
pub fn solar_longitude(delta_j2000: f64) -> f64 {
    let mean_anomaly = trunc_rem(19.3870 + 0.52402075 * delta_j2000, DEGREES_PER_CIRCLE);
    let alpha_fms = trunc_rem(270.3863 + 0.52403840 * delta_j2000, DEGREES_PER_CIRCLE);
    let nu_minus_m = equation_of_center(deg_to_rad(mean_anomaly), delta_j2000);

    let ls = trunc_rem(alpha_fms + nu_minus_m, DEGREES_PER_CIRCLE);
    if ls < 0.0 {
        ls + DEGREES_PER_CIRCLE
    } else {
        ls
    }
}

/// True minus mean anomaly (degrees) for a mean anomaly given in radians.
fn equation_of_center(mean_anomaly: f64, delta_j2000: f64) -> f64 {
    (10.691 + 3.0e-7 * delta_j2000) * mean_anomaly.sin()
        + 0.623 * (2.0 * mean_anomaly).sin()
        + 0.050 * (3.0 * mean_anomaly).sin()
        + 0.008 * (4.0 * mean_anomaly).sin()
        + 0.002 * (5.0 * mean_anomaly).sin()
        + perturbations(delta_j2000)
}

fn perturbations(delta_j2000: f64) -> f64 {
    PERTURBATIONS.iter().fold(0.0, |sum, term| {
        sum + term.amplitude_deg
            * deg_to_rad(0.985626 * delta_j2000 / term.period_years + term.phase_deg).cos()
    })
}

/// Mars Year containing `msd`.
///
/// The float-to-int cast saturates, so a non-finite `msd` never panics.
pub fn mars_year(msd: f64) -> i64 {
    (1.0 + ((msd - MARS_YEAR_ONE_MSD) / SOLS_PER_MARS_YEAR).floor()) as i64
}

/// Format decimal hours as `HH:MM:SS`, truncating each field.
///
/// Input outside `[0, 24)` is not clamped: `-1.5` renders as `-2:30:00`.
/// Non-finite input renders as `NaN:NaN:NaN`.
pub fn format_time(decimal_hours: f64) -> String {
    if !decimal_hours.is_finite() {
        return "NaN:NaN:NaN".to_string();
    }
    let hours = decimal_hours.floor();
    let minutes_decimal = (decimal_hours - hours) * 60.0;
    let minutes = minutes_decimal.floor();
    let seconds = ((minutes_decimal - minutes) * 60.0).floor();
    format!("{:02}:{:02}:{:02}", hours as i64, minutes as i64, seconds as i64)
}

/// Local mean solar time at an east-positive longitude.
///
/// Longitudes need not be normalized; any real value wraps onto the clock.
pub fn local_mars_time(msd: f64, longitude_deg: f64) -> String {
    let lmst = trunc_rem(mtc_hours(msd) + longitude_to_hours(longitude_deg), HOURS_PER_SOL);
    if lmst < 0.0 {
        format_time(lmst + HOURS_PER_SOL)
    } else {
        format_time(lmst)
    }
}

/// Whole sols elapsed between `landing` and `current_msd`; landing sol is 0.
///
/// Negative when `current_msd` precedes the landing.
pub fn elapsed_sols(landing: DateTime<Utc>, current_msd: f64) -> i64 {
    let landing_msd = compute_mars_time(landing).msd;
    (current_msd - landing_msd).floor() as i64
}
