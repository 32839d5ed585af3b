//! Core constants, units, and time primitives for the Mars Clock workspace.

/// Constants of the Allison & McEwen (2000) Mars time algorithm.
pub mod constants {
    /// Julian Date of the Unix epoch (1970-01-01T00:00:00Z).
    pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
    /// Julian Date of the J2000.0 epoch.
    pub const J2000_JD: f64 = 2_451_545.0;
    /// Milliseconds per Earth day.
    pub const MILLIS_PER_DAY: f64 = 86_400_000.0;
    /// Ratio of a mean solar day on Mars to an Earth day.
    pub const SOL_TO_DAY_RATIO: f64 = 1.027_491_252;
    /// Days between J2000.0 and the MSD reference midnight.
    pub const MSD_J2000_OFFSET_DAYS: f64 = 4.5;
    /// MSD at the reference midnight.
    pub const MSD_AT_REFERENCE: f64 = 44_796.0;
    /// Small correction aligning MTC with the Airy-0 meridian.
    pub const MSD_CORRECTION: f64 = 0.000_96;
    /// Sols per Mars Year.
    pub const SOLS_PER_MARS_YEAR: f64 = 668.5921;
    /// MSD at which Mars Year 1 starts (11 April 1955).
    pub const MARS_YEAR_ONE_MSD: f64 = 29_668.6;
    /// Hours on a Mars clock face.
    pub const HOURS_PER_SOL: f64 = 24.0;
    /// Degrees in a full circle.
    pub const DEGREES_PER_CIRCLE: f64 = 360.0;
}

/// Angle conversion helpers.
pub mod units {
    use std::f64::consts::PI;

    /// Convert degrees to radians as `deg * (π / 180)`.
    #[inline]
    pub fn deg_to_rad(deg: f64) -> f64 {
        deg * (PI / 180.0)
    }

    /// Convert an east longitude in degrees to a clock offset in hours.
    #[inline]
    pub fn longitude_to_hours(longitude_deg: f64) -> f64 {
        longitude_deg * (24.0 / 360.0)
    }
}

/// Julian date and remainder helpers shared across crates.
pub mod time {
    use super::constants::{J2000_JD, MILLIS_PER_DAY, UNIX_EPOCH_JD};

    /// Julian Date for a Unix timestamp expressed in milliseconds.
    #[inline]
    pub fn julian_date(epoch_millis: f64) -> f64 {
        UNIX_EPOCH_JD + epoch_millis / MILLIS_PER_DAY
    }

    /// Days elapsed since J2000.0 (TT approximated by UTC).
    #[inline]
    pub fn days_since_j2000(epoch_millis: f64) -> f64 {
        julian_date(epoch_millis) - J2000_JD
    }

    /// Truncating remainder: the result carries the sign of `value`.
    ///
    /// This is `fmod`, which is what `%` does on `f64`. It is not `rem_euclid`.
    #[inline]
    pub fn trunc_rem(value: f64, modulus: f64) -> f64 {
        value % modulus
    }

    /// Fractional part of `value` with the sign of `value`.
    #[inline]
    pub fn frac(value: f64) -> f64 {
        trunc_rem(value, 1.0)
    }
}
