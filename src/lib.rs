//! Mars calendar and clock conversions plus the rover dashboard built on them.
//!
//! [`clock`] holds the pure time conversions. [`rovers`], [`status`] and
//! [`series`] turn them into what front-ends display and export.

pub mod clock;
pub mod rovers;
pub mod series;
pub mod status;

pub use clock::{
    MarsTime, Season, compute_mars_time, compute_mars_time_millis, compute_mars_time_now,
    elapsed_sols, format_time, local_mars_time,
};
pub use mars_config as config;
pub use mars_export as export;
