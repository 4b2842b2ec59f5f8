//! Time support: UTC calendar handling, Julian Dates, and sidereal time.
//!
//! The chart engine works internally in Julian Dates on the Terrestrial
//! Time scale (JD TT). This crate converts parsed UTC calendar instants
//! to JD TT via an embedded leap-second table and provides the Greenwich
//! Mean Sidereal Time polynomial used for ascendant computation.

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{J2000_JD, calendar_to_jd, delta_at_seconds, utc_jd_to_tt_jd};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
pub use utc_time::UtcTime;
