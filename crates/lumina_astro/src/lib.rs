//! Astrological interpretation of ephemeris data.
//!
//! This crate turns raw positional data from an
//! [`lumina_core::EphemerisSource`] into zodiac placements, a natal
//! chart with ascendant, a transit snapshot, a lunar phase
//! classification, and a set of currently retrograde bodies.
//!
//! Every function is a pure function of its instant/location inputs
//! given a fixed source: repeated calls with identical arguments return
//! identical results.

pub mod ascendant;
pub mod chart;
pub mod error;
pub mod location;
pub mod moon_phase;
pub mod retrograde;
pub mod transit;
pub mod zodiac;

pub use ascendant::ascendant_longitude_deg;
pub use chart::{BirthChart, HousedPlacement, birth_chart, natal_house};
pub use error::AstroError;
pub use location::GeoLocation;
pub use moon_phase::{MoonPhase, classify_phase_angle, moon_phase};
pub use retrograde::{RetrogradeSet, retrograde_bodies};
pub use transit::{TransitSnapshot, transit_snapshot};
pub use zodiac::{ALL_SIGNS, Placement, Sign, placement_from_longitude};
