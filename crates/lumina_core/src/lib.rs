//! Celestial body model and the ephemeris-source seam.
//!
//! This crate defines the closed set of bodies the chart engine works
//! with, the [`EphemerisSource`] trait through which all positional data
//! enters the system, and [`TableSource`], a text-table-backed source
//! used by the CLI and by golden-value tests.
//!
//! Position computation itself is deliberately out of scope: downstream
//! crates are pure functions of whatever an `EphemerisSource` reports.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod table;

pub use table::TableSource;

/// Bodies supported by the chart engine.
///
/// This is a closed enumeration: every function that takes a body is
/// total over it. Derived points (ascendant, nodes) are not bodies —
/// they are computed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All 10 bodies in chart order (Sun = 0 .. Pluto = 9).
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

/// Bodies tracked by the daily transit snapshot.
pub const TRANSIT_BODIES: [Body; 5] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
];

/// Bodies eligible for retrograde detection.
///
/// The Sun and Moon never appear retrograde in this model, matching
/// physical convention; the outer ice giants and Pluto are excluded
/// because the engine does not surface their retrogrades.
pub const RETROGRADE_BODIES: [Body; 5] = [
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based chart-order index (Sun=0 .. Pluto=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }

    /// Parse a body from its lowercase name (table files, CLI args).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "sun" => Some(Self::Sun),
            "moon" => Some(Self::Moon),
            "mercury" => Some(Self::Mercury),
            "venus" => Some(Self::Venus),
            "mars" => Some(Self::Mars),
            "jupiter" => Some(Self::Jupiter),
            "saturn" => Some(Self::Saturn),
            "uranus" => Some(Self::Uranus),
            "neptune" => Some(Self::Neptune),
            "pluto" => Some(Self::Pluto),
            _ => None,
        }
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from an ephemeris source.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProviderError {
    /// The source has no data close enough to the requested epoch.
    EpochOutOfRange { jd_tt: f64 },
    /// The source has no data at all for the requested quantity.
    NoData(&'static str),
    /// Table file could not be read.
    Io(String),
    /// Table file content is malformed.
    Parse(String),
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EpochOutOfRange { jd_tt } => write!(f, "epoch out of range: JD {jd_tt}"),
            Self::NoData(what) => write!(f, "no data: {what}"),
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for ProviderError {}

/// Positional data seam.
///
/// Implementations are assumed correct and are queried synchronously;
/// failures propagate unmodified to callers (no retry, no partial
/// results). All epochs are Julian Dates on the Terrestrial Time scale.
pub trait EphemerisSource {
    /// Geocentric ecliptic longitude of `body` in degrees [0, 360).
    fn ecliptic_longitude_deg(&self, body: Body, jd_tt: f64) -> Result<f64, ProviderError>;

    /// Heliocentric Cartesian (x, y) of `body` in the ecliptic plane.
    /// Units are irrelevant to callers; only atan2(y, x) is consumed.
    fn heliocentric_xy(&self, body: Body, jd_tt: f64) -> Result<[f64; 2], ProviderError>;

    /// Lunar phase angle in degrees [0, 360): 0 = new, 180 = full.
    fn moon_phase_angle_deg(&self, jd_tt: f64) -> Result<f64, ProviderError>;
}
