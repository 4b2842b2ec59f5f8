//! Current-sky transit snapshot.
//!
//! A transit snapshot holds placements for the five fast-moving bodies
//! only (Sun through Mars); the outer planets move too slowly to matter
//! for daily guidance. No ascendant or houses are computed. Snapshots
//! are recomputed fresh on every request and never cached.

use lumina_core::{Body, EphemerisSource};

use crate::error::AstroError;
use crate::zodiac::{Placement, placement_from_longitude};

/// Placements of the five transit bodies at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitSnapshot {
    pub sun: Placement,
    pub moon: Placement,
    pub mercury: Placement,
    pub venus: Placement,
    pub mars: Placement,
}

/// Compute the transit snapshot for an instant.
///
/// Source failures propagate unmodified; no partial snapshot is
/// returned.
pub fn transit_snapshot(
    source: &impl EphemerisSource,
    jd_tt: f64,
) -> Result<TransitSnapshot, AstroError> {
    let place = |body: Body| -> Result<Placement, AstroError> {
        let lon = source.ecliptic_longitude_deg(body, jd_tt)?;
        Ok(placement_from_longitude(lon))
    };

    Ok(TransitSnapshot {
        sun: place(Body::Sun)?,
        moon: place(Body::Moon)?,
        mercury: place(Body::Mercury)?,
        venus: place(Body::Venus)?,
        mars: place(Body::Mars)?,
    })
}
