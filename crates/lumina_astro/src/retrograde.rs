//! Apparent retrograde detection.
//!
//! For each eligible body the heliocentric longitude `atan2(y, x)` is
//! evaluated at the instant and one day later; a strict decrease flags
//! the body as retrograde. This is a local finite-difference test, not a
//! sign-of-angular-velocity computation.
//!
//! Known limitation: the comparison does not unwrap angles across the
//! atan2 branch cut, so a body moving prograde through the ±180°
//! boundary shows a spurious decrease (and vice versa). The behavior is
//! kept as-is; results within a day of the boundary are unreliable.

use lumina_core::{Body, EphemerisSource, RETROGRADE_BODIES};

use crate::error::AstroError;

/// Bodies currently judged retrograde, in [`RETROGRADE_BODIES`] order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RetrogradeSet {
    bodies: Vec<Body>,
}

impl RetrogradeSet {
    pub fn contains(&self, body: Body) -> bool {
        self.bodies.contains(&body)
    }

    pub fn iter(&self) -> impl Iterator<Item = Body> + '_ {
        self.bodies.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl FromIterator<Body> for RetrogradeSet {
    fn from_iter<I: IntoIterator<Item = Body>>(iter: I) -> Self {
        Self {
            bodies: iter.into_iter().collect(),
        }
    }
}

/// Detect retrograde bodies at an instant by day-over-day differencing.
pub fn retrograde_bodies(
    source: &impl EphemerisSource,
    jd_tt: f64,
) -> Result<RetrogradeSet, AstroError> {
    let mut bodies = Vec::new();
    for body in RETROGRADE_BODIES {
        let [x0, y0] = source.heliocentric_xy(body, jd_tt)?;
        let [x1, y1] = source.heliocentric_xy(body, jd_tt + 1.0)?;
        let lon_now = f64::atan2(y0, x0);
        let lon_next = f64::atan2(y1, x1);
        if lon_next < lon_now {
            bodies.push(body);
        }
    }
    Ok(RetrogradeSet { bodies })
}

#[cfg(test)]
mod tests {
    use lumina_core::TableSource;

    use super::*;

    /// Table where every eligible body is prograde except the listed ones.
    fn source_with_retrogrades(jd: f64, retro: &[Body]) -> TableSource {
        let mut table = TableSource::new().with_tolerance_days(0.1);
        for body in RETROGRADE_BODIES {
            if retro.contains(&body) {
                // Longitude decreasing: 0.4636 rad -> 0.3805 rad.
                table.push_heliocentric(body, jd, [1.0, 0.5]);
                table.push_heliocentric(body, jd + 1.0, [1.0, 0.4]);
            } else {
                table.push_heliocentric(body, jd, [1.0, 0.4]);
                table.push_heliocentric(body, jd + 1.0, [1.0, 0.5]);
            }
        }
        table
    }

    #[test]
    fn flags_decreasing_longitude() {
        let jd = 2_460_390.0;
        let source = source_with_retrogrades(jd, &[Body::Mercury, Body::Saturn]);
        let set = retrograde_bodies(&source, jd).unwrap();
        assert!(set.contains(Body::Mercury));
        assert!(set.contains(Body::Saturn));
        assert!(!set.contains(Body::Venus));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn all_prograde_is_empty_set() {
        let jd = 2_460_390.0;
        let source = source_with_retrogrades(jd, &[]);
        let set = retrograde_bodies(&source, jd).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn set_preserves_detection_order() {
        let jd = 2_460_390.0;
        let source = source_with_retrogrades(jd, &[Body::Saturn, Body::Mercury, Body::Mars]);
        let set = retrograde_bodies(&source, jd).unwrap();
        let order: Vec<Body> = set.iter().collect();
        assert_eq!(order, vec![Body::Mercury, Body::Mars, Body::Saturn]);
    }

    #[test]
    fn equal_longitudes_are_not_retrograde() {
        let jd = 2_460_390.0;
        let mut table = TableSource::new().with_tolerance_days(0.1);
        for body in RETROGRADE_BODIES {
            table.push_heliocentric(body, jd, [1.0, 0.5]);
            table.push_heliocentric(body, jd + 1.0, [1.0, 0.5]);
        }
        let set = retrograde_bodies(&table, jd).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn missing_sample_propagates() {
        let jd = 2_460_390.0;
        let mut table = TableSource::new().with_tolerance_days(0.1);
        for body in RETROGRADE_BODIES {
            // Only the first epoch is present.
            table.push_heliocentric(body, jd, [1.0, 0.5]);
        }
        assert!(retrograde_bodies(&table, jd).is_err());
    }

    #[test]
    fn detection_is_deterministic() {
        let jd = 2_460_390.0;
        let source = source_with_retrogrades(jd, &[Body::Venus]);
        let a = retrograde_bodies(&source, jd).unwrap();
        let b = retrograde_bodies(&source, jd).unwrap();
        assert_eq!(a, b);
    }
}
