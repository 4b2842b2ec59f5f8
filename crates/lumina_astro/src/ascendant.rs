//! Ascendant (rising point) computation.
//!
//! The ascendant angle is derived from Local Sidereal Time and the
//! observer's latitude:
//!
//! `Asc = atan2(sin(LST), cos(LST) · sin(φ))`
//!
//! expressed in degrees and normalized into [0, 360). LST comes from the
//! GMST polynomial in [`lumina_time::sidereal`] evaluated at JD TT.
//!
//! Near the poles (φ → ±90°) the result is numerically unstable; the
//! value is still returned, not flagged. This is a documented precision
//! boundary, not an error condition.

use lumina_time::{gmst_deg, local_sidereal_time_deg};

use crate::location::GeoLocation;

/// Ecliptic longitude of the ascendant in degrees [0, 360).
pub fn ascendant_longitude_deg(jd_tt: f64, location: &GeoLocation) -> f64 {
    let gmst = gmst_deg(jd_tt);
    let lst = local_sidereal_time_deg(gmst, location.longitude_deg).to_radians();
    let asc = f64::atan2(lst.sin(), lst.cos() * location.latitude_rad().sin()).to_degrees();
    asc.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_range() {
        for &jd in &[2_448_058.0, 2_451_545.0, 2_460_390.0] {
            for &(lat, lon) in &[(1.3521, 103.8198), (51.5, -0.12), (-33.87, 151.21)] {
                let asc = ascendant_longitude_deg(jd, &GeoLocation::new(lat, lon));
                assert!((0.0..360.0).contains(&asc), "asc {asc}");
            }
        }
    }

    #[test]
    fn singapore_1990_golden() {
        // 1990-06-15 12:00 UTC → JD TT 2448058.000661852,
        // GMST 83.7472°, LST 187.5670°, Asc 259.9277°.
        let jd_tt = 2_448_058.0 + 57.184 / 86_400.0;
        let asc = ascendant_longitude_deg(jd_tt, &GeoLocation::new(1.3521, 103.8198));
        assert!((asc - 259.9277).abs() < 1e-3, "got {asc}");
    }

    #[test]
    fn periodic_in_longitude() {
        let jd = 2_460_390.0;
        let a = ascendant_longitude_deg(jd, &GeoLocation::new(40.0, 100.0));
        let b = ascendant_longitude_deg(jd, &GeoLocation::new(40.0, 100.0 - 360.0));
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn hemisphere_flip_changes_quadrant() {
        // sin(φ) changes sign across the equator, moving the result to
        // the opposite half-circle for the same LST.
        let jd = 2_448_058.0;
        let north = ascendant_longitude_deg(jd, &GeoLocation::new(45.0, 0.0));
        let south = ascendant_longitude_deg(jd, &GeoLocation::new(-45.0, 0.0));
        assert!((north - south).abs() > 1.0);
    }
}
