//! Greenwich Mean Sidereal Time.
//!
//! GMST here uses the IAU 1982 polynomial in degrees:
//!
//! GMST = 280.46061837 + 360.98564736629·D + 0.000387933·T² − T³/38710000
//!
//! where D = JD − 2451545.0 and T = D/36525, with JD on the Terrestrial
//! Time scale. Output is normalized into [0, 360).
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4.

use crate::julian::J2000_JD;

/// Greenwich Mean Sidereal Time in degrees [0, 360) at a TT Julian Date.
pub fn gmst_deg(jd_tt: f64) -> f64 {
    let d = jd_tt - J2000_JD;
    let t = d / 36_525.0;
    let gmst =
        280.46061837 + 360.98564736629 * d + 0.000387933 * t * t - t * t * t / 38_710_000.0;
    gmst.rem_euclid(360.0)
}

/// Local Sidereal Time in degrees [0, 360).
///
/// `longitude_east_deg` is geographic longitude, east positive.
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg + longitude_east_deg).rem_euclid(360.0)
}
