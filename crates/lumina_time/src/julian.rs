//! Julian Date conversion and the UTC → TT offset.
//!
//! Calendar → JD uses the standard Gregorian algorithm from Meeus,
//! "Astronomical Algorithms" (2nd ed), Chapter 7. The UTC → TT offset is
//! TT = UTC + ΔAT + 32.184 s, with ΔAT taken from an embedded copy of
//! the IERS leap-second table (1972 onward; earlier epochs use the first
//! entry). Both sources are public domain.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// TT − TAI in seconds, fixed by definition.
const TT_MINUS_TAI_S: f64 = 32.184;

/// Leap-second table: (JD UTC at which the value takes effect, TAI − UTC).
///
/// IERS Bulletin C, 1972-01-01 through 2017-01-01.
const LEAP_SECONDS: [(f64, f64); 28] = [
    (2_441_317.5, 10.0), // 1972-01-01
    (2_441_499.5, 11.0), // 1972-07-01
    (2_441_683.5, 12.0), // 1973-01-01
    (2_442_048.5, 13.0), // 1974-01-01
    (2_442_413.5, 14.0), // 1975-01-01
    (2_442_778.5, 15.0), // 1976-01-01
    (2_443_144.5, 16.0), // 1977-01-01
    (2_443_509.5, 17.0), // 1978-01-01
    (2_443_874.5, 18.0), // 1979-01-01
    (2_444_239.5, 19.0), // 1980-01-01
    (2_444_786.5, 20.0), // 1981-07-01
    (2_445_151.5, 21.0), // 1982-07-01
    (2_445_516.5, 22.0), // 1983-07-01
    (2_446_247.5, 23.0), // 1985-07-01
    (2_447_161.5, 24.0), // 1988-01-01
    (2_447_892.5, 25.0), // 1990-01-01
    (2_448_257.5, 26.0), // 1991-01-01
    (2_448_804.5, 27.0), // 1992-07-01
    (2_449_169.5, 28.0), // 1993-07-01
    (2_449_534.5, 29.0), // 1994-07-01
    (2_450_083.5, 30.0), // 1996-01-01
    (2_450_630.5, 31.0), // 1997-07-01
    (2_451_179.5, 32.0), // 1999-01-01
    (2_453_736.5, 33.0), // 2006-01-01
    (2_454_832.5, 34.0), // 2009-01-01
    (2_456_109.5, 35.0), // 2012-07-01
    (2_457_204.5, 36.0), // 2015-07-01
    (2_457_754.5, 37.0), // 2017-01-01
];

/// Gregorian calendar date to Julian Date.
///
/// `day_frac` carries the time of day as a fractional day.
/// Valid for Gregorian dates (year > 1582).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    (365.25 * (y + 4716) as f64).floor() + (30.6001 * (m + 1) as f64).floor() + day_frac
        + b as f64
        - 1524.5
}

/// TAI − UTC in seconds at a given JD UTC.
pub fn delta_at_seconds(jd_utc: f64) -> f64 {
    let mut delta = LEAP_SECONDS[0].1;
    for &(epoch, value) in &LEAP_SECONDS {
        if jd_utc >= epoch {
            delta = value;
        } else {
            break;
        }
    }
    delta
}

/// Convert a UTC Julian Date to a TT Julian Date.
pub fn utc_jd_to_tt_jd(jd_utc: f64) -> f64 {
    jd_utc + (delta_at_seconds(jd_utc) + TT_MINUS_TAI_S) / 86_400.0
}
