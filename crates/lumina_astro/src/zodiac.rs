//! Zodiac sign mapping.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees
//! each, starting from Aries at 0°. Given an ecliptic longitude we
//! identify the sign and the position within it.

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Display name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A body's position expressed as a sign and degrees within it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub sign: Sign,
    /// Degrees within the sign, [0, 30), rounded to two decimals.
    pub degree: f64,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.2}°", self.sign, self.degree)
    }
}

/// Map an ecliptic longitude to a zodiac placement.
///
/// Callers should supply a longitude already normalized into [0, 360);
/// other values are wrapped with `rem_euclid` first. The within-sign
/// degree is rounded to two decimal places, half away from zero.
pub fn placement_from_longitude(longitude_deg: f64) -> Placement {
    let lon = longitude_deg.rem_euclid(360.0);
    let idx = (lon / 30.0).floor() as u8;
    // Clamp in case of floating point edge (exactly 360.0)
    let idx = idx.min(11);
    let degree_in_sign = lon - idx as f64 * 30.0;
    Placement {
        sign: ALL_SIGNS[idx as usize],
        degree: (degree_in_sign * 100.0).round() / 100.0,
    }
}
