//! Lunar phase classification.
//!
//! The phase angle (0° = new, 180° = full) is bucketed into eight named
//! phases of 45° each, half-open intervals, first match wins.

use lumina_core::EphemerisSource;

use crate::error::AstroError;

/// The eight named lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a phase angle in degrees.
///
/// Expects an angle in [0, 360); the final bucket is the catch-all for
/// any remaining value.
pub fn classify_phase_angle(angle_deg: f64) -> MoonPhase {
    if angle_deg < 45.0 {
        MoonPhase::NewMoon
    } else if angle_deg < 90.0 {
        MoonPhase::WaxingCrescent
    } else if angle_deg < 135.0 {
        MoonPhase::FirstQuarter
    } else if angle_deg < 180.0 {
        MoonPhase::WaxingGibbous
    } else if angle_deg < 225.0 {
        MoonPhase::FullMoon
    } else if angle_deg < 270.0 {
        MoonPhase::WaningGibbous
    } else if angle_deg < 315.0 {
        MoonPhase::LastQuarter
    } else {
        MoonPhase::WaningCrescent
    }
}

/// Query the source for the phase angle at an instant and classify it.
pub fn moon_phase(source: &impl EphemerisSource, jd_tt: f64) -> Result<MoonPhase, AstroError> {
    let angle = source.moon_phase_angle_deg(jd_tt)?;
    Ok(classify_phase_angle(angle))
}
