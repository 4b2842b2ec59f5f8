//! Natal chart assembly.
//!
//! A birth chart is built once from a birth instant and location: ten
//! body placements with fixed house assignments, plus the rising sign
//! from the ascendant. Chart construction is all-or-nothing — if the
//! ephemeris source fails for any body, no partial chart is returned.
//!
//! Houses use a fixed body→house table rather than cusps computed from
//! the ascendant, so a given body always reports the same house number.
//! This is a deliberate simplification carried by the engine's chart
//! model; cusp-based house systems are out of scope.

use lumina_core::{Body, EphemerisSource};

use crate::ascendant::ascendant_longitude_deg;
use crate::error::AstroError;
use crate::location::GeoLocation;
use crate::zodiac::{Placement, placement_from_longitude};

/// Fixed natal house for each body.
pub const fn natal_house(body: Body) -> u8 {
    match body {
        Body::Sun => 1,
        Body::Moon => 4,
        Body::Mercury => 3,
        Body::Venus => 2,
        Body::Mars => 1,
        Body::Jupiter => 9,
        Body::Saturn => 10,
        Body::Uranus => 11,
        Body::Neptune => 12,
        Body::Pluto => 8,
    }
}

/// A zodiac placement with its fixed house number [1, 12].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HousedPlacement {
    pub placement: Placement,
    pub house: u8,
}

/// Natal chart: ten housed placements plus the rising sign.
///
/// Immutable once built; the owning application holds it for the
/// session and feeds it back into prompt generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthChart {
    pub sun: HousedPlacement,
    pub moon: HousedPlacement,
    /// Rising sign from the ascendant; no house is attached.
    pub rising: Placement,
    pub mercury: HousedPlacement,
    pub venus: HousedPlacement,
    pub mars: HousedPlacement,
    pub jupiter: HousedPlacement,
    pub saturn: HousedPlacement,
    pub uranus: HousedPlacement,
    pub neptune: HousedPlacement,
    pub pluto: HousedPlacement,
}

/// Compute the natal chart for a birth instant and location.
///
/// Validates the location before any ephemeris query; source failures
/// propagate unmodified and yield no partial chart.
pub fn birth_chart(
    source: &impl EphemerisSource,
    jd_tt: f64,
    location: &GeoLocation,
) -> Result<BirthChart, AstroError> {
    location.validate()?;

    let housed = |body: Body| -> Result<HousedPlacement, AstroError> {
        let lon = source.ecliptic_longitude_deg(body, jd_tt)?;
        Ok(HousedPlacement {
            placement: placement_from_longitude(lon),
            house: natal_house(body),
        })
    };

    let rising = placement_from_longitude(ascendant_longitude_deg(jd_tt, location));

    Ok(BirthChart {
        sun: housed(Body::Sun)?,
        moon: housed(Body::Moon)?,
        rising,
        mercury: housed(Body::Mercury)?,
        venus: housed(Body::Venus)?,
        mars: housed(Body::Mars)?,
        jupiter: housed(Body::Jupiter)?,
        saturn: housed(Body::Saturn)?,
        uranus: housed(Body::Uranus)?,
        neptune: housed(Body::Neptune)?,
        pluto: housed(Body::Pluto)?,
    })
}

#[cfg(test)]
mod tests {
    use lumina_core::{ALL_BODIES, ProviderError, TableSource};

    use super::*;
    use crate::zodiac::Sign;

    fn sample_source(jd: f64) -> TableSource {
        let mut table = TableSource::new();
        for (i, body) in ALL_BODIES.into_iter().enumerate() {
            table.push_longitude(body, jd, 10.0 + i as f64 * 30.0);
        }
        table
    }

    #[test]
    fn house_table_matches_chart_model() {
        assert_eq!(natal_house(Body::Sun), 1);
        assert_eq!(natal_house(Body::Moon), 4);
        assert_eq!(natal_house(Body::Mercury), 3);
        assert_eq!(natal_house(Body::Venus), 2);
        assert_eq!(natal_house(Body::Mars), 1);
        assert_eq!(natal_house(Body::Jupiter), 9);
        assert_eq!(natal_house(Body::Saturn), 10);
        assert_eq!(natal_house(Body::Uranus), 11);
        assert_eq!(natal_house(Body::Neptune), 12);
        assert_eq!(natal_house(Body::Pluto), 8);
    }

    #[test]
    fn houses_are_in_range() {
        for body in ALL_BODIES {
            let h = natal_house(body);
            assert!((1..=12).contains(&h), "{body}: house {h}");
        }
    }

    #[test]
    fn chart_places_each_body() {
        let jd = 2_448_058.0;
        let chart = birth_chart(&sample_source(jd), jd, &GeoLocation::new(1.3521, 103.8198))
            .unwrap();
        assert_eq!(chart.sun.placement.sign, Sign::Aries);
        assert!((chart.sun.placement.degree - 10.0).abs() < 1e-9);
        assert_eq!(chart.moon.placement.sign, Sign::Taurus);
        assert_eq!(chart.pluto.placement.sign, Sign::Capricorn);
        assert_eq!(chart.sun.house, 1);
        assert_eq!(chart.pluto.house, 8);
    }

    #[test]
    fn invalid_location_fails_before_ephemeris() {
        // Empty source: would fail with NoData if queried. The location
        // error must win, proving validation happens first.
        let source = TableSource::new();
        let err = birth_chart(&source, 2_448_058.0, &GeoLocation::new(95.0, 0.0)).unwrap_err();
        assert!(matches!(err, AstroError::InvalidLocation(_)));
    }

    #[test]
    fn missing_body_yields_no_partial_chart() {
        let jd = 2_448_058.0;
        let mut table = TableSource::new();
        table.push_longitude(Body::Sun, jd, 84.15);
        // Moon and the rest absent.
        let err = birth_chart(&table, jd, &GeoLocation::new(0.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            AstroError::Ephemeris(ProviderError::NoData(_))
        ));
    }

    #[test]
    fn chart_is_deterministic() {
        let jd = 2_448_058.0;
        let source = sample_source(jd);
        let loc = GeoLocation::new(1.3521, 103.8198);
        let a = birth_chart(&source, jd, &loc).unwrap();
        let b = birth_chart(&source, jd, &loc).unwrap();
        assert_eq!(a, b);
    }
}
