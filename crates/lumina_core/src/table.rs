//! Text-table ephemeris source.
//!
//! A `TableSource` holds pre-computed positional samples keyed by epoch
//! and answers queries by nearest-epoch lookup within a tolerance. It is
//! the data backend for the CLI and for golden-value tests; a query with
//! no sample close enough fails with [`ProviderError::EpochOutOfRange`].
//!
//! File format, one record per line (`#` starts a comment):
//!
//! ```text
//! lon   sun      2448058.0   84.15
//! helio mercury  2448058.0   -0.32  0.18
//! phase          2448058.0   312.4
//! ```

use std::path::Path;

use crate::{Body, EphemerisSource, ProviderError};

/// Default nearest-epoch matching tolerance in days.
const DEFAULT_TOLERANCE_DAYS: f64 = 0.5;

/// Ephemeris source backed by in-memory sample tables.
#[derive(Debug, Clone)]
pub struct TableSource {
    longitudes: Vec<(Body, f64, f64)>,
    heliocentric: Vec<(Body, f64, [f64; 2])>,
    phases: Vec<(f64, f64)>,
    tolerance_days: f64,
}

impl TableSource {
    pub fn new() -> Self {
        Self {
            longitudes: Vec::new(),
            heliocentric: Vec::new(),
            phases: Vec::new(),
            tolerance_days: DEFAULT_TOLERANCE_DAYS,
        }
    }

    /// Override the nearest-epoch matching tolerance.
    pub fn with_tolerance_days(mut self, days: f64) -> Self {
        self.tolerance_days = days;
        self
    }

    /// Add a geocentric ecliptic longitude sample (degrees).
    pub fn push_longitude(&mut self, body: Body, jd_tt: f64, lon_deg: f64) {
        self.longitudes.push((body, jd_tt, lon_deg));
    }

    /// Add a heliocentric (x, y) sample.
    pub fn push_heliocentric(&mut self, body: Body, jd_tt: f64, xy: [f64; 2]) {
        self.heliocentric.push((body, jd_tt, xy));
    }

    /// Add a lunar phase angle sample (degrees).
    pub fn push_phase(&mut self, jd_tt: f64, angle_deg: f64) {
        self.phases.push((jd_tt, angle_deg));
    }

    /// Parse a table from its text content.
    pub fn parse(content: &str) -> Result<Self, ProviderError> {
        let mut table = Self::new();
        for (lineno, raw) in content.lines().enumerate() {
            let line = match raw.find('#') {
                Some(i) => &raw[..i],
                None => raw,
            };
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            let bad = |msg: &str| ProviderError::Parse(format!("line {}: {msg}", lineno + 1));
            match fields[0] {
                "lon" => {
                    if fields.len() != 4 {
                        return Err(bad("expected: lon <body> <jd_tt> <deg>"));
                    }
                    let body = Body::from_key(fields[1])
                        .ok_or_else(|| bad(&format!("unknown body {:?}", fields[1])))?;
                    let jd = parse_f64(fields[2]).map_err(|m| bad(&m))?;
                    let deg = parse_f64(fields[3]).map_err(|m| bad(&m))?;
                    table.push_longitude(body, jd, deg);
                }
                "helio" => {
                    if fields.len() != 5 {
                        return Err(bad("expected: helio <body> <jd_tt> <x> <y>"));
                    }
                    let body = Body::from_key(fields[1])
                        .ok_or_else(|| bad(&format!("unknown body {:?}", fields[1])))?;
                    let jd = parse_f64(fields[2]).map_err(|m| bad(&m))?;
                    let x = parse_f64(fields[3]).map_err(|m| bad(&m))?;
                    let y = parse_f64(fields[4]).map_err(|m| bad(&m))?;
                    table.push_heliocentric(body, jd, [x, y]);
                }
                "phase" => {
                    if fields.len() != 3 {
                        return Err(bad("expected: phase <jd_tt> <deg>"));
                    }
                    let jd = parse_f64(fields[1]).map_err(|m| bad(&m))?;
                    let deg = parse_f64(fields[2]).map_err(|m| bad(&m))?;
                    table.push_phase(jd, deg);
                }
                other => return Err(bad(&format!("unknown record kind {other:?}"))),
            }
        }
        Ok(table)
    }

    /// Load a table from a file path.
    pub fn load(path: &Path) -> Result<Self, ProviderError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ProviderError::Io(e.to_string()))?;
        Self::parse(&content)
    }

    /// Nearest sample within tolerance, by |jd - query|.
    fn nearest<'a, T>(
        &self,
        rows: impl Iterator<Item = (f64, &'a T)>,
        jd_tt: f64,
    ) -> Option<&'a T> {
        let mut best: Option<(f64, &T)> = None;
        for (jd, value) in rows {
            let dist = (jd - jd_tt).abs();
            if dist <= self.tolerance_days
                && best.map_or(true, |(best_dist, _)| dist < best_dist)
            {
                best = Some((dist, value));
            }
        }
        best.map(|(_, v)| v)
    }
}

impl EphemerisSource for TableSource {
    fn ecliptic_longitude_deg(&self, body: Body, jd_tt: f64) -> Result<f64, ProviderError> {
        if self.longitudes.iter().all(|(b, _, _)| *b != body) {
            return Err(ProviderError::NoData(body.name()));
        }
        let rows = self
            .longitudes
            .iter()
            .filter(|(b, _, _)| *b == body)
            .map(|(_, jd, deg)| (*jd, deg));
        self.nearest(rows, jd_tt)
            .copied()
            .ok_or(ProviderError::EpochOutOfRange { jd_tt })
    }

    fn heliocentric_xy(&self, body: Body, jd_tt: f64) -> Result<[f64; 2], ProviderError> {
        if self.heliocentric.iter().all(|(b, _, _)| *b != body) {
            return Err(ProviderError::NoData(body.name()));
        }
        let rows = self
            .heliocentric
            .iter()
            .filter(|(b, _, _)| *b == body)
            .map(|(_, jd, xy)| (*jd, xy));
        self.nearest(rows, jd_tt)
            .copied()
            .ok_or(ProviderError::EpochOutOfRange { jd_tt })
    }

    fn moon_phase_angle_deg(&self, jd_tt: f64) -> Result<f64, ProviderError> {
        if self.phases.is_empty() {
            return Err(ProviderError::NoData("lunar phase angle"));
        }
        let rows = self.phases.iter().map(|(jd, deg)| (*jd, deg));
        self.nearest(rows, jd_tt)
            .copied()
            .ok_or(ProviderError::EpochOutOfRange { jd_tt })
    }
}

fn parse_f64(field: &str) -> Result<f64, String> {
    field
        .parse::<f64>()
        .map_err(|_| format!("invalid number {field:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_query_longitude() {
        let table = TableSource::parse("lon sun 2448058.0 84.15\n").unwrap();
        let lon = table.ecliptic_longitude_deg(Body::Sun, 2448058.0).unwrap();
        assert!((lon - 84.15).abs() < 1e-12);
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let text = "# header\n\nlon moon 2448058.0 334.52 # trailing\n";
        let table = TableSource::parse(text).unwrap();
        let lon = table.ecliptic_longitude_deg(Body::Moon, 2448058.0).unwrap();
        assert!((lon - 334.52).abs() < 1e-12);
    }

    #[test]
    fn nearest_within_tolerance() {
        let mut table = TableSource::new();
        table.push_longitude(Body::Sun, 2448058.0, 84.15);
        table.push_longitude(Body::Sun, 2448059.0, 85.11);
        let lon = table.ecliptic_longitude_deg(Body::Sun, 2448058.9).unwrap();
        assert!((lon - 85.11).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_epoch() {
        let mut table = TableSource::new();
        table.push_longitude(Body::Sun, 2448058.0, 84.15);
        let err = table
            .ecliptic_longitude_deg(Body::Sun, 2448070.0)
            .unwrap_err();
        assert!(matches!(err, ProviderError::EpochOutOfRange { .. }));
    }

    #[test]
    fn missing_body_is_no_data() {
        let table = TableSource::new();
        let err = table
            .ecliptic_longitude_deg(Body::Pluto, 2448058.0)
            .unwrap_err();
        assert!(matches!(err, ProviderError::NoData(_)));
    }

    #[test]
    fn heliocentric_and_phase_records() {
        let text = "helio mercury 2448058.0 1.0 0.5\nphase 2448058.0 312.4\n";
        let table = TableSource::parse(text).unwrap();
        let xy = table.heliocentric_xy(Body::Mercury, 2448058.0).unwrap();
        assert!((xy[0] - 1.0).abs() < 1e-12 && (xy[1] - 0.5).abs() < 1e-12);
        let phase = table.moon_phase_angle_deg(2448058.0).unwrap();
        assert!((phase - 312.4).abs() < 1e-12);
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let err = TableSource::parse("lon sun nope 84.15\n").unwrap_err();
        match err {
            ProviderError::Parse(msg) => assert!(msg.contains("line 1"), "{msg}"),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn unknown_record_kind_rejected() {
        assert!(TableSource::parse("orbit sun 2448058.0 1.0\n").is_err());
    }
}
