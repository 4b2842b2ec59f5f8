//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the boundary type through which birth instants and
//! "now" enter the engine; everything downstream works in JD TT.

use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, utc_jd_to_tt_jd};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check calendar field ranges.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidDate("month must be 1..=12"));
        }
        if !(1..=31).contains(&self.day) {
            return Err(TimeError::InvalidDate("day must be 1..=31"));
        }
        if self.hour >= 24 {
            return Err(TimeError::InvalidDate("hour must be 0..=23"));
        }
        if self.minute >= 60 {
            return Err(TimeError::InvalidDate("minute must be 0..=59"));
        }
        if !(0.0..61.0).contains(&self.second) {
            return Err(TimeError::InvalidDate("second must be in [0, 61)"));
        }
        Ok(())
    }

    /// Julian Date on the UTC scale.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1_440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Julian Date on the Terrestrial Time scale.
    pub fn to_jd_tt(&self) -> f64 {
        utc_jd_to_tt_jd(self.to_jd_utc())
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDTHH:MM:SS[.fff][Z]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TimeError::Parse(format!("expected YYYY-MM-DDTHH:MM:SS[Z], got {s:?}"));

        let trimmed = s.strip_suffix('Z').unwrap_or(s);
        let (date_part, time_part) = trimmed.split_once('T').ok_or_else(bad)?;

        let mut date_fields = date_part.split('-');
        let year: i32 = date_fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let month: u32 = date_fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let day: u32 = date_fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        if date_fields.next().is_some() {
            return Err(bad());
        }

        let mut time_fields = time_part.split(':');
        let hour: u32 = time_fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let minute: u32 = time_fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let second: f64 = time_fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        if time_fields.next().is_some() {
            return Err(bad());
        }

        let t = Self::new(year, month, day, hour, minute, second);
        t.validate()?;
        Ok(t)
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
