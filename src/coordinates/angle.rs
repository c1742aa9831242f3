//! # Sexagesimal Angle Module
//!
//! Hours-minutes-seconds and degrees-minutes-seconds representations used for
//! right ascension and declination in catalog records.
//!
//! ## Text Format
//!
//! - Right ascension is written as `HH MM SS.SS` (e.g. `06 45 08.92`)
//! - Declination is written as `±DD MM SS.S` (e.g. `-16 42 58.0`)
//!
//! Parsing is more forgiving: components may be separated by whitespace,
//! colons, or unit letters (`06h45m08.92s`, `-16°42'58"`), and a single number
//! is read as decimal hours or degrees.
//!
//! ## Examples
//!
//! ```rust
//! use skycatalog::coordinates::angle::{DegMinSec, HourMinSec};
//!
//! let ra: HourMinSec = "06 45 08.92".parse().unwrap();
//! let dec: DegMinSec = "-16 42 58.0".parse().unwrap();
//!
//! assert_eq!(ra.to_string(), "06 45 08.92");
//! assert_eq!(dec.to_string(), "-16 42 58.0");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::mod_2pi;
use crate::constants::{DEG_PER_RAD, HOUR_PER_RAD};

/// Error returned when a sexagesimal string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sexagesimal angle: {0:?}")]
pub struct ParseAngleError(pub String);

/// Angle expressed in hours, minutes and seconds of time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourMinSec {
    /// True for negative angles
    pub negative: bool,
    /// Whole hours
    pub hour: u32,
    /// Whole minutes, 0..60
    pub min: u32,
    /// Seconds, 0.0..60.0
    pub sec: f64,
}

/// Angle expressed in degrees, minutes and seconds of arc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegMinSec {
    /// True for negative angles
    pub negative: bool,
    /// Whole degrees
    pub deg: u32,
    /// Whole arcminutes, 0..60
    pub min: u32,
    /// Arcseconds, 0.0..60.0
    pub sec: f64,
}

/// Splits a decimal value into whole units, minutes and seconds
fn split_sexagesimal(value: f64) -> (bool, u32, u32, f64) {
    let negative = value < 0.0;
    let total_sec = value.abs() * 3600.0;
    let unit = (total_sec / 3600.0).floor();
    let rest = total_sec - unit * 3600.0;
    let min = (rest / 60.0).floor();
    let sec = rest - min * 60.0;
    (negative, unit as u32, min as u32, sec.max(0.0))
}

fn join_sexagesimal(negative: bool, unit: u32, min: u32, sec: f64) -> f64 {
    let value = unit as f64 + min as f64 / 60.0 + sec / 3600.0;
    if negative {
        -value
    } else {
        value
    }
}

/// Rounds a decimal value to `decimals` places of seconds and splits it,
/// carrying into minutes and units so seconds never print as 60
fn round_sexagesimal(value: f64, decimals: usize) -> (bool, u32, u32, f64) {
    let scale = 10f64.powi(decimals as i32);
    let ticks = (value.abs() * 3600.0 * scale).round() as u64;
    let per_min = 60 * scale as u64;
    let per_unit = 60 * per_min;
    let unit = ticks / per_unit;
    let min = (ticks % per_unit) / per_min;
    let sec = (ticks % per_min) as f64 / scale;
    (value < 0.0 && ticks > 0, unit as u32, min as u32, sec)
}

/// Parses `[±]a [b [c]]` with any non-numeric separators into a signed decimal
fn parse_sexagesimal(text: &str) -> Result<f64, ParseAngleError> {
    let trimmed = text.trim();
    let negative = trimmed.starts_with('-');
    let cleaned: String = trimmed
        .chars()
        .map(|c| if c.is_ascii_digit() || c == '.' { c } else { ' ' })
        .collect();

    let parts = cleaned
        .split_whitespace()
        .map(|p| p.parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| ParseAngleError(text.to_string()))?;

    if parts.is_empty() || parts.len() > 3 {
        return Err(ParseAngleError(text.to_string()));
    }

    let value = parts[0]
        + parts.get(1).copied().unwrap_or(0.0) / 60.0
        + parts.get(2).copied().unwrap_or(0.0) / 3600.0;

    Ok(if negative { -value } else { value })
}

impl HourMinSec {
    /// Creates an hours-minutes-seconds angle from decimal hours
    pub fn from_hours(hours: f64) -> Self {
        let (negative, hour, min, sec) = split_sexagesimal(hours);
        HourMinSec {
            negative,
            hour,
            min,
            sec,
        }
    }

    /// Creates an hours-minutes-seconds angle from radians, normalized to [0h, 24h)
    pub fn from_radians(rad: f64) -> Self {
        Self::from_hours(mod_2pi(rad) * HOUR_PER_RAD)
    }

    /// Decimal hours
    pub fn to_hours(&self) -> f64 {
        join_sexagesimal(self.negative, self.hour, self.min, self.sec)
    }

    /// Radians
    pub fn to_radians(&self) -> f64 {
        self.to_hours() / HOUR_PER_RAD
    }
}

impl fmt::Display for HourMinSec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, hour, min, sec) = round_sexagesimal(self.to_hours(), 2);
        // Rounding up from just below 24h wraps to 00h
        let hour = if negative { hour } else { hour % 24 };
        let sign = if negative { "-" } else { "" };
        write!(f, "{}{:02} {:02} {:05.2}", sign, hour, min, sec)
    }
}

impl FromStr for HourMinSec {
    type Err = ParseAngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sexagesimal(s).map(Self::from_hours)
    }
}

impl DegMinSec {
    /// Creates a degrees-minutes-seconds angle from decimal degrees
    pub fn from_degrees(degrees: f64) -> Self {
        let (negative, deg, min, sec) = split_sexagesimal(degrees);
        DegMinSec {
            negative,
            deg,
            min,
            sec,
        }
    }

    /// Creates a degrees-minutes-seconds angle from radians
    pub fn from_radians(rad: f64) -> Self {
        Self::from_degrees(rad * DEG_PER_RAD)
    }

    /// Decimal degrees
    pub fn to_degrees(&self) -> f64 {
        join_sexagesimal(self.negative, self.deg, self.min, self.sec)
    }

    /// Radians
    pub fn to_radians(&self) -> f64 {
        self.to_degrees() / DEG_PER_RAD
    }
}

impl fmt::Display for DegMinSec {
    /// Always signed, so `+00 30 00.0` and `-00 30 00.0` stay distinguishable
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, deg, min, sec) = round_sexagesimal(self.to_degrees(), 1);
        let sign = if negative { '-' } else { '+' };
        write!(f, "{}{:02} {:02} {:04.1}", sign, deg, min, sec)
    }
}

impl FromStr for DegMinSec {
    type Err = ParseAngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sexagesimal(s).map(Self::from_degrees)
    }
}
