//! Constants module for unit conversions and catalog physics
//!
//! Everything here is a frozen, process-wide value. Nothing in the crate mutates
//! these, so they are safe to read from any thread.

use std::f64::consts::PI;

// Angles
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Degrees per radian
pub const DEG_PER_RAD: f64 = 180.0 / PI;
/// Radians per degree
pub const RAD_PER_DEG: f64 = PI / 180.0;
/// Arcminutes per radian
pub const ARCMIN_PER_RAD: f64 = 60.0 * DEG_PER_RAD;
/// Arcseconds per radian
pub const ARCSEC_PER_RAD: f64 = 3600.0 * DEG_PER_RAD;
/// Radians per arcsecond
pub const RAD_PER_ARCSEC: f64 = 1.0 / ARCSEC_PER_RAD;
/// Hours per radian (24h = 2π)
pub const HOUR_PER_RAD: f64 = 12.0 / PI;
/// Arcseconds of angle per second of time in right ascension
pub const ARCSEC_PER_TIME_SEC: f64 = 15.0;

// Distances
/// Light years per parsec
pub const LY_PER_PARSEC: f64 = 3.261_563_777_167_433_6;
/// Parsecs per light year
pub const PARSEC_PER_LY: f64 = 1.0 / LY_PER_PARSEC;

// Physics
/// Speed of light in km/s; also the number of km/s in one light year per year
pub const LIGHT_KM_PER_SEC: f64 = 299_792.458;

// Time constants
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Days per Julian year
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reciprocal_constants() {
        assert_relative_eq!(LY_PER_PARSEC * PARSEC_PER_LY, 1.0, epsilon = 1e-15);
        assert_relative_eq!(ARCSEC_PER_RAD * RAD_PER_ARCSEC, 1.0, epsilon = 1e-15);
        assert_relative_eq!(DEG_PER_RAD * RAD_PER_DEG, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_arcsec_per_radian() {
        assert_relative_eq!(ARCSEC_PER_RAD, 206_264.806_247_096_36, epsilon = 1e-6);
        assert_relative_eq!(ARCMIN_PER_RAD * 60.0, ARCSEC_PER_RAD, epsilon = 1e-9);
    }
}
