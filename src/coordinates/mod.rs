//! Coordinate algebra: rectangular vectors, spherical coordinates,
//! rotation matrices and sexagesimal angles.

pub mod angle;
pub mod matrix;
pub mod spherical;
pub mod vector;

pub use angle::{DegMinSec, HourMinSec};
pub use matrix::{Axis, Matrix};
pub use spherical::{spherical_to_vector_motion, vector_to_spherical_motion, Spherical};
pub use vector::Vector;

use crate::constants::TAU;

/// Reduces an angle in radians to [0, 2π)
pub fn mod_2pi(rad: f64) -> f64 {
    let reduced = rad.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if reduced >= TAU {
        0.0
    } else {
        reduced
    }
}
