//! # Rectangular Vector Module
//!
//! This module provides the 3D rectangular vector that every position and
//! velocity in the catalog model is stored as.
//!
//! ## Coordinate System Convention
//!
//! - **X-axis**: Points toward longitude 0 in the reference plane
//!   (the vernal equinox for equatorial coordinates)
//! - **Y-axis**: Points toward longitude 90° in the reference plane
//! - **Z-axis**: Points toward the north pole of the reference plane
//!
//! ## Value Semantics
//!
//! `Vector` is `Copy`, and every operation returns a new vector. No method
//! modifies its receiver, with the sole exception of the compound assignment
//! operators (`+=`, `/=`), which are provided for symmetry with the binary ones.
//!
//! ## Examples
//!
//! ```rust
//! use skycatalog::coordinates::vector::Vector;
//!
//! let vernal_equinox = Vector::new(1.0, 0.0, 0.0);
//! let north_pole = Vector::new(0.0, 0.0, 1.0);
//!
//! assert_eq!(vernal_equinox.dot(&north_pole), 0.0);
//! assert_eq!(vernal_equinox.cross(&north_pole), Vector::new(0.0, -1.0, 0.0));
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::spherical::Spherical;

/// Three-dimensional rectangular vector
///
/// Represents a position or a velocity relative to the origin of the
/// coordinate system, in arbitrary units. Positions of catalog objects are
/// stored in light years, velocities in light years per Julian year.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    /// X-component (toward longitude 0)
    pub x: f64,
    /// Y-component (toward longitude 90°)
    pub y: f64,
    /// Z-component (toward the north pole)
    pub z: f64,
}

impl Vector {
    /// Creates a new vector from its rectangular components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skycatalog::coordinates::vector::Vector;
    ///
    /// let v = Vector::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.y, 2.0);
    /// assert_eq!(v.z, 3.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    /// The vector at the origin of the coordinate system
    pub fn zero() -> Self {
        Vector::new(0.0, 0.0, 0.0)
    }

    /// Creates a rectangular vector from spherical coordinates
    ///
    /// The radial coordinate is treated as the distance from the origin.
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = rad * cos(lat) * cos(lon)`
    /// - `y = rad * cos(lat) * sin(lon)`
    /// - `z = rad * sin(lat)`
    pub fn from_spherical(sph: &Spherical) -> Self {
        sph.to_vector_position()
    }

    /// Converts this vector to spherical coordinates
    ///
    /// Longitude is normalized to [0, 2π). The zero vector converts to all-zero
    /// spherical coordinates, and a vector along the Z axis gets longitude 0.
    pub fn to_spherical(&self) -> Spherical {
        Spherical::from_vector(self)
    }

    /// Converts this position vector and a velocity vector to spherical motion
    ///
    /// Returns the spherical rates (longitude rate, latitude rate, radial rate)
    /// consistent with differentiating the spherical position. See
    /// [`vector_to_spherical_motion`](super::spherical::vector_to_spherical_motion)
    /// for the degenerate cases.
    pub fn to_spherical_velocity(&self, velocity: &Vector) -> Spherical {
        super::spherical::vector_to_spherical_motion(self, velocity).1
    }

    /// Calculates the magnitude (length) of the vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skycatalog::coordinates::vector::Vector;
    ///
    /// assert_eq!(Vector::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a unit vector in the same direction, plus the original magnitude
    ///
    /// A zero-length vector normalizes to the zero vector, never to NaN.
    pub fn normalize_with_magnitude(&self) -> (Vector, f64) {
        let mag = self.magnitude();
        if mag > 0.0 {
            (*self / mag, mag)
        } else {
            (Vector::zero(), mag)
        }
    }

    /// Returns a unit vector in the same direction
    ///
    /// A zero-length vector normalizes to the zero vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skycatalog::coordinates::vector::Vector;
    ///
    /// let unit = Vector::new(3.0, 4.0, 0.0).normalize();
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    ///
    /// assert_eq!(Vector::zero().normalize(), Vector::zero());
    /// ```
    pub fn normalize(&self) -> Vector {
        self.normalize_with_magnitude().0
    }

    /// Calculates the dot product with another vector
    ///
    /// # Mathematical Formula
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product with another vector
    ///
    /// # Mathematical Formula
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Angular separation in radians to another point, as seen from the origin
    ///
    /// Both vectors must be unit vectors; the result is meaningless otherwise
    /// and no renormalization is attempted. Uses the half-chord arcsine
    /// `2 * asin(|a - b| / 2)`, switching to `π - 2 * asin(|a + b| / 2)` past
    /// 90° so precision holds for both tiny and near-antipodal separations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skycatalog::coordinates::vector::Vector;
    /// use std::f64::consts::PI;
    ///
    /// let x_axis = Vector::new(1.0, 0.0, 0.0);
    /// let y_axis = Vector::new(0.0, 1.0, 0.0);
    /// assert!((x_axis.angular_separation(&y_axis) - PI / 2.0).abs() < 1e-15);
    /// assert!((x_axis.angular_separation(&-x_axis) - PI).abs() < 1e-15);
    /// ```
    pub fn angular_separation(&self, other: &Vector) -> f64 {
        if self.dot(other) >= 0.0 {
            let half_chord = (*self - *other).magnitude() / 2.0;
            2.0 * half_chord.min(1.0).asin()
        } else {
            let half_chord = (*self + *other).magnitude() / 2.0;
            PI - 2.0 * half_chord.min(1.0).asin()
        }
    }

    /// Position angle in radians from this point toward another
    ///
    /// Measured from north through east, in [0, 2π).
    pub fn position_angle(&self, other: &Vector) -> f64 {
        self.to_spherical().position_angle(&other.to_spherical())
    }

    /// Distance from this point to another, in the units of both vectors
    pub fn distance(&self, other: &Vector) -> f64 {
        (*self - *other).magnitude()
    }

    /// True when all three components are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    ///
    /// ```rust
    /// use skycatalog::coordinates::vector::Vector;
    ///
    /// let v = Vector::new(1.0, 2.0, 3.0);
    /// assert_eq!(Vector::from_vector3(v.to_vector3()), v);
    /// ```
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Vector {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::AddAssign for Vector {
    fn add_assign(&mut self, other: Vector) {
        *self = *self + other;
    }
}

impl std::ops::Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        Vector::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Div<f64> for Vector {
    type Output = Vector;

    fn div(self, scalar: f64) -> Vector {
        Vector::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::DivAssign<f64> for Vector {
    fn div_assign(&mut self, scalar: f64) {
        *self = *self / scalar;
    }
}
