//! 3×3 rotation and transform matrices
//!
//! [`Matrix`] wraps a nalgebra `Matrix3<f64>` and exposes the small set of
//! operations the catalog needs for rotating between coordinate frames.

use nalgebra::{Matrix3, Rotation3, Vector3};

use super::vector::Vector;

/// Principal axis of a rectangular coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn unit(self) -> nalgebra::Unit<Vector3<f64>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }
}

/// A 3×3 matrix acting as a linear map on [`Vector`]s
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    inner: Matrix3<f64>,
}

impl Matrix {
    /// Creates a matrix from its nine elements in row-major order
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: f64,
        m01: f64,
        m02: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m20: f64,
        m21: f64,
        m22: f64,
    ) -> Self {
        Matrix {
            inner: Matrix3::new(m00, m01, m02, m10, m11, m12, m20, m21, m22),
        }
    }

    /// Creates a matrix whose rows are the three given vectors
    pub fn from_rows(r0: &Vector, r1: &Vector, r2: &Vector) -> Self {
        Matrix::new(r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z)
    }

    /// The identity matrix
    pub fn identity() -> Self {
        Matrix {
            inner: Matrix3::identity(),
        }
    }

    /// Rotation by `angle` radians about a principal axis
    ///
    /// Positive angles rotate counter-clockwise when looking down the axis
    /// toward the origin.
    ///
    /// ```rust
    /// use skycatalog::coordinates::matrix::{Axis, Matrix};
    /// use skycatalog::coordinates::vector::Vector;
    /// use std::f64::consts::PI;
    ///
    /// let rot = Matrix::rotation(Axis::Z, PI / 2.0);
    /// let v = rot.multiply_vector(&Vector::new(1.0, 0.0, 0.0));
    /// assert!(v.x.abs() < 1e-15);
    /// assert!((v.y - 1.0).abs() < 1e-15);
    /// ```
    pub fn rotation(axis: Axis, angle: f64) -> Self {
        Matrix {
            inner: Rotation3::from_axis_angle(&axis.unit(), angle).into_inner(),
        }
    }

    /// Returns this matrix followed by a rotation about a principal axis
    pub fn rotate(&self, axis: Axis, angle: f64) -> Self {
        Matrix::rotation(axis, angle).multiply(self)
    }

    /// Element at `row`, `col` (both 0..3)
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.inner[(row, col)]
    }

    /// Algebraic transpose
    pub fn transpose(&self) -> Self {
        Matrix {
            inner: self.inner.transpose(),
        }
    }

    /// Inverse of a rotation matrix
    ///
    /// Only valid for orthonormal matrices, where it equals the transpose.
    /// General matrices are not inverted.
    pub fn inverse(&self) -> Self {
        self.transpose()
    }

    /// Applies this matrix to a vector
    pub fn multiply_vector(&self, vec: &Vector) -> Vector {
        Vector::from_vector3(self.inner * vec.to_vector3())
    }

    /// Composes this matrix with another (`self * other`)
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        Matrix {
            inner: self.inner * other.inner,
        }
    }

    /// The wrapped nalgebra matrix
    pub fn to_matrix3(&self) -> Matrix3<f64> {
        self.inner
    }

    /// Wraps a nalgebra matrix
    pub fn from_matrix3(inner: Matrix3<f64>) -> Self {
        Matrix { inner }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::identity()
    }
}

impl std::ops::Mul<Vector> for Matrix {
    type Output = Vector;

    fn mul(self, vec: Vector) -> Vector {
        self.multiply_vector(&vec)
    }
}

impl std::ops::Mul for Matrix {
    type Output = Matrix;

    fn mul(self, other: Matrix) -> Matrix {
        self.multiply(&other)
    }
}
