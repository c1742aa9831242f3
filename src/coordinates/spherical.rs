//! Spherical coordinates and the position/velocity conversions between
//! spherical and rectangular form.
//!
//! A [`Spherical`] holds longitude and latitude in radians and a radial
//! coordinate in arbitrary linear units. The same type carries spherical
//! *motion*: longitude rate, latitude rate and radial rate, in radians and
//! linear units per unit time.

use serde::{Deserialize, Serialize};

use super::vector::Vector;
use super::mod_2pi;

/// Longitude, latitude and radial distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    /// Longitude in radians (right ascension for equatorial coordinates)
    pub lon: f64,
    /// Latitude in radians (declination for equatorial coordinates)
    pub lat: f64,
    /// Radial coordinate; `f64::INFINITY` means the distance is unknown
    pub rad: f64,
}

impl Spherical {
    /// Creates spherical coordinates from longitude, latitude and radius
    pub fn new(lon: f64, lat: f64, rad: f64) -> Self {
        Spherical { lon, lat, rad }
    }

    /// Creates a point on the unit sphere (radius 1.0)
    ///
    /// ```rust
    /// use skycatalog::coordinates::spherical::Spherical;
    ///
    /// let p = Spherical::from_angles(1.0, 0.5);
    /// assert_eq!(p.rad, 1.0);
    /// ```
    pub fn from_angles(lon: f64, lat: f64) -> Self {
        Spherical::new(lon, lat, 1.0)
    }

    /// Converts a rectangular vector to spherical coordinates
    ///
    /// Longitude is normalized to [0, 2π). When the vector lies on the Z axis
    /// the longitude is undefined and reported as 0; the zero vector converts
    /// to all zeros.
    pub fn from_vector(vec: &Vector) -> Self {
        let rad = vec.magnitude();
        if rad == 0.0 {
            return Spherical::new(0.0, 0.0, 0.0);
        }

        let lat = (vec.z / rad).clamp(-1.0, 1.0).asin();
        let lon = if vec.x == 0.0 && vec.y == 0.0 {
            0.0
        } else {
            mod_2pi(vec.y.atan2(vec.x))
        };

        Spherical::new(lon, lat, rad)
    }

    /// Rectangular position for these coordinates
    ///
    /// Longitude is measured from +X in the reference plane and latitude
    /// toward +Z; the radius is the distance from the origin.
    pub fn to_vector_position(&self) -> Vector {
        let cos_lat = self.lat.cos();
        Vector::new(
            self.rad * cos_lat * self.lon.cos(),
            self.rad * cos_lat * self.lon.sin(),
            self.rad * self.lat.sin(),
        )
    }

    /// Rectangular velocity for spherical `motion` at this position
    ///
    /// `motion.lon` and `motion.lat` are angular rates, `motion.rad` is the
    /// radial rate. The result is the time derivative of
    /// [`to_vector_position`](Self::to_vector_position).
    pub fn to_vector_velocity(&self, motion: &Spherical) -> Vector {
        spherical_to_vector_motion(self, motion).1
    }

    /// Angular separation in radians from this point to another
    ///
    /// Both points must have a radius of 1.0.
    pub fn angular_separation(&self, other: &Spherical) -> f64 {
        self.to_vector_position()
            .angular_separation(&other.to_vector_position())
    }

    /// Position angle in radians of `other` as seen from this point
    ///
    /// Measured from north through east, in [0, 2π).
    pub fn position_angle(&self, other: &Spherical) -> f64 {
        let delta_lon = other.lon - self.lon;
        let y = delta_lon.sin() * other.lat.cos();
        let x = self.lat.cos() * other.lat.sin()
            - self.lat.sin() * other.lat.cos() * delta_lon.cos();

        if x == 0.0 && y == 0.0 {
            0.0
        } else {
            mod_2pi(y.atan2(x))
        }
    }

    /// True when longitude, latitude and radius are all finite
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite() && self.rad.is_finite()
    }
}

impl From<Vector> for Spherical {
    fn from(vec: Vector) -> Self {
        Spherical::from_vector(&vec)
    }
}

impl From<Spherical> for Vector {
    fn from(sph: Spherical) -> Self {
        sph.to_vector_position()
    }
}

/// Converts spherical position and motion to rectangular position and velocity
///
/// # Mathematical Conversion
///
/// ```text
/// vx = vr cosb cosl - r sinb cosl vb - r cosb sinl vl
/// vy = vr cosb sinl - r sinb sinl vb + r cosb cosl vl
/// vz = vr sinb      + r cosb vb
/// ```
pub fn spherical_to_vector_motion(position: &Spherical, motion: &Spherical) -> (Vector, Vector) {
    let (sin_lon, cos_lon) = position.lon.sin_cos();
    let (sin_lat, cos_lat) = position.lat.sin_cos();
    let rad = position.rad;

    let pos = Vector::new(rad * cos_lat * cos_lon, rad * cos_lat * sin_lon, rad * sin_lat);

    let vel = Vector::new(
        motion.rad * cos_lat * cos_lon
            - rad * sin_lat * cos_lon * motion.lat
            - rad * cos_lat * sin_lon * motion.lon,
        motion.rad * cos_lat * sin_lon - rad * sin_lat * sin_lon * motion.lat
            + rad * cos_lat * cos_lon * motion.lon,
        motion.rad * sin_lat + rad * cos_lat * motion.lat,
    );

    (pos, vel)
}

/// Converts rectangular position and velocity to spherical position and motion
///
/// When the position has zero X and Y components the longitude and both
/// angular rates are undefined; they are returned as 0 while the radial rate
/// is still computed. This keeps NaN out of downstream arithmetic but is an
/// approximation, not the physical limit of the rates near the pole. The zero
/// vector yields all zeros.
pub fn vector_to_spherical_motion(position: &Vector, velocity: &Vector) -> (Spherical, Spherical) {
    let rad = position.magnitude();
    if rad == 0.0 {
        return (Spherical::new(0.0, 0.0, 0.0), Spherical::new(0.0, 0.0, 0.0));
    }

    let pos = Spherical::from_vector(position);
    let rad_rate = position.dot(velocity) / rad;

    let rho_sq = position.x * position.x + position.y * position.y;
    if rho_sq == 0.0 {
        return (pos, Spherical::new(0.0, 0.0, rad_rate));
    }

    let lon_rate = (position.x * velocity.y - position.y * velocity.x) / rho_sq;
    let lat_rate = (velocity.z - position.z * rad_rate / rad) / rho_sq.sqrt();

    (pos, Spherical::new(lon_rate, lat_rate, rad_rate))
}
