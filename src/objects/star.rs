//! Fields and fundamental-frame operations shared by every catalog object
//!
//! A [`Star`] stores its position and proper motion as heliocentric
//! rectangular vectors in the mean equatorial J2000 frame at epoch J2000:
//! positions in light years, velocities in light years per Julian year.
//! When the distance is unknown the position is a unit vector that only
//! carries direction, and the parallax is zero.

use log::debug;
use serde::{Deserialize, Serialize};

use super::identifier::{add_identifier, Catalog, Identifier};
use crate::constants::{LY_PER_PARSEC, PARSEC_PER_LY};
use crate::coordinates::{Spherical, Vector};

/// Apparent place computed by [`Star::compute_ephemeris`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Apparent {
    /// Unit vector toward the object, or the raw stored position when the
    /// distance is unknown; `None` when the object has no position at all
    pub direction: Option<Vector>,
    /// Distance in light years; infinite when unknown
    pub distance: f64,
    /// Apparent visual magnitude, when the catalog magnitude is known
    pub magnitude: Option<f64>,
}

/// Base fields shared by stars and deep-sky objects
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Star {
    names: Vec<String>,
    idents: Vec<Identifier>,
    /// Parallax in arcseconds; 0 when the distance is unknown
    parallax: f64,
    /// Radial velocity in light years per year
    radial_velocity: Option<f64>,
    position: Option<Vector>,
    velocity: Option<Vector>,
    /// Whether each proper-motion component was given; an unknown component
    /// contributes nothing to `velocity`
    #[serde(default)]
    pm_ra_known: bool,
    #[serde(default)]
    pm_dec_known: bool,
    /// Visual magnitude
    pub v_magnitude: Option<f64>,
    /// Blue magnitude
    pub b_magnitude: Option<f64>,
    /// Spectral type; empty when unknown
    pub spectral_type: String,
    #[serde(skip)]
    apparent: Option<Apparent>,
}

impl Star {
    /// Creates a star with every field unknown
    pub fn new() -> Self {
        Self::default()
    }

    /// Common names, in the order they were added
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Replaces the name list
    pub fn set_names(&mut self, names: Vec<String>) {
        self.names = names;
    }

    /// Appends a name
    pub fn add_name(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    /// Catalog identifiers, at most one per catalog
    pub fn identifiers(&self) -> &[Identifier] {
        &self.idents
    }

    /// Replaces the identifier list, keeping the first identifier seen for
    /// each catalog
    pub fn set_identifiers(&mut self, idents: Vec<Identifier>) {
        self.idents.clear();
        for ident in idents {
            self.add_identifier(ident);
        }
    }

    /// The identifier from `catalog`, if this object has one
    pub fn identifier(&self, catalog: Catalog) -> Option<Identifier> {
        self.idents.iter().find(|i| i.catalog() == catalog).copied()
    }

    /// Adds an identifier unless one from the same catalog is already present
    ///
    /// Returns whether the identifier was added.
    pub fn add_identifier(&mut self, ident: Identifier) -> bool {
        let added = add_identifier(ident, &mut self.idents);
        if !added {
            debug!("Ignoring {}: object already has a {:?} identifier", ident, ident.catalog());
        }
        added
    }

    /// Sorts identifiers into catalog order, then by number
    pub fn sort_identifiers(&mut self) {
        self.idents.sort();
    }

    /// Parallax in arcseconds; 0 means the distance is unknown
    pub fn parallax(&self) -> f64 {
        self.parallax
    }

    /// Radial velocity in light years per year
    pub fn radial_velocity(&self) -> Option<f64> {
        self.radial_velocity
    }

    /// Records a radial velocity for an object whose position is unknown
    ///
    /// Objects with a position get their radial velocity through
    /// [`set_fundamental_motion`](Self::set_fundamental_motion).
    pub(crate) fn set_radial_velocity(&mut self, radial_velocity: Option<f64>) {
        self.radial_velocity = radial_velocity.filter(|rv| rv.is_finite());
    }

    /// Heliocentric position at J2000 in light years
    pub fn position(&self) -> Option<Vector> {
        self.position
    }

    /// Heliocentric velocity at J2000 in light years per year
    pub fn velocity(&self) -> Option<Vector> {
        self.velocity
    }

    /// Sets mean equatorial J2000 coordinates at epoch J2000
    ///
    /// `coords.lon`/`coords.lat` are RA/Dec in radians and `coords.rad` is the
    /// distance in light years, infinite when unknown. Without a usable
    /// distance the position is stored as a unit vector. Any previously set
    /// proper motion is cleared since it was derived from the old position;
    /// the radial velocity is kept.
    pub fn set_fundamental_coords(&mut self, coords: Spherical) {
        let (coords, parallax) = Self::normalize_distance(coords);
        self.parallax = parallax;
        self.position = Some(coords.to_vector_position());
        self.velocity = None;
        self.pm_ra_known = false;
        self.pm_dec_known = false;
    }

    /// Sets mean equatorial J2000 coordinates and motion at epoch J2000
    ///
    /// `motion.lon`/`motion.lat` are the proper motions in RA and Dec in
    /// radians per Julian year; a non-finite component is unknown.
    /// `motion.rad` is the radial velocity in light years per year, infinite
    /// when unknown. Unknown components contribute nothing to the velocity
    /// vector but stay unknown when read back. The velocity is unset only
    /// when both proper-motion components are unknown.
    pub fn set_fundamental_motion(&mut self, coords: Spherical, motion: Spherical) {
        let (coords, parallax) = Self::normalize_distance(coords);
        self.parallax = parallax;
        self.radial_velocity = Some(motion.rad).filter(|rv| rv.is_finite());
        self.position = Some(coords.to_vector_position());

        let pm_ra = Some(motion.lon).filter(|pm| pm.is_finite());
        let pm_dec = Some(motion.lat).filter(|pm| pm.is_finite());
        self.pm_ra_known = pm_ra.is_some();
        self.pm_dec_known = pm_dec.is_some();

        if pm_ra.is_none() && pm_dec.is_none() {
            self.velocity = None;
            return;
        }

        // Radial motion of a unit-distance placeholder is meaningless
        let rad_rate = if parallax > 0.0 {
            self.radial_velocity.unwrap_or(0.0)
        } else {
            0.0
        };
        let motion = Spherical::new(pm_ra.unwrap_or(0.0), pm_dec.unwrap_or(0.0), rad_rate);
        self.velocity = Some(coords.to_vector_velocity(&motion));
    }

    /// Derives parallax from distance and swaps unknown distances for a unit radius
    fn normalize_distance(mut coords: Spherical) -> (Spherical, f64) {
        let parallax = if coords.rad.is_finite() && coords.rad > 0.0 {
            LY_PER_PARSEC / coords.rad
        } else {
            0.0
        };

        if parallax <= 0.0 {
            coords.rad = 1.0;
        }

        (coords, parallax)
    }

    /// Distance in light years derived from the parallax; infinite when unknown
    pub fn distance(&self) -> f64 {
        if self.parallax > 0.0 && self.parallax.is_finite() {
            LY_PER_PARSEC / self.parallax
        } else {
            f64::INFINITY
        }
    }

    /// Mean equatorial J2000 coordinates at epoch J2000
    ///
    /// The radius is the distance in light years, infinite when unknown.
    /// Returns `None` when the object has no position.
    pub fn fundamental_coords(&self) -> Option<Spherical> {
        let mut coords = self.position?.to_spherical();
        coords.rad = self.distance();
        Some(coords)
    }

    /// Proper motion and radial velocity at epoch J2000
    ///
    /// Proper motions are in radians per Julian year, infinite when that
    /// component is unknown; the radial rate is the stored radial velocity in
    /// light years per year, infinite when unknown. Returns `None` when the
    /// position or both proper-motion components are unknown.
    pub fn fundamental_motion(&self) -> Option<Spherical> {
        let position = self.position?;
        let velocity = self.velocity?;
        let mut motion = position.to_spherical_velocity(&velocity);
        if !self.pm_ra_known {
            motion.lon = f64::INFINITY;
        }
        if !self.pm_dec_known {
            motion.lat = f64::INFINITY;
        }
        motion.rad = self.radial_velocity.unwrap_or(f64::INFINITY);
        Some(motion)
    }

    /// Projects the catalog position to `elapsed_years` Julian years after J2000
    ///
    /// With a known distance the object moves linearly along its space
    /// velocity; the apparent magnitude is corrected for the change in
    /// distance so that it equals the catalog magnitude at zero elapsed time.
    /// Without a distance the stored direction and catalog magnitude are
    /// returned unchanged and the distance is infinite.
    pub fn compute_ephemeris(&mut self, elapsed_years: f64) -> Apparent {
        let apparent = match self.position {
            Some(position) if self.parallax > 0.0 => {
                let velocity = self.velocity.unwrap_or_default();
                let (direction, distance) =
                    (position + velocity * elapsed_years).normalize_with_magnitude();
                Apparent {
                    direction: Some(direction),
                    distance,
                    magnitude: self.v_magnitude.map(|v| {
                        v + 5.0 * (distance * PARSEC_PER_LY * self.parallax).log10()
                    }),
                }
            }
            position => Apparent {
                direction: position,
                distance: f64::INFINITY,
                magnitude: self.v_magnitude,
            },
        };

        self.apparent = Some(apparent);
        apparent
    }

    /// Result of the most recent [`compute_ephemeris`](Self::compute_ephemeris)
    pub fn apparent(&self) -> Option<&Apparent> {
        self.apparent.as_ref()
    }
}
