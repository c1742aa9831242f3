//! Object type discriminator and the two-letter code registry used in
//! catalog records.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Kind of celestial object
///
/// The variants from [`Star`](ObjectType::Star) through
/// [`Galaxy`](ObjectType::Galaxy) are the catalog objects this crate models;
/// the rest exist so that codes from other object sources are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    Planet,
    Moon,
    Asteroid,
    Comet,
    Satellite,
    Spacecraft,
    Star,
    DoubleStar,
    VariableStar,
    DoubleVariableStar,
    OpenCluster,
    GlobularCluster,
    BrightNebula,
    DarkNebula,
    PlanetaryNebula,
    Galaxy,
    Constellation,
    Asterism,
}

const TYPE_CODES: [(ObjectType, &str); 18] = [
    (ObjectType::Planet, "PL"),
    (ObjectType::Moon, "MN"),
    (ObjectType::Asteroid, "AS"),
    (ObjectType::Comet, "CM"),
    (ObjectType::Satellite, "SA"),
    (ObjectType::Spacecraft, "SC"),
    (ObjectType::Star, "SS"),
    (ObjectType::DoubleStar, "DS"),
    (ObjectType::VariableStar, "VS"),
    (ObjectType::DoubleVariableStar, "DV"),
    (ObjectType::OpenCluster, "OC"),
    (ObjectType::GlobularCluster, "GC"),
    (ObjectType::BrightNebula, "BN"),
    (ObjectType::DarkNebula, "DN"),
    (ObjectType::PlanetaryNebula, "PN"),
    (ObjectType::Galaxy, "GX"),
    (ObjectType::Constellation, "CN"),
    (ObjectType::Asterism, "AM"),
];

lazy_static! {
    static ref CODE_TO_TYPE: HashMap<&'static str, ObjectType> =
        TYPE_CODES.iter().map(|&(t, code)| (code, t)).collect();
}

impl ObjectType {
    /// Two-letter code for this type
    pub fn code(self) -> &'static str {
        TYPE_CODES
            .iter()
            .find(|(t, _)| *t == self)
            .map(|(_, code)| *code)
            .unwrap_or("")
    }

    /// Looks up a type by its two-letter code
    pub fn from_code(code: &str) -> Option<ObjectType> {
        CODE_TO_TYPE.get(code.trim()).copied()
    }

    /// True for the four star types
    pub fn is_star(self) -> bool {
        matches!(
            self,
            ObjectType::Star
                | ObjectType::DoubleStar
                | ObjectType::VariableStar
                | ObjectType::DoubleVariableStar
        )
    }

    /// True for clusters, nebulae and galaxies
    pub fn is_deep_sky(self) -> bool {
        matches!(
            self,
            ObjectType::OpenCluster
                | ObjectType::GlobularCluster
                | ObjectType::BrightNebula
                | ObjectType::DarkNebula
                | ObjectType::PlanetaryNebula
                | ObjectType::Galaxy
        )
    }

    /// True for every type a [`CelestialObject`](super::CelestialObject) can hold
    pub fn is_catalog_object(self) -> bool {
        self.is_star() || self.is_deep_sky()
    }

    /// True when objects of this type carry double-star fields
    pub fn has_double_star(self) -> bool {
        matches!(self, ObjectType::DoubleStar | ObjectType::DoubleVariableStar)
    }

    /// True when objects of this type carry variable-star fields
    pub fn has_variable_star(self) -> bool {
        matches!(self, ObjectType::VariableStar | ObjectType::DoubleVariableStar)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Maps a record's type code to its discriminator
pub fn code_to_type(code: &str) -> Option<ObjectType> {
    ObjectType::from_code(code)
}

/// Maps a discriminator to its record type code
pub fn type_to_code(object_type: ObjectType) -> &'static str {
    object_type.code()
}
