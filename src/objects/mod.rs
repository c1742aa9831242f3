//! Celestial object model
//!
//! A [`CelestialObject`] is a closed tagged variant: an immutable
//! [`ObjectType`] plus the base [`Star`] fields and exactly the extra fragments
//! that type carries. Capability queries such as
//! [`double_star`](CelestialObject::double_star) answer from the fragment that
//! is actually present, so they can never disagree with the type tag.
//!
//! | Type                    | Double | Variable | Deep-sky |
//! |-------------------------|--------|----------|----------|
//! | Star                    |        |          |          |
//! | Double star             | ✓      |          |          |
//! | Variable star           |        | ✓        |          |
//! | Double variable star    | ✓      | ✓        |          |
//! | Cluster, nebula, galaxy |        |          | ✓        |

pub mod identifier;
pub mod object_type;
pub mod star;
pub mod variants;

pub use identifier::{Catalog, Identifier};
pub use object_type::{code_to_type, type_to_code, ObjectType};
pub use star::{Apparent, Star};
pub use variants::{DeepSky, DoubleStar, VariableStar};

use std::mem::discriminant;

use log::debug;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::codec::{self, DecodeError};

/// Type-specific fragments layered on the base star fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Extension {
    None,
    Double(DoubleStar),
    Variable(VariableStar),
    DoubleVariable(DoubleStar, VariableStar),
    DeepSky(DeepSky),
}

/// A star or deep-sky object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CelestialObject {
    object_type: ObjectType,
    star: Star,
    extension: Extension,
}

/// Serialized form, checked against the type tag before use
#[derive(Deserialize)]
struct RawObject {
    object_type: ObjectType,
    star: Star,
    extension: Extension,
}

impl<'de> Deserialize<'de> for CelestialObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawObject::deserialize(deserializer)?;
        let expected = CelestialObject::new(raw.object_type).ok_or_else(|| {
            D::Error::custom(format!(
                "object type {} has no catalog fields",
                raw.object_type
            ))
        })?;

        if discriminant(&expected.extension) != discriminant(&raw.extension) {
            return Err(D::Error::custom(format!(
                "fields do not match object type {}",
                raw.object_type
            )));
        }

        Ok(CelestialObject {
            object_type: raw.object_type,
            star: raw.star,
            extension: raw.extension,
        })
    }
}

impl CelestialObject {
    /// Creates an object of the given type with every field unknown
    ///
    /// Returns `None` for types that are not stars or deep-sky objects.
    ///
    /// ```rust
    /// use skycatalog::objects::{CelestialObject, ObjectType};
    ///
    /// let dv = CelestialObject::new(ObjectType::DoubleVariableStar).unwrap();
    /// assert!(dv.double_star().is_some());
    /// assert!(dv.variable_star().is_some());
    /// assert!(dv.deep_sky().is_none());
    ///
    /// assert!(CelestialObject::new(ObjectType::Planet).is_none());
    /// ```
    pub fn new(object_type: ObjectType) -> Option<Self> {
        let extension = match object_type {
            ObjectType::Star => Extension::None,
            ObjectType::DoubleStar => Extension::Double(DoubleStar::new()),
            ObjectType::VariableStar => Extension::Variable(VariableStar::new()),
            ObjectType::DoubleVariableStar => {
                Extension::DoubleVariable(DoubleStar::new(), VariableStar::new())
            }
            t if t.is_deep_sky() => Extension::DeepSky(DeepSky::new()),
            _ => return None,
        };

        Some(CelestialObject {
            object_type,
            star: Star::new(),
            extension,
        })
    }

    /// A single star with every field unknown
    pub fn star_object() -> Self {
        CelestialObject {
            object_type: ObjectType::Star,
            star: Star::new(),
            extension: Extension::None,
        }
    }

    /// The object's type; fixed at construction
    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    /// Base fields, present on every object
    pub fn star(&self) -> &Star {
        &self.star
    }

    /// Mutable base fields
    pub fn star_mut(&mut self) -> &mut Star {
        &mut self.star
    }

    /// Double-star fields, for double and double-variable stars
    pub fn double_star(&self) -> Option<&DoubleStar> {
        match &self.extension {
            Extension::Double(d) | Extension::DoubleVariable(d, _) => Some(d),
            _ => None,
        }
    }

    /// Mutable double-star fields
    pub fn double_star_mut(&mut self) -> Option<&mut DoubleStar> {
        match &mut self.extension {
            Extension::Double(d) | Extension::DoubleVariable(d, _) => Some(d),
            _ => None,
        }
    }

    /// Variable-star fields, for variable and double-variable stars
    pub fn variable_star(&self) -> Option<&VariableStar> {
        match &self.extension {
            Extension::Variable(v) | Extension::DoubleVariable(_, v) => Some(v),
            _ => None,
        }
    }

    /// Mutable variable-star fields
    pub fn variable_star_mut(&mut self) -> Option<&mut VariableStar> {
        match &mut self.extension {
            Extension::Variable(v) | Extension::DoubleVariable(_, v) => Some(v),
            _ => None,
        }
    }

    /// Deep-sky fields, for clusters, nebulae and galaxies
    pub fn deep_sky(&self) -> Option<&DeepSky> {
        match &self.extension {
            Extension::DeepSky(ds) => Some(ds),
            _ => None,
        }
    }

    /// Mutable deep-sky fields
    pub fn deep_sky_mut(&mut self) -> Option<&mut DeepSky> {
        match &mut self.extension {
            Extension::DeepSky(ds) => Some(ds),
            _ => None,
        }
    }

    /// Encodes this object as one catalog record
    pub fn to_csv(&self) -> String {
        codec::encode(self)
    }

    /// Decodes one catalog record, or returns `None` if it is not a valid
    /// star or deep-sky record
    ///
    /// ```rust
    /// use skycatalog::objects::{CelestialObject, ObjectType};
    ///
    /// let line = "SS,10 00 00.00,+20 00 00.0,,,+5.00,,,,,";
    /// let star = CelestialObject::from_csv(line).unwrap();
    /// assert_eq!(star.object_type(), ObjectType::Star);
    /// assert_eq!(star.star().v_magnitude, Some(5.0));
    /// assert_eq!(star.to_csv(), line);
    ///
    /// assert!(CelestialObject::from_csv("XX,,,,,,,,,,").is_none());
    /// ```
    pub fn from_csv(line: &str) -> Option<Self> {
        match Self::parse_csv(line) {
            Ok(object) => Some(object),
            Err(e) => {
                debug!("Rejected record {:?}: {}", line, e);
                None
            }
        }
    }

    /// Decodes one catalog record, reporting why it was rejected
    pub fn parse_csv(line: &str) -> Result<Self, DecodeError> {
        codec::decode(line)
    }

    /// Display name: the first common name, else the first identifier
    pub fn display_name(&self) -> Option<String> {
        self.star
            .names()
            .first()
            .cloned()
            .or_else(|| self.star.identifiers().first().map(|i| i.to_string()))
    }
}
