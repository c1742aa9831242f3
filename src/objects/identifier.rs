//! Catalog identifiers
//!
//! An [`Identifier`] names an object in one external catalog, e.g. `HR 2491`
//! or `NGC 224`. Its string form is self-describing, so identifiers can be
//! told apart from free-text names when reading catalog records.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// External catalogs an identifier can belong to
///
/// Declaration order is the sort order used by [`Identifier`]'s `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Catalog {
    /// Messier catalog (`M31`)
    Messier,
    /// Caldwell catalog (`C14`)
    Caldwell,
    /// New General Catalogue (`NGC 224`)
    Ngc,
    /// Index Catalogue (`IC 434`)
    Ic,
    /// Harvard Revised / Bright Star catalog (`HR 2491`)
    Hr,
    /// Henry Draper catalog (`HD 48915`)
    Hd,
    /// Smithsonian Astrophysical Observatory catalog (`SAO 151881`)
    Sao,
    /// Hipparcos catalog (`HIP 32349`)
    Hip,
    /// Gliese-Jahreiss nearby star catalog (`GJ 244`)
    Gj,
}

impl Catalog {
    /// Text prefix used in the identifier's string form
    pub fn prefix(self) -> &'static str {
        match self {
            Catalog::Messier => "M",
            Catalog::Caldwell => "C",
            Catalog::Ngc => "NGC",
            Catalog::Ic => "IC",
            Catalog::Hr => "HR",
            Catalog::Hd => "HD",
            Catalog::Sao => "SAO",
            Catalog::Hip => "HIP",
            Catalog::Gj => "GJ",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Catalog> {
        Some(match prefix {
            "M" => Catalog::Messier,
            "C" => Catalog::Caldwell,
            "NGC" => Catalog::Ngc,
            "IC" => Catalog::Ic,
            "HR" => Catalog::Hr,
            "HD" => Catalog::Hd,
            "SAO" => Catalog::Sao,
            "HIP" => Catalog::Hip,
            "GJ" => Catalog::Gj,
            _ => return None,
        })
    }

    /// Messier and Caldwell numbers are written without a space
    fn is_compact(self) -> bool {
        matches!(self, Catalog::Messier | Catalog::Caldwell)
    }
}

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex =
        Regex::new(r"^(M|C|NGC|IC|HR|HD|SAO|HIP|GJ)\s*(\d{1,9})$").expect("valid identifier regex");
}

/// Error returned when a string is not a recognized identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a catalog identifier: {0:?}")]
pub struct ParseIdentifierError(pub String);

/// An object's number in one external catalog
///
/// Identifiers order by catalog first, then by number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Identifier {
    catalog: Catalog,
    number: u32,
}

impl Identifier {
    /// Creates an identifier from its catalog and number
    pub fn new(catalog: Catalog, number: u32) -> Self {
        Identifier { catalog, number }
    }

    /// The catalog this identifier belongs to
    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    /// The object's number within its catalog
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Parses an identifier from its string form, or returns `None`
    ///
    /// ```rust
    /// use skycatalog::objects::identifier::{Catalog, Identifier};
    ///
    /// assert_eq!(Identifier::parse("HR 2491"), Some(Identifier::new(Catalog::Hr, 2491)));
    /// assert_eq!(Identifier::parse("M31"), Some(Identifier::new(Catalog::Messier, 31)));
    /// assert_eq!(Identifier::parse("Sirius"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Identifier> {
        let caps = IDENTIFIER_PATTERN.captures(text.trim())?;
        let catalog = Catalog::from_prefix(caps.get(1)?.as_str())?;
        let number = caps.get(2)?.as_str().parse().ok()?;
        Some(Identifier::new(catalog, number))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.catalog.is_compact() {
            write!(f, "{}{}", self.catalog.prefix(), self.number)
        } else {
            write!(f, "{} {}", self.catalog.prefix(), self.number)
        }
    }
}

impl FromStr for Identifier {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::parse(s).ok_or_else(|| ParseIdentifierError(s.to_string()))
    }
}

/// Adds `ident` to `idents` unless an identifier from the same catalog is
/// already present. Returns whether it was added.
pub fn add_identifier(ident: Identifier, idents: &mut Vec<Identifier>) -> bool {
    if idents.iter().any(|i| i.catalog == ident.catalog) {
        return false;
    }
    idents.push(ident);
    true
}
