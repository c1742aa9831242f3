//! Skycatalog: star and deep-sky object catalogs
//!
//! This crate models catalog objects (stars, double and variable stars,
//! clusters, nebulae and galaxies) with J2000 positions and space motions
//! held as rectangular vectors, and reads and writes them as comma-separated
//! catalog records.
//!
//! ```rust
//! use skycatalog::objects::{CelestialObject, ObjectType};
//!
//! let line = "DS,06 45 08.92,-16 42 58.0,,,-1.46,,2.637E+00,,A1V,AB,+8.44,10.3,66.0,2020.00,Sirius,";
//! let sirius = CelestialObject::from_csv(line).unwrap();
//!
//! assert_eq!(sirius.object_type(), ObjectType::DoubleStar);
//! assert_eq!(sirius.double_star().unwrap().components, "AB");
//! assert_eq!(sirius.star().names(), ["Sirius".to_string()]);
//! ```

use thiserror::Error;

pub mod catalogs;
pub mod codec;
pub mod constants;
pub mod coordinates;
pub mod objects;

// Re-export commonly used types
pub use catalogs::{LoadReport, ObjectCatalog};
pub use codec::DecodeError;
pub use coordinates::{Matrix, Spherical, Vector};
pub use objects::{CelestialObject, Identifier, ObjectType};

/// Main error type for the skycatalog library
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Line {line}: {source}")]
    DecodeError {
        line: u64,
        #[source]
        source: codec::DecodeError,
    },
}

/// Result type for skycatalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
