//! Extra fields carried by double stars, variable stars and deep-sky objects

use serde::{Deserialize, Serialize};

/// Double-star fields
///
/// Angles are in radians.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DoubleStar {
    /// Component designations, e.g. `AB`; empty when unknown
    pub components: String,
    /// Magnitude difference between the components
    pub magnitude_delta: Option<f64>,
    /// Angular separation of the components in radians
    pub separation: Option<f64>,
    /// Position angle of the companion in radians
    pub position_angle: Option<f64>,
    /// Year the position angle was measured
    pub position_angle_year: Option<f64>,
}

impl DoubleStar {
    /// Creates a double-star fragment with every field unknown
    pub fn new() -> Self {
        Self::default()
    }
}

/// Variable-star fields
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VariableStar {
    /// GCVS variability type, e.g. `EA` or `DCEP`; empty when unknown
    pub variable_type: String,
    /// Magnitude at maximum brightness
    pub maximum_magnitude: Option<f64>,
    /// Magnitude at minimum brightness
    pub minimum_magnitude: Option<f64>,
    /// Period in days
    pub period: Option<f64>,
    /// Julian date of a reference maximum or minimum
    pub epoch: Option<f64>,
}

impl VariableStar {
    /// Creates a variable-star fragment with every field unknown
    pub fn new() -> Self {
        Self::default()
    }
}

/// Deep-sky object fields
///
/// Angles are in radians.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeepSky {
    /// Apparent major axis in radians
    pub major_axis: Option<f64>,
    /// Apparent minor axis in radians
    pub minor_axis: Option<f64>,
    /// Position angle of the major axis in radians
    pub position_angle: Option<f64>,
}

impl DeepSky {
    /// Creates a deep-sky fragment with every field unknown
    pub fn new() -> Self {
        Self::default()
    }
}
