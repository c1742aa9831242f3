//! Positional record layouts
//!
//! Every catalog record starts with the same base fields; the object type then
//! fixes which fragments follow and where. The identifier/name tail begins at
//! [`RecordLayout::fixed_fields`].

use crate::objects::ObjectType;

/// Fields shared by every record: type code, RA, Dec, two proper motions,
/// V and B magnitudes, distance, radial velocity, spectral type
pub const BASE_FIELDS: usize = 10;
/// Components, magnitude delta, separation, position angle, position angle year
pub const DOUBLE_FIELDS: usize = 5;
/// Variability type, minimum and maximum magnitude, period, epoch
pub const VARIABLE_FIELDS: usize = 5;
/// Major axis, minor axis, position angle
pub const DEEP_SKY_FIELDS: usize = 3;

/// Where each fragment sits in a record of one object type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    /// Number of positional fields before the identifier/name tail
    pub fixed_fields: usize,
    /// Index of the first double-star field
    pub double_offset: Option<usize>,
    /// Index of the first variable-star field
    pub variable_offset: Option<usize>,
    /// Index of the first deep-sky field
    pub deep_sky_offset: Option<usize>,
}

const STAR: RecordLayout = RecordLayout {
    fixed_fields: BASE_FIELDS,
    double_offset: None,
    variable_offset: None,
    deep_sky_offset: None,
};

const DOUBLE_STAR: RecordLayout = RecordLayout {
    fixed_fields: BASE_FIELDS + DOUBLE_FIELDS,
    double_offset: Some(BASE_FIELDS),
    variable_offset: None,
    deep_sky_offset: None,
};

const VARIABLE_STAR: RecordLayout = RecordLayout {
    fixed_fields: BASE_FIELDS + VARIABLE_FIELDS,
    double_offset: None,
    variable_offset: Some(BASE_FIELDS),
    deep_sky_offset: None,
};

const DOUBLE_VARIABLE_STAR: RecordLayout = RecordLayout {
    fixed_fields: BASE_FIELDS + DOUBLE_FIELDS + VARIABLE_FIELDS,
    double_offset: Some(BASE_FIELDS),
    variable_offset: Some(BASE_FIELDS + DOUBLE_FIELDS),
    deep_sky_offset: None,
};

const DEEP_SKY: RecordLayout = RecordLayout {
    fixed_fields: BASE_FIELDS + DEEP_SKY_FIELDS,
    double_offset: None,
    variable_offset: None,
    deep_sky_offset: Some(BASE_FIELDS),
};

/// Record layout for `object_type`, or `None` for types with no catalog record
pub fn layout_for(object_type: ObjectType) -> Option<RecordLayout> {
    match object_type {
        ObjectType::Star => Some(STAR),
        ObjectType::DoubleStar => Some(DOUBLE_STAR),
        ObjectType::VariableStar => Some(VARIABLE_STAR),
        ObjectType::DoubleVariableStar => Some(DOUBLE_VARIABLE_STAR),
        t if t.is_deep_sky() => Some(DEEP_SKY),
        _ => None,
    }
}
