//! Catalog record codec
//!
//! One object per comma-separated record. The first field is the two-letter
//! type code, which fixes the positional layout (see [`layout`]). Every field
//! is comma-terminated, unknown values are written as empty fields, and any
//! fields after the fixed layout are identifiers or common names.
//!
//! | Field | Content                       | Text format  |
//! |-------|-------------------------------|--------------|
//! | 0     | type code                     | `SS`, `DV`.. |
//! | 1     | right ascension (J2000)       | `HH MM SS.SS`|
//! | 2     | declination (J2000)           | `±DD MM SS.S`|
//! | 3     | proper motion in RA, s/yr     | `%+.5f`      |
//! | 4     | proper motion in Dec, "/yr    | `%+.4f`      |
//! | 5     | visual magnitude              | `%+.2f`      |
//! | 6     | blue magnitude                | `%+.2f`      |
//! | 7     | distance, parsecs             | `%.3E`       |
//! | 8     | radial velocity, km/s         | `%+.1f`      |
//! | 9     | spectral type                 | text         |
//!
//! Double stars continue with components, magnitude delta (`%+.2f`),
//! separation in arcseconds (`%.1f`), position angle in degrees (`%.1f`) and
//! position angle year (`%.2f`). Variable stars continue with variability
//! type, minimum and maximum magnitude (`%+.2f`), period in days (`%.2f`) and
//! epoch (`%.2f`); double variable stars carry the double fragment first.
//! Deep-sky objects continue with major and minor axis in arcminutes (`%.2f`)
//! and position angle in degrees (`%.1f`).
//!
//! The text format keeps only the precision shown, so a decoded and
//! re-encoded object matches the original to that precision.

pub mod format;
pub mod layout;

use log::debug;
use thiserror::Error;

use crate::constants::{
    ARCMIN_PER_RAD, ARCSEC_PER_RAD, ARCSEC_PER_TIME_SEC, DEG_PER_RAD, LIGHT_KM_PER_SEC,
    LY_PER_PARSEC, PARSEC_PER_LY,
};
use crate::coordinates::{DegMinSec, HourMinSec, Spherical};
use crate::objects::{
    code_to_type, type_to_code, CelestialObject, DeepSky, DoubleStar, Identifier, ObjectType,
    Star, VariableStar,
};
use layout::{layout_for, RecordLayout};

/// Reasons a record cannot be decoded
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("empty record")]
    EmptyRecord,

    #[error("unknown object type code {0:?}")]
    UnknownTypeCode(String),

    #[error("object type {0} has no catalog record layout")]
    NotCatalogObject(ObjectType),

    #[error("record has {found} fields, type requires at least {expected}")]
    TooFewFields { expected: usize, found: usize },

    #[error("malformed record: {0}")]
    Malformed(#[from] csv::Error),
}

/// Encodes an object as one comma-terminated record, without a line ending
pub fn encode(object: &CelestialObject) -> String {
    let mut fields = Vec::with_capacity(24);
    fields.push(type_to_code(object.object_type()).to_string());
    encode_base(object.star(), &mut fields);

    if let Some(double) = object.double_star() {
        encode_double(double, &mut fields);
    }
    if let Some(variable) = object.variable_star() {
        encode_variable(variable, &mut fields);
    }
    if let Some(deep_sky) = object.deep_sky() {
        encode_deep_sky(deep_sky, &mut fields);
    }

    let star = object.star();
    fields.extend(star.identifiers().iter().map(|ident| ident.to_string()));
    fields.extend(star.names().iter().map(|name| format::text(name)));

    let mut record = String::with_capacity(fields.iter().map(|f| f.len() + 1).sum());
    for field in &fields {
        record.push_str(field);
        record.push(',');
    }
    record
}

fn encode_base(star: &Star, fields: &mut Vec<String>) {
    let coords = star.fundamental_coords();
    match coords {
        Some(c) => {
            fields.push(HourMinSec::from_radians(c.lon).to_string());
            fields.push(DegMinSec::from_radians(c.lat).to_string());
        }
        None => {
            fields.push(String::new());
            fields.push(String::new());
        }
    }

    let motion = star.fundamental_motion();
    fields.push(format::signed(
        motion.map(|m| m.lon * ARCSEC_PER_RAD / ARCSEC_PER_TIME_SEC),
        5,
    ));
    fields.push(format::signed(motion.map(|m| m.lat * ARCSEC_PER_RAD), 4));

    fields.push(format::signed(star.v_magnitude, 2));
    fields.push(format::signed(star.b_magnitude, 2));

    fields.push(format::scientific(coords.map(|c| c.rad * PARSEC_PER_LY)));
    fields.push(format::signed(
        star.radial_velocity().map(|rv| rv * LIGHT_KM_PER_SEC),
        1,
    ));
    fields.push(format::text(&star.spectral_type));
}

fn encode_double(double: &DoubleStar, fields: &mut Vec<String>) {
    fields.push(format::text(&double.components));
    fields.push(format::signed(double.magnitude_delta, 2));
    fields.push(format::fixed(double.separation.map(|s| s * ARCSEC_PER_RAD), 1));
    fields.push(format::fixed(double.position_angle.map(|pa| pa * DEG_PER_RAD), 1));
    fields.push(format::fixed(double.position_angle_year, 2));
}

fn encode_variable(variable: &VariableStar, fields: &mut Vec<String>) {
    fields.push(format::text(&variable.variable_type));
    fields.push(format::signed(variable.minimum_magnitude, 2));
    fields.push(format::signed(variable.maximum_magnitude, 2));
    fields.push(format::fixed(variable.period, 2));
    fields.push(format::fixed(variable.epoch, 2));
}

fn encode_deep_sky(deep_sky: &DeepSky, fields: &mut Vec<String>) {
    fields.push(format::fixed(deep_sky.major_axis.map(|a| a * ARCMIN_PER_RAD), 2));
    fields.push(format::fixed(deep_sky.minor_axis.map(|a| a * ARCMIN_PER_RAD), 2));
    fields.push(format::fixed(deep_sky.position_angle.map(|pa| pa * DEG_PER_RAD), 1));
}

/// Splits one record into trimmed fields, honoring quoted text
fn split_record(line: &str) -> Result<Vec<String>, DecodeError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(record) => Ok(record?.iter().map(str::to_string).collect()),
        None => Err(DecodeError::EmptyRecord),
    }
}

/// Decodes one record
pub fn decode(line: &str) -> Result<CelestialObject, DecodeError> {
    let fields = split_record(line)?;
    decode_fields(&fields)
}

/// Decodes a record that has already been split into fields
///
/// Fields are trimmed here, so callers may pass untrimmed text.
pub fn decode_fields<S: AsRef<str>>(fields: &[S]) -> Result<CelestialObject, DecodeError> {
    let fields: Vec<&str> = fields.iter().map(|f| f.as_ref().trim()).collect();

    if fields.is_empty() || (fields.len() == 1 && fields[0].is_empty()) {
        return Err(DecodeError::EmptyRecord);
    }

    let code = fields[0];
    let object_type =
        code_to_type(code).ok_or_else(|| DecodeError::UnknownTypeCode(code.to_string()))?;
    let layout = layout_for(object_type).ok_or(DecodeError::NotCatalogObject(object_type))?;

    if fields.len() < layout.fixed_fields {
        return Err(DecodeError::TooFewFields {
            expected: layout.fixed_fields,
            found: fields.len(),
        });
    }

    let mut object =
        CelestialObject::new(object_type).ok_or(DecodeError::NotCatalogObject(object_type))?;

    decode_base(&fields, object.star_mut());
    decode_fragments(&fields, &layout, &mut object);
    decode_tail(&fields[layout.fixed_fields..], object.star_mut());

    Ok(object)
}

fn decode_base(fields: &[&str], star: &mut Star) {
    let ra = fields[1].parse::<HourMinSec>().ok();
    let dec = fields[2].parse::<DegMinSec>().ok();

    let pm_ra = format::number(fields[3]).map(|s| s * ARCSEC_PER_TIME_SEC / ARCSEC_PER_RAD);
    let pm_dec = format::number(fields[4]).map(|a| a / ARCSEC_PER_RAD);

    star.v_magnitude = format::number(fields[5]);
    star.b_magnitude = format::number(fields[6]);

    let distance = format::number(fields[7]).map(|pc| pc * LY_PER_PARSEC);
    let radial_velocity = format::number(fields[8]).map(|kms| kms / LIGHT_KM_PER_SEC);
    star.spectral_type = fields[9].to_string();

    match (ra, dec) {
        (Some(ra), Some(dec)) => {
            let coords = Spherical::new(
                ra.to_radians(),
                dec.to_radians(),
                distance.unwrap_or(f64::INFINITY),
            );
            let motion = Spherical::new(
                pm_ra.unwrap_or(f64::INFINITY),
                pm_dec.unwrap_or(f64::INFINITY),
                radial_velocity.unwrap_or(f64::INFINITY),
            );
            star.set_fundamental_motion(coords, motion);
        }
        _ => {
            debug!("Record has no usable position ({:?}, {:?})", fields[1], fields[2]);
            star.set_radial_velocity(radial_velocity);
        }
    }
}

fn decode_fragments(fields: &[&str], layout: &RecordLayout, object: &mut CelestialObject) {
    if let (Some(at), Some(double)) = (layout.double_offset, object.double_star_mut()) {
        double.components = fields[at].to_string();
        double.magnitude_delta = format::number(fields[at + 1]);
        double.separation = format::number(fields[at + 2]).map(|s| s / ARCSEC_PER_RAD);
        double.position_angle = format::number(fields[at + 3]).map(|pa| pa / DEG_PER_RAD);
        double.position_angle_year = format::number(fields[at + 4]);
    }

    if let (Some(at), Some(variable)) = (layout.variable_offset, object.variable_star_mut()) {
        variable.variable_type = fields[at].to_string();
        variable.minimum_magnitude = format::number(fields[at + 1]);
        variable.maximum_magnitude = format::number(fields[at + 2]);
        variable.period = format::number(fields[at + 3]);
        variable.epoch = format::number(fields[at + 4]);
    }

    if let (Some(at), Some(deep_sky)) = (layout.deep_sky_offset, object.deep_sky_mut()) {
        deep_sky.major_axis = format::number(fields[at]).map(|a| a / ARCMIN_PER_RAD);
        deep_sky.minor_axis = format::number(fields[at + 1]).map(|a| a / ARCMIN_PER_RAD);
        deep_sky.position_angle = format::number(fields[at + 2]).map(|pa| pa / DEG_PER_RAD);
    }
}

/// Identifiers first, then anything that does not parse as one is a name
fn decode_tail(tail: &[&str], star: &mut Star) {
    for &text in tail.iter().filter(|t| !t.is_empty()) {
        match Identifier::parse(text) {
            Some(ident) => {
                star.add_identifier(ident);
            }
            None => star.add_name(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HOUR_PER_RAD, RAD_PER_ARCSEC};
    use crate::objects::Catalog;
    use approx::assert_relative_eq;

    const SIRIUS: &str = "DV,06 45 08.92,-16 42 58.0,-0.03847,-1.2231,-1.46,-1.46,2.637E+00,-5.5,A1V,\
                          AB,+8.44,10.3,66.0,2020.00,\
                          EA,+5.00,+6.00,2.87,2451545.00,\
                          HR 2491,HD 48915,Sirius,";

    #[test]
    fn test_star_round_trip_without_distance() {
        let ra = 10.0 / HOUR_PER_RAD;
        let dec = 20.0_f64.to_radians();

        let mut star = CelestialObject::star_object();
        star.star_mut()
            .set_fundamental_coords(Spherical::new(ra, dec, f64::INFINITY));
        star.star_mut().v_magnitude = Some(5.0);

        let line = encode(&star);
        assert_eq!(line, "SS,10 00 00.00,+20 00 00.0,,,+5.00,,,,,");

        let decoded = decode(&line).unwrap();
        assert_eq!(decoded.object_type(), ObjectType::Star);
        let coords = decoded.star().fundamental_coords().unwrap();
        assert!(coords.rad.is_infinite());
        assert_relative_eq!(coords.lon, ra, epsilon = 1e-9);
        assert_relative_eq!(coords.lat, dec, epsilon = 1e-9);
        assert_eq!(decoded.star().v_magnitude, Some(5.0));
        assert_eq!(decoded.star().b_magnitude, None);
        assert_eq!(decoded.star().parallax(), 0.0);
        assert!(decoded.star().fundamental_motion().is_none());
        assert!(decoded.star().spectral_type.is_empty());
    }

    #[test]
    fn test_double_variable_decode() {
        let obj = decode(SIRIUS).unwrap();
        assert_eq!(obj.object_type(), ObjectType::DoubleVariableStar);

        let double = obj.double_star().unwrap();
        assert_eq!(double.components, "AB");
        assert_eq!(double.magnitude_delta, Some(8.44));
        assert_relative_eq!(double.separation.unwrap(), 10.3 * RAD_PER_ARCSEC, epsilon = 1e-15);
        assert_relative_eq!(double.position_angle.unwrap(), 66.0_f64.to_radians(), epsilon = 1e-15);
        assert_eq!(double.position_angle_year, Some(2020.0));

        let variable = obj.variable_star().unwrap();
        assert_eq!(variable.variable_type, "EA");
        assert_eq!(variable.minimum_magnitude, Some(5.0));
        assert_eq!(variable.maximum_magnitude, Some(6.0));
        assert_eq!(variable.period, Some(2.87));
        assert_eq!(variable.epoch, Some(2451545.0));

        assert!(obj.deep_sky().is_none());

        let star = obj.star();
        assert_eq!(star.names(), ["Sirius".to_string()]);
        assert_eq!(star.identifiers().len(), 2);
        assert_eq!(star.identifier(Catalog::Hr), Some(Identifier::new(Catalog::Hr, 2491)));
        assert_eq!(star.identifier(Catalog::Hd), Some(Identifier::new(Catalog::Hd, 48915)));
        assert_eq!(star.spectral_type, "A1V");
        assert_relative_eq!(star.distance(), 2.637 * LY_PER_PARSEC, epsilon = 1e-12);
        assert_relative_eq!(
            star.radial_velocity().unwrap(),
            -5.5 / LIGHT_KM_PER_SEC,
            epsilon = 1e-15
        );

        let motion = star.fundamental_motion().unwrap();
        assert_relative_eq!(motion.lon, -0.03847 * 15.0 * RAD_PER_ARCSEC, epsilon = 1e-13);
        assert_relative_eq!(motion.lat, -1.2231 * RAD_PER_ARCSEC, epsilon = 1e-13);
    }

    #[test]
    fn test_double_variable_reencodes_identically() {
        let obj = decode(SIRIUS).unwrap();
        assert_eq!(encode(&obj), SIRIUS);
    }

    #[test]
    fn test_unknown_type_code() {
        let err = decode("XX,06 45 08.92,-16 42 58.0,,,,,,,,").unwrap_err();
        assert!(matches!(err, DecodeError::UnknownTypeCode(code) if code == "XX"));
    }

    #[test]
    fn test_non_catalog_type_code() {
        let err = decode("PL,,,,,,,,,,").unwrap_err();
        assert!(matches!(err, DecodeError::NotCatalogObject(ObjectType::Planet)));
    }

    #[test]
    fn test_too_few_fields() {
        // Twelve fields for a double star that needs fifteen
        let err = decode("DS,06 45 08.92,-16 42 58.0,,,,,,,,AB,+8.44").unwrap_err();
        assert!(matches!(err, DecodeError::TooFewFields { expected: 15, found: 12 }));
    }

    #[test]
    fn test_empty_record() {
        assert!(matches!(decode("").unwrap_err(), DecodeError::EmptyRecord));
        assert!(matches!(decode("   ").unwrap_err(), DecodeError::EmptyRecord));
    }

    #[test]
    fn test_unparsable_numbers_are_unknown() {
        let obj = decode("SS,06 45 08.92,-16 42 58.0,fast,,bright,+0.00,,,,").unwrap();
        let star = obj.star();
        assert!(star.velocity().is_none());
        assert_eq!(star.v_magnitude, None);
        assert_eq!(star.b_magnitude, Some(0.0));
    }

    #[test]
    fn test_one_proper_motion_component_survives() {
        let line = "SS,06 45 08.92,-16 42 58.0,-0.03847,,-1.46,,2.637E+00,,A1V,";
        let obj = decode(line).unwrap();
        let motion = obj.star().fundamental_motion().unwrap();
        assert_relative_eq!(motion.lon, -0.03847 * 15.0 * RAD_PER_ARCSEC, epsilon = 1e-13);
        assert!(motion.lat.is_infinite());
        assert_eq!(encode(&obj), line);

        let line = "SS,06 45 08.92,-16 42 58.0,,-1.2231,-1.46,,2.637E+00,,A1V,";
        assert_eq!(encode(&decode(line).unwrap()), line);
    }

    #[test]
    fn test_missing_position() {
        let obj = decode("SS,,,,,+3.00,,,+12.0,G2V,Nameless,").unwrap();
        let star = obj.star();
        assert!(star.position().is_none());
        assert_relative_eq!(star.radial_velocity().unwrap(), 12.0 / LIGHT_KM_PER_SEC, epsilon = 1e-15);
        assert_eq!(encode(&obj), "SS,,,,,+3.00,,,+12.0,G2V,Nameless,");
    }

    #[test]
    fn test_deep_sky_record() {
        let line = "GX,00 42 44.30,+41 16 09.0,,,+3.44,+4.36,7.780E+05,-300.0,Sb,190.00,60.00,35.0,M31,NGC 224,Andromeda Galaxy,";
        let obj = decode(line).unwrap();
        assert_eq!(obj.object_type(), ObjectType::Galaxy);

        let ds = obj.deep_sky().unwrap();
        assert_relative_eq!(ds.major_axis.unwrap(), 190.0 / ARCMIN_PER_RAD, epsilon = 1e-15);
        assert_relative_eq!(ds.minor_axis.unwrap(), 60.0 / ARCMIN_PER_RAD, epsilon = 1e-15);
        assert_relative_eq!(ds.position_angle.unwrap(), 35.0_f64.to_radians(), epsilon = 1e-15);
        assert!(obj.double_star().is_none());
        assert!(obj.variable_star().is_none());

        assert_eq!(obj.star().identifiers().len(), 2);
        assert_eq!(obj.star().names(), ["Andromeda Galaxy".to_string()]);
        assert_eq!(encode(&obj), line);
    }

    #[test]
    fn test_quoted_spectral_type() {
        let line = "SS,14 15 39.67,+19 10 56.7,,,-0.05,+1.18,1.126E+01,-5.2,\"K1.5III,Fe-0.5\",Arcturus,";
        let obj = decode(line).unwrap();
        assert_eq!(obj.star().spectral_type, "K1.5III,Fe-0.5");
        assert_eq!(obj.star().names(), ["Arcturus".to_string()]);
        assert_eq!(encode(&obj), line);
    }

    #[test]
    fn test_tail_skips_empty_fields_and_duplicate_catalogs() {
        let obj = decode("SS,,,,,,,,,,,HIP 32349,,HIP 1,Alhabor,").unwrap();
        let star = obj.star();
        assert_eq!(star.identifiers(), [Identifier::new(Catalog::Hip, 32349)]);
        assert_eq!(star.names(), ["Alhabor".to_string()]);
    }

    #[test]
    fn test_decode_fields_trims() {
        let fields = ["  VS ", "", "", "", "", "", "", "", "", "", " DCEP ", " +3.48", "+4.37 ", "5.37", ""];
        let obj = decode_fields(&fields).unwrap();
        let variable = obj.variable_star().unwrap();
        assert_eq!(variable.variable_type, "DCEP");
        assert_eq!(variable.minimum_magnitude, Some(3.48));
        assert_eq!(variable.maximum_magnitude, Some(4.37));
        assert_eq!(variable.period, Some(5.37));
        assert_eq!(variable.epoch, None);
    }

    #[test]
    fn test_encoded_field_count_matches_layout() {
        for object_type in [
            ObjectType::Star,
            ObjectType::DoubleStar,
            ObjectType::VariableStar,
            ObjectType::DoubleVariableStar,
            ObjectType::DarkNebula,
        ] {
            let obj = CelestialObject::new(object_type).unwrap();
            let line = encode(&obj);
            let fixed = layout_for(object_type).unwrap().fixed_fields;
            assert_eq!(line.matches(',').count(), fixed, "{}", line);

            let decoded = decode(&line).unwrap();
            assert_eq!(decoded, obj);
        }
    }
}
