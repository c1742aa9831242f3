//! Record round trips through the public API
//!
//! Decoding and re-encoding must agree to the precision the text keeps:
//! magnitudes to 0.01, distances to four significant digits, and so on.

use std::f64::consts::PI;

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

use skycatalog::constants::{LY_PER_PARSEC, RAD_PER_ARCSEC, RAD_PER_DEG};
use skycatalog::coordinates::{Axis, Matrix, Spherical, Vector};
use skycatalog::objects::{Catalog, CelestialObject, Identifier, ObjectType};
use skycatalog::{DecodeError, ObjectCatalog};

fn random_object(rng: &mut StdRng, object_type: ObjectType) -> CelestialObject {
    let mut object = CelestialObject::new(object_type).unwrap();

    let coords = Spherical::new(
        rng.gen_range(0.0..2.0 * PI),
        rng.gen_range(-1.5..1.5),
        rng.gen_range(4.0..5000.0),
    );
    let motion = Spherical::new(
        rng.gen_range(-2.0..2.0) * RAD_PER_ARCSEC,
        rng.gen_range(-2.0..2.0) * RAD_PER_ARCSEC,
        rng.gen_range(-100.0..100.0) / 299_792.458,
    );

    let star = object.star_mut();
    star.set_fundamental_motion(coords, motion);
    star.v_magnitude = Some(rng.gen_range(-1.5..12.0));
    star.b_magnitude = Some(rng.gen_range(-1.5..12.0));
    star.spectral_type = "G2V".to_string();
    star.add_identifier(Identifier::new(Catalog::Hip, rng.gen_range(1..120_000)));
    star.add_name("Test Star");

    if let Some(double) = object.double_star_mut() {
        double.components = "AB".to_string();
        double.magnitude_delta = Some(rng.gen_range(0.0..5.0));
        double.separation = Some(rng.gen_range(0.1..60.0) * RAD_PER_ARCSEC);
        double.position_angle = Some(rng.gen_range(0.0..359.0) * RAD_PER_DEG);
        double.position_angle_year = Some(2000.0 + rng.gen_range(0.0..25.0));
    }
    if let Some(variable) = object.variable_star_mut() {
        variable.variable_type = "EA".to_string();
        variable.minimum_magnitude = Some(rng.gen_range(5.0..8.0));
        variable.maximum_magnitude = Some(rng.gen_range(3.0..5.0));
        variable.period = Some(rng.gen_range(0.5..400.0));
        variable.epoch = Some(2_451_545.0 + rng.gen_range(0.0..10_000.0));
    }
    if let Some(deep_sky) = object.deep_sky_mut() {
        deep_sky.major_axis = Some(rng.gen_range(1.0..200.0) * RAD_PER_DEG / 60.0);
        deep_sky.minor_axis = Some(rng.gen_range(1.0..100.0) * RAD_PER_DEG / 60.0);
        deep_sky.position_angle = Some(rng.gen_range(0.0..179.0) * RAD_PER_DEG);
    }

    object
}

#[rstest]
#[case(ObjectType::Star)]
#[case(ObjectType::DoubleStar)]
#[case(ObjectType::VariableStar)]
#[case(ObjectType::DoubleVariableStar)]
#[case(ObjectType::GlobularCluster)]
#[case(ObjectType::Galaxy)]
fn test_random_objects_round_trip(#[case] object_type: ObjectType) {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..50 {
        let original = random_object(&mut rng, object_type);
        let line = original.to_csv();
        let decoded = CelestialObject::from_csv(&line).unwrap();

        assert_eq!(decoded.object_type(), object_type);
        assert_eq!(decoded.double_star().is_some(), original.double_star().is_some());
        assert_eq!(decoded.variable_star().is_some(), original.variable_star().is_some());
        assert_eq!(decoded.deep_sky().is_some(), original.deep_sky().is_some());

        let (a, b) = (original.star(), decoded.star());
        let (ca, cb) = (a.fundamental_coords().unwrap(), b.fundamental_coords().unwrap());
        // RA to 0.01s of time, Dec to 0.1"
        assert!((ca.lon - cb.lon).abs() < 0.01 * 15.0 * RAD_PER_ARCSEC);
        assert!((ca.lat - cb.lat).abs() < 0.1 * RAD_PER_ARCSEC);
        assert_relative_eq!(ca.rad, cb.rad, max_relative = 1e-3);

        let (ma, mb) = (a.fundamental_motion().unwrap(), b.fundamental_motion().unwrap());
        assert!((ma.lon - mb.lon).abs() < 1e-5 * 15.0 * RAD_PER_ARCSEC);
        assert!((ma.lat - mb.lat).abs() < 1e-4 * RAD_PER_ARCSEC);

        assert!((a.v_magnitude.unwrap() - b.v_magnitude.unwrap()).abs() <= 0.005 + 1e-9);
        assert!(
            (a.radial_velocity().unwrap() - b.radial_velocity().unwrap()).abs() * 299_792.458
                <= 0.05 + 1e-9
        );
        assert_eq!(a.identifiers(), b.identifiers());
        assert_eq!(a.names(), b.names());

        // Text is a fixed point after one pass
        assert_eq!(decoded.to_csv(), line);
    }
}

#[test]
fn test_star_without_distance() {
    let mut star = CelestialObject::new(ObjectType::Star).unwrap();
    star.star_mut().set_fundamental_coords(Spherical::new(
        10.0 * 15.0 * RAD_PER_DEG,
        20.0 * RAD_PER_DEG,
        f64::INFINITY,
    ));
    star.star_mut().v_magnitude = Some(5.0);

    let decoded = CelestialObject::from_csv(&star.to_csv()).unwrap();
    assert!(decoded.star().fundamental_coords().unwrap().rad.is_infinite());
    assert_eq!(decoded.star().v_magnitude, Some(5.0));
}

#[test]
fn test_double_variable_with_tail() {
    let line = "DV, 02 31 49.09, +89 15 50.8, +0.19877, -0.0152, +1.97, +2.57, 1.324E+02, -17.4, F7Ib-II, \
                AB, +6.64, 18.2, 231.0, 2018.00, DCEP, +1.86, +2.13, 3.97, 2451545.00, \
                HR 424, HIP 11767, Polaris,";
    let obj = CelestialObject::from_csv(line).unwrap();

    assert!(obj.double_star().is_some());
    assert!(obj.variable_star().is_some());
    assert_eq!(obj.star().names(), ["Polaris".to_string()]);
    assert_eq!(obj.star().identifiers().len(), 2);
    assert_eq!(obj.variable_star().unwrap().variable_type, "DCEP");
    assert_relative_eq!(obj.star().distance(), 132.4 * LY_PER_PARSEC, max_relative = 1e-12);
}

#[rstest]
#[case("QQ,00 00 00.00,+00 00 00.0,,,,,,,,")]
#[case("DS,00 00 00.00,+00 00 00.0,,,,,,,,AB,")]
#[case("GX,00 42 44.30,+41 16 09.0,,,+3.44,,,,Sb,190.00,")]
#[case("")]
fn test_rejected_records(#[case] line: &str) {
    assert!(CelestialObject::from_csv(line).is_none());
    assert!(CelestialObject::parse_csv(line).is_err());
}

#[test]
fn test_rejection_reasons() {
    assert!(matches!(
        CelestialObject::parse_csv("DS,00 00 00.00,+00 00 00.0,,,,,,,,AB,+1.00"),
        Err(DecodeError::TooFewFields { expected: 15, found: 12 })
    ));
    assert!(matches!(
        CelestialObject::parse_csv("ZZ,"),
        Err(DecodeError::UnknownTypeCode(_))
    ));
}

#[test]
fn test_zero_parallax_ephemeris() {
    let mut obj = CelestialObject::from_csv("SS,18 36 56.34,+38 47 01.3,,,+0.03,,,,A0V,Vega,").unwrap();
    let star = obj.star_mut();
    assert_eq!(star.parallax(), 0.0);

    let apparent = star.compute_ephemeris(50.0);
    assert!(apparent.distance.is_infinite());
    assert_eq!(apparent.magnitude, Some(0.03));
}

#[test]
fn test_catalog_from_records() {
    let text = "SS,18 36 56.34,+38 47 01.3,+0.01726,+0.2861,+0.03,+0.00,7.680E+00,-13.9,A0V,HR 7001,Vega,\n\
                OC,03 47 00.00,+24 07 00.0,,,+1.60,,1.360E+02,,,110.00,110.00,,M45,Pleiades,\n";
    let (catalog, report) = ObjectCatalog::from_reader(text.as_bytes()).unwrap();
    assert_eq!(report.skipped, 0);
    assert_eq!(catalog.len(), 2);

    let pleiades = catalog
        .find_by_identifier(Identifier::new(Catalog::Messier, 45))
        .unwrap();
    assert_eq!(pleiades.object_type(), ObjectType::OpenCluster);
    assert!(pleiades.deep_sky().unwrap().position_angle.is_none());
}

#[test]
fn test_frame_rotation_preserves_separation() {
    let vega = CelestialObject::from_csv("SS,18 36 56.34,+38 47 01.3,,,,,,,,").unwrap();
    let deneb = CelestialObject::from_csv("SS,20 41 25.92,+45 16 49.2,,,,,,,,").unwrap();
    let a = vega.star().position().unwrap();
    let b = deneb.star().position().unwrap();

    // Equatorial to ecliptic: rotate about X by the obliquity
    let to_ecliptic = Matrix::rotation(Axis::X, 23.439_291 * RAD_PER_DEG);
    let (ea, eb): (Vector, Vector) = (to_ecliptic * a, to_ecliptic * b);

    assert_relative_eq!(a.angular_separation(&b), ea.angular_separation(&eb), epsilon = 1e-12);
    assert!((to_ecliptic.transpose() * ea).distance(&a) < 1e-12);
}
