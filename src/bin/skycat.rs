//! Catalog record tool
//!
//! Reads a star/deep-sky catalog file, prints a summary of what it holds, and
//! optionally rewrites it as normalized records or JSON.
//!
//! Usage:
//!   cargo run --bin skycat -- [--strict] [--sort-identifiers] [--elapsed-years YEARS]
//!                             [--output PATH] [--json] catalog.csv
//!
//! Set `RUST_LOG=debug` to see why individual records were rejected.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use log::info;
use skycatalog::coordinates::{DegMinSec, HourMinSec};
use skycatalog::{CelestialObject, ObjectCatalog, ObjectType};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Star and deep-sky catalog tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Summarizes and rewrites star and deep-sky catalog files",
    long_about = None
)]
struct Args {
    /// Fail on the first record that cannot be decoded
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Sort each object's identifiers into catalog order before writing
    #[arg(short, long, action = ArgAction::SetTrue)]
    sort_identifiers: bool,

    /// Project positions this many Julian years from J2000 and list the
    /// brightest objects
    #[arg(short, long)]
    elapsed_years: Option<f64>,

    /// Write the catalog here ("-" for standard output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write JSON instead of catalog records
    #[arg(short, long, action = ArgAction::SetTrue)]
    json: bool,

    /// Catalog file to read
    input: PathBuf,
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

fn print_summary(catalog: &ObjectCatalog) {
    print_section_header("Object types");
    let types = [
        ObjectType::Star,
        ObjectType::DoubleStar,
        ObjectType::VariableStar,
        ObjectType::DoubleVariableStar,
        ObjectType::OpenCluster,
        ObjectType::GlobularCluster,
        ObjectType::BrightNebula,
        ObjectType::DarkNebula,
        ObjectType::PlanetaryNebula,
        ObjectType::Galaxy,
    ];
    for object_type in types {
        let count = catalog.of_type(object_type).len();
        if count > 0 {
            println!("  {:<24} {:>8}", format!("{:?}", object_type), count);
        }
    }

    print_section_header("Field coverage");
    let coverage = [
        ("Position", catalog.filter(|o| o.star().position().is_some()).len()),
        ("Distance", catalog.filter(|o| o.star().parallax() > 0.0).len()),
        ("Proper motion", catalog.filter(|o| o.star().velocity().is_some()).len()),
        ("Radial velocity", catalog.filter(|o| o.star().radial_velocity().is_some()).len()),
        ("Visual magnitude", catalog.filter(|o| o.star().v_magnitude.is_some()).len()),
        ("Spectral type", catalog.filter(|o| !o.star().spectral_type.is_empty()).len()),
        ("Identifiers", catalog.filter(|o| !o.star().identifiers().is_empty()).len()),
        ("Names", catalog.filter(|o| !o.star().names().is_empty()).len()),
    ];
    for (label, count) in coverage {
        let percentage = count as f64 / catalog.len().max(1) as f64 * 100.0;
        println!("  {:<24} {:>8} ({:.1}%)", label, count, percentage);
    }
}

fn describe(object: &CelestialObject) -> String {
    let name = object.display_name().unwrap_or_else(|| "(unnamed)".to_string());
    let Some(apparent) = object.star().apparent() else {
        return name;
    };

    let place = apparent
        .direction
        .map(|d| d.to_spherical())
        .map(|s| {
            format!(
                "RA {}  Dec {}",
                HourMinSec::from_radians(s.lon),
                DegMinSec::from_radians(s.lat)
            )
        })
        .unwrap_or_default();
    let magnitude = apparent
        .magnitude
        .map(|m| format!("{:+.2}", m))
        .unwrap_or_default();
    let distance = if apparent.distance.is_finite() {
        format!("{:.2} ly", apparent.distance)
    } else {
        String::new()
    };

    format!("{:<24} {:>6}  {}  {}", name, magnitude, place, distance)
}

fn print_brightest(catalog: &ObjectCatalog, elapsed_years: f64, limit: usize) {
    print_section_header(&format!("Brightest objects {:+.1} years from J2000", elapsed_years));

    let mut objects: Vec<&CelestialObject> = catalog
        .filter(|o| o.star().apparent().is_some_and(|a| a.magnitude.is_some()));
    objects.sort_by(|a, b| {
        let mag = |o: &CelestialObject| o.star().apparent().and_then(|a| a.magnitude);
        mag(*a).partial_cmp(&mag(*b)).unwrap_or(std::cmp::Ordering::Equal)
    });

    for object in objects.into_iter().take(limit) {
        println!("  {}", describe(object));
    }
}

fn write_output(catalog: &ObjectCatalog, output: &Path, json: bool) -> Result<()> {
    if output.as_os_str() == "-" {
        let stdout = io::stdout().lock();
        if json {
            catalog.write_json(stdout)?;
        } else {
            catalog.write_csv(stdout)?;
        }
        return Ok(());
    }

    if json {
        catalog.write_json(File::create(output)?)?;
        info!("Wrote {} objects as JSON to {}", catalog.len(), output.display());
    } else {
        catalog.save(output)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut catalog = if args.strict {
        ObjectCatalog::from_reader_strict(File::open(&args.input)?)?
    } else {
        let (catalog, report) = ObjectCatalog::from_path(&args.input)?;
        if report.skipped > 0 {
            eprintln!(
                "Skipped {} of {} records in {}",
                report.skipped,
                report.records,
                args.input.display()
            );
        }
        catalog
    };

    // Keep stdout clean when records are streamed there
    let streaming = args.output.as_ref().is_some_and(|p| p.as_os_str() == "-");
    if !streaming {
        println!("Catalog: {}", args.input.display());
        println!("Objects: {}", catalog.len());
        print_summary(&catalog);
    }

    if args.sort_identifiers {
        catalog.sort_identifiers();
    }

    if let Some(elapsed_years) = args.elapsed_years {
        catalog.compute_ephemeris(elapsed_years);
        if !streaming {
            print_brightest(&catalog, elapsed_years, 10);
        }
    }

    if let Some(output) = &args.output {
        write_output(&catalog, output, args.json)?;
    }

    Ok(())
}
