//! Object catalogs
//!
//! An [`ObjectCatalog`] holds many [`CelestialObject`]s read from, or written
//! to, catalog record files: one record per line, blank lines ignored, lines
//! starting with `#` treated as comments.
//!
//! Loading is lenient by default. Each record is decoded independently and a
//! record that fails to decode is logged and counted in the [`LoadReport`]
//! rather than aborting the load. [`ObjectCatalog::from_reader_strict`] stops
//! at the first bad record instead.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::{info, warn};

use crate::codec;
use crate::objects::{CelestialObject, Identifier, ObjectType};
use crate::{CatalogError, Result};

/// Counts gathered while loading a catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records read, excluding blank lines and comments
    pub records: usize,
    /// Records decoded into objects
    pub loaded: usize,
    /// Records skipped because they could not be read or decoded
    pub skipped: usize,
}

/// An ordered collection of catalog objects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectCatalog {
    objects: Vec<CelestialObject>,
}

fn record_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader)
}

impl ObjectCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding `objects`
    pub fn from_objects(objects: Vec<CelestialObject>) -> Self {
        Self { objects }
    }

    /// Reads every record from `reader`, skipping records that fail to decode
    pub fn from_reader<R: Read>(reader: R) -> Result<(Self, LoadReport)> {
        let mut catalog = Self::new();
        let mut report = LoadReport::default();

        for result in record_reader(reader).records() {
            report.records += 1;

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    if let csv::ErrorKind::Io(_) = e.kind() {
                        return Err(CatalogError::CsvError(e));
                    }
                    warn!("Skipping unreadable record: {}", e);
                    report.skipped += 1;
                    continue;
                }
            };

            let line = record.position().map_or(0, |p| p.line());
            let fields: Vec<&str> = record.iter().collect();
            match codec::decode_fields(&fields) {
                Ok(object) => {
                    catalog.objects.push(object);
                    report.loaded += 1;
                }
                Err(e) => {
                    warn!("Skipping line {}: {}", line, e);
                    report.skipped += 1;
                }
            }
        }

        info!(
            "Loaded {} objects from {} records ({} skipped)",
            report.loaded, report.records, report.skipped
        );
        Ok((catalog, report))
    }

    /// Reads every record from `reader`, failing on the first bad record
    pub fn from_reader_strict<R: Read>(reader: R) -> Result<Self> {
        let mut catalog = Self::new();

        for result in record_reader(reader).records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());
            let fields: Vec<&str> = record.iter().collect();
            let object = codec::decode_fields(&fields)
                .map_err(|source| CatalogError::DecodeError { line, source })?;
            catalog.objects.push(object);
        }

        info!("Loaded {} objects", catalog.len());
        Ok(catalog)
    }

    /// Opens and leniently reads a catalog file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<(Self, LoadReport)> {
        let file = File::open(path.as_ref())?;
        info!("Reading catalog {}", path.as_ref().display());
        Self::from_reader(file)
    }

    /// Writes one record per object, each ending in a newline
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = BufWriter::new(writer);
        for object in &self.objects {
            writeln!(writer, "{}", codec::encode(object))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes every object as a pretty-printed JSON array
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = BufWriter::new(writer);
        serde_json::to_writer_pretty(&mut writer, &self.objects)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the catalog to a file, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.write_csv(file)?;
        info!("Wrote {} objects to {}", self.len(), path.as_ref().display());
        Ok(())
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the catalog holds no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Appends an object
    pub fn push(&mut self, object: CelestialObject) {
        self.objects.push(object);
    }

    /// Objects in load order
    pub fn objects(&self) -> &[CelestialObject] {
        &self.objects
    }

    /// Iterates over objects in load order
    pub fn iter(&self) -> std::slice::Iter<'_, CelestialObject> {
        self.objects.iter()
    }

    /// First object carrying `ident`
    pub fn find_by_identifier(&self, ident: Identifier) -> Option<&CelestialObject> {
        self.objects
            .iter()
            .find(|o| o.star().identifier(ident.catalog()) == Some(ident))
    }

    /// First object with a common name matching `name`, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&CelestialObject> {
        self.objects.iter().find(|o| {
            o.star()
                .names()
                .iter()
                .any(|n| n.eq_ignore_ascii_case(name))
        })
    }

    /// Objects matching a predicate
    pub fn filter<F>(&self, predicate: F) -> Vec<&CelestialObject>
    where
        F: Fn(&CelestialObject) -> bool,
    {
        self.objects.iter().filter(|o| predicate(o)).collect()
    }

    /// Objects of exactly `object_type`
    pub fn of_type(&self, object_type: ObjectType) -> Vec<&CelestialObject> {
        self.filter(|o| o.object_type() == object_type)
    }

    /// Objects carrying double-star fields, including double variables
    pub fn double_stars(&self) -> Vec<&CelestialObject> {
        self.filter(|o| o.double_star().is_some())
    }

    /// Objects carrying variable-star fields, including double variables
    pub fn variable_stars(&self) -> Vec<&CelestialObject> {
        self.filter(|o| o.variable_star().is_some())
    }

    /// Clusters, nebulae and galaxies
    pub fn deep_sky_objects(&self) -> Vec<&CelestialObject> {
        self.filter(|o| o.deep_sky().is_some())
    }

    /// Objects whose catalog visual magnitude is at or below `magnitude`
    pub fn brighter_than(&self, magnitude: f64) -> Vec<&CelestialObject> {
        self.filter(|o| o.star().v_magnitude.is_some_and(|v| v <= magnitude))
    }

    /// Sorts every object's identifiers into catalog order
    pub fn sort_identifiers(&mut self) {
        for object in &mut self.objects {
            object.star_mut().sort_identifiers();
        }
    }

    /// Projects every object to `elapsed_years` Julian years after J2000
    pub fn compute_ephemeris(&mut self, elapsed_years: f64) {
        for object in &mut self.objects {
            object.star_mut().compute_ephemeris(elapsed_years);
        }
    }
}

impl FromIterator<CelestialObject> for ObjectCatalog {
    fn from_iter<I: IntoIterator<Item = CelestialObject>>(iter: I) -> Self {
        Self::from_objects(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ObjectCatalog {
    type Item = &'a CelestialObject;
    type IntoIter = std::slice::Iter<'a, CelestialObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
