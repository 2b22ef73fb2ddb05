//! I/O boundary traits for testability
//!
//! These traits abstract external collaborators (filesystem, geocoding),
//! allowing services to be tested with mock implementations.

use std::io;
use std::path::Path;

use crate::domain::{canonicalize_zip, DomainError, DomainResult, GeoPoint, Location};

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Postal-code resolution abstraction.
///
/// Turns a canonical 5-digit ZIP into a geographic point. The mechanism
/// (embedded gazetteer, external service) is an infrastructure detail.
pub trait Geocoder: Send + Sync {
    /// Resolve a canonical ZIP to its centroid.
    fn resolve(&self, zip: &str) -> DomainResult<GeoPoint>;

    /// Normalize raw user input and resolve it into a [`Location`].
    fn locate(&self, raw_zip: &str) -> DomainResult<Location> {
        let zip = canonicalize_zip(raw_zip)?;
        let point = self.resolve(&zip)?;
        Ok(Location::new(zip, point))
    }
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Fixed-table geocoder for tests: every listed ZIP resolves to the given
/// point, everything else is unresolvable.
#[derive(Debug, Default)]
pub struct TableGeocoder {
    entries: Vec<(String, GeoPoint)>,
}

impl TableGeocoder {
    pub fn new(entries: Vec<(String, GeoPoint)>) -> Self {
        Self { entries }
    }
}

impl Geocoder for TableGeocoder {
    fn resolve(&self, zip: &str) -> DomainResult<GeoPoint> {
        self.entries
            .iter()
            .find(|(z, _)| z == zip)
            .map(|(_, p)| *p)
            .ok_or_else(|| DomainError::UnresolvableZip(zip.to_string()))
    }
}
