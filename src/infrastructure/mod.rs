//! Infrastructure layer: I/O implementations
//!
//! This layer implements the I/O boundary traits the services depend on.

pub mod error;
pub mod geocoder;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use geocoder::ZipGazetteer;
pub use traits::{FileSystem, Geocoder, RealFileSystem, TableGeocoder};
