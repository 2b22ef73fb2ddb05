//! Domain layer: entities and business rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod datetime;
pub mod entities;
pub mod error;
pub mod location;

pub use datetime::parse_event_time;
pub use entities::{name_key, Movement, Protest, Protester, Roster};
pub use error::{DomainError, DomainResult};
pub use location::{canonicalize_zip, GeoPoint, Location};
