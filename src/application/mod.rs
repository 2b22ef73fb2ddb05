//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod manager;
pub mod model;
pub mod store;

pub use error::{ApplicationError, ApplicationResult};
pub use manager::ResistanceManager;
pub use model::{ResistanceModel, ResistanceSnapshot};
pub use store::DataStore;
