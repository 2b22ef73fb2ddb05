//! `resist`: interactive organizer for grassroots resistance networks
//!
//! Layering, outside in:
//! - [`cli`] — argument parsing, colored output, the interactive menu shell
//! - [`infrastructure`] — filesystem and geocoding boundaries
//! - [`application`] — the aggregate model, registration manager, data store
//! - [`domain`] — entities and pure business rules

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
