//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/resist/resist.toml`
//! 3. Environment variables: `RESIST_*` prefix

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Default file name offered when saving on exit
    pub data_file: String,
    /// Default radius for "members near a protest", in miles
    pub member_radius_miles: f64,
    /// Default radius for "protests near a location", in miles
    pub protest_radius_miles: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: "data.json".into(),
            member_radius_miles: 20.0,
            protest_radius_miles: 50.0,
        }
    }
}

impl Settings {
    /// Load settings with the documented precedence.
    pub fn load() -> Result<Self, ApplicationError> {
        let mut builder = Config::builder();

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                builder = builder.add_source(File::from(path));
            }
        }
        builder = builder.add_source(Environment::with_prefix("RESIST"));

        let merged = builder
            .build()
            .map_err(|e| ApplicationError::Config {
                message: e.to_string(),
            })?;

        // serde(default) fills anything the sources left out.
        merged
            .try_deserialize()
            .map_err(|e| ApplicationError::Config {
                message: e.to_string(),
            })
    }

    /// Path of the global config file, if a home directory can be found.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "resist").map(|dirs| dirs.config_dir().join("resist.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.data_file, "data.json");
        assert_eq!(settings.member_radius_miles, 20.0);
        assert_eq!(settings.protest_radius_miles, 50.0);
    }
}
