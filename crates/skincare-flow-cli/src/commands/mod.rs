pub mod config;
pub mod run;
pub mod steps;

use std::path::Path;

use skincare_flow_core::{Config, ConfigError};

/// Config from an explicit path, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
