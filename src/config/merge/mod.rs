//! Config merge: default layer and source orchestration.

pub mod service;

use crate::config::BrowserConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with the built-in defaults as the lowest layer.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = Config::try_from(&BrowserConfig::default())?;
    Ok(Config::builder().add_source(defaults))
}
