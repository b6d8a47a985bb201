//! Root-local config file source: <scan root>/.asset-browser.toml

use crate::config::ROOT_CONFIG_FILE;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    scan_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = scan_root.join(ROOT_CONFIG_FILE);
    Ok(builder.add_source(File::from(path).required(false)))
}
