//! MergeService: orchestrates sources and deserializes to BrowserConfig.

use crate::config::sources::{environment, global_file, root_file};
use crate::config::BrowserConfig;
use config::{ConfigError, File};
use std::path::Path;

use super::builder_with_defaults;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> global file -> root file -> environment (highest).
    pub fn load(scan_root: &Path) -> Result<BrowserConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = root_file::add_to_builder(builder, scan_root)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Defaults, then the given file (required), then environment.
    pub fn load_from_file(path: &Path) -> Result<BrowserConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
