//! ConfigLoader facade delegating to the merge service.

use super::merge::service::MergeService;
use super::BrowserConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a scan root from files and environment.
    pub fn load(scan_root: &Path) -> Result<BrowserConfig, ConfigError> {
        MergeService::load(scan_root)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<BrowserConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
