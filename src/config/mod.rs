//! Configuration
//!
//! Layered configuration built with the `config` crate. Sources, lowest to
//! highest precedence: built-in defaults, the global config file, the
//! root-local `.asset-browser.toml`, then `ASSET_BROWSER__*` environment
//! variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::tree::PlainNodeFactory;
use serde::{Deserialize, Serialize};

/// File name of the per-root config file.
pub const ROOT_CONFIG_FILE: &str = ".asset-browser.toml";

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "ASSET_BROWSER";

fn default_extensions() -> Vec<String> {
    ["html", "js", "css", "json", "properties", "txt"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Scan settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Asset extensions in match priority order.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Treat every file with an extension as an asset, ignoring `extensions`.
    #[serde(default)]
    pub any_extension: bool,

    /// List dot-prefixed files and folders.
    #[serde(default)]
    pub include_hidden: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            any_extension: false,
            include_hidden: false,
        }
    }
}

impl ScanConfig {
    /// Extension list for a node factory; `None` in any-extension mode.
    pub fn asset_extensions(&self) -> Option<Vec<String>> {
        if self.any_extension {
            None
        } else {
            Some(self.extensions.clone())
        }
    }

    pub fn node_factory(&self) -> PlainNodeFactory {
        match self.asset_extensions() {
            Some(extensions) => PlainNodeFactory::new(extensions),
            None => PlainNodeFactory::any_extension(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
