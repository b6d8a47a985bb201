//! Environment variable source: ASSET_BROWSER__ prefix with __ separator.

use crate::config::ENV_PREFIX;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
///
/// `ASSET_BROWSER__SCAN__EXTENSIONS=js,html` sets `scan.extensions`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("scan.extensions")
            .try_parsing(true),
    );
    Ok(builder)
}
