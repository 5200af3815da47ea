//! Global config file: $XDG_CONFIG_HOME/inventory/config.toml

use crate::config::xdg;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};

/// Add the global config file if the config home can be determined.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = match xdg::global_config_path() {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!("Skipping global config file: {}", e);
            return Ok(builder);
        }
    };
    Ok(builder.add_source(File::from(path).required(false)))
}
