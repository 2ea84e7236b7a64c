use std::path::Path;

use tracing::{debug, warn};

use crate::core::config::{ConfigError, ExplorerConfig};

/// Reads and validates a JSON config file.
pub fn load_config(path: impl AsRef<Path>) -> Result<ExplorerConfig, ConfigError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let config = ExplorerConfig::from_json(&json).inspect_err(|err| {
        warn!(path = %path.display(), %err, "rejected config file");
    })?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Loads `path` when given, otherwise the defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<ExplorerConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(ExplorerConfig::default()),
    }
}

pub fn save_config(config: &ExplorerConfig, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    config.validate()?;

    std::fs::write(path, config.to_json()?).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}
