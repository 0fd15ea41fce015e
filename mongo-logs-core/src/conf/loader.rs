use crate::conf::error::ConfigError;
use crate::conf::types::MongoLogsConfig;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load the settings file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<MongoLogsConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(MongoLogsConfig::default());
    };

    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = parse_config(path, &contents)?;

    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

pub fn parse_config(path: &Path, contents: &str) -> Result<MongoLogsConfig, ConfigError> {
    toml::from_str(contents).map_err(|e| ConfigError::parse(path, e))
}
