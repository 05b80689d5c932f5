mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::net::IpAddr;
use std::path::Path;
use tracing::debug;

/// Loads the service configuration.
///
/// Starts from the YAML file named by `CONFIG_PATH` when that variable is
/// set, or from built-in defaults otherwise, then applies the `PORT`
/// override.
pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(path) => from_file(&path).await?,
        Err(_) => Config::default(),
    };

    apply_env_overrides(&mut config, |key| env::var(key).ok());
    validate(&config)?;

    Ok(config)
}

pub async fn from_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document is a valid "all defaults" file.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

/// Applies environment overrides read through `lookup`.
///
/// A `PORT` that does not parse as a TCP port is ignored.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT").and_then(|raw| raw.trim().parse::<u16>().ok()) {
        config.server.port = port;
    }
}

pub fn validate(config: &Config) -> Result<()> {
    if config.server.host.parse::<IpAddr>().is_err() {
        return Err(Error::config(format!(
            "server.host must be an IP address, got '{}'",
            config.server.host
        )));
    }
    Ok(())
}
