//! Gateway configuration loading.
//!
//! Order of precedence: defaults, then the JSON file, then `MDS_*`
//! environment variables. The merged result is validated before it is
//! handed out; it is never written back.

use std::fs;
use std::path::Path;

use mds_types::{ConfigError, GatewayConfig, SearchTermQuoting};
use tracing::{debug, info};
use validator::Validate;

/// Config file looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "mds_config.json";

pub const ENV_SERVICE_URL: &str = "MDS_SERVICE_URL";
pub const ENV_DOMAIN: &str = "MDS_DOMAIN";
pub const ENV_USERNAME: &str = "MDS_USERNAME";
pub const ENV_PASSWORD: &str = "MDS_PASSWORD";
pub const ENV_PORT: &str = "MDS_PORT";
pub const ENV_SEARCH_TERM_QUOTING: &str = "MDS_SEARCH_TERM_QUOTING";

/// Load, override from the process environment, and validate.
///
/// An explicit `path` must exist. The default file is optional: when it is
/// missing the defaults plus environment are used.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    load_config_with(path, |name| std::env::var(name).ok())
}

/// Same as [`load_config`] with an injectable environment lookup.
pub fn load_config_with<F>(path: Option<&Path>, lookup: F) -> Result<GatewayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() {
                read_config_file(default_path)?
            } else {
                debug!("No {} in working directory, using defaults", CONFIG_FILE);
                GatewayConfig::default()
            }
        }
    };

    apply_env_overrides(&mut config, lookup)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate a merged config. Call again after any late override.
pub fn validate_config(config: &GatewayConfig) -> Result<(), ConfigError> {
    config.validate().map_err(|e| ConfigError::from_validation_errors(&e))
}

fn read_config_file(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let shown = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| ConfigError::from_io_error(&shown, &e))?;
    let config = serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))?;
    info!("Loaded configuration from {}", shown);
    Ok(config)
}

/// Apply `MDS_*` overrides. Empty variables are ignored.
pub fn apply_env_overrides<F>(config: &mut GatewayConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(url) = get(ENV_SERVICE_URL) {
        config.mds.service_url = url.trim().to_string();
    }
    if let Some(domain) = get(ENV_DOMAIN) {
        config.mds.credentials.domain = domain;
    }
    if let Some(username) = get(ENV_USERNAME) {
        config.mds.credentials.username = username;
    }
    if let Some(password) = get(ENV_PASSWORD) {
        config.mds.credentials.password = password;
    }
    if let Some(port) = get(ENV_PORT) {
        config.server.port = port.trim().parse().map_err(|e| ConfigError::EnvOverride {
            variable: ENV_PORT.to_string(),
            message: format!("'{}' is not a port number: {}", port, e),
        })?;
    }
    if let Some(mode) = get(ENV_SEARCH_TERM_QUOTING) {
        config.mds.search_term_quoting =
            SearchTermQuoting::from_string(&mode).ok_or_else(|| ConfigError::EnvOverride {
                variable: ENV_SEARCH_TERM_QUOTING.to_string(),
                message: format!("'{}' is not one of: verbatim, escaped", mode),
            })?;
    }
    Ok(())
}
