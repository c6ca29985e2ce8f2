//! Startup configuration resolution.
//!
//! Order: file (or defaults) → command-line overrides → validation.
//! Any error is fatal; the process does not start with a bad config.

use std::path::Path;

use crate::config::{load_config, validate_config, ConfigError, ProxyConfig};

/// Values given on the command line that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind_address: Option<String>,
    pub upstream_url: Option<String>,
}

/// Build the effective configuration.
pub fn resolve_config(path: Option<&Path>, overrides: Overrides) -> Result<ProxyConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };

    if let Some(bind_address) = overrides.bind_address {
        config.listener.bind_address = bind_address;
    }
    if let Some(upstream_url) = overrides.upstream_url {
        config.upstream.base_url = upstream_url;
    }

    validate_config(&config)?;
    Ok(config)
}
