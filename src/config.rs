//! Environment configuration for the stub binary
//!
//! | Variable | Default |
//! |---|---|
//! | `STUB_PORT` | `8081` |
//! | `STUB_BIND_ADDRESS` | `0.0.0.0` |
//! | `STUB_DEVICE_IDS` | empty (comma-separated list) |
//! | `STUB_INITIAL_READY` | `false` |
//! | `STUB_SHUTDOWN_GRACE_SECS` | `5` |

use crate::server::DEFAULT_GRACE_PERIOD;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

/// Default port for the actuation endpoints
pub const DEFAULT_PORT: u16 = 8081;

pub const PORT_VAR: &str = "STUB_PORT";
pub const BIND_ADDRESS_VAR: &str = "STUB_BIND_ADDRESS";
pub const DEVICE_IDS_VAR: &str = "STUB_DEVICE_IDS";
pub const INITIAL_READY_VAR: &str = "STUB_INITIAL_READY";
pub const GRACE_SECS_VAR: &str = "STUB_SHUTDOWN_GRACE_SECS";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {var} value {value:?}: expected a port number")]
    InvalidPort { var: &'static str, value: String },

    #[error("Invalid {var} value {value:?}: expected an IP address")]
    InvalidAddress { var: &'static str, value: String },

    #[error("Invalid {var} value {value:?}: expected true/false/1/0")]
    InvalidBool { var: &'static str, value: String },

    #[error("Invalid {var} value {value:?}: expected whole seconds")]
    InvalidDuration { var: &'static str, value: String },
}

/// Startup parameters of the stub server
#[derive(Debug, Clone, PartialEq)]
pub struct StubConfig {
    pub bind_address: IpAddr,
    pub port: u16,
    pub device_ids: Vec<String>,
    pub initial_ready: bool,
    pub grace_period: Duration,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            device_ids: Vec::new(),
            initial_ready: false,
            grace_period: DEFAULT_GRACE_PERIOD,
        }
    }
}

impl StubConfig {
    /// Read the configuration from process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`; unset variables keep defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(PORT_VAR) {
            config.port = parse_port(&value)?;
        }
        if let Some(value) = lookup(BIND_ADDRESS_VAR) {
            config.bind_address =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidAddress {
                        var: BIND_ADDRESS_VAR,
                        value: value.clone(),
                    })?;
        }
        if let Some(value) = lookup(DEVICE_IDS_VAR) {
            config.device_ids = parse_device_ids(&value);
        }
        if let Some(value) = lookup(INITIAL_READY_VAR) {
            config.initial_ready = parse_bool(INITIAL_READY_VAR, &value)?;
        }
        if let Some(value) = lookup(GRACE_SECS_VAR) {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDuration {
                    var: GRACE_SECS_VAR,
                    value: value.clone(),
                })?;
            config.grace_period = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Socket address the server should bind
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

/// Parse a port given as text, e.g. `"28083"`
pub fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort {
            var: PORT_VAR,
            value: value.to_string(),
        })
}

/// Split a comma-separated ID list, keeping order and duplicates
fn parse_device_ids(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
