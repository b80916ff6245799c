//! Host configuration from the process environment.
//!
//! `.env` is loaded by `main` before anything here runs. Leptos options
//! (site root, output name) come from `[package.metadata.leptos]` and the
//! `LEPTOS_*` variables through `get_configuration` instead.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Settings for the SSR host process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Wrap routes in a request-tracing layer.
    pub trace_requests: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { host: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: DEFAULT_PORT, trace_requests: true }
    }
}

impl HostConfig {
    /// Read `HOST`, `PORT`, and `TRACE_REQUESTS`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a set variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: parse_var("HOST", env_string("HOST").as_deref())?.unwrap_or(defaults.host),
            port: parse_var("PORT", env_string("PORT").as_deref())?.unwrap_or(defaults.port),
            trace_requests: env_bool("TRACE_REQUESTS").unwrap_or(defaults.trace_requests),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|raw| !raw.trim().is_empty())
}

/// Parse an optional raw value; unset stays `None`, garbage is an error.
pub(crate) fn parse_var<T: std::str::FromStr>(key: &'static str, raw: Option<&str>) -> Result<Option<T>, ConfigError> {
    raw.map(|value| {
        value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: value.to_owned() })
    })
    .transpose()
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}
