//! Process configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::upstream::{BikeClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Default address the HTTP server listens on.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("BIKE_CLIENT_IDENTIFIER is required unless BIKE_MOCK_DIR is set")]
    MissingClientIdentifier,

    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Where station data comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceConfig {
    /// The live bike-share API.
    Http(BikeClientConfig),
    /// Fixture files in a directory.
    Mock(PathBuf),
}

/// Configuration shared by the server and the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source: SourceConfig,
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `BIKE_CLIENT_IDENTIFIER` | required unless `BIKE_MOCK_DIR` is set |
    /// | `BIKE_BASE_URL` | `https://oslobysykkel.no/api/v1` |
    /// | `BIKE_TIMEOUT_SECS` | `5` |
    /// | `BIKE_LISTEN_ADDR` | `0.0.0.0:8080` |
    /// | `BIKE_MOCK_DIR` | unset |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary lookup function.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let listen_addr = get("BIKE_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: "BIKE_LISTEN_ADDR",
                value: listen_addr.clone(),
            })?;

        if let Some(dir) = get("BIKE_MOCK_DIR") {
            return Ok(Self {
                source: SourceConfig::Mock(PathBuf::from(dir)),
                listen_addr,
            });
        }

        let client_identifier =
            get("BIKE_CLIENT_IDENTIFIER").ok_or(ConfigError::MissingClientIdentifier)?;

        let timeout_secs = match get("BIKE_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "BIKE_TIMEOUT_SECS",
                        value,
                    });
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let base_url = get("BIKE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let client = BikeClientConfig::new(client_identifier)
            .with_base_url(base_url)
            .with_timeout(timeout_secs);

        Ok(Self {
            source: SourceConfig::Http(client),
            listen_addr,
        })
    }
}
