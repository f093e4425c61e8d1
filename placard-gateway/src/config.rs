//! Environment-derived gateway configuration.
//!
//! Resolved once at startup into an immutable value; request handling
//! never reads the environment.

use placard_core::{ApiKeySet, CoreError};

/// Environment variable holding the comma-separated API-key allow-list.
pub const API_KEYS_VAR: &str = "API_KEYS";

/// Environment variable overriding the listen address.
pub const LISTEN_ADDR_VAR: &str = "PLACARD_LISTEN_ADDR";

/// Listen address used when `PLACARD_LISTEN_ADDR` is not set.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8380";

/// Configuration resolved at startup.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address the server binds to.
    pub listen_addr: String,
    /// Immutable API-key allow-list, parsed from `API_KEYS`.
    pub api_keys: ApiKeySet,
}

impl GatewayConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if `API_KEYS` is unset or contains no usable
    /// keys. A gateway that can authorize nobody refuses to start.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(API_KEYS_VAR).map_err(ConfigError::MissingApiKeys)?;
        let api_keys = ApiKeySet::parse(&raw)?;
        let listen_addr =
            std::env::var(LISTEN_ADDR_VAR).unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_owned());
        Ok(Self {
            listen_addr,
            api_keys,
        })
    }
}

/// Errors preventing the gateway from starting.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// `API_KEYS` is unset or not valid Unicode.
    #[error("API_KEYS is not set")]
    MissingApiKeys(#[source] std::env::VarError),

    /// `API_KEYS` yielded no usable key tokens.
    #[error("API_KEYS holds no usable keys")]
    UnusableAllowList(#[from] CoreError),
}
