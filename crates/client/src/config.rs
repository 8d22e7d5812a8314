//! Client configuration.
//!
//! Values are resolved in order:
//! 1. Command-line flags (applied by the binary, highest priority)
//! 2. `STOCKROOM_*` environment variables
//! 3. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::StoreId;

pub const ENV_API_URL: &str = "STOCKROOM_API_URL";
pub const ENV_STORE_ID: &str = "STOCKROOM_STORE_ID";
pub const ENV_AUTH_TOKEN: &str = "STOCKROOM_AUTH_TOKEN";
pub const ENV_SKIP_TUNNEL_WARNING: &str = "STOCKROOM_SKIP_TUNNEL_WARNING";
pub const ENV_TIMEOUT_SECS: &str = "STOCKROOM_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API URL {0:?}: must start with http:// or https://")]
    InvalidApiUrl(String),

    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Connection settings for the inventory API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash.
    pub api_url: String,

    /// Store whose catalog is read and written.
    pub store_id: StoreId,

    /// Bearer token forwarded verbatim, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// Send `ngrok-skip-browser-warning` so tunnelled APIs return JSON
    /// instead of an interstitial page.
    pub skip_tunnel_warning: bool,

    /// Request timeout in seconds (ignored in the browser).
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            store_id: StoreId::new(1),
            auth_token: None,
            skip_tunnel_warning: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load from the process environment on top of the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup (tests pass a map here).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config = config.with_api_url(url)?;
        }
        if let Some(raw) = lookup(ENV_STORE_ID) {
            config.store_id = raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_STORE_ID,
                value: raw.clone(),
            })?;
        }
        if let Some(token) = lookup(ENV_AUTH_TOKEN).filter(|t| !t.trim().is_empty()) {
            config.auth_token = Some(token);
        }
        if let Some(raw) = lookup(ENV_SKIP_TUNNEL_WARNING) {
            config.skip_tunnel_warning =
                parse_bool(&raw).ok_or(ConfigError::InvalidValue {
                    var: ENV_SKIP_TUNNEL_WARNING,
                    value: raw.clone(),
                })?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    var: ENV_TIMEOUT_SECS,
                    value: raw.clone(),
                })?;
        }

        Ok(config)
    }

    /// Replace the API URL, normalizing away trailing slashes.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(url));
        }
        self.api_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_store_id(mut self, store_id: StoreId) -> Self {
        self.store_id = store_id;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
