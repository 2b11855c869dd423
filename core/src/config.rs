//! Client configuration.
//!
//! Captured once when the client is constructed and read-only afterwards.
//! Everything except `base_url` is handed to the transport untouched.

use std::collections::BTreeMap;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Production origin of the SC2 Arcade API.
pub const DEFAULT_BASE_URL: &str = "https://api.sc2arcade.com";

/// Transport-level settings for `Sc2ArcadeClient`.
///
/// Loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. Environment variables with `SC2ARCADE_` prefix (`__` separates nested keys,
///    e.g. `SC2ARCADE_HEADERS__ACCEPT_LANGUAGE`)
///
/// Variable names cannot carry dashes, so header names read from the
/// environment have `_` replaced by `-` (`accept-language`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Origin every request path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Overall per-request timeout. `None` leaves the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Proxy URL, e.g. `socks5://127.0.0.1:1080`.
    #[serde(default)]
    pub proxy: Option<String>,

    /// Value of the `user-agent` header. `None` keeps the transport's own.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Headers sent with every request, names used as given.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            proxy: None,
            user_agent: None,
            headers: BTreeMap::new(),
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at a different origin, otherwise default.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from struct defaults overlaid with `SC2ARCADE_*`
    /// environment variables.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if a variable cannot be parsed or the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ApiError> {
        let mut config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed("SC2ARCADE_").split("__"))
            .extract()?;
        config.headers = config
            .headers
            .into_iter()
            .map(|(name, value)| (name.replace('_', "-"), value))
            .collect();

        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns `ApiError::Config` if `base_url` is not an http(s) URL.
    pub fn validate(&self) -> Result<(), ApiError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(ApiError::Config("timeout_secs must be greater than zero".into()));
        }
        Ok(())
    }
}
