//! # Client configuration — `mindvault.toml`
//!
//! Settings the frontends need before they can talk to the backend.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! origin = "http://localhost:8001"   # backend origin, no trailing slash
//!
//! [ui]
//! default_view = "timeline"          # timeline | tag | grid
//! ```
//!
//! Every section is `#[serde(default)]`, so a missing or empty file equals the
//! default configuration.
//!
//! ## Environment
//!
//! The backend origin may be overridden with `MINDVAULT_BACKEND_URL`. On native
//! targets the variable is read at runtime (after the entry point has loaded a
//! `.env` file); the value captured at compile time is used otherwise, which is
//! how the web build receives it.

use serde::{Deserialize, Serialize};

use crate::filter::ViewMode;

/// Environment variable holding the backend origin.
pub const BACKEND_URL_ENV: &str = "MINDVAULT_BACKEND_URL";

const DEFAULT_ORIGIN: &str = "http://localhost:8001";

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_origin")]
    pub origin: String,
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

/// Presentation settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub default_view: ViewMode,
}

impl ClientConfig {
    /// Config pointing at the given origin.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                origin: normalize_origin(&origin.into()),
            },
            ui: UiConfig::default(),
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "mindvault.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.origin = normalize_origin(&config.api.origin);
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Defaults with the environment override applied.
    pub fn from_env() -> Self {
        Self::default().with_env_override()
    }

    /// Replace the origin with `MINDVAULT_BACKEND_URL` when it is set.
    pub fn with_env_override(mut self) -> Self {
        if let Some(origin) = env_origin() {
            tracing::debug!("backend origin from environment: {origin}");
            self.api.origin = normalize_origin(&origin);
        }
        self
    }
}

fn env_origin() -> Option<String> {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(value) = std::env::var(BACKEND_URL_ENV) {
        if !value.trim().is_empty() {
            return Some(value);
        }
    }
    option_env!("MINDVAULT_BACKEND_URL")
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// Trim whitespace and trailing slashes so paths can be appended directly.
pub fn normalize_origin(origin: &str) -> String {
    origin.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.origin, "http://localhost:8001");
        assert_eq!(config.ui.default_view, ViewMode::Timeline);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = ClientConfig::new("https://vault.example.com/");
        config.ui.default_view = ViewMode::Grid;
        assert_eq!(config.api.origin, "https://vault.example.com");

        let text = config.to_toml().unwrap();
        let loaded = ClientConfig::from_toml(&text).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_toml() {
        let config = ClientConfig::from_toml("[ui]\ndefault_view = \"tag\"\n").unwrap();
        assert_eq!(config.ui.default_view, ViewMode::Tag);
        assert_eq!(config.api.origin, "http://localhost:8001");
    }

    #[test]
    fn test_normalize_origin() {
        assert_eq!(normalize_origin(" http://a.b// "), "http://a.b");
    }
}
