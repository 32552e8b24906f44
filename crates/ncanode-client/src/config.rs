//! Client configuration types.

use ncanode_core::{NcaNodeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Address NCANode listens on by default
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:14579";

/// Protocol version sent in every request envelope
pub const DEFAULT_PROTOCOL_VERSION: &str = "1.0";

/// Environment variable overriding the server address
pub const ENV_URL: &str = "NCANODE_URL";

/// Environment variable overriding the request timeout (seconds)
pub const ENV_TIMEOUT: &str = "NCANODE_TIMEOUT";

/// Connection settings for an NCANode server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server address (default: `http://127.0.0.1:14579`)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 60)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Envelope `version` field (default: "1.0")
    #[serde(default = "default_protocol_version")]
    pub protocol_version: String,

    /// Custom User-Agent header
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            protocol_version: default_protocol_version(),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| NcaNodeError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&content).map_err(|e| NcaNodeError::Config(e.to_string()))
    }

    /// Defaults overridden by `NCANODE_URL` and `NCANODE_TIMEOUT`.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = lookup(ENV_URL) {
            self.base_url = url;
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            self.timeout_secs = timeout
                .trim()
                .parse()
                .map_err(|_| NcaNodeError::Config(format!("{ENV_TIMEOUT} must be seconds, got {timeout:?}")))?;
        }

        Ok(self)
    }

    /// Request timeout as a [`Duration`]
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// Default value functions for serde.
fn default_base_url() -> String {
    String::from(DEFAULT_BASE_URL)
}

const fn default_timeout_secs() -> u64 {
    60
}

fn default_protocol_version() -> String {
    String::from(DEFAULT_PROTOCOL_VERSION)
}
