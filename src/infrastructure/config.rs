//! Configuration for infrastructure adapters.
//!
//! Follows the teacher's `infrastructure/config` pattern: a small
//! `serde`-derived struct plus a loader function, rather than a full
//! configuration framework.

use serde::{Deserialize, Serialize};

/// Configuration for [`crate::infrastructure::repositories::RemoteRepository`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteRepositoryConfig {
    /// Base URL of the remote API, e.g. `https://api.example.com`.
    pub base_url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    5_000
}

impl RemoteRepositoryConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: default_timeout_ms(),
        }
    }

    /// Parse a config from a TOML document, e.g.:
    ///
    /// ```toml
    /// base_url = "https://api.example.com"
    /// timeout_ms = 2000
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}
