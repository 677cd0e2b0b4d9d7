//! Generation service configuration.

use serde::{Deserialize, Serialize};

/// Default per-request timeout for the generation service, in seconds.
const fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Base URL of the generation service (e.g., `https://gen.example.com/v1`).
    #[serde(default)]
    pub endpoint: String,

    /// Bearer credential sent with every generation request.
    #[serde(default)]
    pub api_key: String,

    /// Model override. Empty means the service default.
    #[serde(default)]
    pub model: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            model: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GenerationConfig {
    /// Check if both the endpoint and the credential are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && self.has_api_key()
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Model override, if any.
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        let model = self.model.trim();
        (!model.is_empty()).then_some(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unconfigured() {
        let config = GenerationConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout_secs, 120);
        assert!(config.model().is_none());
    }

    #[test]
    fn blank_api_key_is_missing() {
        let config = GenerationConfig {
            endpoint: "https://gen.example.com".into(),
            api_key: "   ".into(),
            ..GenerationConfig::default()
        };
        assert!(!config.has_api_key());
        assert!(!config.is_configured());
    }
}
