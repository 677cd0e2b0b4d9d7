//! Link validation configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_head_timeout_ms() -> u64 {
    5_000
}

const fn default_get_timeout_ms() -> u64 {
    8_000
}

const fn default_max_concurrency() -> usize {
    4
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinkConfig {
    /// Timeout for the initial HEAD probe, in milliseconds.
    #[serde(default = "default_head_timeout_ms")]
    pub head_timeout_ms: u64,

    /// Timeout for the GET fallback (after 405/501), in milliseconds.
    #[serde(default = "default_get_timeout_ms")]
    pub get_timeout_ms: u64,

    /// Maximum links probed at once within one adapter invocation.
    /// `1` probes strictly one at a time.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// `User-Agent` header for probe requests. Unset sends the HTTP
    /// client's defaults only.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            head_timeout_ms: default_head_timeout_ms(),
            get_timeout_ms: default_get_timeout_ms(),
            max_concurrency: default_max_concurrency(),
            user_agent: None,
        }
    }
}

impl LinkConfig {
    #[must_use]
    pub const fn head_timeout(&self) -> Duration {
        Duration::from_millis(self.head_timeout_ms)
    }

    #[must_use]
    pub const fn get_timeout(&self) -> Duration {
        Duration::from_millis(self.get_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_probe_budget() {
        let config = LinkConfig::default();
        assert_eq!(config.head_timeout(), Duration::from_secs(5));
        assert_eq!(config.get_timeout(), Duration::from_secs(8));
        assert_eq!(config.max_concurrency, 4);
        assert!(config.user_agent.is_none());
    }
}
