//! Run presentation settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default display-linger window after a run settles.
const fn default_linger_ms() -> u64 {
    1_500
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunConfig {
    /// How long a finished run stays visible before the state returns to idle.
    #[serde(default = "default_linger_ms")]
    pub linger_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            linger_ms: default_linger_ms(),
        }
    }
}

impl RunConfig {
    #[must_use]
    pub const fn linger(&self) -> Duration {
        Duration::from_millis(self.linger_ms)
    }
}
