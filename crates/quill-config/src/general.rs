//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    ".quill".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory holding project state files and locks.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Audience description used when `--audience` is not given.
    #[serde(default)]
    pub default_audience: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_audience: String::new(),
        }
    }
}
