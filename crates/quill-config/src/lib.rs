//! # quill-config
//!
//! Layered configuration loading for Quill using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QUILL_*` prefix, `__` as separator)
//! 2. Project-level `.quill/config.toml`
//! 3. User-level `~/.config/quill/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QUILL_GENERATION__API_KEY` -> `generation.api_key`,
//! `QUILL_LINKS__HEAD_TIMEOUT_MS` -> `links.head_timeout_ms`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use quill_config::QuillConfig;
//!
//! let config = QuillConfig::load_with_dotenv().expect("config");
//! if config.generation.is_configured() {
//!     println!("generation endpoint: {}", config.generation.endpoint);
//! }
//! ```

mod error;
mod general;
mod generation;
mod links;
mod run;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use generation::GenerationConfig;
pub use links::LinkConfig;
pub use run::RunConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuillConfig {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub links: LinkConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl QuillConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if a value fails [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".quill/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("QUILL_").split("__"))
    }

    /// Reject values that would make the link validator or run loop unusable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &str, reason: &str| ConfigError::InvalidValue {
            field: field.to_string(),
            reason: reason.to_string(),
        };

        if self.links.head_timeout_ms == 0 {
            return Err(invalid("links.head_timeout_ms", "must be greater than zero"));
        }
        if self.links.get_timeout_ms == 0 {
            return Err(invalid("links.get_timeout_ms", "must be greater than zero"));
        }
        if self.links.max_concurrency == 0 {
            return Err(invalid("links.max_concurrency", "must be at least 1"));
        }
        if self.generation.timeout_secs == 0 {
            return Err(invalid("generation.timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quill").join("config.toml"))
    }
}
