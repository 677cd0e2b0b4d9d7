//! Map task failures onto user-facing categories.
//!
//! Classification is credential-aware: an auth rejection with no key
//! configured is reported as a missing credential rather than an invalid one.

use std::fmt;

use quill_config::GenerationConfig;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    MissingCredential,
    InvalidCredential,
    RateLimited,
    Generic,
}

impl ErrorCategory {
    /// Short hint shown alongside the raw error.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::MissingCredential => {
                "no generation API key is configured (set QUILL_GENERATION__API_KEY)"
            }
            Self::InvalidCredential => "the generation service rejected the configured API key",
            Self::RateLimited => "the generation service is rate limiting requests, try again later",
            Self::Generic => "generation failed",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingCredential => "missing_credential",
            Self::InvalidCredential => "invalid_credential",
            Self::RateLimited => "rate_limited",
            Self::Generic => "generic",
        })
    }
}

/// Categorize a task failure.
#[must_use]
pub fn classify(error: &GenerationError, config: &GenerationConfig) -> ErrorCategory {
    match error {
        GenerationError::MissingCredential => ErrorCategory::MissingCredential,
        GenerationError::Unauthorized { .. } => credential_category(config),
        GenerationError::RateLimited { .. } => ErrorCategory::RateLimited,
        GenerationError::Api { status: 429, .. } => ErrorCategory::RateLimited,
        GenerationError::Failed(message) => classify_message(message, config),
        _ => ErrorCategory::Generic,
    }
}

/// Categorize a free-form failure message (service-reported or caught panic).
#[must_use]
pub fn classify_message(message: &str, config: &GenerationConfig) -> ErrorCategory {
    let lower = message.to_lowercase();
    if lower.contains("api key") || lower.contains("unauthorized") || lower.contains("credential")
    {
        credential_category(config)
    } else if lower.contains("rate limit") || lower.contains("too many requests") {
        ErrorCategory::RateLimited
    } else {
        ErrorCategory::Generic
    }
}

fn credential_category(config: &GenerationConfig) -> ErrorCategory {
    if config.has_api_key() {
        ErrorCategory::InvalidCredential
    } else {
        ErrorCategory::MissingCredential
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config_with_key(key: &str) -> GenerationConfig {
        GenerationConfig {
            api_key: key.to_string(),
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn missing_credential_error() {
        let cat = classify(&GenerationError::MissingCredential, &config_with_key(""));
        assert_eq!(cat, ErrorCategory::MissingCredential);
    }

    #[rstest]
    #[case("sk-123", ErrorCategory::InvalidCredential)]
    #[case("", ErrorCategory::MissingCredential)]
    #[case("   ", ErrorCategory::MissingCredential)]
    fn unauthorized_depends_on_key(#[case] key: &str, #[case] expected: ErrorCategory) {
        let err = GenerationError::Unauthorized {
            status: 401,
            message: String::new(),
        };
        assert_eq!(classify(&err, &config_with_key(key)), expected);
    }

    #[test]
    fn rate_limited() {
        let err = GenerationError::RateLimited {
            retry_after_secs: 5,
        };
        assert_eq!(classify(&err, &config_with_key("k")), ErrorCategory::RateLimited);
    }

    #[rstest]
    #[case("Invalid API key provided", "k", ErrorCategory::InvalidCredential)]
    #[case("Invalid API key provided", "", ErrorCategory::MissingCredential)]
    #[case("Rate limit exceeded", "k", ErrorCategory::RateLimited)]
    #[case("boom", "k", ErrorCategory::Generic)]
    fn free_form_messages(#[case] msg: &str, #[case] key: &str, #[case] expected: ErrorCategory) {
        let err = GenerationError::Failed(msg.to_string());
        assert_eq!(classify(&err, &config_with_key(key)), expected);
    }

    #[test]
    fn server_error_is_generic() {
        let err = GenerationError::Api {
            status: 500,
            message: "oops".into(),
        };
        assert_eq!(classify(&err, &config_with_key("k")), ErrorCategory::Generic);
    }
}
