//! Generation error types.

use quill_core::errors::CoreError;
use quill_schema::SchemaError;
use thiserror::Error;

/// Errors that fail a single generation task.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// HTTP transport error talking to the generation service.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The generation service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The service rejected the credential (401/403).
    #[error("unauthorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// No API key is configured for the generation service.
    #[error("generation API key is not configured")]
    MissingCredential,

    /// No endpoint is configured for the generation service.
    #[error("generation endpoint is not configured")]
    NotConfigured,

    /// The raw payload does not match its schema.
    #[error("invalid payload: {0}")]
    Payload(#[from] SchemaError),

    /// The raw payload passed schema validation but could not be decoded.
    #[error("failed to decode payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Building an accepted item failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The service reported a failure with a free-form message.
    #[error("{0}")]
    Failed(String),
}
