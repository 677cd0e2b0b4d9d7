//! Cross-cutting error types for Quill.
//!
//! Domain-specific errors (e.g., `GenerationError`, `SchemaError`) are defined
//! in their respective crates. The CLI converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Quill crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (unknown kind, malformed value).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The OS random source could not produce an id.
    #[error("Failed to generate id: {0}")]
    IdGeneration(String),
}
