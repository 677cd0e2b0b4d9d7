//! # quill-generate
//!
//! Talks to the generation service and turns its raw payloads into accepted
//! items.
//!
//! - [`GenerationService`] is the seam to the service; [`HttpGenerationService`]
//!   is the HTTP implementation.
//! - [`GenerationTask`] runs one content kind: fetch, then accept (schema
//!   validation, link screening, shaping).
//! - [`classify`] maps failures to user-facing [`ErrorCategory`] values.

pub mod adapters;
pub mod classify;
pub mod error;
pub mod http;
pub mod screen;
pub mod service;

pub use adapters::header::{content_summary, fetch_header};
pub use adapters::{Accepted, GenerationTask, RejectedLink};
pub use classify::{ErrorCategory, classify, classify_message};
pub use error::GenerationError;
pub use http::HttpGenerationService;
pub use screen::screen_links;
pub use service::{GenerationContext, GenerationRequest, GenerationService, GenerationTarget};
