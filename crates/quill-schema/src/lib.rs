//! # quill-schema
//!
//! JSON Schema registry for the raw payloads returned by the generation
//! service.
//!
//! Payload types are defined in `quill-core` with `#[derive(JsonSchema)]`.
//! The registry serves two purposes:
//! - the schema for a target is sent to the generation service as its
//!   structured-output contract
//! - every raw payload is validated against the same schema before it is
//!   decoded, so a payload missing a required top-level array fails its task

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{HEADER_SCHEMA, SchemaRegistry};
