//! The generation service seam.
//!
//! A [`GenerationService`] turns a topic plus context into a raw JSON payload
//! shaped by the target's schema. The payload is untrusted; adapters validate
//! and screen it before anything is stored.

use std::fmt;
use std::future::Future;

use quill_core::enums::ContentKind;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::GenerationError;

/// What a generation request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationTarget {
    Kind(ContentKind),
    /// Newsletter subject line and intro.
    Header,
}

impl GenerationTarget {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kind(kind) => kind.as_str(),
            Self::Header => "header",
        }
    }
}

impl Serialize for GenerationTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for GenerationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context passed alongside the topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationContext {
    /// Project description, if the project has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Intended readership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    /// Header requests only: which sections the newsletter will include.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_summary: Option<String>,
    #[serde(default)]
    pub generate_subject: bool,
    #[serde(default)]
    pub generate_intro: bool,
}

/// One call to the generation service.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub target: GenerationTarget,
    pub topic: String,
    pub context: GenerationContext,
    /// JSON Schema the payload must satisfy.
    pub schema: Value,
}

/// Anything that can produce raw generation payloads.
pub trait GenerationService: Send + Sync {
    /// Produce the raw payload for `request`.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<Value, GenerationError>> + Send;
}
