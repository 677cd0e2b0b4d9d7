//! Per-kind adapters: request, validate, screen, shape.
//!
//! Each task runs in two phases so callers can report progress between them:
//! [`GenerationTask::fetch`] asks the service for a raw payload, and
//! [`GenerationTask::accept`] validates it against the kind's schema, screens
//! its links, and builds accepted items with fresh ids and normalized scores.
//!
//! Link rules follow [`ContentKind::requires_link`]. Kinds that require a
//! link (newsletters, podcasts) drop items whose link is missing or fails
//! validation. The others (facts, tools) keep the item and strip the failing
//! link. Author quotes carry no links.

mod authors;
mod facts;
pub mod header;
mod newsletters;
mod podcasts;
mod tools;

use quill_core::enums::ContentKind;
use quill_core::items::GeneratedItem;
use quill_links::{LinkCheck, LinkVerdict};
use quill_schema::{SchemaError, SchemaRegistry};
use serde_json::Value;

use crate::error::GenerationError;
use crate::service::{GenerationContext, GenerationRequest, GenerationService, GenerationTarget};

/// A link that did not survive screening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLink {
    /// Title, name, or text of the item the link belonged to.
    pub headline: String,
    /// `None` when a mandatory link was missing.
    pub url: Option<String>,
    pub reason: String,
    /// Whether the whole item was dropped, or only the link stripped.
    pub dropped: bool,
}

/// Result of accepting one raw payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accepted {
    pub items: Vec<GeneratedItem>,
    pub rejected: Vec<RejectedLink>,
}

impl Accepted {
    /// Number of items dropped because of their link.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.rejected.iter().filter(|r| r.dropped).count()
    }
}

/// One content-kind generation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTask {
    kind: ContentKind,
}

impl GenerationTask {
    #[must_use]
    pub const fn new(kind: ContentKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        self.kind.display_name()
    }

    /// Build the service request for this task.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Payload`] if `schemas` has no schema for the kind.
    pub fn request(
        self,
        topic: &str,
        context: &GenerationContext,
        schemas: &SchemaRegistry,
    ) -> Result<GenerationRequest, GenerationError> {
        let schema = schemas
            .for_kind(self.kind)
            .cloned()
            .ok_or_else(|| SchemaError::NotFound(self.kind.as_str().to_string()))?;
        Ok(GenerationRequest {
            target: GenerationTarget::Kind(self.kind),
            topic: topic.to_string(),
            context: context.clone(),
            schema,
        })
    }

    /// Ask the service for this kind's raw payload.
    ///
    /// # Errors
    ///
    /// Propagates request construction and service errors.
    pub async fn fetch<S: GenerationService>(
        self,
        service: &S,
        topic: &str,
        context: &GenerationContext,
        schemas: &SchemaRegistry,
    ) -> Result<Value, GenerationError> {
        let request = self.request(topic, context, schemas)?;
        service.generate(&request).await
    }

    /// Validate, screen, and shape a raw payload into accepted items.
    ///
    /// Every present link is probed exactly once, at most `max_concurrency`
    /// at a time, and item order follows the payload.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::Payload`] if the payload fails schema validation.
    /// - [`GenerationError::Decode`] if it validates but cannot be decoded.
    /// - [`GenerationError::Core`] if id generation fails.
    pub async fn accept<L: LinkCheck>(
        self,
        raw: Value,
        schemas: &SchemaRegistry,
        checker: &L,
        max_concurrency: usize,
    ) -> Result<Accepted, GenerationError> {
        schemas.validate(self.kind.as_str(), &raw)?;
        match self.kind {
            ContentKind::Authors => authors::accept(serde_json::from_value(raw)?),
            ContentKind::Facts => {
                facts::accept(serde_json::from_value(raw)?, checker, max_concurrency).await
            }
            ContentKind::Tools => {
                tools::accept(serde_json::from_value(raw)?, checker, max_concurrency).await
            }
            ContentKind::Newsletters => {
                newsletters::accept(serde_json::from_value(raw)?, checker, max_concurrency).await
            }
            ContentKind::Podcasts => {
                podcasts::accept(serde_json::from_value(raw)?, checker, max_concurrency).await
            }
        }
    }
}

/// A link after screening.
enum Screened {
    Absent,
    Valid(String),
    Invalid { url: String, reason: String },
}

fn screened(link: Option<String>, verdict: Option<LinkVerdict>) -> Screened {
    match (link, verdict) {
        (Some(url), Some(v)) if v.is_valid => Screened::Valid(url),
        (Some(url), Some(v)) => Screened::Invalid {
            url,
            reason: v.error.unwrap_or_else(|| "link rejected".to_string()),
        },
        _ => Screened::Absent,
    }
}

/// What screening decided for one item.
#[derive(Debug, PartialEq, Eq)]
enum LinkRule {
    /// Keep the item, with its link if the link validated.
    Keep(Option<String>),
    /// Drop the item.
    Drop,
}

/// Apply `kind`'s link rule to one screened link, recording any rejection.
fn apply_link_rule(
    kind: ContentKind,
    headline: &str,
    link: Option<String>,
    verdict: Option<LinkVerdict>,
    rejected: &mut Vec<RejectedLink>,
) -> LinkRule {
    let (url, reason) = match screened(link, verdict) {
        Screened::Valid(url) => return LinkRule::Keep(Some(url)),
        Screened::Absent if !kind.requires_link() => return LinkRule::Keep(None),
        Screened::Absent => (None, "missing link".to_string()),
        Screened::Invalid { url, reason } => (Some(url), reason),
    };
    let dropped = kind.requires_link();
    rejected.push(RejectedLink {
        headline: headline.to_string(),
        url,
        reason,
        dropped,
    });
    if dropped {
        LinkRule::Drop
    } else {
        LinkRule::Keep(None)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
