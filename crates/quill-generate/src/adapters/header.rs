//! Newsletter header (subject line and intro) generation.

use quill_core::enums::ContentKind;
use quill_core::payloads::HeaderPayload;
use quill_schema::{HEADER_SCHEMA, SchemaError, SchemaRegistry};

use crate::error::GenerationError;
use crate::service::{GenerationContext, GenerationRequest, GenerationService, GenerationTarget};

/// Sentence describing which sections the newsletter will include.
///
/// `[Authors, Facts]` → `"Includes: author quotes, fun/science facts."`
#[must_use]
pub fn content_summary(kinds: &[ContentKind]) -> String {
    if kinds.is_empty() {
        return "Includes: previously generated sections.".to_string();
    }
    let names: Vec<&str> = kinds.iter().map(|k| k.display_name()).collect();
    format!("Includes: {}.", names.join(", "))
}

/// Request and decode the header payload.
///
/// # Errors
///
/// Propagates service errors, and returns [`GenerationError::Payload`] or
/// [`GenerationError::Decode`] if the payload is malformed.
pub async fn fetch_header<S: GenerationService>(
    service: &S,
    topic: &str,
    context: &GenerationContext,
    schemas: &SchemaRegistry,
) -> Result<HeaderPayload, GenerationError> {
    let schema = schemas
        .get(HEADER_SCHEMA)
        .cloned()
        .ok_or_else(|| SchemaError::NotFound(HEADER_SCHEMA.to_string()))?;
    let request = GenerationRequest {
        target: GenerationTarget::Header,
        topic: topic.to_string(),
        context: context.clone(),
        schema,
    };
    let raw = service.generate(&request).await?;
    schemas.validate(HEADER_SCHEMA, &raw)?;
    Ok(serde_json::from_value(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_names_kinds_in_order() {
        assert_eq!(
            content_summary(&[ContentKind::Authors, ContentKind::Facts]),
            "Includes: author quotes, fun/science facts."
        );
        assert_eq!(
            content_summary(&[ContentKind::Podcasts]),
            "Includes: podcasts."
        );
    }

    #[test]
    fn summary_for_header_only_run() {
        assert_eq!(
            content_summary(&[]),
            "Includes: previously generated sections."
        );
    }
}
