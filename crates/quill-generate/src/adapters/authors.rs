use quill_core::enums::ContentKind;
use quill_core::ids::new_id;
use quill_core::items::{AuthorQuote, GeneratedItem, author_name_key};
use quill_core::payloads::AuthorsPayload;
use quill_core::score::normalize_relevance;

use super::{Accepted, non_blank};
use crate::error::GenerationError;

/// Flatten each author's quotes into one item per quote.
pub(super) fn accept(payload: AuthorsPayload) -> Result<Accepted, GenerationError> {
    let mut items = Vec::new();
    for author in payload.authors {
        let author_name = author.name.trim().to_string();
        let key = author_name_key(&author_name);
        let title = non_blank(author.title);
        for quote in author.quotes {
            items.push(GeneratedItem::Author(AuthorQuote {
                id: new_id(ContentKind::Authors)?,
                author_name: author_name.clone(),
                author_name_key: key.clone(),
                author_title: title.clone(),
                quote: quote.text.trim().to_string(),
                source: quote.source,
                source_year: quote.source_year,
                relevance_score: normalize_relevance(quote.relevance_score),
            }));
        }
    }
    Ok(Accepted {
        items,
        rejected: Vec::new(),
    })
}
