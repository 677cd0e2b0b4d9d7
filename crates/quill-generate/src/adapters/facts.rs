use quill_core::enums::{ContentKind, FactCategory};
use quill_core::ids::new_id;
use quill_core::items::{Fact, GeneratedItem};
use quill_core::payloads::FactsPayload;
use quill_core::score::normalize_relevance;
use quill_links::LinkCheck;

use super::{Accepted, LinkRule, apply_link_rule};
use crate::error::GenerationError;
use crate::screen::screen_links;

/// Fun facts first, then science facts. Failing source links are stripped.
pub(super) async fn accept<L: LinkCheck>(
    payload: FactsPayload,
    checker: &L,
    max_concurrency: usize,
) -> Result<Accepted, GenerationError> {
    let entries: Vec<_> = payload
        .fun_facts
        .into_iter()
        .map(|e| (FactCategory::Fun, e))
        .chain(
            payload
                .science_facts
                .into_iter()
                .map(|e| (FactCategory::Science, e)),
        )
        .collect();
    let links: Vec<_> = entries.iter().map(|(_, e)| e.source_link.clone()).collect();
    let verdicts = screen_links(checker, &links, max_concurrency).await;

    let mut out = Accepted::default();
    for ((category, entry), verdict) in entries.into_iter().zip(verdicts) {
        let text = entry.text.trim().to_string();
        let source_link =
            match apply_link_rule(ContentKind::Facts, &text, entry.source_link, verdict, &mut out.rejected) {
                LinkRule::Keep(link) => link,
                LinkRule::Drop => continue,
            };
        out.items.push(GeneratedItem::Fact(Fact {
            id: new_id(ContentKind::Facts)?,
            category,
            text,
            source_link,
            relevance_score: normalize_relevance(entry.relevance_score),
        }));
    }
    Ok(out)
}
