use quill_core::enums::ContentKind;
use quill_core::ids::new_id;
use quill_core::items::{GeneratedItem, Newsletter};
use quill_core::payloads::NewslettersPayload;
use quill_core::score::normalize_relevance;
use quill_links::LinkCheck;

use super::{Accepted, LinkRule, apply_link_rule, non_blank};
use crate::error::GenerationError;
use crate::screen::screen_links;

/// Newsletters without a reachable link are dropped.
pub(super) async fn accept<L: LinkCheck>(
    payload: NewslettersPayload,
    checker: &L,
    max_concurrency: usize,
) -> Result<Accepted, GenerationError> {
    let links: Vec<_> = payload.newsletters.iter().map(|e| e.link.clone()).collect();
    let verdicts = screen_links(checker, &links, max_concurrency).await;

    let mut out = Accepted::default();
    for (entry, verdict) in payload.newsletters.into_iter().zip(verdicts) {
        let title = entry.title.trim().to_string();
        let LinkRule::Keep(Some(link)) =
            apply_link_rule(ContentKind::Newsletters, &title, entry.link, verdict, &mut out.rejected)
        else {
            continue;
        };
        out.items.push(GeneratedItem::Newsletter(Newsletter {
            id: new_id(ContentKind::Newsletters)?,
            title,
            description: non_blank(entry.description),
            link,
            frequency: entry.frequency,
            topics: entry.topics,
            relevance_score: normalize_relevance(entry.relevance_score),
        }));
    }
    Ok(out)
}
