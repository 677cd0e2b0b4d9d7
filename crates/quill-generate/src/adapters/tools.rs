use quill_core::enums::{ContentKind, ToolTier};
use quill_core::ids::new_id;
use quill_core::items::{GeneratedItem, Tool};
use quill_core::payloads::ToolsPayload;
use quill_core::score::normalize_relevance;
use quill_links::LinkCheck;

use super::{Accepted, LinkRule, apply_link_rule, non_blank};
use crate::error::GenerationError;
use crate::screen::screen_links;

/// Free tools first, then paid. Failing URLs are stripped.
pub(super) async fn accept<L: LinkCheck>(
    payload: ToolsPayload,
    checker: &L,
    max_concurrency: usize,
) -> Result<Accepted, GenerationError> {
    let entries: Vec<_> = payload
        .free_tools
        .into_iter()
        .map(|e| (ToolTier::Free, e))
        .chain(payload.paid_tools.into_iter().map(|e| (ToolTier::Paid, e)))
        .collect();
    let links: Vec<_> = entries.iter().map(|(_, e)| e.url.clone()).collect();
    let verdicts = screen_links(checker, &links, max_concurrency).await;

    let mut out = Accepted::default();
    for ((tier, entry), verdict) in entries.into_iter().zip(verdicts) {
        let name = entry.name.trim().to_string();
        let url = match apply_link_rule(ContentKind::Tools, &name, entry.url, verdict, &mut out.rejected) {
            LinkRule::Keep(url) => url,
            LinkRule::Drop => continue,
        };
        out.items.push(GeneratedItem::Tool(Tool {
            id: new_id(ContentKind::Tools)?,
            tier,
            name,
            description: non_blank(entry.description),
            url,
            relevance_score: normalize_relevance(entry.relevance_score),
        }));
    }
    Ok(out)
}
