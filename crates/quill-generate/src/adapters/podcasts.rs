use quill_core::enums::ContentKind;
use quill_core::ids::new_id;
use quill_core::items::{GeneratedItem, Podcast};
use quill_core::payloads::PodcastsPayload;
use quill_core::score::normalize_relevance;
use quill_links::LinkCheck;

use super::{Accepted, LinkRule, apply_link_rule, non_blank};
use crate::error::GenerationError;
use crate::screen::screen_links;

pub(super) async fn accept<L: LinkCheck>(
    payload: PodcastsPayload,
    checker: &L,
    max_concurrency: usize,
) -> Result<Accepted, GenerationError> {
    let links: Vec<_> = payload.podcasts.iter().map(|e| e.link.clone()).collect();
    let verdicts = screen_links(checker, &links, max_concurrency).await;

    let mut out = Accepted::default();
    for (entry, verdict) in payload.podcasts.into_iter().zip(verdicts) {
        let title = entry.title.trim().to_string();
        let LinkRule::Keep(Some(link)) =
            apply_link_rule(ContentKind::Podcasts, &title, entry.link, verdict, &mut out.rejected)
        else {
            continue;
        };
        out.items.push(GeneratedItem::Podcast(Podcast {
            id: new_id(ContentKind::Podcasts)?,
            title,
            host: non_blank(entry.host),
            link,
            frequency: entry.frequency,
            topics: entry.topics,
            relevance_score: normalize_relevance(entry.relevance_score),
        }));
    }
    Ok(out)
}
