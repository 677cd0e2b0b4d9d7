//! Bounded, order-preserving link screening.

use futures::StreamExt;
use futures::stream;
use quill_links::{LinkCheck, LinkVerdict};

/// Probe every present link, at most `max_concurrency` at a time.
///
/// The result lines up index-for-index with `links`. Absent links produce
/// `None` without a probe; each present link is probed exactly once.
pub async fn screen_links<L: LinkCheck>(
    checker: &L,
    links: &[Option<String>],
    max_concurrency: usize,
) -> Vec<Option<LinkVerdict>> {
    stream::iter(links.iter().map(|link| async move {
        match link {
            Some(url) => Some(checker.validate(url).await),
            None => None,
        }
    }))
    .buffered(max_concurrency.max(1))
    .collect()
    .await
}
