use anyhow::Context;
use quill_config::QuillConfig;
use quill_generate::screen_links;
use quill_links::{LinkValidator, LinkVerdict};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckLinkArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CheckedLink {
    url: String,
    #[serde(flatten)]
    verdict: LinkVerdict,
}

/// Handle `quill check-link`.
pub async fn handle(
    args: &CheckLinkArgs,
    config: &QuillConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let validator = LinkValidator::new(&config.links).context("failed to build HTTP client")?;
    let urls: Vec<Option<String>> = args.urls.iter().cloned().map(Some).collect();
    let verdicts = screen_links(&validator, &urls, config.links.max_concurrency).await;

    let checked: Vec<CheckedLink> = args
        .urls
        .iter()
        .zip(verdicts)
        .filter_map(|(url, verdict)| {
            verdict.map(|verdict| CheckedLink {
                url: url.clone(),
                verdict,
            })
        })
        .collect();
    output(&checked, flags.format)
}
