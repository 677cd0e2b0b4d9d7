use quill_config::QuillConfig;

use crate::cli::GlobalFlags;
use crate::output::preview::render_markdown;

/// Handle `quill preview`.
pub fn handle(config: &QuillConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = super::load_selected(config, flags)?;
    print!("{}", render_markdown(&state));
    Ok(())
}
