use quill_config::QuillConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `quill show`.
pub fn handle(config: &QuillConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = super::load_selected(config, flags)?;
    output(&state, flags.format)
}
