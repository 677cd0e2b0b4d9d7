use anyhow::Context;
use quill_config::QuillConfig;

/// Load `.env` (if present) and the layered configuration.
pub fn load_config() -> anyhow::Result<QuillConfig> {
    let config = QuillConfig::load_with_dotenv().context("failed to load quill configuration")?;
    if !config.generation.is_configured() {
        tracing::warn!(
            "generation service is not fully configured; set QUILL_GENERATION__ENDPOINT and QUILL_GENERATION__API_KEY"
        );
    }
    Ok(config)
}
