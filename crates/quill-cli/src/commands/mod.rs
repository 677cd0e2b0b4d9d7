use std::path::Path;

use quill_config::QuillConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::project_file::{self, ProjectPaths};

pub mod check_link;
pub mod generate;
pub mod preview;
pub mod schema;
pub mod show;

/// Dispatch a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    config: &QuillConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Generate(args) => generate::handle(&args, config, flags).await,
        Commands::CheckLink(args) => check_link::handle(&args, config, flags).await,
        Commands::Show => show::handle(config, flags),
        Commands::Preview => preview::handle(config, flags),
        Commands::Schema(args) => schema::handle(&args, flags),
    }
}

/// Resolve the selected project, failing if none is selected.
fn require_project(config: &QuillConfig, flags: &GlobalFlags) -> anyhow::Result<ProjectPaths> {
    ProjectPaths::resolve(Path::new(&config.general.data_dir), &flags.project)?
        .ok_or_else(|| anyhow::anyhow!("no project selected; pass --project <name>"))
}

fn load_selected(
    config: &QuillConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<quill_core::project::ProjectGenerationState> {
    project_file::load(&require_project(config, flags)?)
}
