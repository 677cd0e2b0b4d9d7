use std::path::Path;

use anyhow::Context;
use quill_config::QuillConfig;
use quill_core::enums::{RunStatus, Severity};
use quill_generate::HttpGenerationService;
use quill_links::LinkValidator;
use quill_orchestrator::{HeaderOptions, LogEntry, Orchestrator, RunEvent, RunRequest};
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::output::output;
use crate::progress::Progress;
use crate::project_file::{self, ProjectPaths};
use crate::write_lock;

/// Handle `quill generate`.
pub async fn handle(
    args: &GenerateArgs,
    config: &QuillConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let paths = ProjectPaths::resolve(Path::new(&config.general.data_dir), &flags.project)?;
    let _lock = match &paths {
        Some(paths) => Some(write_lock::acquire(&paths.lock_file()).await?),
        None => None,
    };
    let mut state = paths.as_ref().map(project_file::load).transpose()?;

    let service = HttpGenerationService::new(&config.generation)
        .context("failed to build generation client")?;
    let links = LinkValidator::new(&config.links).context("failed to build HTTP client")?;
    let orchestrator = Orchestrator::new(service, links, config);
    let request = build_request(args, config);

    let (tx, rx) = unbounded_channel();
    let watcher = tokio::spawn(watch(rx, Progress::percent("Starting")));
    let result = orchestrator.run(state.as_mut(), &request, Some(tx)).await;
    let log = watcher.await.context("progress watcher failed")?;

    if let Some(path) = &args.log_file {
        serde_jsonlines::write_json_lines(path, &log)
            .with_context(|| format!("failed to write run log to {}", path.display()))?;
    }

    let report = result?;
    if let (Some(paths), Some(state)) = (&paths, &state) {
        project_file::save(paths, state)?;
    }
    output(&report, flags.format)?;
    if report.status == RunStatus::Partial && !flags.quiet {
        eprintln!("some content could not be generated; see the log for details");
    }
    Ok(())
}

fn build_request(args: &GenerateArgs, config: &QuillConfig) -> RunRequest {
    let default_audience = Some(config.general.default_audience.trim())
        .filter(|a| !a.is_empty())
        .map(ToString::to_string);
    RunRequest {
        topic: args.topic.clone(),
        kinds: args.requested_kinds(),
        header: HeaderOptions {
            subject: args.subject,
            intro: args.intro,
        },
        description: args.description.clone(),
        audience: args.audience.clone().or(default_audience),
    }
}

/// Drive the progress bar from run events and collect the log.
async fn watch(mut rx: UnboundedReceiver<RunEvent>, progress: Progress) -> Vec<LogEntry> {
    let mut log = Vec::new();
    let mut failed_precondition = false;
    while let Some(event) = rx.recv().await {
        match event {
            RunEvent::Progress { percent, step } => progress.set(percent, &step),
            RunEvent::Log(entry) => {
                if matches!(entry.severity, Severity::Warning | Severity::Error) {
                    progress.println(&format!("{}: {}", entry.severity, entry.message));
                }
                failed_precondition = entry.severity == Severity::Error && log.is_empty();
                log.push(entry);
            }
            RunEvent::Finished(report) => progress.finish_ok(&format!("{}", report.status)),
            RunEvent::StateChanged { .. } => {}
        }
    }
    if failed_precondition {
        progress.finish_err("not started");
    }
    log
}
