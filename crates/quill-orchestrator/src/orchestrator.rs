//! The generation orchestrator.
//!
//! Drives one run for one project: precondition checks, target computation,
//! the optional header task, then each targeted kind strictly in order.
//! Task failures are isolated and recorded; only precondition failures
//! return `Err`.
//!
//! There is no cancellation. Dropping the future returned by
//! [`Orchestrator::run`] stops the run at its next await point; store
//! mutations already applied are kept.

use std::any::Any;
use std::collections::BTreeSet;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use quill_config::{GenerationConfig, QuillConfig};
use quill_core::enums::{ContentKind, RunState, RunStatus, Severity};
use quill_generate::{
    Accepted, GenerationContext, GenerationError, GenerationService, GenerationTarget,
    GenerationTask, RejectedLink, classify, content_summary, fetch_header,
};
use quill_links::LinkCheck;
use quill_schema::SchemaRegistry;
use tokio::sync::mpsc::UnboundedSender;

use crate::error::RunError;
use crate::guard::ActiveRuns;
use crate::progress::ProgressTracker;
use crate::run::{GenerationRun, RunEvent, RunReport, RunRequest, TaskOutcome, TaskReport};
use crate::store::ProjectStore;
use crate::targeting::{TargetPlan, compute_target_kinds};

pub struct Orchestrator<G, L> {
    service: G,
    links: L,
    schemas: SchemaRegistry,
    generation: GenerationConfig,
    max_concurrency: usize,
    linger: Duration,
    active: ActiveRuns,
}

impl<G: GenerationService, L: LinkCheck> Orchestrator<G, L> {
    /// Build an orchestrator. `config` supplies credential awareness for
    /// error classification, link fan-out, and the display-linger window.
    pub fn new(service: G, links: L, config: &QuillConfig) -> Self {
        Self {
            service,
            links,
            schemas: SchemaRegistry::new(),
            generation: config.generation.clone(),
            max_concurrency: config.links.max_concurrency,
            linger: config.run.linger(),
            active: ActiveRuns::default(),
        }
    }

    #[must_use]
    pub const fn with_linger(mut self, linger: Duration) -> Self {
        self.linger = linger;
        self
    }

    /// Projects with a run in flight on this orchestrator.
    pub const fn active_runs(&self) -> &ActiveRuns {
        &self.active
    }

    /// Run generation for `request` against `store`.
    ///
    /// `store` is `None` when no project is selected. Progress, log entries,
    /// and state changes are sent to `events` as they happen.
    ///
    /// # Errors
    ///
    /// Returns a [`RunError`] if a precondition fails or the project already
    /// has a run in flight. Nothing is mutated in that case. Task failures
    /// are reported in the returned [`RunReport`] instead.
    pub async fn run<S: ProjectStore>(
        &self,
        store: Option<&mut S>,
        request: &RunRequest,
        events: Option<UnboundedSender<RunEvent>>,
    ) -> Result<RunReport, RunError> {
        let mut run = GenerationRun::new(events);
        let topic = request.topic.trim();
        let header = request.header.enabled();

        let store = match check_preconditions(topic, store, request) {
            Ok(store) => store,
            Err(error) => {
                run.record(Severity::Error, error.to_string());
                return Err(error);
            }
        };
        let _guard = match self.active.claim(store.project_id()) {
            Ok(guard) => guard,
            Err(error) => {
                run.record(Severity::Error, error.to_string());
                return Err(error);
            }
        };

        run.transition(RunState::Initializing);
        run.record(Severity::Info, format!("Starting generation for \"{topic}\""));

        let plan = compute_target_kinds(
            &request.kinds,
            topic,
            store.topic(),
            &store.generated_kinds(),
        );
        if plan.topic_changed {
            store.reset_for_topic(topic);
            run.record(
                Severity::Info,
                "New topic, cleared previously generated content",
            );
        }
        run.targeted.clone_from(&plan.kinds);

        if plan.is_empty() && !header {
            run.record(
                Severity::Info,
                "All requested content is already generated for this topic",
            );
            run.advance(100, "Nothing to generate");
            run.transition(RunState::Idle);
            let report = build_report(&*store, &run, &plan, topic, Vec::new(), RunStatus::NoOp);
            run.emit(RunEvent::Finished(report.clone()));
            return Ok(report);
        }

        let mut progress = ProgressTracker::new(plan.kinds.len(), header);
        let mut outcomes = Vec::with_capacity(plan.kinds.len() + 1);
        let context = GenerationContext {
            description: request.description.clone(),
            audience: request.audience.clone(),
            ..GenerationContext::default()
        };

        if header {
            let outcome = self
                .run_header(store, &mut run, &mut progress, topic, &plan.kinds, request)
                .await;
            outcomes.push(TaskReport {
                target: GenerationTarget::Header,
                outcome,
            });
        }

        let mut generated: BTreeSet<ContentKind> = if plan.topic_changed {
            BTreeSet::new()
        } else {
            store.generated_kinds()
        };
        for &kind in &plan.kinds {
            let outcome = self
                .run_kind(kind, store, &mut run, &mut progress, topic, &context)
                .await;
            if !outcome.is_failure() {
                generated.insert(kind);
            }
            outcomes.push(TaskReport {
                target: GenerationTarget::Kind(kind),
                outcome,
            });
        }

        run.transition(RunState::Finalizing);
        store.set_generated_kinds(generated);
        let status = if run.has_errors {
            run.record(Severity::Warning, "Generation completed with errors");
            RunStatus::Partial
        } else {
            run.record(Severity::Success, "Generation complete");
            RunStatus::Success
        };
        run.advance(progress.percent(), "Done");

        let report = build_report(&*store, &run, &plan, topic, outcomes, status);
        run.emit(RunEvent::Finished(report.clone()));
        if !self.linger.is_zero() {
            tokio::time::sleep(self.linger).await;
        }
        run.transition(RunState::Idle);
        Ok(report)
    }

    async fn run_header<S: ProjectStore>(
        &self,
        store: &mut S,
        run: &mut GenerationRun,
        progress: &mut ProgressTracker,
        topic: &str,
        kinds: &[ContentKind],
        request: &RunRequest,
    ) -> TaskOutcome {
        const NAME: &str = "newsletter header";
        let options = request.header;

        run.transition(RunState::RunningHeader);
        progress.begin_task();
        let context = GenerationContext {
            description: request.description.clone(),
            audience: request.audience.clone(),
            content_summary: Some(content_summary(kinds)),
            generate_subject: options.subject,
            generate_intro: options.intro,
        };

        run.advance(progress.step(), format!("Fetching {NAME}"));
        let header =
            match guarded(fetch_header(&self.service, topic, &context, &self.schemas)).await {
                Ok(header) => header,
                Err(error) => return self.fail(run, progress, NAME, &error),
            };

        run.advance(progress.step(), format!("Validating {NAME}"));
        let merged = usize::from(options.subject && header.subject.is_some())
            + usize::from(options.intro && header.intro.is_some());
        store.merge_personalization(&header, options.subject, options.intro);

        run.advance(progress.finish_task(), format!("Processed {NAME}"));
        run.record(Severity::Success, format!("Generated {NAME}"));
        TaskOutcome::Succeeded {
            accepted: merged,
            rejected_links: 0,
            dropped: 0,
        }
    }

    async fn run_kind<S: ProjectStore>(
        &self,
        kind: ContentKind,
        store: &mut S,
        run: &mut GenerationRun,
        progress: &mut ProgressTracker,
        topic: &str,
        context: &GenerationContext,
    ) -> TaskOutcome {
        let task = GenerationTask::new(kind);
        let name = task.display_name();

        run.transition(RunState::RunningTask(kind));
        progress.begin_task();
        store.set_items(kind, Vec::new());

        run.advance(progress.step(), format!("Fetching {name}"));
        let raw = match guarded(task.fetch(&self.service, topic, context, &self.schemas)).await {
            Ok(raw) => raw,
            Err(error) => return self.fail(run, progress, name, &error),
        };

        run.advance(progress.step(), format!("Validating {name}"));
        let accepted: Accepted = match guarded(task.accept(
            raw,
            &self.schemas,
            &self.links,
            self.max_concurrency,
        ))
        .await
        {
            Ok(accepted) => accepted,
            Err(error) => return self.fail(run, progress, name, &error),
        };

        for rejected in &accepted.rejected {
            run.record(Severity::Warning, describe_rejection(rejected));
        }
        let count = accepted.items.len();
        let rejected_links = accepted.rejected.len();
        let dropped = accepted.dropped();
        store.set_items(kind, accepted.items);

        run.advance(progress.finish_task(), format!("Processed {name}"));
        run.record(Severity::Success, format!("Generated {count} {name}"));
        TaskOutcome::Succeeded {
            accepted: count,
            rejected_links,
            dropped,
        }
    }

    fn fail(
        &self,
        run: &mut GenerationRun,
        progress: &mut ProgressTracker,
        name: &str,
        error: &GenerationError,
    ) -> TaskOutcome {
        let category = classify(error, &self.generation);
        let message = error.to_string();
        run.advance(progress.finish_task(), format!("Failed {name}"));
        run.record(
            Severity::Error,
            format!("Failed to generate {name}: {message} ({})", category.hint()),
        );
        TaskOutcome::Failed { message, category }
    }
}

fn check_preconditions<'a, S: ProjectStore>(
    topic: &str,
    store: Option<&'a mut S>,
    request: &RunRequest,
) -> Result<&'a mut S, RunError> {
    if topic.is_empty() {
        return Err(RunError::EmptyTopic);
    }
    let store = store.ok_or(RunError::NoProject)?;
    if request.kinds.is_empty() && !request.header.enabled() {
        return Err(RunError::NothingTargeted);
    }
    Ok(store)
}

fn build_report<S: ProjectStore>(
    store: &S,
    run: &GenerationRun,
    plan: &TargetPlan,
    topic: &str,
    outcomes: Vec<TaskReport>,
    status: RunStatus,
) -> RunReport {
    RunReport {
        project_id: store.project_id().to_string(),
        topic: topic.to_string(),
        topic_changed: plan.topic_changed,
        targeted: plan.kinds.clone(),
        outcomes,
        status,
        progress: run.progress,
        log: run.log.clone(),
    }
}

fn describe_rejection(rejected: &RejectedLink) -> String {
    let action = if rejected.dropped {
        "Dropped"
    } else {
        "Removed link from"
    };
    match &rejected.url {
        Some(url) => format!(
            "{action} \"{}\": {url} ({})",
            rejected.headline, rejected.reason
        ),
        None => format!("{action} \"{}\": {}", rejected.headline, rejected.reason),
    }
}

/// Await `future`, turning a panic into a task failure.
async fn guarded<T, F>(future: F) -> Result<T, GenerationError>
where
    F: Future<Output = Result<T, GenerationError>>,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(GenerationError::Failed(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unexpected non-string failure".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_payloads_are_stringified() {
        let s: Box<dyn Any + Send> = Box::new("bare string");
        assert_eq!(panic_message(s.as_ref()), "bare string");
        let s: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(s.as_ref()), "owned");
        let s: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(s.as_ref()), "unexpected non-string failure");
    }

    #[test]
    fn rejection_messages() {
        let dropped = RejectedLink {
            headline: "Letter".into(),
            url: Some("https://x.example".into()),
            reason: "HTTP 404: Not Found".into(),
            dropped: true,
        };
        assert_eq!(
            describe_rejection(&dropped),
            "Dropped \"Letter\": https://x.example (HTTP 404: Not Found)"
        );
        let missing = RejectedLink {
            headline: "Pod".into(),
            url: None,
            reason: "missing link".into(),
            dropped: true,
        };
        assert_eq!(describe_rejection(&missing), "Dropped \"Pod\": missing link");
    }
}
