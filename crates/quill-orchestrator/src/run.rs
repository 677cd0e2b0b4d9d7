//! Run inputs, transient run state, events, and the final report.

use quill_core::enums::{ContentKind, RunState, RunStatus, Severity};
use quill_generate::{ErrorCategory, GenerationTarget};
use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

use crate::log::LogEntry;

/// Which header fields to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeaderOptions {
    pub subject: bool,
    pub intro: bool,
}

impl HeaderOptions {
    #[must_use]
    pub const fn enabled(self) -> bool {
        self.subject || self.intro
    }
}

/// What the user asked for.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub topic: String,
    /// Requested kinds in the order they should run.
    pub kinds: Vec<ContentKind>,
    pub header: HeaderOptions,
    pub description: Option<String>,
    pub audience: Option<String>,
}

/// How one task ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TaskOutcome {
    Succeeded {
        accepted: usize,
        /// Links stripped or items dropped by screening.
        rejected_links: usize,
        /// Items dropped because a required link was missing or failed.
        dropped: usize,
    },
    Failed {
        message: String,
        category: ErrorCategory,
    },
}

impl TaskOutcome {
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskReport {
    pub target: GenerationTarget,
    #[serde(flatten)]
    pub outcome: TaskOutcome,
}

/// Terminal summary of a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub project_id: String,
    pub topic: String,
    pub topic_changed: bool,
    pub targeted: Vec<ContentKind>,
    pub outcomes: Vec<TaskReport>,
    pub status: RunStatus,
    pub progress: u8,
    pub log: Vec<LogEntry>,
}

impl RunReport {
    #[must_use]
    pub fn outcome(&self, target: GenerationTarget) -> Option<&TaskOutcome> {
        self.outcomes
            .iter()
            .find(|r| r.target == target)
            .map(|r| &r.outcome)
    }
}

/// Updates emitted while a run executes.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RunEvent {
    StateChanged { state: RunState },
    Progress { percent: u8, step: String },
    Log(LogEntry),
    Finished(RunReport),
}

/// Transient state of one run.
///
/// Owns the log and current-step message and forwards every change to the
/// observer, if any. Sends to a closed observer are dropped.
#[derive(Debug)]
pub struct GenerationRun {
    pub state: RunState,
    pub targeted: Vec<ContentKind>,
    pub progress: u8,
    pub step: String,
    pub has_errors: bool,
    pub log: Vec<LogEntry>,
    events: Option<UnboundedSender<RunEvent>>,
}

impl GenerationRun {
    #[must_use]
    pub const fn new(events: Option<UnboundedSender<RunEvent>>) -> Self {
        Self {
            state: RunState::Idle,
            targeted: Vec::new(),
            progress: 0,
            step: String::new(),
            has_errors: false,
            log: Vec::new(),
            events,
        }
    }

    pub fn emit(&self, event: RunEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }

    pub fn transition(&mut self, next: RunState) {
        if !self.state.can_transition_to(next) {
            tracing::warn!(from = %self.state, to = %next, "unexpected run state transition");
        }
        self.state = next;
        self.emit(RunEvent::StateChanged { state: next });
    }

    pub fn record(&mut self, severity: Severity, message: impl Into<String>) {
        let entry = LogEntry::new(severity, message);
        match severity {
            Severity::Error | Severity::Warning => tracing::warn!("{}", entry.message),
            Severity::Info | Severity::Success => tracing::info!("{}", entry.message),
        }
        if severity == Severity::Error {
            self.has_errors = true;
        }
        self.emit(RunEvent::Log(entry.clone()));
        self.log.push(entry);
    }

    /// Set progress and step message. Progress never moves backwards.
    pub fn advance(&mut self, percent: u8, step: impl Into<String>) {
        self.progress = self.progress.max(percent);
        self.step = step.into();
        self.emit(RunEvent::Progress {
            percent: self.progress,
            step: self.step.clone(),
        });
    }
}
