//! # quill-orchestrator
//!
//! Runs generation for a project: decides which kinds to regenerate, runs
//! the header task and each kind in order, tracks progress, keeps the run
//! log, and writes accepted items back through [`ProjectStore`].

pub mod error;
pub mod guard;
pub mod log;
pub mod orchestrator;
pub mod progress;
pub mod run;
pub mod store;
pub mod targeting;

pub use error::RunError;
pub use guard::{ActiveRuns, RunGuard};
pub use log::LogEntry;
pub use orchestrator::Orchestrator;
pub use progress::ProgressTracker;
pub use run::{
    GenerationRun, HeaderOptions, RunEvent, RunReport, RunRequest, TaskOutcome, TaskReport,
};
pub use store::ProjectStore;
pub use targeting::{TargetPlan, compute_target_kinds};
