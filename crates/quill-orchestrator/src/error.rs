//! Run precondition errors.

use thiserror::Error;

/// Reasons a run refuses to start. Nothing is mutated when these occur.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RunError {
    #[error("enter a topic before generating")]
    EmptyTopic,

    #[error("select a project before generating")]
    NoProject,

    #[error("select at least one content type or enable header generation")]
    NothingTargeted,

    #[error("a generation run is already in progress for project '{project}'")]
    RunInProgress { project: String },
}
