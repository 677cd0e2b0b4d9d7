//! One active run per project.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::RunError;

/// Shared set of project ids with a run in flight.
#[derive(Debug, Clone, Default)]
pub struct ActiveRuns {
    projects: Arc<Mutex<HashSet<String>>>,
}

impl ActiveRuns {
    /// Claim `project` until the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::RunInProgress`] if `project` is already claimed.
    pub fn claim(&self, project: &str) -> Result<RunGuard, RunError> {
        let mut active = self
            .projects
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !active.insert(project.to_string()) {
            return Err(RunError::RunInProgress {
                project: project.to_string(),
            });
        }
        Ok(RunGuard {
            projects: Arc::clone(&self.projects),
            project: project.to_string(),
        })
    }

    #[must_use]
    pub fn is_active(&self, project: &str) -> bool {
        self.projects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(project)
    }
}

/// Releases the project's claim on drop.
#[derive(Debug)]
pub struct RunGuard {
    projects: Arc<Mutex<HashSet<String>>>,
    project: String,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.projects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.project);
    }
}
