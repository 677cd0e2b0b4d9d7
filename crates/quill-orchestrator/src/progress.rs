//! Fractional progress across a run's tasks.
//!
//! Every task (header or kind) owns three units: fetching, validating, and
//! processed. Completing or failing a task always credits it up to its
//! three-unit boundary, so a run reaches exactly 100 even if every task
//! fails.

/// Units per task.
pub const STEPS_PER_TASK: u32 = 3;

#[derive(Debug, Clone)]
pub struct ProgressTracker {
    total: u32,
    completed: u32,
    task_start: u32,
}

impl ProgressTracker {
    #[must_use]
    pub fn new(kind_tasks: usize, header: bool) -> Self {
        let tasks = u32::try_from(kind_tasks).unwrap_or(u32::MAX / STEPS_PER_TASK) + u32::from(header);
        Self {
            total: tasks.saturating_mul(STEPS_PER_TASK),
            completed: 0,
            task_start: 0,
        }
    }

    /// Mark the start of the next task.
    pub fn begin_task(&mut self) {
        self.task_start = self.completed;
    }

    /// Credit one sub-step, never past the current task's boundary.
    pub fn step(&mut self) -> u8 {
        self.completed = (self.completed + 1).min(self.task_boundary());
        self.percent()
    }

    /// Round the current task up to its boundary (on success or failure).
    pub fn finish_task(&mut self) -> u8 {
        self.completed = self.task_boundary();
        self.percent()
    }

    /// `min(100, 100 × completed / total)`; an empty run is complete.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        let pct = (u64::from(self.completed) * 100 / u64::from(self.total)).min(100);
        u8::try_from(pct).unwrap_or(100)
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    const fn task_boundary(&self) -> u32 {
        let boundary = self.task_start + STEPS_PER_TASK;
        if boundary > self.total {
            self.total
        } else {
            boundary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn total_counts_header() {
        assert_eq!(ProgressTracker::new(2, false).total(), 6);
        assert_eq!(ProgressTracker::new(2, true).total(), 9);
        assert_eq!(ProgressTracker::new(0, true).total(), 3);
    }

    #[test]
    fn sub_steps_then_success() {
        let mut p = ProgressTracker::new(2, false);
        p.begin_task();
        assert_eq!(p.step(), 16);
        assert_eq!(p.step(), 33);
        assert_eq!(p.finish_task(), 50);
        p.begin_task();
        assert_eq!(p.step(), 66);
        assert_eq!(p.finish_task(), 100);
    }

    #[test]
    fn failure_credits_remaining_budget() {
        let mut p = ProgressTracker::new(3, false);
        for _ in 0..3 {
            p.begin_task();
            p.step();
            p.finish_task();
        }
        assert_eq!(p.percent(), 100);
    }

    #[test]
    fn steps_never_cross_task_boundary() {
        let mut p = ProgressTracker::new(2, false);
        p.begin_task();
        for _ in 0..10 {
            p.step();
        }
        assert_eq!(p.percent(), 50);
    }

    #[test]
    fn empty_run_is_complete() {
        assert_eq!(ProgressTracker::new(0, false).percent(), 100);
    }
}
