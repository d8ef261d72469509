//! Status resolution: initial classification and completion propagation.

use crate::job::domain::{CycleReport, Task, TaskKey, TaskStatus};
use std::collections::HashMap;
use thiserror::Error;

/// Diagnostic attached to tasks lying on a dependency cycle.
pub const CYCLE_ERROR_MESSAGE: &str = "Part of a circular dependency";

/// Errors returned while propagating a completion.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PropagationError {
    /// No task in the list carries the completed key.
    #[error("task not found: {0}")]
    TaskNotFound(TaskKey),
}

impl PropagationError {
    /// Returns `true` when the error reports a missing task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskNotFound(_))
    }
}

/// Snapshot of task statuses keyed by task key.
struct StatusIndex<'a>(HashMap<&'a TaskKey, TaskStatus>);

impl<'a> StatusIndex<'a> {
    fn new(tasks: &'a [Task]) -> Self {
        let mut statuses = HashMap::with_capacity(tasks.len());
        for task in tasks {
            statuses.entry(task.id()).or_insert(task.status());
        }
        Self(statuses)
    }

    /// Dependencies missing from the list count as satisfied.
    fn has_unmet_dependency(&self, task: &Task) -> bool {
        task.dependencies().iter().any(|dependency| {
            self.0
                .get(dependency)
                .is_some_and(|status| *status != TaskStatus::Completed)
        })
    }
}

/// Assigns every task its initial status.
///
/// Tasks on a reported cycle are marked [`TaskStatus::Error`] with
/// [`CYCLE_ERROR_MESSAGE`]. Other tasks are blocked while any dependency is
/// not completed in `tasks`, and ready otherwise. A task already completed
/// and not on a cycle keeps its status.
#[must_use]
pub fn classify(tasks: &[Task], report: &CycleReport) -> Vec<Task> {
    let cyclic = report.cyclic_ids();
    let statuses = StatusIndex::new(tasks);

    tasks
        .iter()
        .map(|task| {
            let mut resolved = task.clone();
            if cyclic.contains(task.id()) {
                resolved.mark_error(CYCLE_ERROR_MESSAGE);
            } else if task.status() != TaskStatus::Completed {
                if statuses.has_unmet_dependency(task) {
                    resolved.mark_blocked();
                } else {
                    resolved.mark_ready();
                }
            }
            resolved
        })
        .collect()
}

/// Marks `task_id` completed and promotes blocked dependents whose
/// dependencies are now all completed.
///
/// The completed task is overridden whatever its prior status. Only blocked
/// tasks that depend on `task_id` are re-evaluated; tasks in error or
/// already completed are never touched. The input slice is left as it was.
///
/// A single promotion pass reaches the fixed point. Promotion yields ready,
/// never completed, so a task depending on a promoted task still has an
/// unmet dependency and stays blocked.
///
/// # Errors
///
/// Returns [`PropagationError::TaskNotFound`] when no task carries
/// `task_id`.
pub fn complete(tasks: &[Task], task_id: &TaskKey) -> Result<Vec<Task>, PropagationError> {
    let mut updated = tasks.to_vec();
    updated
        .iter_mut()
        .find(|task| task.id() == task_id)
        .ok_or_else(|| PropagationError::TaskNotFound(task_id.clone()))?
        .mark_completed();

    for position in promotable(&updated, task_id) {
        if let Some(task) = updated.get_mut(position) {
            task.mark_ready();
        }
    }

    Ok(updated)
}

fn promotable(tasks: &[Task], completed: &TaskKey) -> Vec<usize> {
    let statuses = StatusIndex::new(tasks);
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| {
            task.status() == TaskStatus::Blocked
                && task.depends_on(completed)
                && !statuses.has_unmet_dependency(task)
        })
        .map(|(position, _)| position)
        .collect()
}
