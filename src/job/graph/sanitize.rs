//! Removal of dependency references that point outside the task list.

use crate::job::domain::{JobDomainError, Task, TaskKey};
use std::collections::HashSet;
use std::fmt;

/// A dependency reference removed because no task carries that key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingDependency {
    /// Task that listed the dependency.
    pub task_id: TaskKey,
    /// Key that matched no task.
    pub dependency_id: TaskKey,
}

impl fmt::Display for DanglingDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "removed invalid dependency {} from task {}",
            self.dependency_id, self.task_id
        )
    }
}

/// Output of [`sanitize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    /// Tasks whose dependencies all resolve within the list.
    pub tasks: Vec<Task>,
    /// One entry per removed reference, in task then dependency order.
    pub diagnostics: Vec<DanglingDependency>,
}

/// Filters every task's dependencies down to keys present in `tasks`.
///
/// Surviving references keep their relative order. Self-references resolve
/// and are kept; cycle detection reports them.
#[must_use]
pub fn sanitize(tasks: &[Task]) -> Sanitized {
    let valid_ids: HashSet<&TaskKey> = tasks.iter().map(Task::id).collect();
    let mut diagnostics = Vec::new();

    let sanitized = tasks
        .iter()
        .map(|task| {
            let (kept, removed): (Vec<&TaskKey>, Vec<&TaskKey>) = task
                .dependencies()
                .iter()
                .partition(|dependency| valid_ids.contains(dependency));

            diagnostics.extend(removed.into_iter().map(|dependency| DanglingDependency {
                task_id: task.id().clone(),
                dependency_id: dependency.clone(),
            }));

            let mut cleaned = task.clone();
            cleaned.replace_dependencies(kept.into_iter().cloned().collect());
            cleaned
        })
        .collect();

    Sanitized {
        tasks: sanitized,
        diagnostics,
    }
}

/// Rejects task lists in which two tasks share a key.
///
/// # Errors
///
/// Returns [`JobDomainError::DuplicateTaskId`] naming the first repeated key.
pub fn ensure_unique_ids(tasks: &[Task]) -> Result<(), JobDomainError> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen.insert(task.id()) {
            return Err(JobDomainError::DuplicateTaskId(task.id().clone()));
        }
    }
    Ok(())
}
