//! Shared builders for graph tests.

use crate::job::domain::{PersistedTaskData, Task, TaskKey, TaskPriority, TaskStatus};
use std::collections::HashMap;

/// Builds a task key, panicking on blank input.
pub fn key(raw: &str) -> TaskKey {
    TaskKey::new(raw).expect("test keys are non-empty")
}

/// Builds a ready task with the given dependencies.
pub fn task(id: &str, dependencies: &[&str]) -> Task {
    task_with_status(id, dependencies, TaskStatus::Ready)
}

/// Builds a task in a specific status.
pub fn task_with_status(id: &str, dependencies: &[&str], status: TaskStatus) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: key(id),
        description: format!("Work item {id}"),
        priority: TaskPriority::Medium,
        dependencies: dependencies.iter().map(|raw| key(raw)).collect(),
        status,
        error_message: None,
    })
}

/// Maps task keys to statuses for compact assertions.
pub fn statuses(tasks: &[Task]) -> HashMap<String, TaskStatus> {
    tasks
        .iter()
        .map(|task| (task.id().as_str().to_owned(), task.status()))
        .collect()
}

/// Looks up the status of one task.
pub fn status_of(tasks: &[Task], id: &str) -> TaskStatus {
    tasks
        .iter()
        .find(|task| task.id().as_str() == id)
        .map(Task::status)
        .expect("task should exist")
}
