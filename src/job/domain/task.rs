//! Task entity and its priority and status value types.

use super::{
    ExtractedTask, JobDomainError, ParseTaskPriorityError, ParseTaskStatusError, TaskKey,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative urgency of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal priority.
    #[default]
    Medium,
    /// Should be picked up soon.
    High,
    /// Needs immediate attention.
    Urgent,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Parses an optional raw priority, falling back to [`Self::Medium`]
    /// when the value is absent or unrecognised.
    #[must_use]
    pub fn from_raw_or_default(raw: Option<&str>) -> Self {
        raw.and_then(|value| Self::try_from(value).ok())
            .unwrap_or_default()
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

/// Runtime status of a task, derived from the dependency graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// All prerequisites are completed; work can start.
    #[default]
    Ready,
    /// At least one prerequisite is not yet completed.
    Blocked,
    /// The task sits on a dependency cycle and cannot start.
    Error,
    /// The task has been completed.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Blocked => "blocked",
            Self::Error => "error",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    #[expect(
        clippy::use_self,
        reason = "`Self::Error` would name the associated error type"
    )]
    fn try_from(value: &str) -> Result<Self, <Self as TryFrom<&str>>::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "ready" => Ok(TaskStatus::Ready),
            "blocked" => Ok(TaskStatus::Blocked),
            "error" => Ok(TaskStatus::Error),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of work extracted from a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskKey,
    description: String,
    priority: TaskPriority,
    dependencies: Vec<TaskKey>,
    status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task key.
    pub id: TaskKey,
    /// Persisted description.
    pub description: String,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted dependency keys, in original order.
    pub dependencies: Vec<TaskKey>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted diagnostic for tasks in error.
    pub error_message: Option<String>,
}

impl Task {
    /// Creates a ready task with medium priority and no dependencies.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::EmptyDescription`] when the trimmed
    /// description is empty.
    pub fn new(id: TaskKey, description: impl Into<String>) -> Result<Self, JobDomainError> {
        let description = description.into().trim().to_owned();
        if description.is_empty() {
            return Err(JobDomainError::EmptyDescription(id));
        }
        Ok(Self {
            id,
            description,
            priority: TaskPriority::default(),
            dependencies: Vec::new(),
            status: TaskStatus::default(),
            error_message: None,
        })
    }

    /// Normalises a task reported by the extraction collaborator.
    ///
    /// A missing or unrecognised priority becomes medium. A missing or
    /// malformed dependency list becomes empty, and blank or non-string
    /// entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::MissingTaskField`] when the id or the
    /// description is absent or blank.
    pub fn from_extracted(index: usize, extracted: &ExtractedTask) -> Result<Self, JobDomainError> {
        let id = extracted
            .id
            .as_deref()
            .and_then(|raw| TaskKey::new(raw).ok())
            .ok_or(JobDomainError::MissingTaskField { index, field: "id" })?;
        let description = extracted
            .description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .ok_or(JobDomainError::MissingTaskField {
                index,
                field: "description",
            })?;
        let priority = TaskPriority::from_raw_or_default(extracted.priority_label());
        let dependencies = extracted
            .dependency_labels()
            .filter_map(|raw| TaskKey::new(raw).ok())
            .collect::<Vec<_>>();

        Ok(Self::new(id, description)?
            .with_priority(priority)
            .with_dependencies(dependencies))
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            description: data.description,
            priority: data.priority,
            dependencies: data.dependencies,
            status: data.status,
            error_message: data.error_message,
        }
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the dependency keys this task waits on.
    #[must_use]
    pub fn with_dependencies(mut self, dependencies: impl IntoIterator<Item = TaskKey>) -> Self {
        self.dependencies = dependencies.into_iter().collect();
        self
    }

    /// Returns the task key.
    #[must_use]
    pub const fn id(&self) -> &TaskKey {
        &self.id
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the dependency keys in their original order.
    #[must_use]
    pub fn dependencies(&self) -> &[TaskKey] {
        &self.dependencies
    }

    /// Returns `true` when `key` is among this task's dependencies.
    #[must_use]
    pub fn depends_on(&self, key: &TaskKey) -> bool {
        self.dependencies.contains(key)
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the diagnostic attached to a task in error.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub(crate) fn replace_dependencies(&mut self, dependencies: Vec<TaskKey>) {
        self.dependencies = dependencies;
    }

    pub(crate) fn mark_ready(&mut self) {
        self.set_status(TaskStatus::Ready);
    }

    pub(crate) fn mark_blocked(&mut self) {
        self.set_status(TaskStatus::Blocked);
    }

    pub(crate) fn mark_completed(&mut self) {
        self.set_status(TaskStatus::Completed);
    }

    pub(crate) fn mark_error(&mut self, message: impl Into<String>) {
        self.status = TaskStatus::Error;
        self.error_message = Some(message.into());
    }

    fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.error_message = None;
    }
}
