//! Error types for job domain validation and parsing.

use super::{JobId, JobStatus, TaskKey};
use thiserror::Error;

/// Errors returned while constructing or mutating job domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JobDomainError {
    /// The submitted transcript is empty after trimming.
    #[error("transcript must not be empty")]
    EmptyTranscript,

    /// The submitted transcript exceeds the configured size limit.
    #[error("transcript is {actual_bytes} bytes, limit is {limit_bytes}")]
    TranscriptTooLarge {
        /// Size of the submitted transcript.
        actual_bytes: usize,
        /// Configured maximum size.
        limit_bytes: usize,
    },

    /// A task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// An extracted task lacks a required field.
    #[error("task at index {index} is missing required field `{field}`")]
    MissingTaskField {
        /// Position of the task in the extracted list.
        index: usize,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A task description is empty after trimming.
    #[error("task {0} has an empty description")]
    EmptyDescription(TaskKey),

    /// Two tasks in one list share an identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(TaskKey),

    /// The job lifecycle does not permit the requested transition.
    #[error("job {job_id} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        /// Job being transitioned.
        job_id: JobId,
        /// Current status.
        from: JobStatus,
        /// Requested status.
        to: JobStatus,
    },
}

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing job statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown job status: {0}")]
pub struct ParseJobStatusError(pub String);
