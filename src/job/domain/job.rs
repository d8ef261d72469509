//! Job aggregate root and its lifecycle status.

use super::{CycleReport, JobDomainError, JobId, ParseJobStatusError, Task, TranscriptHash};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing lifecycle of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Job has been recorded but processing has not started.
    Pending,
    /// Tasks are being extracted and validated.
    Processing,
    /// Tasks and cycle report are available.
    Completed,
    /// Processing failed; see the job's error message.
    Failed,
}

impl JobStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Returns `true` when the lifecycle permits moving to `target`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Processing | Self::Failed)
                | (Self::Processing, Self::Completed | Self::Failed)
        )
    }
}

impl TryFrom<&str> for JobStatus {
    type Error = ParseJobStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            _ => Err(ParseJobStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    id: JobId,
    transcript: String,
    transcript_hash: TranscriptHash,
    tasks: Vec<Task>,
    cycle_report: CycleReport,
    status: JobStatus,
    error_message: Option<String>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    version: u64,
}

impl Job {
    /// Creates a pending job for a transcript.
    #[must_use]
    pub fn new(transcript: impl Into<String>, clock: &impl Clock) -> Self {
        let transcript = transcript.into();
        let transcript_hash = TranscriptHash::of(&transcript);
        Self {
            id: JobId::new(),
            transcript,
            transcript_hash,
            tasks: Vec::new(),
            cycle_report: CycleReport::default(),
            status: JobStatus::Pending,
            error_message: None,
            created_at: clock.utc(),
            completed_at: None,
            version: 0,
        }
    }

    /// Returns the job identifier.
    #[must_use]
    pub const fn id(&self) -> JobId {
        self.id
    }

    /// Returns the original transcript.
    #[must_use]
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Returns the transcript hash used for deduplication.
    #[must_use]
    pub const fn transcript_hash(&self) -> &TranscriptHash {
        &self.transcript_hash
    }

    /// Returns the resolved task list.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the cycle report.
    #[must_use]
    pub const fn cycle_report(&self) -> &CycleReport {
        &self.cycle_report
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> JobStatus {
        self.status
    }

    /// Returns the failure message of a failed job.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the time processing finished, successfully or not.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the optimistic-concurrency version.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Moves a pending job into processing.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::InvalidStatusTransition`] unless the job is
    /// pending.
    pub fn begin_processing(&mut self) -> Result<(), JobDomainError> {
        self.transition_to(JobStatus::Processing)
    }

    /// Records the resolved tasks and cycle report and completes the job.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::InvalidStatusTransition`] unless the job is
    /// processing.
    pub fn complete_with(
        &mut self,
        tasks: Vec<Task>,
        cycle_report: CycleReport,
        clock: &impl Clock,
    ) -> Result<(), JobDomainError> {
        self.transition_to(JobStatus::Completed)?;
        self.tasks = tasks;
        self.cycle_report = cycle_report;
        self.completed_at = Some(clock.utc());
        Ok(())
    }

    /// Marks the job failed with a diagnostic message.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::InvalidStatusTransition`] when the job has
    /// already finished.
    pub fn fail(
        &mut self,
        message: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), JobDomainError> {
        self.transition_to(JobStatus::Failed)?;
        self.error_message = Some(message.into());
        self.completed_at = Some(clock.utc());
        Ok(())
    }

    /// Replaces the task list after a completion has been propagated.
    pub fn update_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Advances the version after a successful write.
    ///
    /// Intended for repository adapters.
    pub const fn increment_version(&mut self) {
        self.version += 1;
    }

    fn transition_to(&mut self, target: JobStatus) -> Result<(), JobDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(JobDomainError::InvalidStatusTransition {
                job_id: self.id,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }
}
