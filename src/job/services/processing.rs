//! Service layer for transcript submission, processing, and task completion.

use super::ProcessingConfig;
use crate::job::{
    domain::{CycleReport, Job, JobDomainError, JobId, JobStatus, Task, TaskKey, TranscriptHash},
    graph::{self, PropagationError, Sanitized},
    ports::{ExtractionError, JobRepository, JobRepositoryError, TaskExtractor},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Result of submitting a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    job: Job,
    cached: bool,
}

impl SubmissionOutcome {
    /// Returns the submitted or previously stored job.
    #[must_use]
    pub const fn job(&self) -> &Job {
        &self.job
    }

    /// Returns `true` when the transcript had been submitted before and the
    /// existing job was returned.
    #[must_use]
    pub const fn cached(&self) -> bool {
        self.cached
    }
}

/// Resolved output of a completed job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobResult {
    tasks: Vec<Task>,
    cycle_report: CycleReport,
    completed_at: Option<DateTime<Utc>>,
}

impl JobResult {
    /// Returns the resolved tasks.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the cycle report.
    #[must_use]
    pub const fn cycle_report(&self) -> &CycleReport {
        &self.cycle_report
    }

    /// Returns when processing finished.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }
}

/// Status of a job as reported to callers polling for results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStatusView {
    job_id: JobId,
    status: JobStatus,
    created_at: DateTime<Utc>,
    result: Option<JobResult>,
    error_message: Option<String>,
}

impl JobStatusView {
    /// Returns the job identifier.
    #[must_use]
    pub const fn job_id(&self) -> JobId {
        self.job_id
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> JobStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the resolved output; present only once the job completed.
    #[must_use]
    pub const fn result(&self) -> Option<&JobResult> {
        self.result.as_ref()
    }

    /// Returns the failure message; present only once the job failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

impl From<&Job> for JobStatusView {
    fn from(job: &Job) -> Self {
        let result = (job.status() == JobStatus::Completed).then(|| JobResult {
            tasks: job.tasks().to_vec(),
            cycle_report: job.cycle_report().clone(),
            completed_at: job.completed_at(),
        });
        let error_message = (job.status() == JobStatus::Failed)
            .then(|| job.error_message().map(ToOwned::to_owned))
            .flatten();
        Self {
            job_id: job.id(),
            status: job.status(),
            created_at: job.created_at(),
            result,
            error_message,
        }
    }
}

/// Compact listing entry for a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    job_id: JobId,
    status: JobStatus,
    has_cycles: bool,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl JobSummary {
    /// Returns the job identifier.
    #[must_use]
    pub const fn job_id(&self) -> JobId {
        self.job_id
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> JobStatus {
        self.status
    }

    /// Returns `true` when the task graph contains cycles.
    #[must_use]
    pub const fn has_cycles(&self) -> bool {
        self.has_cycles
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when processing finished, if it has.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }
}

impl From<&Job> for JobSummary {
    fn from(job: &Job) -> Self {
        Self {
            job_id: job.id(),
            status: job.status(),
            has_cycles: job.cycle_report().has_cycles(),
            created_at: job.created_at(),
            completed_at: job.completed_at(),
        }
    }
}

/// Service-level errors for job processing operations.
#[derive(Debug, Error)]
pub enum JobProcessingError {
    /// Input or extracted tasks failed validation.
    #[error(transparent)]
    Validation(#[from] JobDomainError),

    /// No job exists with the given identifier.
    #[error("job not found: {0}")]
    JobNotFound(JobId),

    /// The job exists but has no task with the given key.
    #[error("task {task_id} not found in job {job_id}")]
    TaskNotFound {
        /// Job that was searched.
        job_id: JobId,
        /// Key that matched no task.
        task_id: TaskKey,
    },

    /// The extraction collaborator failed.
    #[error(transparent)]
    Upstream(#[from] ExtractionError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] JobRepositoryError),

    /// Processing failed and the failed status could not be stored either.
    #[error("{cause}; recording the failure also failed: {source}")]
    FailureNotRecorded {
        /// Error that made processing fail.
        cause: Box<JobProcessingError>,
        /// Repository error raised while storing the failed job.
        #[source]
        source: JobRepositoryError,
    },
}

impl JobProcessingError {
    /// Returns `true` when the error reports a missing job or task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::JobNotFound(_) | Self::TaskNotFound { .. })
    }
}

/// Result type for job processing service operations.
pub type JobProcessingResult<T> = Result<T, JobProcessingError>;

/// Job processing orchestration service.
#[derive(Clone)]
pub struct JobProcessingService<R, E, C>
where
    R: JobRepository,
    E: TaskExtractor,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    extractor: Arc<E>,
    clock: Arc<C>,
    config: ProcessingConfig,
}

impl<R, E, C> JobProcessingService<R, E, C>
where
    R: JobRepository,
    E: TaskExtractor,
    C: Clock + Send + Sync,
{
    /// Creates a new job processing service with default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>, extractor: Arc<E>, clock: Arc<C>) -> Self {
        Self {
            repository,
            extractor,
            clock,
            config: ProcessingConfig::default(),
        }
    }

    /// Replaces the service configuration.
    #[must_use]
    pub const fn with_config(mut self, config: ProcessingConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    /// Records a transcript for processing.
    ///
    /// Resubmitting a transcript that hashes to an existing job returns that
    /// job with [`SubmissionOutcome::cached`] set instead of creating a new
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`JobProcessingError::Validation`] for an empty or oversized
    /// transcript and [`JobProcessingError::Repository`] when persistence
    /// fails.
    pub async fn submit(&self, transcript: &str) -> JobProcessingResult<SubmissionOutcome> {
        self.validate_transcript(transcript)?;

        let hash = TranscriptHash::of(transcript);
        if let Some(existing) = self.find_existing(&hash).await? {
            return Ok(existing);
        }

        let mut job = Job::new(transcript, &*self.clock);
        job.begin_processing()?;
        match self.repository.store(&job).await {
            Ok(()) => {}
            Err(JobRepositoryError::DuplicateTranscript(_)) => {
                if let Some(existing) = self.find_existing(&hash).await? {
                    return Ok(existing);
                }
                return Err(JobRepositoryError::DuplicateTranscript(hash).into());
            }
            Err(error) => return Err(error.into()),
        }

        info!(job_id = %job.id(), "transcript accepted for processing");
        Ok(SubmissionOutcome { job, cached: false })
    }

    /// Extracts, validates, and classifies the tasks of a processing job.
    ///
    /// On success the job is stored as completed with its task list and
    /// cycle report. On failure the job is stored as failed with the error
    /// message and the error is returned; nothing of the task list is kept.
    ///
    /// # Errors
    ///
    /// Returns [`JobProcessingError::JobNotFound`] for an unknown job,
    /// [`JobProcessingError::Upstream`] when extraction fails,
    /// [`JobProcessingError::Validation`] when extracted tasks are invalid
    /// or the job is not processing, and [`JobProcessingError::Repository`]
    /// when persistence fails. When storing the failed job also fails, the
    /// processing error is returned inside
    /// [`JobProcessingError::FailureNotRecorded`].
    pub async fn process(&self, job_id: JobId) -> JobProcessingResult<Job> {
        let mut job = self.load(job_id).await?;
        if job.status() != JobStatus::Processing {
            return Err(JobDomainError::InvalidStatusTransition {
                job_id,
                from: job.status(),
                to: JobStatus::Completed,
            }
            .into());
        }

        let resolution = self.resolve_tasks(job.transcript()).await;
        match resolution {
            Ok((tasks, cycle_report)) => {
                job.complete_with(tasks, cycle_report, &*self.clock)?;
                self.repository.update(&job).await?;
                job.increment_version();
                info!(
                    job_id = %job_id,
                    tasks = job.tasks().len(),
                    has_cycles = job.cycle_report().has_cycles(),
                    "job processed"
                );
                Ok(job)
            }
            Err(error) => {
                warn!(job_id = %job_id, error = %error, "job processing failed");
                job.fail(error.to_string(), &*self.clock)?;
                if let Err(update_error) = self.repository.update(&job).await {
                    error!(
                        job_id = %job_id,
                        error = %update_error,
                        "failed to record job failure"
                    );
                    return Err(JobProcessingError::FailureNotRecorded {
                        cause: Box::new(error),
                        source: update_error,
                    });
                }
                Err(error)
            }
        }
    }

    /// Reports the lifecycle state of a job and, once available, its result.
    ///
    /// # Errors
    ///
    /// Returns [`JobProcessingError::JobNotFound`] for an unknown job and
    /// [`JobProcessingError::Repository`] when lookup fails.
    pub async fn job_status(&self, job_id: JobId) -> JobProcessingResult<JobStatusView> {
        let job = self.load(job_id).await?;
        Ok(JobStatusView::from(&job))
    }

    /// Marks a task completed and persists the propagated task list.
    ///
    /// Concurrent completions against the same job are detected through the
    /// repository's version check and retried up to
    /// [`ProcessingConfig::max_update_attempts`] times.
    ///
    /// # Errors
    ///
    /// Returns [`JobProcessingError::JobNotFound`] for an unknown job,
    /// [`JobProcessingError::TaskNotFound`] for an unknown task, and
    /// [`JobProcessingError::Repository`] when persistence fails or the
    /// retries are exhausted.
    pub async fn complete_task(
        &self,
        job_id: JobId,
        task_id: &TaskKey,
    ) -> JobProcessingResult<Vec<Task>> {
        let mut attempt = 1;
        loop {
            let mut job = self.load(job_id).await?;
            let updated = graph::complete(job.tasks(), task_id).map_err(|error| match error {
                PropagationError::TaskNotFound(missing) => JobProcessingError::TaskNotFound {
                    job_id,
                    task_id: missing,
                },
            })?;
            job.update_tasks(updated.clone());

            match self.repository.update(&job).await {
                Ok(()) => {
                    info!(job_id = %job_id, task_id = %task_id, "task marked as completed");
                    return Ok(updated);
                }
                Err(JobRepositoryError::VersionConflict { .. })
                    if attempt < self.config.max_update_attempts =>
                {
                    debug!(job_id = %job_id, attempt, "completion raced another update; retrying");
                    attempt += 1;
                }
                Err(JobRepositoryError::NotFound(_)) => {
                    return Err(JobProcessingError::JobNotFound(job_id));
                }
                Err(error) => return Err(error.into()),
            }
        }
    }

    /// Lists the most recent jobs, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`JobProcessingError::Repository`] when lookup fails.
    pub async fn list_recent(&self) -> JobProcessingResult<Vec<JobSummary>> {
        let jobs = self
            .repository
            .list_recent(self.config.recent_job_limit)
            .await?;
        Ok(jobs.iter().map(JobSummary::from).collect())
    }

    fn validate_transcript(&self, transcript: &str) -> Result<(), JobDomainError> {
        if transcript.trim().is_empty() {
            return Err(JobDomainError::EmptyTranscript);
        }
        if transcript.len() > self.config.max_transcript_bytes {
            return Err(JobDomainError::TranscriptTooLarge {
                actual_bytes: transcript.len(),
                limit_bytes: self.config.max_transcript_bytes,
            });
        }
        Ok(())
    }

    async fn find_existing(
        &self,
        hash: &TranscriptHash,
    ) -> JobProcessingResult<Option<SubmissionOutcome>> {
        let existing = self.repository.find_by_transcript_hash(hash).await?;
        Ok(existing.map(|job| {
            debug!(
                job_id = %job.id(),
                status = %job.status(),
                "transcript already submitted; returning existing job"
            );
            SubmissionOutcome { job, cached: true }
        }))
    }

    async fn load(&self, job_id: JobId) -> JobProcessingResult<Job> {
        self.repository
            .find_by_id(job_id)
            .await?
            .ok_or(JobProcessingError::JobNotFound(job_id))
    }

    async fn resolve_tasks(
        &self,
        transcript: &str,
    ) -> JobProcessingResult<(Vec<Task>, CycleReport)> {
        let candidates = self.extractor.extract(transcript).await?;
        let extracted = candidates
            .into_iter()
            .enumerate()
            .map(|(index, candidate)| Task::from_extracted(index, &candidate))
            .collect::<Result<Vec<_>, _>>()?;
        graph::ensure_unique_ids(&extracted)?;

        let Sanitized { tasks, diagnostics } = graph::sanitize(&extracted);
        for diagnostic in &diagnostics {
            warn!(
                task_id = %diagnostic.task_id,
                dependency_id = %diagnostic.dependency_id,
                "removed dangling dependency"
            );
        }

        let cycle_report = graph::detect_cycles(&tasks);
        if cycle_report.has_cycles() {
            warn!(cycles = ?cycle_report.cycle_details(), "dependency cycles detected");
        }

        let classified = graph::classify(&tasks, &cycle_report);
        Ok((classified, cycle_report))
    }
}
