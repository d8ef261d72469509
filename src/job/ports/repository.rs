//! Repository port for job persistence and lookup.

use crate::job::domain::{Job, JobId, TranscriptHash};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for job repository operations.
pub type JobRepositoryResult<T> = Result<T, JobRepositoryError>;

/// Job persistence contract.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Stores a new job.
    ///
    /// # Errors
    ///
    /// Returns [`JobRepositoryError::DuplicateJob`] when the job ID already
    /// exists or [`JobRepositoryError::DuplicateTranscript`] when a job for
    /// the same transcript hash is already stored.
    async fn store(&self, job: &Job) -> JobRepositoryResult<()>;

    /// Persists changes to an existing job.
    ///
    /// The write succeeds only when the stored version equals
    /// [`Job::version`]; the stored copy then carries the next version.
    ///
    /// # Errors
    ///
    /// Returns [`JobRepositoryError::NotFound`] when the job does not exist
    /// or [`JobRepositoryError::VersionConflict`] when another writer got
    /// there first.
    async fn update(&self, job: &Job) -> JobRepositoryResult<()>;

    /// Finds a job by identifier.
    ///
    /// Returns `None` when the job does not exist.
    async fn find_by_id(&self, id: JobId) -> JobRepositoryResult<Option<Job>>;

    /// Finds the job created for a transcript hash.
    ///
    /// Returns `None` when the transcript has not been submitted before.
    async fn find_by_transcript_hash(
        &self,
        hash: &TranscriptHash,
    ) -> JobRepositoryResult<Option<Job>>;

    /// Returns up to `limit` jobs, newest first.
    async fn list_recent(&self, limit: usize) -> JobRepositoryResult<Vec<Job>>;
}

/// Errors returned by job repository implementations.
#[derive(Debug, Clone, Error)]
pub enum JobRepositoryError {
    /// A job with the same identifier already exists.
    #[error("duplicate job identifier: {0}")]
    DuplicateJob(JobId),

    /// A job for the same transcript hash already exists.
    #[error("duplicate transcript: {0}")]
    DuplicateTranscript(TranscriptHash),

    /// The job was not found.
    #[error("job not found: {0}")]
    NotFound(JobId),

    /// The stored job changed since it was read.
    #[error("job {job_id} was modified concurrently (expected version {expected}, found {actual})")]
    VersionConflict {
        /// Job being updated.
        job_id: JobId,
        /// Version the writer read.
        expected: u64,
        /// Version currently stored.
        actual: u64,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl JobRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
