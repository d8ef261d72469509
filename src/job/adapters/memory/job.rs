//! In-memory repository for transcript jobs.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::job::{
    domain::{Job, JobId, TranscriptHash},
    ports::{JobRepository, JobRepositoryError, JobRepositoryResult},
};

/// Thread-safe in-memory job repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobRepository {
    state: Arc<RwLock<InMemoryJobState>>,
}

#[derive(Debug, Default)]
struct InMemoryJobState {
    jobs: HashMap<JobId, Job>,
    hash_index: HashMap<TranscriptHash, JobId>,
}

impl InMemoryJobRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> JobRepositoryError {
    JobRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn store(&self, job: &Job) -> JobRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.jobs.contains_key(&job.id()) {
            return Err(JobRepositoryError::DuplicateJob(job.id()));
        }

        let hash = job.transcript_hash().clone();
        if state.hash_index.contains_key(&hash) {
            return Err(JobRepositoryError::DuplicateTranscript(hash));
        }

        state.hash_index.insert(hash, job.id());
        state.jobs.insert(job.id(), job.clone());
        Ok(())
    }

    async fn update(&self, job: &Job) -> JobRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let stored = state
            .jobs
            .get_mut(&job.id())
            .ok_or(JobRepositoryError::NotFound(job.id()))?;

        if stored.version() != job.version() {
            return Err(JobRepositoryError::VersionConflict {
                job_id: job.id(),
                expected: job.version(),
                actual: stored.version(),
            });
        }

        let mut next = job.clone();
        next.increment_version();
        *stored = next;
        Ok(())
    }

    async fn find_by_id(&self, id: JobId) -> JobRepositoryResult<Option<Job>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.jobs.get(&id).cloned())
    }

    async fn find_by_transcript_hash(
        &self,
        hash: &TranscriptHash,
    ) -> JobRepositoryResult<Option<Job>> {
        let state = self.state.read().map_err(poisoned)?;
        let job = state
            .hash_index
            .get(hash)
            .and_then(|job_id| state.jobs.get(job_id))
            .cloned();
        Ok(job)
    }

    async fn list_recent(&self, limit: usize) -> JobRepositoryResult<Vec<Job>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut jobs: Vec<Job> = state.jobs.values().cloned().collect();
        jobs.sort_by_key(|job| Reverse(job.created_at()));
        jobs.truncate(limit);
        Ok(jobs)
    }
}
