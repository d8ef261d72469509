//! Shared world state for task completion BDD scenarios.

use std::sync::Arc;

use insightboard::job::{
    adapters::{extraction::CannedTaskExtractor, memory::InMemoryJobRepository},
    domain::{CycleReport, ExtractedTask, JobId, Task},
    services::{JobProcessingResult, JobProcessingService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestJobService =
    JobProcessingService<InMemoryJobRepository, CannedTaskExtractor, DefaultClock>;

/// Scenario world for task completion behaviour tests.
pub struct CompletionWorld {
    pub repository: Arc<InMemoryJobRepository>,
    pub candidates: Vec<ExtractedTask>,
    pub service: Option<TestJobService>,
    pub job_id: Option<JobId>,
    pub cycle_report: CycleReport,
    pub tasks: Vec<Task>,
    pub last_completion: Option<JobProcessingResult<Vec<Task>>>,
}

impl CompletionWorld {
    /// Creates a world with no candidate tasks and no submitted job.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: Arc::new(InMemoryJobRepository::new()),
            candidates: Vec::new(),
            service: None,
            job_id: None,
            cycle_report: CycleReport::default(),
            tasks: Vec::new(),
            last_completion: None,
        }
    }

    /// Builds a service whose extractor answers with the collected candidates.
    pub fn build_service(&self) -> Result<TestJobService, eyre::Report> {
        let response = serde_json::to_string(&self.candidates)?;
        Ok(JobProcessingService::new(
            Arc::clone(&self.repository),
            Arc::new(CannedTaskExtractor::from_response(response)),
            Arc::new(DefaultClock),
        ))
    }

    /// Looks up a task in the latest known task list.
    pub fn task(&self, id: &str) -> Result<&Task, eyre::Report> {
        self.tasks
            .iter()
            .find(|task| task.id().as_str() == id)
            .ok_or_else(|| eyre::eyre!("task {id} not in scenario world"))
    }
}

impl Default for CompletionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CompletionWorld {
    CompletionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
