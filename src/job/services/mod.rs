//! Application services for transcript job processing.

mod config;
mod processing;

pub use config::ProcessingConfig;
pub use processing::{
    JobProcessingError, JobProcessingResult, JobProcessingService, JobResult, JobStatusView,
    JobSummary, SubmissionOutcome,
};
