//! Port contracts for transcript job processing.
//!
//! Ports define infrastructure-agnostic interfaces used by job services.

pub mod extractor;
pub mod repository;

pub use extractor::{ExtractionError, TaskExtractor};
pub use repository::{JobRepository, JobRepositoryError, JobRepositoryResult};
