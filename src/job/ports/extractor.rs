//! Extraction port turning free text into candidate tasks.

use crate::job::domain::ExtractedTask;
use async_trait::async_trait;
use thiserror::Error;

/// Task extraction contract.
///
/// Implementations call out to a text-generation service. They report the
/// candidates verbatim; normalisation and validation happen in the domain.
#[async_trait]
pub trait TaskExtractor: Send + Sync {
    /// Extracts candidate tasks from a transcript.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError`] when the upstream service fails or its
    /// output cannot be parsed.
    async fn extract(&self, transcript: &str) -> Result<Vec<ExtractedTask>, ExtractionError>;
}

/// Errors returned by task extractors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    /// The upstream service failed.
    #[error("failed to generate tasks: {0}")]
    Upstream(String),

    /// The upstream service answered with output that is not a task list.
    #[error("malformed extraction response: {0}")]
    MalformedResponse(String),

    /// The extraction prompt could not be rendered.
    #[error("failed to render extraction prompt: {0}")]
    PromptRender(String),
}
