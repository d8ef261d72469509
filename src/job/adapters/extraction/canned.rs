//! Extractor replaying a fixed answer.

use async_trait::async_trait;

use super::parse_extraction_response;
use crate::job::{
    domain::ExtractedTask,
    ports::{ExtractionError, TaskExtractor},
};

/// Task extractor that answers every transcript with the same raw response.
///
/// The response goes through [`parse_extraction_response`], so fenced or
/// malformed answers behave exactly as they would from a live service.
#[derive(Debug, Clone)]
pub struct CannedTaskExtractor {
    response: Result<String, ExtractionError>,
}

impl CannedTaskExtractor {
    /// Creates an extractor answering with `response`.
    #[must_use]
    pub fn from_response(response: impl Into<String>) -> Self {
        Self {
            response: Ok(response.into()),
        }
    }

    /// Creates an extractor that always fails with `error`.
    #[must_use]
    pub const fn failing(error: ExtractionError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

#[async_trait]
impl TaskExtractor for CannedTaskExtractor {
    async fn extract(&self, _transcript: &str) -> Result<Vec<ExtractedTask>, ExtractionError> {
        match &self.response {
            Ok(raw) => parse_extraction_response(raw),
            Err(error) => Err(error.clone()),
        }
    }
}
