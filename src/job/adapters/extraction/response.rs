//! Parsing of raw text-generation answers into candidate tasks.

use serde_json::Value;

use crate::job::{domain::ExtractedTask, ports::ExtractionError};

/// Parses a raw answer into candidate tasks.
///
/// Markdown code fences around the JSON payload are tolerated. Fields are
/// not validated here; see [`crate::job::domain::Task::from_extracted`].
///
/// # Errors
///
/// Returns [`ExtractionError::MalformedResponse`] when the answer is not
/// valid JSON, is not an array, or contains entries that are not task
/// objects.
pub fn parse_extraction_response(raw: &str) -> Result<Vec<ExtractedTask>, ExtractionError> {
    let payload = strip_code_fences(raw);
    let value: Value = serde_json::from_str(&payload)
        .map_err(|error| ExtractionError::MalformedResponse(error.to_string()))?;

    if !value.is_array() {
        return Err(ExtractionError::MalformedResponse(
            "response is not a JSON array".to_owned(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|error| ExtractionError::MalformedResponse(error.to_string()))
}

fn strip_code_fences(raw: &str) -> String {
    raw.trim()
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_owned()
}
