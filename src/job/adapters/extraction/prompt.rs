//! Extraction prompt rendering.

use minijinja::{Environment, context};

use crate::job::{domain::TaskPriority, ports::ExtractionError};

const EXTRACTION_PROMPT: &str = r#"You are an AI assistant that converts meeting transcripts into structured tasks with dependencies.

Analyze the following meeting transcript and extract all actionable tasks. For each task:
1. Assign a unique ID in the format "task-1", "task-2", etc.
2. Write a clear description
3. Assign a priority ({{ priorities | join(", ") }})
4. Identify dependencies (which other tasks must be completed first)

Return ONLY a valid JSON array with this exact structure:
[
  {
    "id": "task-1",
    "description": "Task description",
    "priority": "high",
    "dependencies": []
  }
]

IMPORTANT RULES:
- Dependencies array should only contain IDs of tasks that exist in your response
- If a task has no dependencies, use an empty array []
- Priority must be one of: {{ priorities | join(", ") }}
- Return ONLY the JSON array, no additional text

Meeting Transcript:
{{ transcript }}"#;

const PRIORITIES: [&str; 4] = [
    TaskPriority::Low.as_str(),
    TaskPriority::Medium.as_str(),
    TaskPriority::High.as_str(),
    TaskPriority::Urgent.as_str(),
];

/// Renders the instruction prompt sent to the text-generation service.
///
/// # Errors
///
/// Returns [`ExtractionError::PromptRender`] when template rendering fails.
pub fn render_extraction_prompt(transcript: &str) -> Result<String, ExtractionError> {
    let environment = Environment::new();
    environment
        .render_str(
            EXTRACTION_PROMPT,
            context! { transcript => transcript, priorities => PRIORITIES },
        )
        .map_err(|error| ExtractionError::PromptRender(error.to_string()))
}
