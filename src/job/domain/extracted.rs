//! Unvalidated task records reported by the extraction collaborator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A candidate task exactly as the extraction collaborator reported it.
///
/// Every field is optional; [`super::Task::from_extracted`] applies defaults
/// and rejects records without an id or description. Priority and
/// dependencies are kept as raw JSON so that a wrongly typed value degrades
/// to the default instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedTask {
    /// Proposed task key.
    pub id: Option<String>,
    /// Proposed description.
    pub description: Option<String>,
    /// Raw priority label; expected to be a string.
    pub priority: Option<Value>,
    /// Raw dependency keys; expected to be an array of strings.
    pub dependencies: Option<Value>,
}

impl ExtractedTask {
    /// Creates a candidate with an id and description.
    #[must_use]
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            description: Some(description.into()),
            priority: None,
            dependencies: None,
        }
    }

    /// Sets the raw priority label.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(Value::String(priority.into()));
        self
    }

    /// Sets the raw dependency keys.
    #[must_use]
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = Some(Value::Array(
            dependencies
                .into_iter()
                .map(|dependency| Value::String(dependency.into()))
                .collect(),
        ));
        self
    }

    /// Returns the priority label when it is a string.
    #[must_use]
    pub fn priority_label(&self) -> Option<&str> {
        self.priority.as_ref().and_then(Value::as_str)
    }

    /// Returns the string entries of the dependency list.
    ///
    /// A missing or non-array value yields nothing, and entries that are not
    /// strings are skipped.
    pub fn dependency_labels(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .as_ref()
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }
}
