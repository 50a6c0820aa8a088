//! Host substitution variable descriptors.

use serde::{Deserialize, Serialize};

/// Read-only view of a variable defined in the host's variable registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDescriptor {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VariableDescriptor {
    /// Create a descriptor without a description.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            description: None,
        }
    }

    /// Attach a human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Delimited reference token for this variable, e.g. `${foo}`.
    pub fn reference_token(&self) -> String {
        format!("${{{}}}", self.name)
    }

    /// Detail text shown next to a suggestion: the description when present,
    /// otherwise the label.
    pub fn detail(&self) -> &str {
        self.description
            .as_deref()
            .filter(|description| !description.is_empty())
            .unwrap_or(self.label.as_str())
    }
}
