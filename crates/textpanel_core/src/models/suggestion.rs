//! Autocompletion candidates.

use serde::Serialize;

/// Category of a suggestion, used by the surface to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Method,
    Field,
    Property,
    Constant,
    Text,
}

impl SuggestionKind {
    /// Short tag rendered in suggestion popups.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Method => "fn",
            Self::Field => "field",
            Self::Property => "prop",
            Self::Constant => "const",
            Self::Text => "text",
        }
    }
}

/// A single completion candidate. Built per render, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionItem {
    pub label: String,
    pub kind: SuggestionKind,
    pub detail: String,
}

impl SuggestionItem {
    pub fn new(label: impl Into<String>, kind: SuggestionKind, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: detail.into(),
        }
    }
}
