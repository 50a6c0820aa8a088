//! Suggestion lists for the code editors.

use super::EditorMode;
use crate::host::VariableRegistry;
use crate::models::{SuggestionItem, SuggestionKind};

/// Static entry of the helper catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelperSuggestion {
    pub label: &'static str,
    pub kind: SuggestionKind,
    pub detail: &'static str,
}

/// Built-in helpers available to panel scripts, in popup order.
pub const HELPER_SUGGESTIONS: &[HelperSuggestion] = &[
    HelperSuggestion {
        label: "handlebars",
        kind: SuggestionKind::Constant,
        detail: "Handlebars library.",
    },
    HelperSuggestion {
        label: "handlebars.registerHelper",
        kind: SuggestionKind::Method,
        detail: "Register a template helper.",
    },
    HelperSuggestion {
        label: "context",
        kind: SuggestionKind::Property,
        detail: "Render context passed to the script.",
    },
    HelperSuggestion {
        label: "context.data",
        kind: SuggestionKind::Property,
        detail: "Row data, or all rows when rendering once.",
    },
    HelperSuggestion {
        label: "context.dataFrame",
        kind: SuggestionKind::Property,
        detail: "Query result frame.",
    },
    HelperSuggestion {
        label: "context.element",
        kind: SuggestionKind::Property,
        detail: "Root element of the rendered content.",
    },
    HelperSuggestion {
        label: "context.grafana.theme",
        kind: SuggestionKind::Property,
        detail: "Current theme.",
    },
    HelperSuggestion {
        label: "context.grafana.getLocale()",
        kind: SuggestionKind::Method,
        detail: "Returns the user locale.",
    },
    HelperSuggestion {
        label: "context.grafana.replaceVariables()",
        kind: SuggestionKind::Method,
        detail: "Interpolate variables in a string.",
    },
    HelperSuggestion {
        label: "context.grafana.timeRange",
        kind: SuggestionKind::Property,
        detail: "Selected time range.",
    },
    HelperSuggestion {
        label: "context.grafana.timeZone",
        kind: SuggestionKind::Property,
        detail: "Selected time zone.",
    },
    HelperSuggestion {
        label: "context.grafana.notifySuccess()",
        kind: SuggestionKind::Method,
        detail: "Display a success notification.",
    },
    HelperSuggestion {
        label: "context.grafana.notifyError()",
        kind: SuggestionKind::Method,
        detail: "Display an error notification.",
    },
];

impl From<&HelperSuggestion> for SuggestionItem {
    fn from(value: &HelperSuggestion) -> Self {
        SuggestionItem::new(value.label, value.kind, value.detail)
    }
}

/// One `${name}` suggestion per variable currently in the registry.
pub fn variable_suggestions<R>(registry: &R) -> Vec<SuggestionItem>
where
    R: VariableRegistry + ?Sized,
{
    registry
        .variables()
        .iter()
        .map(|variable| {
            SuggestionItem::new(
                variable.reference_token(),
                SuggestionKind::Property,
                variable.detail(),
            )
        })
        .collect()
}

/// Build the suggestion list for `mode`.
///
/// Plain text gets nothing; stylesheets get the variable references; scripts
/// get the helper catalog followed by the variable references.
pub fn build_suggestions<R>(mode: EditorMode, registry: &R) -> Vec<SuggestionItem>
where
    R: VariableRegistry + ?Sized,
{
    match mode {
        EditorMode::Text => Vec::new(),
        EditorMode::Styles => variable_suggestions(registry),
        EditorMode::Helpers => HELPER_SUGGESTIONS
            .iter()
            .map(SuggestionItem::from)
            .chain(variable_suggestions(registry))
            .collect(),
    }
}
