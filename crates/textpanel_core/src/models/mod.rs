//! Data models for panel options and editor widgets.

/// Panel options as persisted by the host (editor settings, content, resources).
pub mod options;
/// External resource references edited by the resource list editor.
pub mod resource;
/// Autocompletion items surfaced by the code surface.
pub mod suggestion;
/// Host substitution variables.
pub mod variable;

pub use options::{CodeLanguage, EditorOptions, Format, PanelOptions};
pub use resource::Resource;
pub use suggestion::{SuggestionItem, SuggestionKind};
pub use variable::VariableDescriptor;
