//! Core library for the text panel editors (options model, widget state machines).

/// Configuration loading and defaults.
pub mod config;
/// Content editor adapter: language, autoformat, and suggestion policy.
pub mod editor;
/// Error types shared by the widgets and the options store.
pub mod error;
/// Host capability traits consumed by the widgets.
pub mod host;
/// Data models for panel options, resources, variables, and suggestions.
pub mod models;
/// Ordered resource list editor.
pub mod resources;

pub use config::Config;
pub use editor::{ContentEditor, EditorMode};
pub use error::PanelError;
pub use host::{ChangeSink, FormatAction, VariableRegistry};
pub use resources::{DropResult, ResourcesEditor};
