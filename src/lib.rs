//! Root crate facade for the text panel editors.

/// Desktop editor sidebar (feature-gated).
#[cfg(feature = "gui")]
pub use textpanel_gui as gui;

pub use textpanel_core::{
    config, editor, error, host, models, resources, ChangeSink, Config, ContentEditor,
    DropResult, EditorMode, FormatAction, PanelError, ResourcesEditor, VariableRegistry,
};
