//! UI sections of the editor sidebar.

/// Collapsible code editor sections.
pub(super) mod editor_section;
/// Editor option controls.
pub(super) mod options_panel;
/// Draggable resource list sections.
pub(super) mod resources_panel;
