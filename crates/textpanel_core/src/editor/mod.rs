//! Content editor adapter.
//!
//! Wraps a host code surface and derives everything mode dependent from a
//! mode tag plus the panel's editor options: the language, the autoformat
//! switches, the one-shot format on mount, and the suggestion list.

mod format;
mod suggestions;

pub use format::{AutoformatOptions, FormatOutcome, DEFAULT_FORMAT_DELAY};
pub use suggestions::{build_suggestions, variable_suggestions, HelperSuggestion, HELPER_SUGGESTIONS};

use crate::host::{ChangeSink, FormatAction, VariableRegistry};
use crate::models::{CodeLanguage, EditorOptions, SuggestionItem};
use format::MountFormat;
use std::time::{Duration, Instant};
use tracing::debug;

/// Content length, in characters, above which the surface shows its minimap.
pub const MINIMAP_THRESHOLD: usize = 100;

/// Mode tag selecting language and suggestion policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorMode {
    /// Panel template; follows the primary content language.
    #[default]
    Text,
    /// Helper script; always JavaScript.
    Helpers,
    /// Stylesheet; always SCSS.
    Styles,
}

/// Language the surface should use for `mode`.
///
/// # Arguments
/// - `mode`: Editor mode tag.
/// - `primary`: Primary content language configured on the panel.
///
/// # Returns
/// JavaScript for helpers, SCSS for styles, otherwise `primary`.
pub fn resolve_language(mode: EditorMode, primary: CodeLanguage) -> CodeLanguage {
    match mode {
        EditorMode::Helpers => CodeLanguage::Javascript,
        EditorMode::Styles => CodeLanguage::Scss,
        EditorMode::Text => primary,
    }
}

/// Everything the code surface needs for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceProps {
    pub language: CodeLanguage,
    pub show_line_numbers: bool,
    pub show_minimap: bool,
    pub value: String,
    pub height_px: u32,
    pub autoformat: AutoformatOptions,
}

/// Code editor widget bound to one text option.
pub struct ContentEditor<S> {
    mode: EditorMode,
    sink: S,
    format_delay: Duration,
    mount_format: MountFormat,
}

impl<S: ChangeSink<String>> ContentEditor<S> {
    pub fn new(mode: EditorMode, sink: S) -> Self {
        Self {
            mode,
            sink,
            format_delay: DEFAULT_FORMAT_DELAY,
            mount_format: MountFormat::default(),
        }
    }

    /// Plain-text editor (panel content, default content).
    pub fn text(sink: S) -> Self {
        Self::new(EditorMode::Text, sink)
    }

    /// JavaScript helpers editor.
    pub fn helpers(sink: S) -> Self {
        Self::new(EditorMode::Helpers, sink)
    }

    /// Stylesheet editor.
    pub fn styles(sink: S) -> Self {
        Self::new(EditorMode::Styles, sink)
    }

    /// Override the delay before the format-on-mount action runs.
    pub fn with_format_delay(mut self, delay: Duration) -> Self {
        self.format_delay = delay;
        self
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn language(&self, options: &EditorOptions) -> CodeLanguage {
        resolve_language(self.mode, options.language)
    }

    pub fn autoformat(&self, options: &EditorOptions) -> AutoformatOptions {
        AutoformatOptions::for_format(options.format)
    }

    /// Suggestions for the current registry contents. Rebuilt on every call.
    pub fn suggestions<R>(&self, registry: &R) -> Vec<SuggestionItem>
    where
        R: VariableRegistry + ?Sized,
    {
        build_suggestions(self.mode, registry)
    }

    /// Surface configuration for the current value and options.
    ///
    /// A missing value renders as an empty document.
    pub fn props(&self, value: Option<&str>, options: &EditorOptions) -> SurfaceProps {
        let value = value.unwrap_or_default();
        SurfaceProps {
            language: self.language(options),
            show_line_numbers: true,
            show_minimap: value.chars().count() > MINIMAP_THRESHOLD,
            value: value.to_string(),
            height_px: options.height_px(),
            autoformat: self.autoformat(options),
        }
    }

    /// Surface mounted. Arms the one-shot format when formatting is `auto`
    /// right now; a later switch to `auto` does not arm it.
    pub fn on_mount(&mut self, action: Box<dyn FormatAction>, options: &EditorOptions, now: Instant) {
        debug!("{:?} editor mounted", self.mode);
        self.mount_format
            .mount(action, options.format, now, self.format_delay);
    }

    /// Surface unmounted; any pending format is discarded.
    pub fn on_unmount(&mut self) {
        debug!("{:?} editor unmounted", self.mode);
        self.mount_format.unmount();
    }

    pub fn is_mounted(&self) -> bool {
        self.mount_format.is_mounted()
    }

    /// When the pending format becomes due, if one is armed.
    pub fn next_format_deadline(&self) -> Option<Instant> {
        self.mount_format.deadline()
    }

    /// Run the one-shot format if its deadline has passed.
    pub fn poll_format(&mut self, now: Instant) -> FormatOutcome {
        self.mount_format.poll(now)
    }

    /// Surface lost focus with `text`.
    pub fn on_blur(&mut self, text: String) {
        self.commit(text);
    }

    /// Explicit save from the surface.
    pub fn on_save(&mut self, text: String) {
        self.commit(text);
    }

    fn commit(&mut self, text: String) {
        debug!("{:?} editor committed {} bytes", self.mode, text.len());
        self.sink.emit(text);
    }
}

#[cfg(test)]
mod tests;
