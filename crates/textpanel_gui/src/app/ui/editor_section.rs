//! Collapsible section hosting one content editor and its code surface.
//!
//! The surface is mounted while the section is open and unmounted when it is
//! collapsed, which is what arms and discards the one-shot format.

use super::super::code_surface::{CodeSurface, SurfaceEvent};
use super::super::style::COLOR_TEXT_MUTED;
use eframe::egui::{self, RichText};
use std::time::Instant;
use textpanel_core::editor::FormatOutcome;
use textpanel_core::host::StaticVariables;
use textpanel_core::models::PanelOptions;
use textpanel_core::ContentEditor;
use tracing::debug;

pub(crate) type TextSink = Box<dyn FnMut(String)>;

/// Which text option a section edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TextField {
    Content,
    DefaultContent,
    Helpers,
    Styles,
}

impl TextField {
    fn value(self, options: &PanelOptions) -> &str {
        match self {
            Self::Content => &options.content,
            Self::DefaultContent => &options.default_content,
            Self::Helpers => &options.helpers,
            Self::Styles => &options.styles,
        }
    }
}

pub(crate) struct EditorSection {
    title: &'static str,
    hint: &'static str,
    field: TextField,
    editor: ContentEditor<TextSink>,
    surface: CodeSurface,
    open: bool,
}

impl EditorSection {
    pub(crate) fn new(
        title: &'static str,
        hint: &'static str,
        field: TextField,
        editor: ContentEditor<TextSink>,
        open: bool,
    ) -> Self {
        Self {
            title,
            hint,
            field,
            editor,
            surface: CodeSurface::new(field),
            open,
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    #[cfg(test)]
    pub(crate) fn is_mounted(&self) -> bool {
        self.surface.is_mounted()
    }

    pub(crate) fn set_open(&mut self, open: bool, options: &PanelOptions, now: Instant) {
        self.open = open;
        self.sync_mount(options, now);
    }

    /// Mount or unmount the surface so it matches the section's visibility.
    fn sync_mount(&mut self, options: &PanelOptions, now: Instant) {
        match (self.open, self.surface.is_mounted()) {
            (true, false) => {
                let props = self
                    .editor
                    .props(Some(self.field.value(options)), &options.editor);
                let action = self.surface.mount(&props);
                self.editor.on_mount(action, &options.editor, now);
            }
            (false, true) => {
                if let Some(text) = self.surface.unmount() {
                    debug!("{} hidden with uncommitted edits", self.title);
                    self.editor.on_blur(text);
                }
                self.editor.on_unmount();
            }
            _ => {}
        }
    }

    pub(crate) fn poll_format(&mut self, now: Instant) -> FormatOutcome {
        self.editor.poll_format(now)
    }

    pub(crate) fn next_format_deadline(&self) -> Option<Instant> {
        self.editor.next_format_deadline()
    }

    pub(crate) fn show(
        &mut self,
        ui: &mut egui::Ui,
        options: &PanelOptions,
        variables: &StaticVariables,
        now: Instant,
    ) {
        self.sync_mount(options, now);

        let props = self
            .editor
            .props(Some(self.field.value(options)), &options.editor);
        let suggestions = self.editor.suggestions(variables);
        let mut events = Vec::new();
        let header = egui::CollapsingHeader::new(self.title)
            .id_salt(("editor_section", self.field))
            .open(Some(self.open))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.hint).small().color(COLOR_TEXT_MUTED));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(props.language.label()).small().monospace());
                    });
                });
                events = self.surface.show(ui, &props, &suggestions);
            });

        for event in events {
            match event {
                SurfaceEvent::Blur(text) => self.editor.on_blur(text),
                SurfaceEvent::Save(text) => self.editor.on_save(text),
            }
        }

        if header.header_response.clicked() {
            self.set_open(!self.open, options, now);
        }
    }
}
