//! Editor option controls: primary language, format mode, editor height.

use super::super::*;
use eframe::egui;
use textpanel_core::models::options::{
    MAX_EDITOR_HEIGHT, MIN_EDITOR_HEIGHT, PRIMARY_LANGUAGE_OPTIONS,
};
use textpanel_core::models::{EditorOptions, Format};

/// Draw the controls for `current`.
///
/// # Returns
/// The edited options when any control changed this frame.
fn editor_option_controls(ui: &mut egui::Ui, current: &EditorOptions) -> Option<EditorOptions> {
    let mut next = current.clone();

    ui.horizontal(|ui| {
        ui.label("Language");
        for option in PRIMARY_LANGUAGE_OPTIONS {
            ui.radio_value(&mut next.language, option.value, option.label);
        }
    });
    ui.horizontal(|ui| {
        ui.label("Formatting");
        ui.radio_value(&mut next.format, Format::Auto, "Auto");
        ui.radio_value(&mut next.format, Format::Manual, "None");
    });
    ui.horizontal(|ui| {
        ui.label("Height");
        let mut height = next.height_px();
        let slider = ui.add(
            egui::Slider::new(&mut height, MIN_EDITOR_HEIGHT..=MAX_EDITOR_HEIGHT).suffix(" px"),
        );
        if slider.changed() {
            next.height = height;
        }
    });

    (next != *current).then_some(next)
}

impl PanelEditorApp {
    pub(crate) fn render_options_panel(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Editor")
            .id_salt("editor_options")
            .default_open(true)
            .show(ui, |ui| {
                let current = self.store.options().editor.clone();
                if let Some(next) = editor_option_controls(ui, &current) {
                    if self.store.sender().send(OptionChange::Editor(next)).is_err() {
                        warn!("options queue closed; editor options dropped");
                    }
                }
            });
    }
}
