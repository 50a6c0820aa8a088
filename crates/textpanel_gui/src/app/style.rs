//! Theme constants and one-time style application.

use super::PanelEditorApp;
use eframe::egui::{self, Color32, Stroke, Visuals};

pub(super) const COLOR_BG_PRIMARY: Color32 = Color32::from_rgb(0x11, 0x12, 0x17);
pub(super) const COLOR_BG_SECONDARY: Color32 = Color32::from_rgb(0x18, 0x1b, 0x1f);
pub(super) const COLOR_BG_TERTIARY: Color32 = Color32::from_rgb(0x22, 0x25, 0x2b);
pub(super) const COLOR_TEXT_PRIMARY: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xdc);
pub(super) const COLOR_TEXT_MUTED: Color32 = Color32::from_rgb(0x8e, 0x8e, 0x8e);
pub(super) const COLOR_ACCENT: Color32 = Color32::from_rgb(0x3d, 0x71, 0xd9);
pub(super) const COLOR_DROP_TARGET: Color32 = Color32::from_rgb(0x6e, 0x9f, 0xff);
pub(super) const COLOR_BORDER: Color32 = Color32::from_rgb(0x2c, 0x30, 0x35);
pub(super) const COLOR_GUTTER: Color32 = Color32::from_rgb(0x5a, 0x5f, 0x66);

impl PanelEditorApp {
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = Visuals::dark();
        style.visuals.override_text_color = Some(COLOR_TEXT_PRIMARY);
        style.visuals.window_fill = COLOR_BG_PRIMARY;
        style.visuals.panel_fill = COLOR_BG_SECONDARY;
        style.visuals.extreme_bg_color = COLOR_BG_PRIMARY;
        style.visuals.faint_bg_color = COLOR_BG_TERTIARY;
        style.visuals.window_stroke = Stroke::new(1.0, COLOR_BORDER);
        style.visuals.hyperlink_color = COLOR_ACCENT;
        style.visuals.selection.stroke = Stroke::new(1.0, COLOR_ACCENT);
        style.visuals.text_edit_bg_color = Some(COLOR_BG_TERTIARY);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        ctx.set_style(style);

        self.style_applied = true;
    }
}
