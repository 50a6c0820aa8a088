//! Resource list section: add input, draggable rows, per-row url editing.

use super::super::style::{COLOR_DROP_TARGET, COLOR_TEXT_MUTED};
use eframe::egui::{self, RichText};
use textpanel_core::models::Resource;
use textpanel_core::{DropResult, ResourcesEditor};
use tracing::debug;

pub(crate) type ResourcesSink = Box<dyn FnMut(Vec<Resource>)>;

/// Drag payload: the list a row was picked up from and its render index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowDrag {
    list: &'static str,
    index: usize,
}

enum RowAction {
    Toggle(String),
    Remove(String),
    Edit(String, String),
    Drop(DropResult),
}

pub(crate) struct ResourcesPanel {
    title: &'static str,
    placeholder: &'static str,
    editor: ResourcesEditor<ResourcesSink>,
}

impl ResourcesPanel {
    pub(crate) fn new(
        title: &'static str,
        placeholder: &'static str,
        editor: ResourcesEditor<ResourcesSink>,
    ) -> Self {
        Self {
            title,
            placeholder,
            editor,
        }
    }

    #[cfg(test)]
    pub(crate) fn editor(&self) -> &ResourcesEditor<ResourcesSink> {
        &self.editor
    }

    fn input_id(&self) -> egui::Id {
        egui::Id::new(("resource_input", self.title))
    }

    fn handle_id(&self, item_id: &str) -> egui::Id {
        egui::Id::new(("resource_row", self.title, item_id))
    }

    fn url_id(&self, item_id: &str) -> egui::Id {
        egui::Id::new(("resource_url", self.title, item_id))
    }

    pub(crate) fn show(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new(self.title)
            .id_salt(("resources", self.title))
            .default_open(true)
            .show(ui, |ui| {
                self.show_add_row(ui);
                ui.add_space(4.0);
                self.show_rows(ui);
            });
    }

    /// Settle a row drag that was released outside every row of its list.
    ///
    /// Call once per frame after all panels have drawn, so a row drop zone
    /// in any list gets the release first.
    pub(crate) fn resolve_outside_drop(ctx: &egui::Context, panels: &mut [&mut ResourcesPanel]) {
        if !ctx.input(|input| input.pointer.any_released()) {
            return;
        }
        let Some(payload) = egui::DragAndDrop::take_payload::<RowDrag>(ctx) else {
            return;
        };
        match panels.iter_mut().find(|panel| panel.title == payload.list) {
            Some(panel) => {
                panel.editor.reorder(DropResult::new(payload.index, None));
            }
            None => debug!("row drag from unknown list {:?} dropped", payload.list),
        }
    }

    fn show_add_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut input = self.editor.pending_input().to_string();
            let field = ui.add(
                egui::TextEdit::singleline(&mut input)
                    .id(self.input_id())
                    .hint_text(self.placeholder)
                    .desired_width(ui.available_width() - 56.0),
            );
            if field.changed() {
                self.editor.set_pending_input(input);
            }
            let submitted =
                field.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));
            let clicked = ui
                .add_enabled(self.editor.can_add(), egui::Button::new("Add"))
                .clicked();
            if (clicked || submitted) && self.editor.add().is_some() {
                field.request_focus();
            }
        });
    }

    fn show_rows(&mut self, ui: &mut egui::Ui) {
        if self.editor.items().is_empty() {
            ui.label(RichText::new("Nothing added yet.").small().color(COLOR_TEXT_MUTED));
            return;
        }

        let mut actions = Vec::new();
        // Payloads picked up in another list are left for that list.
        let own_drag = egui::DragAndDrop::payload::<RowDrag>(ui.ctx())
            .filter(|payload| payload.list == self.title);
        let released = ui.input(|input| input.pointer.any_released());

        for (index, item) in self.editor.items().iter().enumerate() {
            let expanded = self.editor.is_expanded(&item.id);
            let zone = egui::Frame::new()
                .inner_margin(egui::Margin::symmetric(4, 2))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.dnd_drag_source(
                            self.handle_id(&item.id),
                            RowDrag {
                                list: self.title,
                                index,
                            },
                            |ui| {
                                ui.label(RichText::new("⠿").color(COLOR_TEXT_MUTED));
                            },
                        );
                        let arrow = if expanded { "▾" } else { "▸" };
                        if ui.small_button(arrow).clicked() {
                            actions.push(RowAction::Toggle(item.id.clone()));
                        }
                        if expanded {
                            let mut url = item.url.clone();
                            let field = ui.add(
                                egui::TextEdit::singleline(&mut url)
                                    .id(self.url_id(&item.id))
                                    .desired_width(ui.available_width() - 32.0),
                            );
                            if field.changed() {
                                actions.push(RowAction::Edit(item.id.clone(), url));
                            }
                        } else {
                            ui.label(RichText::new(&item.url).monospace());
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✕").on_hover_text("Remove").clicked() {
                                actions.push(RowAction::Remove(item.id.clone()));
                            }
                        });
                    });
                });

            // `hovered` stays false while something is dragged; the zone only
            // knows it contains the pointer.
            let Some(payload) = own_drag.as_ref() else {
                continue;
            };
            if !zone.response.contains_pointer() {
                continue;
            }
            ui.painter().hline(
                zone.response.rect.x_range(),
                zone.response.rect.top(),
                egui::Stroke::new(2.0, COLOR_DROP_TARGET),
            );
            if released {
                egui::DragAndDrop::clear_payload(ui.ctx());
                actions.push(RowAction::Drop(DropResult::new(payload.index, Some(index))));
            }
        }

        for action in actions {
            match action {
                RowAction::Toggle(id) => {
                    self.editor.toggle_collapse(&id);
                }
                RowAction::Remove(id) => {
                    self.editor.remove(&id);
                }
                RowAction::Edit(id, url) => {
                    self.editor.edit(&id, url);
                }
                RowAction::Drop(drop) => {
                    self.editor.reorder(drop);
                }
            }
        }
    }
}
