//! Code surface: the egui stand-in for a code editor component.
//!
//! One surface per content editor. The document lives in a shared buffer so
//! the "format document" action handed to the editor on mount can reach it;
//! the action only holds a weak handle and reports a disposed surface once the
//! buffer is dropped by unmount.

use super::completion::{apply_completion, filter_suggestions, word_prefix};
use super::formatter::{format_document, map_cursor};
use super::style::{COLOR_ACCENT, COLOR_BG_TERTIARY, COLOR_BORDER, COLOR_GUTTER, COLOR_TEXT_MUTED};
use eframe::egui::{
    self,
    text::{CCursor, CCursorRange},
    RichText, TextStyle,
};
use egui_extras::syntax_highlighting::{highlight, CodeTheme};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use textpanel_core::editor::SurfaceProps;
use textpanel_core::models::{CodeLanguage, SuggestionItem};
use textpanel_core::{FormatAction, PanelError};
use tracing::debug;

const GUTTER_MIN_DIGITS: usize = 2;
const MINIMAP_WIDTH: f32 = 56.0;
const MINIMAP_MAX_LINE_CHARS: f32 = 120.0;
const MINIMAP_ROW_HEIGHT: f32 = 2.0;

/// What the surface reported during one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SurfaceEvent {
    Blur(String),
    Save(String),
}

#[derive(Debug)]
struct SurfaceBuffer {
    text: String,
    language: CodeLanguage,
    dirty: bool,
}

impl SurfaceBuffer {
    fn format(&mut self) -> bool {
        let formatted = format_document(self.language, &self.text);
        if formatted == self.text {
            return false;
        }
        self.text = formatted;
        self.dirty = true;
        true
    }
}

/// "Format document" bound to a mounted surface.
pub(crate) struct SurfaceFormatAction {
    buffer: Weak<RefCell<SurfaceBuffer>>,
}

impl FormatAction for SurfaceFormatAction {
    fn run(&mut self) -> Result<(), PanelError> {
        let buffer = self.buffer.upgrade().ok_or(PanelError::SurfaceDisposed)?;
        let changed = buffer.borrow_mut().format();
        debug!("format document ran (changed: {})", changed);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct CompletionState {
    selected: usize,
    visible: usize,
    dismissed_prefix: Option<String>,
}

pub(crate) struct CodeSurface {
    id: egui::Id,
    buffer: Option<Rc<RefCell<SurfaceBuffer>>>,
    completion: CompletionState,
}

impl CodeSurface {
    pub(crate) fn new(id_salt: impl std::hash::Hash) -> Self {
        Self {
            id: egui::Id::new(("code_surface", id_salt)),
            buffer: None,
            completion: CompletionState::default(),
        }
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.buffer.is_some()
    }

    /// Create the document from `props` and hand back its format action.
    pub(crate) fn mount(&mut self, props: &SurfaceProps) -> Box<dyn FormatAction> {
        let buffer = Rc::new(RefCell::new(SurfaceBuffer {
            text: props.value.clone(),
            language: props.language,
            dirty: false,
        }));
        let action = SurfaceFormatAction {
            buffer: Rc::downgrade(&buffer),
        };
        self.buffer = Some(buffer);
        self.completion = CompletionState::default();
        Box::new(action)
    }

    /// Drop the document.
    ///
    /// # Returns
    /// The text when it holds edits nobody committed yet.
    pub(crate) fn unmount(&mut self) -> Option<String> {
        let buffer = self.buffer.take()?;
        let buffer = buffer.borrow();
        buffer.dirty.then(|| buffer.text.clone())
    }

    /// Current document, if mounted.
    #[cfg(test)]
    pub(crate) fn text(&self) -> Option<String> {
        self.buffer.as_ref().map(|buffer| buffer.borrow().text.clone())
    }

    pub(crate) fn show(
        &mut self,
        ui: &mut egui::Ui,
        props: &SurfaceProps,
        suggestions: &[SuggestionItem],
    ) -> Vec<SurfaceEvent> {
        let Some(buffer) = self.buffer.clone() else {
            return Vec::new();
        };
        buffer.borrow_mut().language = props.language;

        let ctx = ui.ctx().clone();
        let focused = ui.memory(|m| m.has_focus(self.id));
        let mut events = Vec::new();

        let (pasted, typed_trigger) = ui.input(|input| {
            let pasted = input
                .events
                .iter()
                .any(|event| matches!(event, egui::Event::Paste(_)));
            let typed = input.events.iter().any(|event| {
                matches!(event, egui::Event::Text(text) if text.ends_with(['}', ';']))
            });
            (pasted, typed)
        });

        let mut accept_completion = false;
        let mut save_requested = false;
        if focused {
            ui.input_mut(|input| {
                save_requested = input.consume_key(egui::Modifiers::COMMAND, egui::Key::S);
                if self.completion.visible > 0 {
                    accept_completion = input.consume_key(egui::Modifiers::NONE, egui::Key::Tab);
                    if input.consume_key(egui::Modifiers::NONE, egui::Key::ArrowDown) {
                        self.completion.selected =
                            (self.completion.selected + 1) % self.completion.visible;
                    }
                    if input.consume_key(egui::Modifiers::NONE, egui::Key::ArrowUp) {
                        self.completion.selected = self
                            .completion
                            .selected
                            .checked_sub(1)
                            .unwrap_or(self.completion.visible - 1);
                    }
                    if input.consume_key(egui::Modifiers::NONE, egui::Key::Escape) {
                        self.completion.visible = 0;
                        self.completion.dismissed_prefix = Some(String::new());
                    }
                }
            });
        }

        let theme = CodeTheme::from_memory(ui.ctx(), ui.style());
        let token = syntax_token(props.language);
        let mut layouter = |ui: &egui::Ui, text: &dyn egui::TextBuffer, _wrap_width: f32| {
            let mut job = highlight(ui.ctx(), ui.style(), &theme, text.as_str(), token);
            job.wrap.max_width = f32::INFINITY;
            ui.fonts_mut(|f| f.layout_job(job))
        };

        let output = egui::Frame::new()
            .fill(COLOR_BG_TERTIARY)
            .stroke(egui::Stroke::new(1.0, COLOR_BORDER))
            .inner_margin(egui::Margin::same(4))
            .show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    let minimap_room = if props.show_minimap {
                        MINIMAP_WIDTH + ui.spacing().item_spacing.x
                    } else {
                        0.0
                    };
                    let scroll = egui::ScrollArea::both()
                        .id_salt(self.id.with("scroll"))
                        .max_width((ui.available_width() - minimap_room).max(0.0))
                        .max_height(props.height_px as f32)
                        .min_scrolled_height(props.height_px as f32)
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            ui.horizontal_top(|ui| {
                                let mut guard = buffer.borrow_mut();
                                if props.show_line_numbers {
                                    show_gutter(ui, &guard.text);
                                }
                                let output = egui::TextEdit::multiline(&mut guard.text)
                                    .id(self.id)
                                    .code_editor()
                                    .desired_width(f32::INFINITY)
                                    .frame(false)
                                    .layouter(&mut layouter)
                                    .show(ui);
                                if output.response.changed() {
                                    guard.dirty = true;
                                }
                                output
                            })
                            .inner
                        });
                    if props.show_minimap {
                        let height = scroll.inner_rect.height();
                        show_minimap(ui, &buffer.borrow().text, height);
                    }
                    scroll.inner
                })
                .inner
            })
            .inner;

        let cursor = output.cursor_range.map(|range| range.primary.index);
        let changed = output.response.changed();

        let reformat = (pasted && props.autoformat.format_on_paste && changed)
            || (typed_trigger && props.autoformat.format_on_type && changed);
        if reformat {
            let mut guard = buffer.borrow_mut();
            let before = guard.text.clone();
            if guard.format() {
                if let Some(cursor) = cursor {
                    let mapped = map_cursor(&before, &guard.text, cursor);
                    move_cursor(&ctx, self.id, mapped);
                }
                ctx.request_repaint();
            }
        }

        if focused || output.response.has_focus() {
            if let Some(cursor) = cursor {
                self.show_completion(
                    ui,
                    &buffer,
                    &output.response,
                    cursor,
                    suggestions,
                    accept_completion,
                );
            }
        } else {
            self.completion.visible = 0;
        }

        if save_requested {
            let mut guard = buffer.borrow_mut();
            guard.dirty = false;
            events.push(SurfaceEvent::Save(guard.text.clone()));
        }
        if output.response.lost_focus() {
            let mut guard = buffer.borrow_mut();
            guard.dirty = false;
            self.completion.visible = 0;
            events.push(SurfaceEvent::Blur(guard.text.clone()));
        }
        events
    }

    fn show_completion(
        &mut self,
        ui: &egui::Ui,
        buffer: &Rc<RefCell<SurfaceBuffer>>,
        anchor: &egui::Response,
        cursor: usize,
        suggestions: &[SuggestionItem],
        accept: bool,
    ) {
        let (start, prefix) = word_prefix(&buffer.borrow().text, cursor);
        if self
            .completion
            .dismissed_prefix
            .as_ref()
            .is_some_and(|dismissed| dismissed.is_empty() || *dismissed == prefix)
        {
            self.completion.dismissed_prefix = Some(prefix);
            self.completion.visible = 0;
            return;
        }
        self.completion.dismissed_prefix = None;

        let matches = filter_suggestions(suggestions, &prefix);
        if matches.len() != self.completion.visible {
            self.completion.selected = 0;
        }
        self.completion.visible = matches.len();
        if matches.is_empty() {
            return;
        }

        let mut chosen = accept.then_some(self.completion.selected);
        egui::Area::new(self.id.with("completion"))
            .order(egui::Order::Foreground)
            .fixed_pos(anchor.rect.left_bottom())
            .show(ui.ctx(), |ui| {
                egui::Frame::popup(ui.style())
                    .stroke(egui::Stroke::new(1.0, COLOR_BORDER))
                    .show(ui, |ui| {
                        for (idx, item) in matches.iter().enumerate() {
                            let row = ui.selectable_label(
                                idx == self.completion.selected,
                                RichText::new(format!("{}  {}", item.kind.tag(), item.label))
                                    .monospace(),
                            );
                            let row = if item.detail.is_empty() {
                                row
                            } else {
                                row.on_hover_text(item.detail.as_str())
                            };
                            if row.clicked() {
                                chosen = Some(idx);
                            }
                        }
                        ui.label(
                            RichText::new("Tab to insert")
                                .small()
                                .color(COLOR_TEXT_MUTED),
                        );
                    });
            });

        let Some(label) = chosen
            .and_then(|idx| matches.get(idx))
            .map(|item| item.label.clone())
        else {
            return;
        };
        let mut guard = buffer.borrow_mut();
        let (text, next_cursor) = apply_completion(&guard.text, start, cursor, &label);
        guard.text = text;
        guard.dirty = true;
        self.completion.visible = 0;
        move_cursor(ui.ctx(), self.id, next_cursor);
        ui.ctx().memory_mut(|m| m.request_focus(self.id));
    }
}

/// Syntax name understood by the bundled syntect definitions.
fn syntax_token(language: CodeLanguage) -> &'static str {
    match language {
        CodeLanguage::Html => "html",
        CodeLanguage::Markdown => "md",
        CodeLanguage::Javascript => "js",
        // No SCSS grammar ships with syntect's defaults.
        CodeLanguage::Scss => "css",
    }
}

fn move_cursor(ctx: &egui::Context, id: egui::Id, char_index: usize) {
    if let Some(mut state) = egui::TextEdit::load_state(ctx, id) {
        state
            .cursor
            .set_char_range(Some(CCursorRange::one(CCursor::new(char_index))));
        state.store(ctx, id);
    }
}

fn show_gutter(ui: &mut egui::Ui, text: &str) {
    let lines = text.split('\n').count().max(1);
    let digits = lines.to_string().len().max(GUTTER_MIN_DIGITS);
    let numbers = (1..=lines)
        .map(|line| format!("{line:>digits$}"))
        .collect::<Vec<_>>()
        .join("\n");
    ui.add(
        egui::Label::new(
            RichText::new(numbers)
                .text_style(TextStyle::Monospace)
                .color(COLOR_GUTTER),
        )
        .selectable(false),
    );
}

fn show_minimap(ui: &mut egui::Ui, text: &str, height: f32) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(MINIMAP_WIDTH, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, COLOR_BG_TERTIARY);
    let lines: Vec<&str> = text.split('\n').collect();
    let row = (height / lines.len().max(1) as f32).min(MINIMAP_ROW_HEIGHT);
    for (idx, line) in lines.iter().enumerate() {
        let indent = line.len() - line.trim_start().len();
        let visible = line.trim().chars().count() as f32;
        if visible == 0.0 {
            continue;
        }
        let scale = (MINIMAP_WIDTH - 4.0) / MINIMAP_MAX_LINE_CHARS;
        let left = rect.left() + 2.0 + indent as f32 * scale;
        let right = (left + visible * scale).min(rect.right() - 2.0);
        let y = rect.top() + idx as f32 * row;
        if y > rect.bottom() {
            break;
        }
        painter.line_segment(
            [egui::pos2(left, y), egui::pos2(right, y)],
            egui::Stroke::new(row.max(1.0) * 0.6, COLOR_ACCENT.gamma_multiply(0.5)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(value: &str, language: CodeLanguage) -> SurfaceProps {
        SurfaceProps {
            language,
            show_line_numbers: true,
            show_minimap: false,
            value: value.to_string(),
            height_px: 200,
            autoformat: Default::default(),
        }
    }

    #[test]
    fn format_action_rewrites_the_mounted_document() {
        let mut surface = CodeSurface::new("helpers");
        let mut action = surface.mount(&props("if (a) {\nb();\n}", CodeLanguage::Javascript));

        action.run().expect("mounted surface formats");

        assert_eq!(surface.text().as_deref(), Some("if (a) {\n  b();\n}"));
        assert_eq!(surface.unmount().as_deref(), Some("if (a) {\n  b();\n}"));
    }

    #[test]
    fn format_action_reports_disposed_surface_after_unmount() {
        let mut surface = CodeSurface::new("styles");
        let mut action = surface.mount(&props("a {}", CodeLanguage::Scss));
        assert_eq!(surface.unmount(), None);

        let err = action.run().expect_err("surface is gone");
        assert!(matches!(err, PanelError::SurfaceDisposed));
        assert!(!surface.is_mounted());
    }

    #[test]
    fn remount_disposes_the_previous_document() {
        let mut surface = CodeSurface::new("content");
        let mut stale = surface.mount(&props("one", CodeLanguage::Markdown));
        let _fresh = surface.mount(&props("two", CodeLanguage::Markdown));

        assert!(matches!(stale.run(), Err(PanelError::SurfaceDisposed)));
        assert_eq!(surface.text().as_deref(), Some("two"));
    }

    #[test]
    fn scss_highlights_with_the_css_grammar() {
        assert_eq!(syntax_token(CodeLanguage::Scss), "css");
        assert_eq!(syntax_token(CodeLanguage::Markdown), "md");
    }

    #[test]
    fn surface_renders_headless() {
        let mut surface = CodeSurface::new("render");
        let props = SurfaceProps {
            show_minimap: true,
            ..props("{{title}}\n", CodeLanguage::Html)
        };
        surface.mount(&props);
        egui::__run_test_ctx(|ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let events = surface.show(ui, &props, &[]);
                assert!(events.is_empty());
            });
        });
        assert_eq!(surface.text().as_deref(), Some("{{title}}\n"));
    }
}
