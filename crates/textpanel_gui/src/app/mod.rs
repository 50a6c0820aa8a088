//! Editor sidebar app: four code editor sections, two resource lists, and the
//! options store they all write back into.

mod code_surface;
mod completion;
mod formatter;
mod style;
mod ui;

use crate::store::{OptionChange, OptionsStore};
use eframe::egui::{self, RichText};
use std::time::{Duration, Instant};
use style::*;
use textpanel_core::editor::FormatOutcome;
use textpanel_core::host::StaticVariables;
use textpanel_core::models::{PanelOptions, Resource};
use textpanel_core::{Config, ContentEditor, PanelError, ResourcesEditor};
use tracing::{info, warn};
use ui::editor_section::{EditorSection, TextField, TextSink};
use ui::resources_panel::{ResourcesPanel, ResourcesSink};

pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [560.0, 900.0];
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [380.0, 480.0];

/// What one round of format polling did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct FormatPoll {
    /// At least one surface was rewritten.
    formatted: bool,
    /// Time until the earliest format still armed.
    next_due: Option<Duration>,
}

/// Native egui host for the panel option editors.
///
/// Widgets report through change sinks that feed the store's queue; the store
/// applies and persists them at the top of the next frame.
pub(crate) struct PanelEditorApp {
    store: OptionsStore,
    variables: StaticVariables,
    sections: Vec<EditorSection>,
    external_styles: ResourcesPanel,
    external_scripts: ResourcesPanel,
    style_applied: bool,
}

impl PanelEditorApp {
    /// Build the app from startup configuration.
    ///
    /// # Errors
    /// Returns an error when persisted options exist but cannot be loaded.
    pub(crate) fn new(config: &Config) -> Result<Self, PanelError> {
        let store = if config.persist_options {
            OptionsStore::open(&config.options_path)?
        } else {
            info!("options persistence disabled; editing in memory");
            OptionsStore::in_memory(PanelOptions::default())
        };
        Ok(Self::with_store(store, config))
    }

    fn with_store(store: OptionsStore, config: &Config) -> Self {
        let text_sink =
            |store: &OptionsStore, wrap: fn(String) -> OptionChange| -> TextSink {
                Box::new(store.sink(wrap))
            };
        let list_sink =
            |store: &OptionsStore, wrap: fn(Vec<Resource>) -> OptionChange| -> ResourcesSink {
                Box::new(store.sink(wrap))
            };
        let delay = config.format_delay;

        let sections = vec![
            EditorSection::new(
                "Content",
                "Handlebars template rendered for every query result.",
                TextField::Content,
                ContentEditor::text(text_sink(&store, OptionChange::Content))
                    .with_format_delay(delay),
                true,
            ),
            EditorSection::new(
                "Default content",
                "Shown when the query returns no rows.",
                TextField::DefaultContent,
                ContentEditor::text(text_sink(&store, OptionChange::DefaultContent))
                    .with_format_delay(delay),
                false,
            ),
            EditorSection::new(
                "JavaScript",
                "Helpers registered before the template renders.",
                TextField::Helpers,
                ContentEditor::helpers(text_sink(&store, OptionChange::Helpers))
                    .with_format_delay(delay),
                false,
            ),
            EditorSection::new(
                "CSS styles",
                "SCSS applied to the rendered panel.",
                TextField::Styles,
                ContentEditor::styles(text_sink(&store, OptionChange::Styles))
                    .with_format_delay(delay),
                false,
            ),
        ];

        let options = store.options();
        let external_styles = ResourcesPanel::new(
            "External styles",
            "https://cdn.example.com/theme.css",
            ResourcesEditor::new(
                Some(options.external_styles.clone()),
                list_sink(&store, OptionChange::ExternalStyles),
            ),
        );
        let external_scripts = ResourcesPanel::new(
            "External scripts",
            "https://cdn.example.com/library.js",
            ResourcesEditor::new(
                Some(options.external_scripts.clone()),
                list_sink(&store, OptionChange::ExternalScripts),
            ),
        );

        Self {
            store,
            variables: StaticVariables::new(config.variables.clone()),
            sections,
            external_styles,
            external_scripts,
            style_applied: false,
        }
    }

    /// Poll every armed format-on-mount.
    fn poll_formats(&mut self, now: Instant) -> FormatPoll {
        let mut formatted = false;
        for section in &mut self.sections {
            match section.poll_format(now) {
                FormatOutcome::Formatted => formatted = true,
                FormatOutcome::Suppressed => warn!("initial format skipped: surface already gone"),
                FormatOutcome::Idle | FormatOutcome::Waiting => {}
            }
        }
        let next_due = self
            .sections
            .iter()
            .filter_map(EditorSection::next_format_deadline)
            .min()
            .map(|deadline| deadline.saturating_duration_since(now));
        FormatPoll {
            formatted,
            next_due,
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let path = self
            .store
            .path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "in memory".to_string());
        ui.horizontal(|ui| {
            ui.label(RichText::new(path).small().color(COLOR_TEXT_MUTED));
            if self.store.save_failures() > 0 {
                ui.label(
                    RichText::new(format!("{} failed saves", self.store.save_failures()))
                        .small()
                        .color(COLOR_ACCENT),
                );
            }
        });
    }

    /// One frame of the sidebar at time `now`.
    fn render_frame(&mut self, ctx: &egui::Context, now: Instant) {
        self.ensure_style(ctx);
        self.store.apply_pending();
        let options = self.store.options().clone();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_options_panel(ui);
                    ui.separator();
                    for section in &mut self.sections {
                        section.show(ui, &options, &self.variables, now);
                    }
                    ui.separator();
                    self.external_styles.show(ui);
                    self.external_scripts.show(ui);
                });
        });
        ResourcesPanel::resolve_outside_drop(
            ctx,
            &mut [&mut self.external_styles, &mut self.external_scripts],
        );

        // Formats run after the sections drew, so the new text needs another frame.
        let poll = self.poll_formats(now);
        if poll.formatted {
            ctx.request_repaint();
        } else if let Some(wait) = poll.next_due {
            ctx.request_repaint_after(wait);
        }
    }
}

impl eframe::App for PanelEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_frame(ctx, Instant::now());
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Hidden sections have nothing to flush; open ones commit their text.
        let options = self.store.options().clone();
        let now = Instant::now();
        for section in &mut self.sections {
            if section.is_open() {
                section.set_open(false, &options, now);
            }
        }
        self.store.apply_pending();
    }
}
