//! Host-side owner of the panel options.
//!
//! Widgets never touch [`PanelOptions`] directly: their change sinks push
//! [`OptionChange`] messages onto a queue, and the frame loop drains the queue
//! in arrival order before persisting.

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::path::{Path, PathBuf};
use textpanel_core::models::{EditorOptions, PanelOptions, Resource};
use textpanel_core::PanelError;
use tracing::{debug, warn};

/// One committed option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionChange {
    Content(String),
    DefaultContent(String),
    Helpers(String),
    Styles(String),
    ExternalStyles(Vec<Resource>),
    ExternalScripts(Vec<Resource>),
    Editor(EditorOptions),
}

/// Options value plus the queue its editors report into.
pub struct OptionsStore {
    options: PanelOptions,
    path: Option<PathBuf>,
    tx: Sender<OptionChange>,
    rx: Receiver<OptionChange>,
    save_failures: usize,
}

impl OptionsStore {
    /// Load options from `path` and persist every applied batch back to it.
    ///
    /// # Errors
    /// Returns an error when the existing options file cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PanelError> {
        let path = path.into();
        let options = PanelOptions::load(&path)?;
        let mut store = Self::in_memory(options);
        store.path = Some(path);
        Ok(store)
    }

    /// Store without a backing file.
    pub fn in_memory(options: PanelOptions) -> Self {
        let (tx, rx) = unbounded();
        Self {
            options,
            path: None,
            tx,
            rx,
            save_failures: 0,
        }
    }

    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of saves that failed since the store was opened.
    pub fn save_failures(&self) -> usize {
        self.save_failures
    }

    /// Queue handle for widgets and controls.
    pub fn sender(&self) -> Sender<OptionChange> {
        self.tx.clone()
    }

    /// Change sink for one option: every value passed in is wrapped with
    /// `wrap` and queued.
    pub fn sink<T, F>(&self, wrap: F) -> impl FnMut(T) + 'static
    where
        T: 'static,
        F: Fn(T) -> OptionChange + 'static,
    {
        let tx = self.sender();
        move |next: T| {
            if tx.send(wrap(next)).is_err() {
                warn!("options queue closed; change dropped");
            }
        }
    }

    /// Apply one change immediately, bypassing the queue.
    pub fn apply(&mut self, change: OptionChange) {
        debug!("applying {}", change_name(&change));
        match change {
            OptionChange::Content(text) => self.options.content = text,
            OptionChange::DefaultContent(text) => self.options.default_content = text,
            OptionChange::Helpers(text) => self.options.helpers = text,
            OptionChange::Styles(text) => self.options.styles = text,
            OptionChange::ExternalStyles(items) => self.options.external_styles = items,
            OptionChange::ExternalScripts(items) => self.options.external_scripts = items,
            OptionChange::Editor(editor) => self.options.editor = editor,
        }
    }

    /// Drain the queue in order and persist when anything changed.
    ///
    /// Save failures are logged and counted; the in-memory options stay
    /// authoritative.
    ///
    /// # Returns
    /// Number of changes applied.
    pub fn apply_pending(&mut self) -> usize {
        let mut applied = 0usize;
        while let Ok(change) = self.rx.try_recv() {
            self.apply(change);
            applied += 1;
        }
        if applied > 0 {
            if let Err(err) = self.save() {
                self.save_failures += 1;
                warn!("failed to save options: {}", err);
            }
        }
        applied
    }

    /// Write the options to the backing file, if any.
    ///
    /// # Errors
    /// Returns an error when the file cannot be written.
    pub fn save(&self) -> Result<(), PanelError> {
        match &self.path {
            Some(path) => self.options.save(path),
            None => Ok(()),
        }
    }
}

fn change_name(change: &OptionChange) -> &'static str {
    match change {
        OptionChange::Content(_) => "content",
        OptionChange::DefaultContent(_) => "defaultContent",
        OptionChange::Helpers(_) => "helpers",
        OptionChange::Styles(_) => "styles",
        OptionChange::ExternalStyles(_) => "externalStyles",
        OptionChange::ExternalScripts(_) => "externalScripts",
        OptionChange::Editor(_) => "editor",
    }
}
