//! Panel options model and JSON persistence.

use crate::error::PanelError;
use crate::models::Resource;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Smallest editor height accepted by the host slider.
pub const MIN_EDITOR_HEIGHT: u32 = 100;
/// Largest editor height accepted by the host slider.
pub const MAX_EDITOR_HEIGHT: u32 = 2000;
/// Default editor height in pixels.
pub const DEFAULT_EDITOR_HEIGHT: u32 = 200;
/// Default template rendered by the panel.
pub const DEFAULT_CONTENT: &str = "```json\n{{{json @root}}}\n```";
/// Default text rendered when the query returns no rows.
pub const DEFAULT_EMPTY_CONTENT: &str = "The query didn't return any results.";

/// Editor languages known to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLanguage {
    Html,
    Markdown,
    Javascript,
    Scss,
}

/// Selector metadata for the primary content language radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub label: &'static str,
    pub value: CodeLanguage,
}

/// Languages the user may pick as the primary content language.
pub const PRIMARY_LANGUAGE_OPTIONS: &[LanguageOption] = &[
    LanguageOption {
        label: "HTML/Handlebars",
        value: CodeLanguage::Html,
    },
    LanguageOption {
        label: "Markdown",
        value: CodeLanguage::Markdown,
    },
];

impl CodeLanguage {
    /// Short name shown next to an editor.
    pub fn label(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Markdown => "Markdown",
            Self::Javascript => "JavaScript",
            Self::Scss => "SCSS",
        }
    }
}

/// Formatting policy for the code editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Auto,
    #[serde(rename = "none")]
    Manual,
}

impl Format {
    pub fn is_auto(self) -> bool {
        self == Self::Auto
    }
}

/// Shared settings for every code editor in the panel sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    pub language: CodeLanguage,
    pub format: Format,
    pub height: u32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            language: CodeLanguage::Markdown,
            format: Format::Auto,
            height: DEFAULT_EDITOR_HEIGHT,
        }
    }
}

impl EditorOptions {
    /// Editor height clamped to the slider range.
    pub fn height_px(&self) -> u32 {
        self.height.clamp(MIN_EDITOR_HEIGHT, MAX_EDITOR_HEIGHT)
    }
}

/// Options of a text panel as stored by the host.
///
/// Fields this crate does not edit are kept in `extra` so a load/save cycle
/// leaves them untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelOptions {
    pub editor: EditorOptions,
    pub content: String,
    pub default_content: String,
    pub helpers: String,
    pub styles: String,
    pub external_styles: Vec<Resource>,
    pub external_scripts: Vec<Resource>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            editor: EditorOptions::default(),
            content: DEFAULT_CONTENT.to_string(),
            default_content: DEFAULT_EMPTY_CONTENT.to_string(),
            helpers: String::new(),
            styles: String::new(),
            external_styles: Vec::new(),
            external_scripts: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl PanelOptions {
    /// Parse options from a JSON document.
    ///
    /// # Errors
    /// Returns [`PanelError::Serialization`] when the document is not valid
    /// options JSON.
    pub fn from_json(json: &str) -> Result<Self, PanelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize options as pretty JSON.
    ///
    /// # Errors
    /// Returns [`PanelError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PanelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load options from `path`, falling back to defaults when the file does
    /// not exist yet.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, PanelError> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("no options file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Write options to `path` via a sibling temp file and rename.
    ///
    /// # Errors
    /// Returns an error when the parent directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), PanelError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, self.to_json()?)?;
        fs::rename(&tmp_path, path)?;
        debug!("saved options to {}", path.display());
        Ok(())
    }
}
