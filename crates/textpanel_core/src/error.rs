//! Error types for the panel editors and the options store.
use thiserror::Error;

/// Top-level error type for panel editor operations.
#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Editor surface is no longer mounted")]
    SurfaceDisposed,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
