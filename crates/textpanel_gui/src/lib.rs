//! Desktop host for the text panel editors.
//!
//! Renders the panel-configuration sidebar with egui and exposes a `run`
//! helper so the workspace root can launch it without duplicating setup.

mod app;
/// Options store fed by the editor widgets through a change queue.
pub mod store;

use app::PanelEditorApp;
use eframe::egui;
use textpanel_core::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("textpanel_core=info,textpanel_gui=info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Start the editor sidebar with tracing enabled.
///
/// # Returns
/// The result of `eframe::run_native`.
///
/// # Errors
/// Propagates configuration and options-loading failures as app creation
/// errors, and any `eframe` runtime error.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let config = Config::from_env().map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;
    info!("options file: {}", config.options_path.display());
    let app =
        PanelEditorApp::new(&config).map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("Text Panel Editors"),
        ..Default::default()
    };

    eframe::run_native(
        "Text Panel Editors",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
