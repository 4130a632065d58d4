//! GUI runner - launches the map panel application

use std::path::{Path, PathBuf};

use anyhow::Result;
use eframe::egui;
use tracing::info;

use crate::config::CardConfig;
use crate::state::StateRegistry;

use super::app::MapApp;

/// Run the map panel
pub fn run_gui(
    work_dir: &Path,
    config_override: Option<PathBuf>,
    states_path: Option<PathBuf>,
) -> Result<()> {
    let config = match config_override {
        Some(path) => CardConfig::from_file(&path)?,
        None => CardConfig::from_dir(work_dir)?,
    };
    let states = match states_path {
        Some(path) => StateRegistry::from_file(&path)?,
        None => StateRegistry::new(),
    };

    info!(
        "[vacmap:gui] starting panel '{}' with {} mode(s) and {} known entit(ies)",
        config.title,
        config.modes.len(),
        states.len()
    );

    let title = config.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        "vacmap",
        options,
        Box::new(move |_cc| Ok(Box::new(MapApp::new(config, states)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {e}"))
}
