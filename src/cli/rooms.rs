//! `vacmap rooms` - resolve entity-referenced rooms and list them

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use vacmap::config::CardConfig;
use vacmap::map::{MapObjectKit, MapTheme, Room, SelectionContext};
use vacmap::state::StateRegistry;
use vacmap::ResolvedOutline;

/// Resolve rooms from an entity state snapshot and list them per mode
pub async fn rooms_command(
    work_dir: &Path,
    config_override: Option<PathBuf>,
    states_path: PathBuf,
) -> Result<()> {
    let config = match config_override {
        Some(path) => CardConfig::from_file(&path)?,
        None => CardConfig::from_dir(work_dir)?,
    };
    let states = StateRegistry::from_file(&states_path)?;

    for mode in &config.modes {
        let kit = Arc::new(MapObjectKit::new(
            config.calibration.clone(),
            MapTheme::default(),
            mode.variables.clone(),
        ));
        let rooms = Room::from_entities(mode, &states, &kit, SelectionContext::detached)
            .with_context(|| format!("Failed to derive rooms for mode '{}'", mode.name))?;

        println!("{}: {} entity-derived room(s)", mode.name, rooms.len());
        for room in &rooms {
            match room.outline() {
                ResolvedOutline::Points(points) => {
                    println!("  {} - {} point(s)", room.vacuum_id(), points.len());
                }
                ResolvedOutline::Raw(raw) => {
                    println!("  {} - unresolved value: {raw}", room.vacuum_id());
                }
            }
        }
    }

    Ok(())
}
