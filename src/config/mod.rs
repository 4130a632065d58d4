//! Configuration loading and management

mod calibration;
mod map_mode;
mod room;

pub use calibration::CalibrationConfig;
pub use map_mode::MapMode;
pub use room::{IconConfig, LabelConfig, RoomConfig};

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{Outline, Point, RoomId};

fn default_title() -> String {
    "vacmap".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,

    /// Vacuum-space area the panel displays
    #[serde(default)]
    pub calibration: CalibrationConfig,

    /// Selectable map modes
    #[serde(default)]
    pub modes: Vec<MapMode>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            calibration: CalibrationConfig::default(),
            modes: Vec::new(),
        }
    }
}

impl CardConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CardConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for: .vacmap/config.yaml (preferred), vacmap.yaml, then the
    /// user config directory, then built-in defaults
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let dotted = dir.join(".vacmap/config.yaml");
        if dotted.exists() {
            return Self::from_file(&dotted);
        }

        let local = dir.join("vacmap.yaml");
        if local.exists() {
            return Self::from_file(&local);
        }

        if let Some(user) = dirs::config_dir().map(|d| d.join("vacmap/config.yaml")) {
            if user.exists() {
                return Self::from_file(&user);
            }
        }

        Ok(Self::with_defaults())
    }

    /// Create a config with a demo floor plan, used when no config file
    /// exists
    pub fn with_defaults() -> Self {
        let rooms = vec![
            room(
                16,
                vec![
                    Point(64.0, 64.0),
                    Point(480.0, 64.0),
                    Point(480.0, 460.0),
                    Point(64.0, 460.0),
                ],
                "\u{1F6CB}",
                "Living room",
            ),
            room(
                17,
                vec![
                    Point(500.0, 64.0),
                    Point(960.0, 64.0),
                    Point(960.0, 320.0),
                    Point(500.0, 320.0),
                ],
                "\u{1F373}",
                "Kitchen",
            ),
            room(
                18,
                vec![
                    Point(500.0, 340.0),
                    Point(960.0, 340.0),
                    Point(960.0, 720.0),
                    Point(500.0, 720.0),
                ],
                "\u{1F6CF}",
                "Bedroom",
            ),
            room(
                19,
                vec![
                    Point(64.0, 480.0),
                    Point(280.0, 480.0),
                    Point(280.0, 720.0),
                    Point(64.0, 720.0),
                ],
                "\u{1F6C1}",
                "Bathroom",
            ),
            room(
                20,
                vec![
                    Point(64.0, 740.0),
                    Point(960.0, 740.0),
                    Point(960.0, 960.0),
                    Point(64.0, 960.0),
                ],
                "\u{1F6AA}",
                "Hallway",
            ),
        ];

        Self {
            title: default_title(),
            calibration: CalibrationConfig::default(),
            modes: vec![
                MapMode {
                    name: "Clean rooms".to_string(),
                    max_selections: 3,
                    run_immediately: false,
                    predefined_selections: rooms.clone(),
                    variables: Default::default(),
                },
                MapMode {
                    name: "Quick clean".to_string(),
                    max_selections: 1,
                    run_immediately: true,
                    predefined_selections: rooms,
                    variables: Default::default(),
                },
            ],
        }
    }
}

fn room(id: i64, outline: Vec<Point>, glyph: &str, label: &str) -> RoomConfig {
    RoomConfig {
        id: RoomId::Num(id),
        outline: Outline::Literal(outline),
        icon: Some(IconConfig {
            glyph: glyph.to_string(),
            position: None,
        }),
        label: Some(LabelConfig {
            text: label.to_string(),
            position: None,
            offset_y: Some(18.0),
        }),
        variables: None,
    }
}
