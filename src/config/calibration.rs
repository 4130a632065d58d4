//! Map calibration

use serde::{Deserialize, Serialize};

use crate::domain::Point;

fn default_min() -> Point {
    Point(0.0, 0.0)
}

fn default_max() -> Point {
    Point(1024.0, 1024.0)
}

/// Vacuum-space rectangle shown by the panel
///
/// The panel fits this rectangle into the widget, preserving aspect ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationConfig {
    #[serde(default = "default_min")]
    pub min: Point,

    #[serde(default = "default_max")]
    pub max: Point,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
        }
    }
}

impl CalibrationConfig {
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }
}
