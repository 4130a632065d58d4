use serde::{Deserialize, Serialize};

/// A coordinate pair in vacuum (device) space.
///
/// Serialized as a two-element array `[x, y]`, the form vacuum firmwares
/// report room outlines in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }
}
