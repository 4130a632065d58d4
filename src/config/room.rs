//! Room configuration types

use serde::{Deserialize, Serialize};

use crate::domain::{Outline, Point, RoomId, VariablesStorage};

/// Icon drawn inside a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconConfig {
    /// Text glyph painted in the icon chip (an emoji works well)
    pub glyph: String,

    /// Vacuum-space anchor; defaults to the outline centroid
    #[serde(default)]
    pub position: Option<Point>,
}

/// Text label drawn inside a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelConfig {
    pub text: String,

    /// Vacuum-space anchor; defaults to the outline centroid
    #[serde(default)]
    pub position: Option<Point>,

    /// Extra downward shift in screen pixels, for labels sharing a room
    /// with an icon
    #[serde(default)]
    pub offset_y: Option<f32>,
}

/// Static configuration of one room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Identifier the vacuum knows this room by
    pub id: RoomId,

    /// Literal outline points, or a reference into entity state
    pub outline: Outline,

    #[serde(default)]
    pub icon: Option<IconConfig>,

    #[serde(default)]
    pub label: Option<LabelConfig>,

    /// Per-room variable overrides; absent means the mode defaults apply
    #[serde(default)]
    pub variables: Option<VariablesStorage>,
}
