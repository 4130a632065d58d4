//! Map panel colors and stroke rules
//!
//! Everything here is look-and-feel only; no selection semantics depend on
//! these values.

use egui::{Color32, Stroke};

pub const BG_MAP: Color32 = Color32::from_rgb(24, 26, 31);
pub const BG_PANEL: Color32 = Color32::from_rgb(32, 35, 42);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(220, 223, 228);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(128, 134, 142);
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(97, 175, 239);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(152, 195, 121);
pub const ACCENT_RED: Color32 = Color32::from_rgb(224, 108, 117);

/// Visual rules for rooms in both selection states
#[derive(Debug, Clone)]
pub struct MapTheme {
    pub outline_stroke: Stroke,
    pub outline_fill: Color32,
    pub outline_stroke_selected: Stroke,
    pub outline_fill_selected: Color32,

    /// Dash pattern of the room outline, in screen pixels
    pub dash_length: f32,
    pub gap_length: f32,

    pub icon_size: f32,
    pub icon_background: Color32,
    pub icon_background_selected: Color32,
    pub icon_color: Color32,
    pub icon_color_selected: Color32,

    pub label_font_size: f32,
    pub label_color: Color32,
    pub label_color_selected: Color32,
}

impl Default for MapTheme {
    fn default() -> Self {
        Self {
            outline_stroke: Stroke::new(1.5, TEXT_MUTED),
            outline_fill: Color32::from_rgba_unmultiplied(97, 175, 239, 18),
            outline_stroke_selected: Stroke::new(2.0, ACCENT_BLUE),
            outline_fill_selected: Color32::from_rgba_unmultiplied(97, 175, 239, 60),
            dash_length: 6.0,
            gap_length: 4.0,
            icon_size: 22.0,
            icon_background: BG_PANEL,
            icon_background_selected: ACCENT_BLUE,
            icon_color: TEXT_PRIMARY,
            icon_color_selected: BG_MAP,
            label_font_size: 13.0,
            label_color: TEXT_MUTED,
            label_color_selected: TEXT_PRIMARY,
        }
    }
}

impl MapTheme {
    /// Fill and stroke for a room outline
    pub fn outline(&self, selected: bool) -> (Color32, Stroke) {
        if selected {
            (self.outline_fill_selected, self.outline_stroke_selected)
        } else {
            (self.outline_fill, self.outline_stroke)
        }
    }

    /// Background and glyph color for a room icon chip
    pub fn icon(&self, selected: bool) -> (Color32, Color32) {
        if selected {
            (self.icon_background_selected, self.icon_color_selected)
        } else {
            (self.icon_background, self.icon_color)
        }
    }

    /// Text color for a room label
    pub fn label(&self, selected: bool) -> Color32 {
        if selected {
            self.label_color_selected
        } else {
            self.label_color
        }
    }
}
