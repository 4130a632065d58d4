//! Shared map-object capabilities
//!
//! One kit per mode activation carries the calibration, the theme, the
//! default variables, and the icon/label painting helpers. Map objects hold
//! a reference to the kit instead of deriving from a base object.

use egui::{Align2, FontId, Id, Pos2, Rect, Response, Sense, Ui, Vec2};

use crate::config::{CalibrationConfig, IconConfig, LabelConfig};
use crate::domain::VariablesStorage;

use super::theme::MapTheme;
use super::transform::MapTransform;

pub struct MapObjectKit {
    calibration: CalibrationConfig,
    theme: MapTheme,
    default_variables: VariablesStorage,
}

impl MapObjectKit {
    pub fn new(
        calibration: CalibrationConfig,
        theme: MapTheme,
        default_variables: VariablesStorage,
    ) -> Self {
        Self {
            calibration,
            theme,
            default_variables,
        }
    }

    pub fn theme(&self) -> &MapTheme {
        &self.theme
    }

    /// Transform fitting the calibrated vacuum area into `target`
    pub fn transform_for(&self, target: Rect) -> MapTransform {
        MapTransform::fit(&self.calibration, target)
    }

    /// Default variables for objects without an override
    pub fn variables(&self) -> &VariablesStorage {
        &self.default_variables
    }

    /// Paint a clickable icon chip; `anchor` is already in screen space
    pub fn render_icon(
        &self,
        ui: &mut Ui,
        icon: &IconConfig,
        anchor: Pos2,
        selected: bool,
        id: Id,
    ) -> Response {
        let size = self.theme.icon_size;
        let rect = Rect::from_center_size(anchor, Vec2::splat(size));
        let response = ui.interact(rect, id, Sense::click());

        let (background, color) = self.theme.icon(selected);
        let painter = ui.painter();
        painter.rect_filled(rect, 4.0, background);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            &icon.glyph,
            FontId::proportional(size * 0.7),
            color,
        );

        response
    }

    /// Paint a text label; labels never take pointer input
    pub fn render_label(&self, ui: &Ui, label: &LabelConfig, anchor: Pos2, selected: bool) {
        let pos = Pos2::new(anchor.x, anchor.y + label.offset_y.unwrap_or(0.0));
        ui.painter().text(
            pos,
            Align2::CENTER_CENTER,
            &label.text,
            FontId::proportional(self.theme.label_font_size),
            self.theme.label(selected),
        );
    }
}
