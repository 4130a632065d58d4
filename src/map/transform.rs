//! Vacuum-space to screen-space mapping

use egui::{Pos2, Rect};

use crate::config::CalibrationConfig;
use crate::domain::Point;

/// Linear mapping from vacuum coordinates to a screen rectangle
///
/// Uniform scale with the aspect ratio preserved; the calibrated area is
/// centered in the target rect.
#[derive(Debug, Clone, Copy)]
pub struct MapTransform {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
    origin_x: f64,
    origin_y: f64,
}

impl MapTransform {
    /// Fit the calibrated vacuum area into `target`
    pub fn fit(calibration: &CalibrationConfig, target: Rect) -> Self {
        let width = calibration.width().max(f64::EPSILON) as f32;
        let height = calibration.height().max(f64::EPSILON) as f32;
        let scale = (target.width() / width).min(target.height() / height);

        Self {
            scale,
            offset_x: target.left() + (target.width() - width * scale) / 2.0,
            offset_y: target.top() + (target.height() - height * scale) / 2.0,
            origin_x: calibration.min.x(),
            origin_y: calibration.min.y(),
        }
    }

    /// Map one vacuum-space point to screen space
    pub fn vacuum_to_map(&self, p: Point) -> Pos2 {
        Pos2::new(
            self.offset_x + (p.x() - self.origin_x) as f32 * self.scale,
            self.offset_y + (p.y() - self.origin_y) as f32 * self.scale,
        )
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calibration(min: Point, max: Point) -> CalibrationConfig {
        CalibrationConfig { min, max }
    }

    #[test]
    fn square_area_fills_square_target() {
        let cal = calibration(Point(0.0, 0.0), Point(1024.0, 1024.0));
        let target = Rect::from_min_size(Pos2::ZERO, egui::Vec2::splat(512.0));
        let transform = MapTransform::fit(&cal, target);

        assert_eq!(transform.scale(), 0.5);
        assert_eq!(transform.vacuum_to_map(Point(0.0, 0.0)), Pos2::new(0.0, 0.0));
        assert_eq!(
            transform.vacuum_to_map(Point(1024.0, 1024.0)),
            Pos2::new(512.0, 512.0)
        );
        assert_eq!(
            transform.vacuum_to_map(Point(512.0, 256.0)),
            Pos2::new(256.0, 128.0)
        );
    }

    #[test]
    fn wide_target_centers_horizontally() {
        let cal = calibration(Point(0.0, 0.0), Point(100.0, 100.0));
        let target = Rect::from_min_size(Pos2::ZERO, egui::Vec2::new(300.0, 100.0));
        let transform = MapTransform::fit(&cal, target);

        assert_eq!(transform.scale(), 1.0);
        // 100px of content in a 300px target leaves 100px on each side
        assert_eq!(
            transform.vacuum_to_map(Point(0.0, 0.0)),
            Pos2::new(100.0, 0.0)
        );
    }

    #[test]
    fn nonzero_origin_is_subtracted() {
        let cal = calibration(Point(200.0, 200.0), Point(400.0, 400.0));
        let target = Rect::from_min_size(Pos2::ZERO, egui::Vec2::splat(200.0));
        let transform = MapTransform::fit(&cal, target);

        assert_eq!(
            transform.vacuum_to_map(Point(200.0, 200.0)),
            Pos2::new(0.0, 0.0)
        );
        assert_eq!(
            transform.vacuum_to_map(Point(300.0, 250.0)),
            Pos2::new(100.0, 50.0)
        );
    }
}
