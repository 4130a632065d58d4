//! The room map object
//!
//! One selectable polygonal region on the floor map. A room paints itself,
//! reports clicks to the selection coordinator, and mirrors the
//! coordinator's answer in its `selected` flag.

use std::sync::Arc;

use egui::{Id, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};
use tracing::debug;

use crate::config::{MapMode, RoomConfig};
use crate::domain::{Outline, ResolvedOutline, RoomId, VariablesStorage};
use crate::state::{StateError, StateRegistry};

use super::coordinator::SelectionContext;
use super::object::MapObjectKit;
use super::transform::MapTransform;

pub struct Room {
    config: RoomConfig,
    outline: ResolvedOutline,
    selected: bool,
    kit: Arc<MapObjectKit>,
    context: SelectionContext,
}

impl Room {
    /// Build a room from configuration alone.
    ///
    /// Literal outlines pass through. Reference outlines are not resolved
    /// here and degenerate to raw values; use [`Room::from_entities`] for
    /// those.
    pub fn new(config: RoomConfig, kit: Arc<MapObjectKit>, context: SelectionContext) -> Self {
        let outline = ResolvedOutline::from(&config.outline);
        Self {
            config,
            outline,
            selected: false,
            kit,
            context,
        }
    }

    /// Build rooms for every predefined selection whose outline references
    /// entity state.
    ///
    /// The referenced entity (and attribute, if named) must exist; a missing
    /// one fails the whole batch. Values that resolve but do not decode as
    /// coordinates keep their raw form and render as empty polygons.
    pub fn from_entities(
        mode: &MapMode,
        states: &StateRegistry,
        kit: &Arc<MapObjectKit>,
        mut context_factory: impl FnMut() -> SelectionContext,
    ) -> Result<Vec<Self>, StateError> {
        let mut rooms = Vec::new();
        for config in &mode.predefined_selections {
            let Outline::Reference(reference) = &config.outline else {
                continue;
            };
            let value = states.resolve(reference)?;
            rooms.push(Self {
                config: config.clone(),
                outline: ResolvedOutline::from_value(&value),
                selected: false,
                kit: Arc::clone(kit),
                context: context_factory(),
            });
        }
        Ok(rooms)
    }

    /// Identifier the map-scaling subsystem addresses the vacuum with
    pub fn vacuum_id(&self) -> &RoomId {
        &self.config.id
    }

    pub fn outline(&self) -> &ResolvedOutline {
        &self.outline
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Applied from coordinator `Changed` events; never flipped locally
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// This room's variable overrides, falling back to the kit defaults
    pub fn variables(&self) -> &VariablesStorage {
        self.config
            .variables
            .as_ref()
            .unwrap_or_else(|| self.kit.variables())
    }

    /// Outline mapped into screen space; empty for unresolved outlines
    pub fn scaled_outline(&self, transform: &MapTransform) -> Vec<Pos2> {
        self.outline
            .points()
            .iter()
            .map(|p| transform.vacuum_to_map(*p))
            .collect()
    }

    /// Paint the room and report clicks to the coordinator
    pub fn show(&self, ui: &mut Ui, transform: &MapTransform) {
        let points = self.scaled_outline(transform);
        let theme = self.kit.theme();
        let (fill, stroke) = theme.outline(self.selected);

        let mut clicked = false;

        if points.len() >= 3 {
            let bounds = Rect::from_points(&points);
            let response = ui.interact(bounds, self.widget_id(), Sense::click());
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    clicked = point_in_polygon(pos, &points);
                }
            }

            let painter = ui.painter();
            painter.add(Shape::convex_polygon(points.clone(), fill, Stroke::NONE));
            let mut closed = points.clone();
            closed.push(points[0]);
            painter.extend(Shape::dashed_line(
                &closed,
                stroke,
                theme.dash_length,
                theme.gap_length,
            ));
        }

        let anchor = centroid(&points);
        if let Some(icon) = &self.config.icon {
            let pos = icon
                .position
                .map(|p| transform.vacuum_to_map(p))
                .or(anchor);
            if let Some(pos) = pos {
                let response =
                    self.kit
                        .render_icon(ui, icon, pos, self.selected, self.widget_id().with("icon"));
                clicked |= response.clicked();
            }
        }
        if let Some(label) = &self.config.label {
            let pos = label
                .position
                .map(|p| transform.vacuum_to_map(p))
                .or(anchor);
            if let Some(pos) = pos {
                self.kit.render_label(ui, label, pos, self.selected);
            }
        }

        if clicked {
            debug!("[vacmap:room] click on room {}", self.config.id);
            self.context.toggle(self.config.id.clone());
        }
    }

    /// Egui widget id, unique per room; spaces in room ids are flattened to
    /// underscores
    fn widget_id(&self) -> Id {
        Id::new(sanitize_id(&self.config.id.to_string()))
    }
}

fn sanitize_id(id: &str) -> String {
    id.replace(' ', "_")
}

fn centroid(points: &[Pos2]) -> Option<Pos2> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    Some((sum / points.len() as f32).to_pos2())
}

/// Ray-casting point-in-polygon test; callers guarantee at least 3 vertices
fn point_in_polygon(p: Pos2, polygon: &[Pos2]) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalibrationConfig;
    use crate::domain::Point;
    use crate::map::theme::MapTheme;

    fn kit() -> Arc<MapObjectKit> {
        Arc::new(MapObjectKit::new(
            CalibrationConfig::default(),
            MapTheme::default(),
            Default::default(),
        ))
    }

    fn literal_room(id: RoomId, points: Vec<Point>) -> Room {
        Room::new(
            RoomConfig {
                id,
                outline: Outline::Literal(points),
                icon: None,
                label: None,
                variables: None,
            },
            kit(),
            SelectionContext::detached(),
        )
    }

    #[test]
    fn scaled_outline_transforms_every_point() {
        let points = vec![
            Point(0.0, 0.0),
            Point(512.0, 0.0),
            Point(512.0, 512.0),
            Point(256.0, 768.0),
            Point(0.0, 512.0),
        ];
        let room = literal_room(RoomId::Num(7), points.clone());
        let transform = MapTransform::fit(
            &CalibrationConfig::default(),
            Rect::from_min_size(Pos2::ZERO, Vec2::splat(512.0)),
        );

        let scaled = room.scaled_outline(&transform);
        assert_eq!(scaled.len(), points.len());
        for (vacuum, screen) in points.iter().zip(&scaled) {
            assert_eq!(transform.vacuum_to_map(*vacuum), *screen);
        }
    }

    #[test]
    fn vacuum_id_is_the_configured_id() {
        let room = literal_room(RoomId::Str("living room".to_string()), vec![]);
        assert_eq!(
            room.vacuum_id(),
            &RoomId::Str("living room".to_string())
        );
    }

    #[test]
    fn sanitized_id_replaces_spaces() {
        assert_eq!(sanitize_id("living room 2"), "living_room_2");
        assert_eq!(sanitize_id("kitchen"), "kitchen");
    }

    #[test]
    fn point_in_polygon_square() {
        let square = vec![
            Pos2::new(0.0, 0.0),
            Pos2::new(10.0, 0.0),
            Pos2::new(10.0, 10.0),
            Pos2::new(0.0, 10.0),
        ];
        assert!(point_in_polygon(Pos2::new(5.0, 5.0), &square));
        assert!(!point_in_polygon(Pos2::new(15.0, 5.0), &square));
        assert!(!point_in_polygon(Pos2::new(5.0, -1.0), &square));
    }

    #[test]
    fn point_in_polygon_concave() {
        // L-shape; the notch at the top right is outside
        let shape = vec![
            Pos2::new(0.0, 0.0),
            Pos2::new(4.0, 0.0),
            Pos2::new(4.0, 8.0),
            Pos2::new(8.0, 8.0),
            Pos2::new(8.0, 12.0),
            Pos2::new(0.0, 12.0),
        ];
        assert!(point_in_polygon(Pos2::new(2.0, 6.0), &shape));
        assert!(point_in_polygon(Pos2::new(6.0, 10.0), &shape));
        assert!(!point_in_polygon(Pos2::new(6.0, 4.0), &shape));
    }

    #[test]
    fn variables_fall_back_to_kit_defaults() {
        let mut defaults = VariablesStorage::new();
        defaults.insert("repeats".to_string(), "1".to_string());
        let kit = Arc::new(MapObjectKit::new(
            CalibrationConfig::default(),
            MapTheme::default(),
            defaults,
        ));

        let plain = Room::new(
            RoomConfig {
                id: RoomId::Num(1),
                outline: Outline::Literal(vec![]),
                icon: None,
                label: None,
                variables: None,
            },
            Arc::clone(&kit),
            SelectionContext::detached(),
        );
        assert_eq!(plain.variables().get("repeats").map(String::as_str), Some("1"));

        let mut overrides = VariablesStorage::new();
        overrides.insert("repeats".to_string(), "3".to_string());
        let customized = Room::new(
            RoomConfig {
                id: RoomId::Num(2),
                outline: Outline::Literal(vec![]),
                icon: None,
                label: None,
                variables: Some(overrides),
            },
            kit,
            SelectionContext::detached(),
        );
        assert_eq!(
            customized.variables().get("repeats").map(String::as_str),
            Some("3")
        );
    }
}
