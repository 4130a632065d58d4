//! Room outline representations
//!
//! An outline arrives in one of two shapes: a literal list of vacuum-space
//! points, or a reference into live entity state (`entity_id` or
//! `entity_id.attributes.attr_name`). References are resolved once, when the
//! rooms for a mode are built; rendering only ever sees the resolved form.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::Point;

/// Outline as written in configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outline {
    /// Literal polygon boundary in vacuum coordinates
    Literal(Vec<Point>),
    /// Reference into entity state, resolved at construction time
    Reference(String),
}

/// Outline after reference resolution.
///
/// `Raw` keeps the unparsed value when it did not decode into coordinates;
/// it renders as an empty polygon.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedOutline {
    Points(Vec<Point>),
    Raw(String),
}

impl ResolvedOutline {
    /// Coordinate view; empty for `Raw`
    pub fn points(&self) -> &[Point] {
        match self {
            ResolvedOutline::Points(points) => points,
            ResolvedOutline::Raw(_) => &[],
        }
    }

    /// Decode an entity-state value into an outline.
    ///
    /// String values are parsed as JSON (`"[[1,2],[3,4]]"`); attribute values
    /// that already are JSON arrays decode directly. Anything else falls back
    /// to `Raw` with the value kept verbatim.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let parsed = match value {
            serde_json::Value::String(s) => serde_json::from_str::<Vec<Point>>(s),
            other => serde_json::from_value::<Vec<Point>>(other.clone()),
        };
        match parsed {
            Ok(points) => ResolvedOutline::Points(points),
            Err(_) => {
                let raw = match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                warn!("[vacmap:outline] value did not decode as coordinates, keeping raw: {raw}");
                ResolvedOutline::Raw(raw)
            }
        }
    }
}

impl From<&Outline> for ResolvedOutline {
    /// Resolution for outlines that need no entity lookup: literals pass
    /// through, unresolved references degenerate to `Raw`.
    fn from(outline: &Outline) -> Self {
        match outline {
            Outline::Literal(points) => ResolvedOutline::Points(points.clone()),
            Outline::Reference(reference) => ResolvedOutline::Raw(reference.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_outline_has_no_points() {
        let outline = ResolvedOutline::Raw("vacuum.map".to_string());
        assert!(outline.points().is_empty());
    }

    #[test]
    fn unresolved_reference_degenerates_to_raw() {
        let outline = Outline::Reference("vacuum.map.attributes.rooms".to_string());
        assert_eq!(
            ResolvedOutline::from(&outline),
            ResolvedOutline::Raw("vacuum.map.attributes.rooms".to_string())
        );
    }

    #[test]
    fn literal_outline_passes_through() {
        let outline = Outline::Literal(vec![Point(1.0, 2.0), Point(3.0, 4.0)]);
        let resolved = ResolvedOutline::from(&outline);
        assert_eq!(resolved.points().len(), 2);
    }
}
