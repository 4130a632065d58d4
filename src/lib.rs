//! vacmap - Interactive vacuum map panel
//!
//! Renders a robot-vacuum floor map with selectable room regions. Rooms are
//! polygonal map objects: click one to toggle it in the current selection,
//! bounded by the active mode's selection limit. Modes flagged run-immediately
//! dispatch each selection as soon as it is made instead of accumulating it.
//!
//! Room outlines come from declarative configuration or from live entity
//! state (a JSON snapshot of the home-automation state machine).

pub mod config;
pub mod domain;
pub mod gui;
pub mod haptics;
pub mod map;
pub mod state;

pub use domain::*;
