//! Core domain types for vacmap

mod outline;
mod point;
mod room_id;

pub use outline::{Outline, ResolvedOutline};
pub use point::Point;
pub use room_id::RoomId;

use std::collections::HashMap;

/// Per-object variable overrides fed into command payloads
pub type VariablesStorage = HashMap<String, String>;
