//! Map mode configuration

use serde::{Deserialize, Serialize};

use super::RoomConfig;
use crate::domain::VariablesStorage;

fn default_max_selections() -> usize {
    999
}

/// One selectable behavior of the map panel
///
/// A mode bundles the rooms offered for selection with the selection policy
/// applied to them. Rooms are rebuilt from this config every time the mode
/// becomes active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapMode {
    /// Display name shown in the mode selector
    pub name: String,

    /// Upper bound on simultaneously selected rooms
    #[serde(default = "default_max_selections")]
    pub max_selections: usize,

    /// Dispatch each selection as soon as it is made instead of
    /// accumulating it
    #[serde(default)]
    pub run_immediately: bool,

    /// Rooms offered by this mode
    #[serde(default)]
    pub predefined_selections: Vec<RoomConfig>,

    /// Default variable overrides for all rooms of this mode
    #[serde(default)]
    pub variables: VariablesStorage,
}
