//! Map objects and their collaborators

mod coordinator;
mod object;
mod room;
pub mod theme;
mod transform;

pub use coordinator::{
    start_coordinator, ModePolicy, RunPolicy, SelectionCommand, SelectionContext,
    SelectionCoordinator, SelectionEvent,
};
pub use object::MapObjectKit;
pub use room::Room;
pub use theme::MapTheme;
pub use transform::MapTransform;
