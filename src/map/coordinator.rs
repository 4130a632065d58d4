//! Selection coordinator
//!
//! Owns the authoritative selection list. Rooms never mutate shared state:
//! they send toggle commands here, and the GUI applies the resulting events.
//! Commands are handled strictly in arrival order, so a click landing while
//! a run-immediately decision is pending waits its turn instead of
//! interleaving.

use std::sync::mpsc::Sender;
use std::thread;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc::{self as tokio_mpsc, UnboundedSender};
use tracing::{info, warn};

use crate::domain::RoomId;
use crate::haptics::{forward_haptic, HapticSignal};

/// Decision source for the run-immediately short-circuit
///
/// Answering `true` means the selection was dispatched on the spot and must
/// not persist. The decision is async: an implementation may have to ask the
/// host before answering.
#[async_trait]
pub trait RunPolicy: Send {
    async fn run_immediately(&self, room: &RoomId) -> bool;
}

/// Policy driven by the active map mode
pub struct ModePolicy {
    run_immediately: bool,
}

impl ModePolicy {
    pub fn new(run_immediately: bool) -> Self {
        Self { run_immediately }
    }
}

#[async_trait]
impl RunPolicy for ModePolicy {
    async fn run_immediately(&self, _room: &RoomId) -> bool {
        self.run_immediately
    }
}

/// Commands into the coordinator
#[derive(Debug, Clone)]
pub enum SelectionCommand {
    /// Flip one room's selection state
    Toggle(RoomId),
    /// Drop the whole selection
    Clear,
    /// Send the accumulated selection to the vacuum and clear it
    Dispatch,
}

/// Events back to the GUI
#[derive(Debug, Clone)]
pub enum SelectionEvent {
    /// The selection list changed; payload is the full new list
    Changed { selected: Vec<RoomId> },
    /// Haptic feedback to surface in the host
    Haptic(HapticSignal),
    /// A cleanup command went out to the vacuum
    Dispatched {
        rooms: Vec<RoomId>,
        at: DateTime<Utc>,
    },
}

/// Command side handed to rooms
#[derive(Clone)]
pub struct SelectionContext {
    commands: UnboundedSender<SelectionCommand>,
}

impl SelectionContext {
    pub fn toggle(&self, room: RoomId) {
        if self.commands.send(SelectionCommand::Toggle(room)).is_err() {
            warn!("[vacmap:selection] coordinator gone, toggle dropped");
        }
    }

    pub fn send(&self, command: SelectionCommand) {
        let _ = self.commands.send(command);
    }

    /// A context wired to nothing; commands are discarded. For headless
    /// room resolution and tests that never click.
    pub fn detached() -> Self {
        let (commands, _rx) = tokio_mpsc::unbounded_channel();
        Self { commands }
    }
}

/// The selection state machine
pub struct SelectionCoordinator {
    selected: Vec<RoomId>,
    max_selections: usize,
    policy: Box<dyn RunPolicy>,
    events: Sender<SelectionEvent>,
}

impl SelectionCoordinator {
    pub fn new(
        max_selections: usize,
        policy: Box<dyn RunPolicy>,
        events: Sender<SelectionEvent>,
    ) -> Self {
        Self {
            selected: Vec::new(),
            max_selections,
            policy,
            events,
        }
    }

    /// The current selection, in click order
    pub fn selected(&self) -> &[RoomId] {
        &self.selected
    }

    pub async fn handle(&mut self, command: SelectionCommand) {
        match command {
            SelectionCommand::Toggle(room) => self.handle_toggle(room).await,
            SelectionCommand::Clear => {
                if !self.selected.is_empty() {
                    self.selected.clear();
                    self.emit_changed();
                }
            }
            SelectionCommand::Dispatch => {
                if self.selected.is_empty() {
                    return;
                }
                let rooms = std::mem::take(&mut self.selected);
                self.emit_dispatched(rooms);
                self.emit_changed();
            }
        }
    }

    /// One toggle per click. Capacity is checked before any mutation; a
    /// blocked click changes nothing and signals failure.
    async fn handle_toggle(&mut self, room: RoomId) {
        let was_selected = self.selected.contains(&room);
        if !was_selected && self.selected.len() >= self.max_selections {
            self.emit_haptic(HapticSignal::Failure);
            return;
        }

        if was_selected {
            self.remove(&room);
        } else {
            self.selected.push(room.clone());
        }
        self.emit_changed();

        if self.policy.run_immediately(&room).await {
            // No-op on the deselect path; the duplicate removal is intended
            // idempotent cleanup.
            self.remove(&room);
            self.emit_changed();
            if !was_selected {
                self.emit_dispatched(vec![room]);
            }
            return;
        }

        self.emit_haptic(HapticSignal::Selection);
    }

    fn remove(&mut self, room: &RoomId) {
        self.selected.retain(|id| id != room);
    }

    fn emit_changed(&self) {
        self.emit(SelectionEvent::Changed {
            selected: self.selected.clone(),
        });
    }

    fn emit_haptic(&self, signal: HapticSignal) {
        forward_haptic(signal);
        self.emit(SelectionEvent::Haptic(signal));
    }

    fn emit_dispatched(&self, rooms: Vec<RoomId>) {
        info!(
            "[vacmap:selection] dispatching cleanup for {} room(s)",
            rooms.len()
        );
        self.emit(SelectionEvent::Dispatched {
            rooms,
            at: Utc::now(),
        });
    }

    fn emit(&self, event: SelectionEvent) {
        if self.events.send(event).is_err() {
            warn!("[vacmap:selection] event receiver gone");
        }
    }
}

/// Start the coordinator on a background thread with its own runtime
///
/// The thread exits when every [`SelectionContext`] clone is dropped, which
/// happens on mode teardown.
pub fn start_coordinator(
    max_selections: usize,
    policy: Box<dyn RunPolicy>,
    events: Sender<SelectionEvent>,
) -> SelectionContext {
    let (commands, mut rx) = tokio_mpsc::unbounded_channel();

    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
        rt.block_on(async move {
            let mut coordinator = SelectionCoordinator::new(max_selections, policy, events);
            while let Some(command) = rx.recv().await {
                coordinator.handle(command).await;
            }
        });
    });

    SelectionContext { commands }
}
