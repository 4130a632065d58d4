//! eframe application for the map panel
//!
//! Contains the main update loop that runs every frame.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use tracing::{error, info};

use crate::config::CardConfig;
use crate::domain::{Outline, RoomId};
use crate::haptics::HapticSignal;
use crate::map::theme::{BG_MAP, BG_PANEL, TEXT_MUTED};
use crate::map::{
    start_coordinator, MapObjectKit, MapTheme, ModePolicy, Room, SelectionCommand,
    SelectionContext, SelectionEvent,
};
use crate::state::StateRegistry;

use super::status_bar::{render_status_bar, StatusBarState};

pub struct MapApp {
    config: CardConfig,
    states: StateRegistry,
    mode_index: usize,
    kit: Arc<MapObjectKit>,
    rooms: Vec<Room>,
    context: SelectionContext,
    event_rx: Receiver<SelectionEvent>,
    selected: Vec<RoomId>,
    last_event: Option<String>,
    mode_error: Option<String>,
}

impl MapApp {
    pub fn new(config: CardConfig, states: StateRegistry) -> Self {
        let kit = Arc::new(MapObjectKit::new(
            config.calibration.clone(),
            MapTheme::default(),
            Default::default(),
        ));
        let mut app = Self {
            config,
            states,
            mode_index: 0,
            kit,
            rooms: Vec::new(),
            context: SelectionContext::detached(),
            event_rx: mpsc::channel().1,
            selected: Vec::new(),
            last_event: None,
            mode_error: None,
        };
        app.activate_mode(0);
        app
    }

    /// Tear down the active mode and bring up another one: fresh kit, fresh
    /// rooms, fresh coordinator
    fn activate_mode(&mut self, index: usize) {
        self.mode_index = index.min(self.config.modes.len().saturating_sub(1));
        self.selected.clear();
        self.rooms.clear();
        self.mode_error = None;

        let Some(mode) = self.config.modes.get(self.mode_index) else {
            self.context = SelectionContext::detached();
            return;
        };

        let kit = Arc::new(MapObjectKit::new(
            self.config.calibration.clone(),
            MapTheme::default(),
            mode.variables.clone(),
        ));

        let (event_tx, event_rx) = mpsc::channel();
        let context = start_coordinator(
            mode.max_selections,
            Box::new(ModePolicy::new(mode.run_immediately)),
            event_tx,
        );

        let mut rooms: Vec<Room> = mode
            .predefined_selections
            .iter()
            .filter(|c| matches!(c.outline, Outline::Literal(_)))
            .map(|c| Room::new(c.clone(), Arc::clone(&kit), context.clone()))
            .collect();

        match Room::from_entities(mode, &self.states, &kit, || context.clone()) {
            Ok(derived) => rooms.extend(derived),
            Err(e) => {
                error!("[vacmap:gui] failed to derive rooms from entities: {e}");
                self.mode_error = Some(e.to_string());
            }
        }

        info!(
            "[vacmap:gui] mode '{}' active with {} room(s)",
            mode.name,
            rooms.len()
        );

        self.kit = kit;
        self.rooms = rooms;
        self.context = context;
        self.event_rx = event_rx;
    }

    /// Apply coordinator events queued since the last frame
    fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                SelectionEvent::Changed { selected } => {
                    for room in &mut self.rooms {
                        room.set_selected(selected.contains(room.vacuum_id()));
                    }
                    self.selected = selected;
                }
                SelectionEvent::Haptic(signal) => {
                    self.last_event = Some(match signal {
                        HapticSignal::Failure => "selection limit reached".to_string(),
                        HapticSignal::Selection => "selection changed".to_string(),
                    });
                }
                SelectionEvent::Dispatched { rooms, at } => {
                    let names: Vec<String> = rooms.iter().map(|r| r.to_string()).collect();
                    self.last_event = Some(format!(
                        "{} cleaning: {}",
                        at.format("%H:%M:%S"),
                        names.join(", ")
                    ));
                }
            }
        }
    }

    fn render_map(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let (rect, _) = ui.allocate_exact_size(available, egui::Sense::hover());
        ui.painter().rect_filled(rect, 6.0, BG_MAP);

        if self.rooms.is_empty() {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "no rooms in this mode",
                egui::FontId::proportional(14.0),
                TEXT_MUTED,
            );
            return;
        }

        let transform = self.kit.transform_for(rect.shrink(12.0));
        for room in &self.rooms {
            room.show(ui, &transform);
        }

        if let Some(err) = &self.mode_error {
            ui.painter().text(
                egui::Pos2::new(rect.center().x, rect.bottom() - 16.0),
                egui::Align2::CENTER_CENTER,
                err,
                egui::FontId::proportional(12.0),
                crate::map::theme::ACCENT_RED,
            );
        }
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        let mode_names: Vec<String> = self.config.modes.iter().map(|m| m.name.clone()).collect();
        let (max_selections, run_immediately) = self
            .config
            .modes
            .get(self.mode_index)
            .map(|m| (m.max_selections, m.run_immediately))
            .unwrap_or((0, false));

        let mut mode_request = None;
        let mut run_clicked = false;
        let mut clear_clicked = false;
        render_status_bar(
            ctx,
            &mut StatusBarState {
                modes: &mode_names,
                active_mode: self.mode_index,
                mode_request: &mut mode_request,
                selected: self.selected.len(),
                max_selections,
                run_immediately,
                last_event: self.last_event.as_deref(),
                run_clicked: &mut run_clicked,
                clear_clicked: &mut clear_clicked,
            },
        );

        if let Some(index) = mode_request {
            self.activate_mode(index);
        }
        if run_clicked {
            self.context.send(SelectionCommand::Dispatch);
        }
        if clear_clicked {
            self.context.send(SelectionCommand::Clear);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PANEL).inner_margin(8.0))
            .show(ctx, |ui| self.render_map(ui));

        // Coordinator events land between frames; keep polling for them
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
