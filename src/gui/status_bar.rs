//! Status bar component for the map panel
//!
//! Renders the bottom bar with the mode selector, the selection counter,
//! the run/clear actions, and the last selection event.

use eframe::egui::{self, RichText};

use crate::map::theme::{ACCENT_BLUE, ACCENT_GREEN, ACCENT_RED, BG_PANEL, TEXT_MUTED, TEXT_PRIMARY};

/// Status bar state that can be modified by the status bar UI
pub struct StatusBarState<'a> {
    pub modes: &'a [String],
    pub active_mode: usize,
    pub mode_request: &'a mut Option<usize>,
    pub selected: usize,
    pub max_selections: usize,
    pub run_immediately: bool,
    pub last_event: Option<&'a str>,
    pub run_clicked: &'a mut bool,
    pub clear_clicked: &'a mut bool,
}

/// Render the bottom status bar
pub fn render_status_bar(ctx: &egui::Context, state: &mut StatusBarState<'_>) {
    egui::TopBottomPanel::bottom("status_bar")
        .frame(egui::Frame::NONE.fill(BG_PANEL).inner_margin(6.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Mode selector
                for (i, name) in state.modes.iter().enumerate() {
                    let active = i == state.active_mode;
                    let color = if active { ACCENT_BLUE } else { TEXT_MUTED };
                    if ui
                        .selectable_label(
                            active,
                            RichText::new(name).small().monospace().color(color),
                        )
                        .clicked()
                        && !active
                    {
                        *state.mode_request = Some(i);
                    }
                    ui.add_space(8.0);
                }

                ui.add_space(16.0);

                // Selection counter
                let counter_color = if state.selected >= state.max_selections {
                    ACCENT_RED
                } else {
                    TEXT_PRIMARY
                };
                ui.label(
                    RichText::new(format!("{}/{}", state.selected, state.max_selections))
                        .small()
                        .monospace()
                        .color(counter_color),
                );

                if state.run_immediately {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("run-now")
                            .small()
                            .monospace()
                            .color(ACCENT_GREEN),
                    );
                }

                if let Some(event) = state.last_event {
                    ui.add_space(16.0);
                    ui.label(RichText::new(event).small().color(TEXT_MUTED));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(concat!("vacmap v", env!("CARGO_PKG_VERSION")))
                            .small()
                            .color(TEXT_MUTED),
                    );
                    ui.add_space(16.0);
                    if ui
                        .button(RichText::new("▶ Run").small().color(ACCENT_GREEN))
                        .clicked()
                    {
                        *state.run_clicked = true;
                    }
                    ui.add_space(8.0);
                    if ui
                        .button(RichText::new("✕ Clear").small().color(TEXT_MUTED))
                        .clicked()
                    {
                        *state.clear_clicked = true;
                    }
                });
            });
        });
}
