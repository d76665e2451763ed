//! Top-right control strip: NEC, child mode and pause buttons.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::types::OrbitClock;

use super::{ControlEvent, UiState, icons};

/// Colors for the control strip.
mod colors {
    use bevy_egui::egui::Color32;

    pub const STRIP_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 200);
    pub const PLAY_ICON: Color32 = Color32::from_rgb(85, 221, 136);
    pub const PAUSE_ICON: Color32 = Color32::from_rgb(221, 170, 85);
    pub const CHILD_ON: Color32 = Color32::from_rgb(120, 180, 255);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
}

/// Caption of the pause button for the current clock state.
pub fn pause_caption(paused: bool) -> &'static str {
    if paused { "Resume" } else { "Pause" }
}

/// Caption of the child mode button.
pub fn child_mode_caption(child_mode: bool) -> &'static str {
    if child_mode {
        "Child Mode: On"
    } else {
        "Child Mode: Off"
    }
}

/// System that renders the control strip.
pub fn controls_system(
    mut contexts: EguiContexts,
    clock: Res<OrbitClock>,
    ui_state: Res<UiState>,
    mut events: MessageWriter<ControlEvent>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("controls"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(colors::STRIP_BG)
                .corner_radius(6)
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let nec = egui::Button::new(
                            egui::RichText::new(format!("{} NEC", icons::EXTERNAL))
                                .size(16.0)
                                .color(colors::TEXT),
                        );
                        if ui.add(nec).on_hover_text("Open the NEC page").clicked() {
                            events.write(ControlEvent::OpenNec);
                        }

                        let child_color = if ui_state.child_mode {
                            colors::CHILD_ON
                        } else {
                            colors::TEXT
                        };
                        let child = egui::Button::new(
                            egui::RichText::new(format!(
                                "{} {}",
                                icons::CHILD,
                                child_mode_caption(ui_state.child_mode)
                            ))
                            .size(16.0)
                            .color(child_color),
                        );
                        if ui.add(child).clicked() {
                            events.write(ControlEvent::ToggleChildMode);
                        }

                        let (icon, color) = if clock.paused {
                            (icons::PLAY, colors::PLAY_ICON)
                        } else {
                            (icons::PAUSE, colors::PAUSE_ICON)
                        };
                        let pause = egui::Button::new(
                            egui::RichText::new(format!("{icon} {}", pause_caption(clock.paused)))
                                .size(16.0)
                                .color(color),
                        );
                        if ui.add(pause).on_hover_text("Space").clicked() {
                            events.write(ControlEvent::TogglePause);
                        }
                    });
                });
        });
}
