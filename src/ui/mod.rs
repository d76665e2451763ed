//! UI module providing the egui overlay: control buttons and the info panel.
//!
//! Buttons never act directly; they write [`ControlEvent`]s which are
//! applied in [`FrameSet::Input`] together with keyboard shortcuts.

mod controls;
pub mod icons;
pub mod info_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::navigation::{Destination, NavigationRequest};
use crate::types::{FrameSet, OrbitClock};

pub use controls::{child_mode_caption, pause_caption};
pub use info_panel::{BodyInfo, InfoPanel};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>()
            .init_resource::<InfoPanel>()
            .init_resource::<icons::FontsInitialized>()
            .add_message::<ControlEvent>()
            .add_systems(Update, apply_control_events.in_set(FrameSet::Input))
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (controls::controls_system, info_panel::info_panel_system)
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Global UI state.
#[derive(Resource, Default, Debug)]
pub struct UiState {
    /// Child mode toggle shown on the control strip.
    pub child_mode: bool,
}

/// A control activated from a button or a keyboard shortcut.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    TogglePause,
    ToggleChildMode,
    OpenNec,
}

/// Apply control events to the clock, UI state and navigation.
pub fn apply_control_events(
    mut events: MessageReader<ControlEvent>,
    mut clock: ResMut<OrbitClock>,
    mut ui_state: ResMut<UiState>,
    mut navigation: MessageWriter<NavigationRequest>,
) {
    for event in events.read() {
        match event {
            ControlEvent::TogglePause => {
                let paused = clock.toggle_pause();
                info!("Orbits {}", if paused { "paused" } else { "running" });
            }
            ControlEvent::ToggleChildMode => {
                ui_state.child_mode = !ui_state.child_mode;
                info!(
                    "Child mode {}",
                    if ui_state.child_mode { "on" } else { "off" }
                );
                if ui_state.child_mode {
                    navigation.write(NavigationRequest::new(Destination::ChildMode));
                }
            }
            ControlEvent::OpenNec => {
                navigation.write(NavigationRequest::new(Destination::Nec));
            }
        }
    }
}
