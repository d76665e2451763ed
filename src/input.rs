//! Input handling for keyboard shortcuts and click-to-pick.
//!
//! Shortcuts feed the same [`ControlEvent`]s as the on-screen buttons. A
//! left click that does not move (a drag rotates the camera instead) becomes
//! a [`PickRequest`].

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::{CameraChoreography, OrbitControls};
use crate::picking::PickRequest;
use crate::render::{LabelSettings, OrbitPathSettings};
use crate::types::{FrameSet, OrbitClock};
use crate::ui::{ControlEvent, InfoPanel};

/// Pointer travel in logical pixels above which a press is a drag.
pub const CLICK_TOLERANCE: f32 = 5.0;

/// Plugin providing keyboard shortcuts and click detection.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClickTracker>().add_systems(
            Update,
            (keyboard_shortcuts, detect_clicks)
                .before(crate::ui::apply_control_events)
                .in_set(FrameSet::Input),
        );
    }
}

/// Tracks the left button press that may become a click.
#[derive(Resource, Default, Debug)]
pub struct ClickTracker {
    pressed_at: Option<Vec2>,
}

impl ClickTracker {
    pub fn press(&mut self, cursor: Vec2) {
        self.pressed_at = Some(cursor);
    }

    /// Finish a press. Returns the release position if it counts as a click.
    pub fn release(&mut self, cursor: Vec2) -> Option<Vec2> {
        let start = self.pressed_at.take()?;
        (start.distance(cursor) <= CLICK_TOLERANCE).then_some(cursor)
    }

    pub fn cancel(&mut self) {
        self.pressed_at = None;
    }
}

/// Handle keyboard shortcuts.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut controls: MessageWriter<ControlEvent>,
    mut orbit_paths: ResMut<OrbitPathSettings>,
    mut labels: ResMut<LabelSettings>,
    mut choreography: ResMut<CameraChoreography>,
    mut orbit_controls: ResMut<OrbitControls>,
    mut clock: ResMut<OrbitClock>,
    mut info_panel: ResMut<InfoPanel>,
) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        controls.write(ControlEvent::TogglePause);
    }

    // O: toggle orbit paths
    if keys.just_pressed(KeyCode::KeyO) {
        orbit_paths.visible = !orbit_paths.visible;
        info!("Orbit paths {}", if orbit_paths.visible { "shown" } else { "hidden" });
    }

    // L: toggle labels
    if keys.just_pressed(KeyCode::KeyL) {
        labels.visible = !labels.visible;
        info!("Labels {}", if labels.visible { "shown" } else { "hidden" });
    }

    // R: replay the opening and restart the orbits
    if keys.just_pressed(KeyCode::KeyR) {
        choreography.reset();
        orbit_controls.release();
        clock.reset();
        info_panel.clear();
        info!("Orrery reset");
    }
}

/// Turn stationary left clicks on the viewport into pick requests.
fn detect_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    window: Query<&Window, With<PrimaryWindow>>,
    mut tracker: ResMut<ClickTracker>,
    mut picks: MessageWriter<PickRequest>,
    mut contexts: EguiContexts,
) {
    let Ok(window) = window.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        if mouse.just_released(MouseButton::Left) {
            tracker.cancel();
        }
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        let over_ui = contexts
            .ctx_mut()
            .is_ok_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area());
        if over_ui {
            tracker.cancel();
        } else {
            tracker.press(cursor);
        }
    }

    if mouse.just_released(MouseButton::Left)
        && let Some(cursor) = tracker.release(cursor)
    {
        picks.write(PickRequest { cursor });
    }
}
