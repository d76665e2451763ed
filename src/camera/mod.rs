//! Camera system for the orrery.
//!
//! The camera first follows the opening choreography, then hands over to
//! damped orbit controls (drag to rotate, scroll to zoom, no panning).

pub mod choreography;

#[cfg(test)]
mod proptest_choreography;

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;

use crate::types::FrameSet;

pub use self::choreography::{CameraChoreography, CameraPhase, advance_choreography};

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 75.0;

/// Near clipping plane.
pub const NEAR: f32 = 0.1;

/// Far clipping plane.
pub const FAR: f32 = 5000.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraChoreography>()
            .init_resource::<OrbitControls>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    advance_choreography,
                    orbit_controls.run_if(|c: Res<CameraChoreography>| c.is_settled()),
                )
                    .chain()
                    .in_set(FrameSet::Camera),
            );
    }
}

/// Spawn the main camera with a perspective projection at the choreography start.
fn setup_camera(mut commands: Commands, choreography: Res<CameraChoreography>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR,
            far: FAR,
            ..default()
        }),
        Transform::from_translation(choreography.start).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Damped orbit controls around a fixed target.
///
/// Input accumulates into pending deltas; every frame a `damping` fraction of
/// each pending delta is applied and the remainder decays by `1 - damping`.
#[derive(Resource, Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    /// Azimuth around the y axis, radians.
    pub yaw: f32,
    /// Elevation above the orbital plane, radians.
    pub pitch: f32,
    pub distance: f32,
    pub damping: f32,
    /// Radians per pixel of drag.
    pub rotate_speed: f32,
    /// Fraction of distance per scroll line.
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub max_pitch: f32,
    yaw_delta: f32,
    pitch_delta: f32,
    zoom_delta: f32,
    seeded: bool,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: 1.0,
            damping: 0.1,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            min_distance: 40.0,
            max_distance: 1500.0,
            max_pitch: 1.5,
            yaw_delta: 0.0,
            pitch_delta: 0.0,
            zoom_delta: 0.0,
            seeded: false,
        }
    }
}

impl OrbitControls {
    /// Take over from an existing camera position.
    pub fn seed_from(&mut self, position: Vec3) {
        let offset = position - self.target;
        self.distance = offset.length().clamp(self.min_distance, self.max_distance);
        self.yaw = offset.x.atan2(offset.z);
        self.pitch = (offset.y / offset.length().max(f32::EPSILON))
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-self.max_pitch, self.max_pitch);
        self.yaw_delta = 0.0;
        self.pitch_delta = 0.0;
        self.zoom_delta = 0.0;
        self.seeded = true;
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Forget the current pose; the next update re-seeds from the camera.
    pub fn release(&mut self) {
        self.seeded = false;
        self.yaw_delta = 0.0;
        self.pitch_delta = 0.0;
        self.zoom_delta = 0.0;
    }

    /// Queue a rotation from a drag delta in pixels.
    pub fn rotate(&mut self, drag: Vec2) {
        self.yaw_delta -= drag.x * self.rotate_speed;
        self.pitch_delta += drag.y * self.rotate_speed;
    }

    /// Queue a zoom; positive values move closer.
    pub fn zoom(&mut self, lines: f32) {
        self.zoom_delta += lines * self.zoom_speed;
    }

    /// Apply one damped step and return the new camera position.
    pub fn update(&mut self) -> Vec3 {
        self.yaw += self.yaw_delta * self.damping;
        self.pitch = (self.pitch + self.pitch_delta * self.damping)
            .clamp(-self.max_pitch, self.max_pitch);
        self.distance = (self.distance * (1.0 - self.zoom_delta * self.damping))
            .clamp(self.min_distance, self.max_distance);

        let decay = 1.0 - self.damping;
        self.yaw_delta *= decay;
        self.pitch_delta *= decay;
        self.zoom_delta *= decay;

        self.position()
    }

    /// Camera position for the current angles and distance.
    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }
}

/// Drive the camera from mouse input once the choreography has settled.
fn orbit_controls(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut controls: ResMut<OrbitControls>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
    mut contexts: EguiContexts,
) {
    let Ok(mut transform) = camera.single_mut() else {
        return;
    };

    if !controls.is_seeded() {
        controls.seed_from(transform.translation);
    }

    let over_ui = contexts
        .ctx_mut()
        .is_ok_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area());

    if !over_ui {
        if mouse_buttons.pressed(MouseButton::Left) && mouse_motion.delta != Vec2::ZERO {
            controls.rotate(mouse_motion.delta);
        }
        if mouse_scroll.delta.y != 0.0 {
            controls.zoom(mouse_scroll.delta.y);
        }
    }

    let position = controls.update();
    let target = controls.target;
    *transform = Transform::from_translation(position).looking_at(target, Vec3::Y);
}
