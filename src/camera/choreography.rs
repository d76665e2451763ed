//! Opening camera choreography.
//!
//! The camera flies in from far away towards the Sun, holds there for a
//! moment, then backs out to an overview of the whole system. After that the
//! user owns the camera through the orbit controls.

use std::time::Duration;

use bevy::prelude::*;

use super::MainCamera;

/// Camera position at startup.
pub const START: Vec3 = Vec3::new(0.0, 500.0, 1000.0);

/// Close-up position reached at the end of the zoom-in.
pub const FOCUS: Vec3 = Vec3::new(0.0, 50.0, 150.0);

/// Final overview position.
pub const OVERVIEW: Vec3 = Vec3::new(200.0, 100.0, 300.0);

/// Progress added per frame while zooming in.
pub const ZOOM_SPEED: f32 = 0.004;

/// How long the camera stays at the focus point.
pub const HOLD_DELAY: Duration = Duration::from_millis(250);

/// Stage of the choreography. Ordered; transitions only move forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CameraPhase {
    #[default]
    ZoomIn,
    Hold,
    ZoomOut,
    Settled,
}

/// Choreography state and configuration.
#[derive(Resource, Clone, Debug)]
pub struct CameraChoreography {
    pub(super) phase: CameraPhase,
    pub(super) progress: f32,
    pub(super) hold: Option<Timer>,
    pub start: Vec3,
    pub focus: Vec3,
    pub overview: Vec3,
    pub zoom_speed: f32,
    pub hold_delay: Duration,
}

impl Default for CameraChoreography {
    fn default() -> Self {
        Self {
            phase: CameraPhase::ZoomIn,
            progress: 0.0,
            hold: None,
            start: START,
            focus: FOCUS,
            overview: OVERVIEW,
            zoom_speed: ZOOM_SPEED,
            hold_delay: HOLD_DELAY,
        }
    }
}

impl CameraChoreography {
    pub fn phase(&self) -> CameraPhase {
        self.phase
    }

    /// Interpolation fraction, always within [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_settled(&self) -> bool {
        self.phase == CameraPhase::Settled
    }

    /// Whether a hold-to-zoom-out transition is scheduled.
    pub fn hold_pending(&self) -> bool {
        self.hold.is_some()
    }

    /// Advance by one frame.
    ///
    /// Returns the camera position to apply this frame, or `None` when the
    /// camera must stay where it is (holding, or settled).
    pub fn advance(&mut self, delta: Duration) -> Option<Vec3> {
        match self.phase {
            CameraPhase::ZoomIn => {
                self.progress += self.zoom_speed;
                if self.progress >= 1.0 {
                    self.progress = 1.0;
                    self.enter(CameraPhase::Hold);
                    self.hold = Some(Timer::new(self.hold_delay, TimerMode::Once));
                }
                Some(self.start.lerp(self.focus, self.progress))
            }
            CameraPhase::Hold => {
                if let Some(timer) = self.hold.as_mut() {
                    timer.tick(delta);
                    if timer.just_finished() {
                        self.hold = None;
                        self.enter(CameraPhase::ZoomOut);
                    }
                }
                None
            }
            CameraPhase::ZoomOut => {
                self.progress -= self.zoom_speed * 0.5;
                if self.progress <= 0.0 {
                    self.progress = 0.0;
                    self.enter(CameraPhase::Settled);
                }
                Some(self.focus.lerp(self.overview, 1.0 - self.progress))
            }
            CameraPhase::Settled => None,
        }
    }

    /// Drop a scheduled hold transition. The choreography then stays in
    /// `Hold` until reset.
    pub fn cancel_hold(&mut self) {
        if self.hold.take().is_some() {
            debug!("Camera hold transition cancelled");
        }
    }

    /// Restart from the beginning, keeping the configuration.
    pub fn reset(&mut self) {
        self.phase = CameraPhase::ZoomIn;
        self.progress = 0.0;
        self.hold = None;
    }

    fn enter(&mut self, phase: CameraPhase) {
        debug_assert!(phase > self.phase);
        debug!("Camera phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}

/// Apply the choreography to the main camera.
///
/// Runs regardless of the pause flag.
pub fn advance_choreography(
    time: Res<Time>,
    mut choreography: ResMut<CameraChoreography>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    if choreography.is_settled() {
        return;
    }

    let Some(position) = choreography.advance(time.delta()) else {
        return;
    };

    let Ok(mut transform) = camera.single_mut() else {
        return;
    };

    *transform = Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y);

    if choreography.is_settled() {
        info!("Camera choreography finished, orbit controls active");
    }
}
