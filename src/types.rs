//! Shared constants, system sets and the orbit clock.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bevy::prelude::*;

/// System sets ordering one frame of the controller.
///
/// Camera choreography runs before the orbit update so labels are projected
/// through the camera pose of the current frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Keyboard and pointer input turned into messages.
    Input,
    /// Camera choreography and orbit controls.
    Camera,
    /// Clock advance, body positions, attachments, label placement.
    Orbits,
    /// Click resolution.
    Picking,
    /// Navigation sink.
    Navigation,
}

/// Plugin chaining the [`FrameSet`]s in frame order.
pub struct FrameSetPlugin;

impl Plugin for FrameSetPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                FrameSet::Input,
                FrameSet::Camera,
                FrameSet::Orbits,
                FrameSet::Picking,
                FrameSet::Navigation,
            )
                .chain(),
        );
    }
}

/// Multiplier applied to planet display sizes.
pub const PLANET_SCALE_FACTOR: f32 = 3.0;

/// Orbit time multiplier, applied to elapsed milliseconds.
pub const TIME_SCALE: f64 = 0.00005;

/// Factor applied to orbital periods before dividing.
pub const PERIOD_SCALE: f64 = 0.2;

/// Eccentricity used to shrink the minor axis of every orbit.
pub const ECCENTRICITY: f64 = 0.1;

/// Elapsed orbit time and the global pause flag.
///
/// The clock only advances while unpaused, so pausing and resuming continues
/// every orbit from where it stopped. It starts (and resets) at `origin`; a
/// zero origin lines every planet up on the +x axis.
#[derive(Resource, Clone, Debug, Default)]
pub struct OrbitClock {
    /// Orbit time elapsed while unpaused, counted from time zero.
    pub elapsed: Duration,
    /// Whether orbits (and labels) are frozen.
    pub paused: bool,
    origin: Duration,
}

impl OrbitClock {
    /// A running clock starting at `origin`.
    pub fn starting_at(origin: Duration) -> Self {
        Self {
            elapsed: origin,
            paused: false,
            origin,
        }
    }

    /// A running clock starting at the current Unix time, so each launch
    /// shows the planets at scattered angles.
    pub fn from_wall_clock() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::starting_at(now)
    }

    pub fn origin(&self) -> Duration {
        self.origin
    }

    /// Advance by a frame delta unless paused.
    pub fn advance(&mut self, delta: Duration) {
        if !self.paused {
            self.elapsed += delta;
        }
    }

    /// Flip the pause flag and return the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Elapsed orbit time in milliseconds.
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Back to the origin, running.
    pub fn reset(&mut self) {
        *self = Self::starting_at(self.origin);
    }
}

/// Run condition: orbits are not paused.
pub fn orbits_running(clock: Res<OrbitClock>) -> bool {
    !clock.paused
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_advances_when_running() {
        let mut clock = OrbitClock::default();
        clock.advance(Duration::from_millis(16));
        clock.advance(Duration::from_millis(16));
        assert_eq!(clock.elapsed, Duration::from_millis(32));
        assert!((clock.millis() - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_clock_frozen_when_paused() {
        let mut clock = OrbitClock::default();
        clock.advance(Duration::from_millis(100));
        assert!(clock.toggle_pause());
        for _ in 0..10 {
            clock.advance(Duration::from_millis(16));
        }
        assert_eq!(clock.elapsed, Duration::from_millis(100));
    }

    #[test]
    fn test_double_toggle_resumes_from_current_time() {
        let mut clock = OrbitClock::default();
        clock.advance(Duration::from_millis(500));
        clock.toggle_pause();
        clock.advance(Duration::from_secs(3));
        assert!(!clock.toggle_pause());
        clock.advance(Duration::from_millis(10));
        assert_eq!(clock.elapsed, Duration::from_millis(510));
    }

    #[test]
    fn test_reset() {
        let mut clock = OrbitClock::default();
        clock.advance(Duration::from_secs(1));
        clock.toggle_pause();
        clock.reset();
        assert_eq!(clock.elapsed, Duration::ZERO);
        assert!(!clock.paused);
    }

    #[test]
    fn test_offset_clock_is_pause_aware_and_resets_to_origin() {
        let origin = Duration::from_secs(1_700_000_000);
        let mut clock = OrbitClock::starting_at(origin);
        assert_eq!(clock.elapsed, origin);

        clock.advance(Duration::from_millis(16));
        clock.toggle_pause();
        clock.advance(Duration::from_secs(5));
        assert_eq!(clock.elapsed, origin + Duration::from_millis(16));

        clock.reset();
        assert_eq!(clock.elapsed, origin);
        assert_eq!(clock.origin(), origin);
        assert!(!clock.paused);
    }

    #[test]
    fn test_wall_clock_start_is_not_zero() {
        let clock = OrbitClock::from_wall_clock();
        assert!(clock.elapsed > Duration::ZERO);
        assert_eq!(clock.elapsed, clock.origin());
    }
}
