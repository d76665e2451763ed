//! Orbit clock advancement.
//!
//! Handles progression of orbit time based on the pause state.

use bevy::prelude::*;

use crate::types::{FrameSet, OrbitClock};

/// Plugin providing orbit clock advancement.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitClock>()
            .add_systems(Update, advance_clock.in_set(FrameSet::Orbits));
    }
}

/// Advance the orbit clock by the real frame delta.
///
/// Runs before the orbit update inside `FrameSet::Orbits`; a paused clock
/// does not move.
pub fn advance_clock(mut clock: ResMut<OrbitClock>, time: Res<Time>) {
    clock.advance(time.delta());
}
