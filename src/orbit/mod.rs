//! Per-frame orbit updates.
//!
//! Orbits are a deliberately simplified ellipse: the major axis keeps the
//! full orbital distance and only the minor (z) axis is shortened by the
//! eccentricity. All planets share the y = const orbital plane.

#[cfg(test)]
mod proptest_orbit;

use std::f64::consts::TAU;

use bevy::prelude::*;

use crate::catalog::OrbitalElements;
use crate::render::bodies::{Attachment, CelestialBody};
use crate::time::advance_clock;
use crate::types::{ECCENTRICITY, FrameSet, OrbitClock, PERIOD_SCALE, TIME_SCALE, orbits_running};

/// Plugin providing the orbit updater.
pub struct OrbitPlugin;

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitSettings>().add_systems(
            Update,
            (update_orbit_positions, sync_attachments)
                .chain()
                .after(advance_clock)
                .in_set(FrameSet::Orbits)
                .run_if(orbits_running),
        );
    }
}

/// Tuning constants for perceived orbit speed and shape.
#[derive(Resource, Clone, Debug)]
pub struct OrbitSettings {
    /// Multiplier applied to elapsed milliseconds.
    pub time_scale: f64,
    /// Factor applied to each period before dividing.
    pub period_scale: f64,
    /// Shrinks the minor axis: `minor = major * (1 - eccentricity)`.
    pub eccentricity: f64,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            time_scale: TIME_SCALE,
            period_scale: PERIOD_SCALE,
            eccentricity: ECCENTRICITY,
        }
    }
}

impl OrbitSettings {
    /// Orbit angle in radians after `elapsed_ms` of orbit time.
    ///
    /// Unbounded; trigonometric periodicity does the wrapping.
    pub fn angle(&self, elapsed_ms: f64, period: f64) -> f64 {
        (elapsed_ms * self.time_scale) / (period * self.period_scale) * TAU
    }

    /// Position in the orbital plane for a given angle.
    ///
    /// Returns `(x, z)`; the caller keeps its own `y`.
    pub fn planar_position(&self, distance: f64, angle: f64) -> (f64, f64) {
        let major = distance;
        let minor = major * (1.0 - self.eccentricity);
        (major * angle.cos(), minor * angle.sin())
    }

    /// New translation for a body, keeping `current.y`.
    pub fn position_at(&self, orbit: &OrbitalElements, elapsed_ms: f64, current: Vec3) -> Vec3 {
        let angle = self.angle(elapsed_ms, orbit.period);
        let (x, z) = self.planar_position(orbit.distance, angle);
        Vec3::new(x as f32, current.y, z as f32)
    }
}

/// Move every orbiting body to its position for the current clock.
///
/// The Sun has no orbit and is left where it is.
pub fn update_orbit_positions(
    clock: Res<OrbitClock>,
    settings: Res<OrbitSettings>,
    mut bodies: Query<(&CelestialBody, &mut Transform)>,
) {
    let elapsed_ms = clock.millis();
    for (body, mut transform) in bodies.iter_mut() {
        let Some(orbit) = body.orbit else {
            continue;
        };
        transform.translation = settings.position_at(&orbit, elapsed_ms, transform.translation);
    }
}

/// Snap auxiliary geometry (rings, atmospheres) onto its owning body.
pub fn sync_attachments(
    bodies: Query<&Transform, (With<CelestialBody>, Without<Attachment>)>,
    mut attachments: Query<(&Attachment, &mut Transform), Without<CelestialBody>>,
) {
    for (attachment, mut transform) in attachments.iter_mut() {
        if let Ok(body) = bodies.get(attachment.body) {
            transform.translation = body.translation;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BodyCatalog;
    use approx::assert_relative_eq;
    use bevy::ecs::system::RunSystemOnce;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_earth_at_zero_angle() {
        let settings = OrbitSettings::default();
        let (x, z) = settings.planar_position(70.0, 0.0);
        assert_relative_eq!(x, 70.0);
        assert_relative_eq!(z, 0.0);
    }

    #[test]
    fn test_earth_at_quarter_turn() {
        let settings = OrbitSettings::default();
        let (x, z) = settings.planar_position(70.0, FRAC_PI_2);
        assert_relative_eq!(x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(z, 63.0, epsilon = 1e-9);
    }

    #[test]
    fn test_major_axis_not_shortened() {
        let settings = OrbitSettings::default();
        let (x, _) = settings.planar_position(150.0, PI);
        assert_relative_eq!(x, -150.0, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_formula() {
        let settings = OrbitSettings::default();
        // Earth (period 1.0) completes a turn after 1 / (0.00005 / 0.2) ms = 4000 ms.
        assert_relative_eq!(settings.angle(4000.0, 1.0), TAU, epsilon = 1e-9);
        assert_relative_eq!(settings.angle(0.0, 1.0), 0.0);
        // Longer periods turn proportionally slower.
        assert_relative_eq!(settings.angle(4000.0, 2.0), PI, epsilon = 1e-9);
    }

    #[test]
    fn test_position_keeps_y() {
        let settings = OrbitSettings::default();
        let orbit = OrbitalElements {
            distance: 70.0,
            period: 1.0,
        };
        let pos = settings.position_at(&orbit, 1000.0, Vec3::new(5.0, 2.5, -3.0));
        assert_eq!(pos.y, 2.5);
        assert!((pos.x - 0.0).abs() < 1e-4);
        assert!((pos.z - 63.0).abs() < 1e-4);
    }

    #[test]
    fn test_update_systems_skip_sun_and_move_attachments() {
        let mut world = World::new();
        world.insert_resource(OrbitClock::starting_at(std::time::Duration::from_millis(1000)));
        world.insert_resource(OrbitSettings::default());
        let catalog = BodyCatalog::default();

        let sun = world
            .spawn((
                CelestialBody::from_definition(catalog.get(0).unwrap()),
                Transform::from_xyz(0.0, 0.0, 0.0),
            ))
            .id();
        let earth = world
            .spawn((
                CelestialBody::from_definition(catalog.get(3).unwrap()),
                Transform::from_xyz(70.0, 0.0, 0.0),
            ))
            .id();
        let atmosphere = world
            .spawn((Attachment { body: earth }, Transform::default()))
            .id();

        world.run_system_once(update_orbit_positions).unwrap();
        world.run_system_once(sync_attachments).unwrap();

        let earth_pos = world.get::<Transform>(earth).unwrap().translation;
        assert!(earth_pos.x.abs() < 1e-4);
        assert!((earth_pos.z - 63.0).abs() < 1e-4);
        assert_eq!(world.get::<Transform>(sun).unwrap().translation, Vec3::ZERO);
        assert_eq!(world.get::<Transform>(atmosphere).unwrap().translation, earth_pos);
    }

    #[test]
    fn test_start_offset_scatters_planets() {
        let settings = OrbitSettings::default();
        let catalog = BodyCatalog::default();
        let clock = OrbitClock::starting_at(std::time::Duration::from_millis(1_700_000_123_457));

        let mut angles: Vec<f64> = catalog
            .iter()
            .filter_map(|body| body.orbit)
            .map(|orbit| settings.angle(clock.millis(), orbit.period).rem_euclid(TAU))
            .collect();
        angles.sort_by(f64::total_cmp);

        assert_eq!(angles.len(), 8);
        for pair in angles.windows(2) {
            assert!(pair[1] - pair[0] > 0.05, "planets bunched at {angles:?}");
        }
    }
}
