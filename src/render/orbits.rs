//! Orbit path markers.
//!
//! Each planet gets a thin flat ring at its orbital distance. The marker is
//! circular even though the orbit itself is slightly squashed along z; it is
//! a guide, not a trace.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::render::bodies::CelestialBody;

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .add_systems(PostStartup, spawn_orbit_paths)
            .add_systems(Update, apply_orbit_path_visibility);
    }
}

/// Settings for orbit path rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    /// Half the ring width, in scene units.
    pub half_width: f32,
    /// Number of segments around the ring.
    pub resolution: u32,
    pub color: Color,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            half_width: 0.5,
            resolution: 64,
            color: Color::srgb(0.53, 0.53, 0.53),
        }
    }
}

/// Marker for an orbit path.
#[derive(Component)]
pub struct OrbitPath;

/// Inner and outer radius of the marker for an orbit distance.
pub fn path_radii(distance: f32, half_width: f32) -> (f32, f32) {
    ((distance - half_width).max(0.0), distance + half_width)
}

/// Spawn one flat ring per orbiting body, centered on the Sun.
fn spawn_orbit_paths(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<OrbitPathSettings>,
    bodies: Query<&CelestialBody>,
) {
    let material = materials.add(StandardMaterial {
        base_color: settings.color,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    let visibility = if settings.visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };

    let mut count = 0;
    for body in bodies.iter() {
        let Some(orbit) = body.orbit else {
            continue;
        };

        let (inner, outer) = path_radii(orbit.distance as f32, settings.half_width);
        let mesh = meshes.add(Annulus::new(inner, outer).mesh().resolution(settings.resolution));

        commands.spawn((
            Name::new(format!("{} orbit", body.name)),
            Mesh3d(mesh),
            MeshMaterial3d(material.clone()),
            // Annulus lies in the XY plane; lay it flat on the orbital plane
            Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            visibility,
            OrbitPath,
        ));
        count += 1;
    }

    debug!("Spawned {} orbit paths", count);
}

/// Show or hide every orbit path when the setting changes.
fn apply_orbit_path_visibility(
    settings: Res<OrbitPathSettings>,
    mut paths: Query<&mut Visibility, With<OrbitPath>>,
) {
    if !settings.is_changed() {
        return;
    }

    let visibility = if settings.visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut v in paths.iter_mut() {
        *v = visibility;
    }
}
