//! Background rendering for the orrery.
//!
//! Provides the starfield and the scene lighting.

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use rand::Rng;

use crate::render::SceneSettings;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, (spawn_starfield, spawn_lighting));
    }
}

/// Random star position inside a cube of edge `extent` centered on the origin.
pub fn random_star_position(rng: &mut impl Rng, extent: f32) -> Vec3 {
    let half = extent * 0.5;
    Vec3::new(
        rng.gen_range(-half..half),
        rng.gen_range(-half..half),
        rng.gen_range(-half..half),
    )
}

/// Spawn a starfield of small unlit points around the system.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    // Low-poly is plenty at this size
    let star_mesh = meshes.add(Sphere::new(0.35).mesh().uv(6, 4));

    let mut rng = rand::thread_rng();

    for _ in 0..settings.star_count {
        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(random_star_position(&mut rng, settings.star_extent)),
        ));
    }

    info!("Spawned {} background stars", settings.star_count);
}

/// Spawn a point light at the Sun and a dim ambient fill.
fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb(0.25, 0.25, 0.25),
        brightness: 80.0,
        ..default()
    });

    commands.spawn((
        Name::new("Sunlight"),
        PointLight {
            intensity: 2.0e8,
            range: 3000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));

    info!("Scene lighting initialized");
}
