//! Celestial body rendering and spawning.
//!
//! Handles the visual representation of the Sun and planets together with
//! the geometry attached to them (Saturn's rings, atmospheres).

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::catalog::{BodyCatalog, BodyDefinition, OrbitalElements};
use crate::picking::BodyRegistry;
use crate::render::SceneSettings;
use crate::render::labels::LabelPlacement;
use crate::types::PLANET_SCALE_FACTOR;

/// Inner radius of Saturn's ring system, before the planet scale factor.
const RING_INNER: f32 = 8.5;

/// Outer radius of Saturn's ring system, before the planet scale factor.
const RING_OUTER: f32 = 14.0;

/// Atmosphere shell radius relative to the planet.
const ATMOSPHERE_SCALE: f32 = 1.1;

/// Component marking an entity as a renderable celestial body.
#[derive(Component, Clone, Debug)]
pub struct CelestialBody {
    /// Human-readable name.
    pub name: String,
    /// `None` for the Sun.
    pub orbit: Option<OrbitalElements>,
    /// Display radius, also the pick radius.
    pub size: f32,
}

impl CelestialBody {
    pub fn from_definition(definition: &BodyDefinition) -> Self {
        Self {
            name: definition.name.clone(),
            orbit: definition.orbit,
            size: definition.size,
        }
    }

    /// Position before the first orbit update: on the +x axis at the orbit distance.
    pub fn initial_position(&self) -> Vec3 {
        self.orbit
            .map_or(Vec3::ZERO, |orbit| Vec3::new(orbit.distance as f32, 0.0, 0.0))
    }
}

/// Geometry owned by a body that follows it every unpaused frame.
#[derive(Component, Clone, Copy, Debug)]
pub struct Attachment {
    pub body: Entity,
}

/// Plugin providing celestial body spawning functionality.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodyCatalog>()
            .init_resource::<BodyRegistry>()
            .add_systems(Startup, spawn_solar_system);
    }
}

/// Spawn the logical body entity (no meshes) and register it for picking.
///
/// Planets also get a label placement. Used by the render spawner and by
/// headless setups that have no asset storage.
pub fn spawn_body(
    commands: &mut Commands,
    registry: &mut BodyRegistry,
    index: usize,
    definition: &BodyDefinition,
) -> Entity {
    let body = CelestialBody::from_definition(definition);
    let position = body.initial_position();
    let has_orbit = body.orbit.is_some();

    let mut entity = commands.spawn((
        Name::new(definition.name.clone()),
        Transform::from_translation(position),
        Visibility::default(),
        body,
    ));
    if has_orbit {
        entity.insert(LabelPlacement::default());
    }

    let id = entity.id();
    registry.register(id, index);
    id
}

/// Spawn all bodies of the catalog with their meshes and attachments.
fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    catalog: Res<BodyCatalog>,
    settings: Res<SceneSettings>,
    mut registry: ResMut<BodyRegistry>,
) {
    for (index, definition) in catalog.iter().enumerate() {
        let entity = spawn_body(&mut commands, &mut registry, index, definition);

        let texture = definition
            .texture
            .as_ref()
            .filter(|_| settings.textures)
            .map(|path| asset_server.load::<Image>(path.clone()));

        // Sun is unlit and glows; planets take light from the Sun
        let material = if definition.is_star() {
            StandardMaterial {
                base_color: if texture.is_some() { Color::WHITE } else { definition.color },
                base_color_texture: texture,
                emissive: definition.color.to_linear() * 2.0,
                unlit: true,
                ..default()
            }
        } else {
            StandardMaterial {
                base_color: if texture.is_some() { Color::WHITE } else { definition.color },
                base_color_texture: texture,
                perceptual_roughness: 0.9,
                ..default()
            }
        };

        let mesh = meshes.add(Sphere::new(definition.size).mesh().uv(32, 32));
        commands
            .entity(entity)
            .insert((Mesh3d(mesh), MeshMaterial3d(materials.add(material))));

        let position = CelestialBody::from_definition(definition).initial_position();

        if definition.rings {
            let ring_mesh = meshes.add(
                Annulus::new(RING_INNER * PLANET_SCALE_FACTOR, RING_OUTER * PLANET_SCALE_FACTOR)
                    .mesh()
                    .resolution(64),
            );
            let ring_material = materials.add(StandardMaterial {
                base_color: Color::srgba(0.72, 0.70, 0.65, 0.8),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                double_sided: true,
                cull_mode: None,
                ..default()
            });
            commands.spawn((
                Name::new(format!("{} rings", definition.name)),
                Mesh3d(ring_mesh),
                MeshMaterial3d(ring_material),
                Transform::from_translation(position).with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
                Attachment { body: entity },
            ));
        }

        if definition.atmosphere {
            let shell = meshes.add(Sphere::new(definition.size * ATMOSPHERE_SCALE).mesh().uv(32, 32));
            let shell_material = materials.add(StandardMaterial {
                base_color: Color::srgba(0.0, 0.67, 1.0, 0.5),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            });
            commands.spawn((
                Name::new(format!("{} atmosphere", definition.name)),
                Mesh3d(shell),
                MeshMaterial3d(shell_material),
                Transform::from_translation(position),
                Attachment { body: entity },
            ));
        }
    }

    info!("Spawned {} celestial bodies", catalog.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_positions() {
        let catalog = BodyCatalog::default();
        let sun = CelestialBody::from_definition(catalog.get(0).unwrap());
        let mars = CelestialBody::from_definition(catalog.get(4).unwrap());
        assert_eq!(sun.initial_position(), Vec3::ZERO);
        assert_eq!(mars.initial_position(), Vec3::new(90.0, 0.0, 0.0));
    }

    #[test]
    fn test_spawn_body_registers_and_labels_planets_only() {
        let mut world = World::new();
        let catalog = BodyCatalog::default();
        let mut registry = BodyRegistry::default();

        let mut commands_queue = bevy::ecs::world::CommandQueue::default();
        let (sun, earth) = {
            let mut commands = Commands::new(&mut commands_queue, &world);
            let sun = spawn_body(&mut commands, &mut registry, 0, catalog.get(0).unwrap());
            let earth = spawn_body(&mut commands, &mut registry, 3, catalog.get(3).unwrap());
            (sun, earth)
        };
        commands_queue.apply(&mut world);

        assert_eq!(registry.lookup(sun), Some(0));
        assert_eq!(registry.lookup(earth), Some(3));
        assert_eq!(world.get::<CelestialBody>(earth).unwrap().name, "Earth");
        assert!(world.get::<LabelPlacement>(sun).is_none());
        assert!(world.get::<LabelPlacement>(earth).is_some());
        assert_eq!(
            world.get::<Transform>(earth).unwrap().translation,
            Vec3::new(70.0, 0.0, 0.0)
        );
    }
}
