//! Click-to-body resolution.
//!
//! A click is turned into a ray through the main camera and cast against
//! every body's bounding sphere. The nearest hit is mapped back
//! to its catalog entry through [`BodyRegistry`] and turned into a
//! navigation request.

use std::collections::HashMap;

use bevy::math::bounding::{BoundingSphere, RayCast3d};
use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::catalog::BodyCatalog;
use crate::navigation::{Destination, NavigationRequest};
use crate::render::CelestialBody;
use crate::types::FrameSet;
use crate::ui::info_panel::{BodyInfo, InfoPanel};

/// Plugin providing pick resolution.
pub struct PickingPlugin;

impl Plugin for PickingPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PickRequest>()
            .init_resource::<BodyRegistry>()
            .add_systems(Update, resolve_picks.in_set(FrameSet::Picking));
    }
}

/// A click on the viewport, in logical window coordinates (origin top-left).
#[derive(Message, Clone, Copy, Debug)]
pub struct PickRequest {
    pub cursor: Vec2,
}

/// Mesh entity to catalog index map, filled once at spawn.
#[derive(Resource, Default, Debug)]
pub struct BodyRegistry {
    bodies: HashMap<Entity, usize>,
}

impl BodyRegistry {
    pub fn register(&mut self, entity: Entity, index: usize) {
        self.bodies.insert(entity, index);
    }

    pub fn lookup(&self, entity: Entity) -> Option<usize> {
        self.bodies.get(&entity).copied()
    }
}

/// Sphere that can be hit by a pick ray.
#[derive(Clone, Copy, Debug)]
pub struct PickTarget {
    pub entity: Entity,
    pub center: Vec3,
    pub radius: f32,
}

/// One ray intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub entity: Entity,
    pub distance: f32,
}

/// What a click resolved to.
#[derive(Clone, Debug, PartialEq)]
pub enum PickOutcome {
    /// Nothing under the pointer.
    Empty,
    /// The Sun was hit.
    Star { entity: Entity, index: usize },
    /// A planet was hit.
    Planet { entity: Entity, index: usize },
    /// Something was hit that the registry does not know.
    Unresolved { entity: Entity },
}

/// All hits along the ray, nearest first.
pub fn intersect(ray: &Ray3d, targets: impl IntoIterator<Item = PickTarget>) -> Vec<PickHit> {
    let cast = RayCast3d::from_ray(*ray, f32::MAX);
    let mut hits: Vec<PickHit> = targets
        .into_iter()
        .filter_map(|target| {
            cast.sphere_intersection_at(&BoundingSphere::new(target.center, target.radius))
                .map(|distance| PickHit {
                    entity: target.entity,
                    distance,
                })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Resolve the nearest hit to a body.
pub fn resolve(hits: &[PickHit], registry: &BodyRegistry, catalog: &BodyCatalog) -> PickOutcome {
    let Some(nearest) = hits.first() else {
        return PickOutcome::Empty;
    };
    let entity = nearest.entity;

    match registry.lookup(entity).and_then(|index| catalog.get(index).map(|d| (index, d))) {
        Some((index, definition)) if definition.is_star() => PickOutcome::Star { entity, index },
        Some((index, _)) => PickOutcome::Planet { entity, index },
        None => PickOutcome::Unresolved { entity },
    }
}

/// Turn pick requests into navigation and info panel updates.
pub fn resolve_picks(
    mut requests: MessageReader<PickRequest>,
    camera: Query<(&Camera, &Transform), With<MainCamera>>,
    bodies: Query<(Entity, &Transform, &CelestialBody), Without<MainCamera>>,
    registry: Res<BodyRegistry>,
    catalog: Res<BodyCatalog>,
    mut info_panel: ResMut<InfoPanel>,
    mut navigation: MessageWriter<NavigationRequest>,
) {
    for request in requests.read() {
        let Ok((camera, camera_transform)) = camera.single() else {
            return;
        };
        // Root entity: this frame's pose is not propagated yet
        let camera_transform = GlobalTransform::from(*camera_transform);
        let Ok(ray) = camera.viewport_to_world(&camera_transform, request.cursor) else {
            continue;
        };

        let targets = bodies.iter().map(|(entity, transform, body)| PickTarget {
            entity,
            center: transform.translation,
            radius: body.size,
        });
        let hits = intersect(&ray, targets);

        match resolve(&hits, &registry, &catalog) {
            PickOutcome::Empty => {
                info_panel.clear();
            }
            PickOutcome::Star { .. } => {
                navigation.write(NavigationRequest::new(Destination::SunDetail));
            }
            PickOutcome::Planet { index, .. } => {
                // Registry indices always come from this catalog
                let Some(definition) = catalog.get(index) else {
                    continue;
                };
                debug!("Picked {}", definition.name);
                navigation.write(NavigationRequest::new(Destination::Planet(definition.slug())));
                info_panel.show(BodyInfo::from_definition(definition));
            }
            PickOutcome::Unresolved { entity } => {
                warn!("Pick hit unregistered entity {:?}, ignoring", entity);
            }
        }
    }
}
