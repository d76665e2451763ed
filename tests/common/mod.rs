//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use bevy::camera::{CameraProjection, ComputedCameraValues, RenderTargetInfo};
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::window::PrimaryWindow;

use orrery::camera::choreography::START;
use orrery::camera::{CameraChoreography, FOV_DEGREES, MainCamera, NEAR, advance_choreography};
use orrery::catalog::BodyCatalog;
use orrery::navigation::NavigationPlugin;
use orrery::orbit::OrbitPlugin;
use orrery::picking::{BodyRegistry, PickingPlugin};
use orrery::render::bodies::spawn_body;
use orrery::render::labels::LabelPlugin;
use orrery::time::TimePlugin as OrbitTimePlugin;
use orrery::types::{FrameSet, FrameSetPlugin};
use orrery::ui::{ControlEvent, UiPlugin};

/// Logical size of the headless window and camera target.
pub const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

/// Fixed frame delta used by every headless app.
pub const FRAME: Duration = Duration::from_millis(16);

/// Headless app with the full controller minus rendering, input and egui.
///
/// A 1280x720 primary window, a static camera at the choreography start and
/// one logical entity per catalog body.
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .init_resource::<BodyCatalog>()
        .add_plugins((
            FrameSetPlugin,
            OrbitTimePlugin,
            OrbitPlugin,
            LabelPlugin,
            PickingPlugin,
            NavigationPlugin,
            UiPlugin,
        ));

    app.world_mut().spawn((Window::default(), PrimaryWindow));
    // No render app runs here, so fill in what Bevy's camera system computes
    let mut projection = Projection::from(PerspectiveProjection {
        fov: FOV_DEGREES.to_radians(),
        near: NEAR,
        ..default()
    });
    projection.update(VIEWPORT.x, VIEWPORT.y);
    let camera = Camera {
        computed: ComputedCameraValues {
            clip_from_view: projection.get_clip_from_view(),
            target_info: Some(RenderTargetInfo {
                physical_size: VIEWPORT.as_uvec2(),
                scale_factor: 1.0,
            }),
            ..default()
        },
        ..default()
    };
    app.world_mut().spawn((
        camera,
        Transform::from_translation(START).looking_at(Vec3::ZERO, Vec3::Y),
        projection,
        MainCamera,
    ));

    app.world_mut()
        .run_system_once(
            |mut commands: Commands, mut registry: ResMut<BodyRegistry>, catalog: Res<BodyCatalog>| {
                for (index, definition) in catalog.iter().enumerate() {
                    spawn_body(&mut commands, &mut registry, index, definition);
                }
            },
        )
        .expect("spawning bodies should succeed");

    app
}

/// Add the camera choreography driving the main camera.
pub fn with_choreography(app: &mut App) {
    app.init_resource::<CameraChoreography>()
        .add_systems(Update, advance_choreography.in_set(FrameSet::Camera));
}

/// Run `frames` updates.
pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// Send a control event and apply it with one update.
pub fn press(app: &mut App, event: ControlEvent) {
    app.world_mut().write_message(event);
    app.update();
}

/// Entity of the body with the given name.
pub fn body(app: &mut App, name: &str) -> Entity {
    let mut query = app.world_mut().query::<(Entity, &Name)>();
    query
        .iter(app.world())
        .find(|(_, n)| n.as_str() == name)
        .map(|(entity, _)| entity)
        .unwrap_or_else(|| panic!("no body named {name}"))
}

/// Current translation of an entity.
pub fn translation(app: &App, entity: Entity) -> Vec3 {
    app.world()
        .get::<Transform>(entity)
        .expect("entity should have a transform")
        .translation
}

/// Current translation of the main camera.
pub fn camera_translation(app: &mut App) -> Vec3 {
    let mut query = app
        .world_mut()
        .query_filtered::<&Transform, With<MainCamera>>();
    query
        .single(app.world())
        .expect("one main camera")
        .translation
}
