//! Orrery - Interactive Solar System Viewer
//!
//! A desktop application showing the Sun and its eight planets on animated
//! orbits, with a short opening camera flight and clickable bodies.

use std::path::Path;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::OrreryPlugin;
use orrery::render::SceneSettings;
use orrery::types::OrbitClock;

fn main() {
    // Textures are optional; untextured bodies fall back to flat colors
    let textures = Path::new("assets/textures").is_dir();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(SceneSettings {
            textures,
            ..default()
        })
        .insert_resource(OrbitClock::from_wall_clock())
        .add_plugins(OrreryPlugin)
        .run();
}
