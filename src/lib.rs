//! Orrery - Interactive Solar System Viewer
//!
//! A library crate providing the orrery's scene, camera choreography,
//! orbit animation and picking, for the application and for headless tests.

pub mod camera;
pub mod catalog;
pub mod input;
pub mod navigation;
pub mod orbit;
pub mod picking;
pub mod render;
#[cfg(test)]
pub mod test_utils;
pub mod time;
pub mod types;
pub mod ui;

use bevy::prelude::*;

use camera::CameraPlugin;
use input::InputPlugin;
use navigation::NavigationPlugin;
use orbit::OrbitPlugin;
use picking::PickingPlugin;
use render::RenderPlugin;
use time::TimePlugin;
use types::FrameSetPlugin;
use ui::UiPlugin;

/// Everything the orrery adds on top of `DefaultPlugins` and `EguiPlugin`.
pub struct OrreryPlugin;

impl Plugin for OrreryPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            FrameSetPlugin,
            TimePlugin,
            CameraPlugin,
            OrbitPlugin,
            RenderPlugin,
            PickingPlugin,
            NavigationPlugin,
            UiPlugin,
            InputPlugin,
        ));
    }
}
