//! Rendering systems for the orrery.
//!
//! This module builds the scene (Sun, planets, rings, atmospheres, orbit
//! paths, starfield, lights) and places the per-body labels.

mod background;
pub mod bodies;
pub mod labels;
mod orbits;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::CelestialBodyPlugin;
use self::labels::LabelPlugin;
use self::orbits::OrbitPathPlugin;

// Re-export for use in other modules
pub use self::bodies::{Attachment, CelestialBody};
pub use self::labels::{LabelPlacement, LabelSettings};
pub use self::orbits::OrbitPathSettings;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneSettings>().add_plugins((
            CelestialBodyPlugin,
            BackgroundPlugin,
            OrbitPathPlugin,
            LabelPlugin,
        ));
    }
}

/// Scene construction settings.
#[derive(Resource, Clone, Debug)]
pub struct SceneSettings {
    /// Load body textures from the asset directory.
    ///
    /// Bodies whose texture is still loading (or missing) are not drawn by
    /// Bevy, so this is only worth enabling when the files are shipped.
    pub textures: bool,
    /// Number of background stars.
    pub star_count: usize,
    /// Edge length of the cube the stars are scattered in.
    pub star_extent: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            textures: false,
            star_count: 10_000,
            star_extent: 2000.0,
        }
    }
}
