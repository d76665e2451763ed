//! Test utilities for camera-dependent unit tests.
//!
//! Outside a rendering app nothing runs Bevy's camera system, so cameras
//! built here carry the projection matrix and target size it would compute.

/// Fixtures for cameras.
pub mod fixtures {
    use bevy::camera::{CameraProjection, ComputedCameraValues, RenderTargetInfo};
    use bevy::prelude::*;

    use crate::camera::{FOV_DEGREES, NEAR};

    /// The main camera's perspective projection.
    pub fn perspective() -> Projection {
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR,
            ..default()
        })
    }

    /// A camera with `projection` computed for a viewport of the given logical size.
    pub fn camera_with(mut projection: Projection, viewport: Vec2) -> Camera {
        projection.update(viewport.x, viewport.y);
        Camera {
            computed: ComputedCameraValues {
                clip_from_view: projection.get_clip_from_view(),
                target_info: Some(RenderTargetInfo {
                    physical_size: viewport.as_uvec2(),
                    scale_factor: 1.0,
                }),
                ..default()
            },
            ..default()
        }
    }

    /// A camera using the main camera's perspective projection.
    pub fn perspective_camera(viewport: Vec2) -> Camera {
        camera_with(perspective(), viewport)
    }
}
