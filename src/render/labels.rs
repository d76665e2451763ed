//! Body labels using egui for text rendering.
//!
//! Label placement is computed by the orbit update (and therefore freezes
//! while paused); drawing happens every frame from the stored placement.
//!
//! Placement is a translation relative to the bottom-left corner of the
//! viewport: `x = (ndc.x * 0.5 + 0.5) * width`, `y = -(ndc.y * 0.5 + 0.5) * height`.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::camera::MainCamera;
use crate::orbit::sync_attachments;
use crate::render::bodies::CelestialBody;
use crate::types::{FrameSet, orbits_running};

/// Plugin providing body label placement and rendering.
pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LabelSettings>()
            .add_systems(
                Update,
                place_labels
                    .after(sync_attachments)
                    .in_set(FrameSet::Orbits)
                    .run_if(orbits_running),
            )
            .add_systems(EguiPrimaryContextPass, draw_body_labels);
    }
}

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    /// Whether labels are visible.
    pub visible: bool,
    pub font_size: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            font_size: 14.0,
        }
    }
}

/// Where a body's label sits, relative to the bottom-left viewport corner.
///
/// `None` while the body is behind the camera or before the first placement.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct LabelPlacement {
    pub translate: Option<Vec2>,
}

/// Label translation for a world point as seen by `camera`.
///
/// `None` for points behind the camera (or past the far plane) and for a
/// camera whose viewport size is not known yet.
pub fn label_for(camera: &Camera, camera_transform: &GlobalTransform, world: Vec3) -> Option<Vec2> {
    let viewport = camera.logical_viewport_size()?;
    let ndc = camera.world_to_ndc(camera_transform, world)?;
    // Reverse-z: in front of the camera is depth (0, 1]
    if !(0.0..=1.0).contains(&ndc.z) {
        return None;
    }
    Some(label_translation(ndc.truncate(), viewport))
}

/// Convert NDC to the label translation.
pub fn label_translation(ndc: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (ndc.x * 0.5 + 0.5) * viewport.x,
        -(ndc.y * 0.5 + 0.5) * viewport.y,
    )
}

/// Top-left screen position of a label translation.
pub fn label_screen_position(translate: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(translate.x, viewport.y + translate.y)
}

/// Recompute label placements from the current body positions and camera.
///
/// The camera is a root entity moved earlier in this frame, so its pose is
/// read from `Transform` rather than the not yet propagated `GlobalTransform`.
pub fn place_labels(
    camera: Query<(&Camera, &Transform), With<MainCamera>>,
    mut bodies: Query<(&Transform, &mut LabelPlacement), (With<CelestialBody>, Without<MainCamera>)>,
) {
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let camera_transform = GlobalTransform::from(*camera_transform);

    for (transform, mut placement) in bodies.iter_mut() {
        placement.translate = label_for(camera, &camera_transform, transform.translation);
    }
}

/// Draw labels at their stored placements.
fn draw_body_labels(
    mut contexts: EguiContexts,
    window: Query<&Window, With<PrimaryWindow>>,
    bodies: Query<(&CelestialBody, &LabelPlacement)>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible {
        return;
    }

    let Ok(window) = window.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let viewport = Vec2::new(window.width(), window.height());

    egui::Area::new(egui::Id::new("body_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .interactable(false)
        .show(ctx, |ui| {
            let painter = ui.painter();
            let font = egui::FontId::proportional(settings.font_size);

            for (body, placement) in bodies.iter() {
                let Some(translate) = placement.translate else {
                    continue;
                };
                let screen = label_screen_position(translate, viewport);
                let pos = egui::pos2(screen.x, screen.y);

                // Shadow
                painter.text(
                    pos + egui::vec2(1.0, 1.0),
                    egui::Align2::LEFT_TOP,
                    &body.name,
                    font.clone(),
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
                );

                painter.text(
                    pos,
                    egui::Align2::LEFT_TOP,
                    &body.name,
                    font.clone(),
                    egui::Color32::from_rgba_unmultiplied(220, 220, 220, 230),
                );
            }
        });
}
