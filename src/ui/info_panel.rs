//! Info panel showing the last picked planet.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::catalog::BodyDefinition;

use super::icons;

/// Details shown for a selected body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyInfo {
    pub name: String,
    /// Orbital distance in AU.
    pub distance: f64,
    /// Size in Earth diameters.
    pub size: f32,
    /// Orbital period in Earth years.
    pub period: f64,
}

impl BodyInfo {
    /// Info for a planet. The Sun has no distance or period and reports zeros.
    pub fn from_definition(definition: &BodyDefinition) -> Self {
        let (distance, period) = definition
            .orbit
            .map_or((0.0, 0.0), |orbit| (orbit.distance, orbit.period));
        Self {
            name: definition.name.clone(),
            distance,
            size: definition.normalized_size(),
            period,
        }
    }

    /// Detail lines below the name.
    pub fn details(&self) -> [String; 3] {
        [
            format!("Distance from Sun: {} AU", self.distance),
            format!("Size: {} Earth diameters", self.size),
            format!("Orbital Period: {} Earth years", self.period),
        ]
    }
}

/// Content of the info panel; empty until a planet is picked.
#[derive(Resource, Default, Debug)]
pub struct InfoPanel {
    selected: Option<BodyInfo>,
}

impl InfoPanel {
    pub fn show(&mut self, info: BodyInfo) {
        self.selected = Some(info);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&BodyInfo> {
        self.selected.as_ref()
    }

    /// Plain-text rendering of the panel; empty string when nothing is selected.
    pub fn text(&self) -> String {
        match &self.selected {
            Some(info) => {
                let mut lines = vec![info.name.clone()];
                lines.extend(info.details());
                lines.join("\n")
            }
            None => String::new(),
        }
    }
}

/// System that renders the info panel in the top-left corner.
pub fn info_panel_system(mut contexts: EguiContexts, panel: Res<InfoPanel>) {
    let Some(info) = panel.selected() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("info_panel"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("{} {}", icons::PLANET, info.name))
                    .size(20.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            );
            for line in info.details() {
                ui.label(egui::RichText::new(line).size(20.0).color(egui::Color32::WHITE));
            }
        });
}
