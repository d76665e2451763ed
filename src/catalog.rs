//! Static definitions of the bodies in the orrery.
//!
//! Distances are in scene units (loosely "AU"), periods in Earth years and
//! sizes are display radii already multiplied by [`PLANET_SCALE_FACTOR`].

use std::collections::HashSet;

use bevy::prelude::*;

use crate::types::PLANET_SCALE_FACTOR;

/// Kind of celestial body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// The central star. Exactly one per catalog, never orbits.
    Star,
    /// A planet orbiting the star.
    Planet,
}

/// Orbital parameters of a planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis in scene units.
    pub distance: f64,
    /// Orbital period in Earth years.
    pub period: f64,
}

/// Immutable description of one body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyDefinition {
    pub name: String,
    pub kind: BodyKind,
    pub orbit: Option<OrbitalElements>,
    /// Display radius in scene units.
    pub size: f32,
    pub rings: bool,
    pub atmosphere: bool,
    pub color: Color,
    /// Texture path relative to the asset root.
    pub texture: Option<String>,
}

impl BodyDefinition {
    fn planet(name: &str, distance: f64, size: f32, period: f64, color: Color) -> Self {
        Self {
            name: name.to_string(),
            kind: BodyKind::Planet,
            orbit: Some(OrbitalElements { distance, period }),
            size: size * PLANET_SCALE_FACTOR,
            rings: false,
            atmosphere: false,
            color,
            texture: Some(format!("textures/{}.jpg", name.to_lowercase())),
        }
    }

    fn with_rings(mut self) -> Self {
        self.rings = true;
        self
    }

    fn with_atmosphere(mut self) -> Self {
        self.atmosphere = true;
        self
    }

    fn with_texture(mut self, path: &str) -> Self {
        self.texture = Some(path.to_string());
        self
    }

    /// Lowercase name, used for navigation destinations.
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }

    /// Size in Earth diameters (display size without the scale factor).
    pub fn normalized_size(&self) -> f32 {
        self.size / PLANET_SCALE_FACTOR
    }

    pub fn is_star(&self) -> bool {
        self.kind == BodyKind::Star
    }
}

/// The default solar system: the Sun followed by the eight planets.
pub fn solar_system() -> Vec<BodyDefinition> {
    vec![
        BodyDefinition {
            name: "Sun".to_string(),
            kind: BodyKind::Star,
            orbit: None,
            size: 10.0 * PLANET_SCALE_FACTOR,
            rings: false,
            atmosphere: false,
            color: Color::srgb(1.0, 0.95, 0.4),
            texture: Some("textures/sun.jpg".to_string()),
        },
        BodyDefinition::planet("Mercury", 35.0, 1.0, 0.24, Color::srgb(0.6, 0.6, 0.6)),
        BodyDefinition::planet("Venus", 50.0, 2.5, 0.62, Color::srgb(0.9, 0.85, 0.7))
            .with_atmosphere(),
        BodyDefinition::planet("Earth", 70.0, 3.0, 1.0, Color::srgb(0.2, 0.5, 0.8))
            .with_texture("textures/earth.png")
            .with_atmosphere(),
        BodyDefinition::planet("Mars", 90.0, 2.0, 1.88, Color::srgb(0.8, 0.4, 0.2)),
        BodyDefinition::planet("Jupiter", 120.0, 8.0, 11.86, Color::srgb(0.8, 0.7, 0.6)),
        BodyDefinition::planet("Saturn", 150.0, 7.0, 29.46, Color::srgb(0.9, 0.85, 0.6))
            .with_rings(),
        BodyDefinition::planet("Uranus", 190.0, 6.0, 84.01, Color::srgb(0.6, 0.8, 0.9)),
        BodyDefinition::planet("Neptune", 230.0, 5.5, 164.8, Color::srgb(0.3, 0.5, 0.9)),
    ]
}

/// Errors found while validating a catalog.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("duplicate body name {0:?}")]
    DuplicateName(String),

    #[error("{body}: {field} must be positive, got {value}")]
    NonPositive {
        body: String,
        field: &'static str,
        value: f64,
    },

    #[error("catalog needs exactly one star, found {0}")]
    StarCount(usize),

    #[error("star {0:?} cannot have an orbit")]
    OrbitingStar(String),

    #[error("planet {0:?} has no orbit")]
    MissingOrbit(String),
}

/// Ordered, validated collection of body definitions.
///
/// Order is definition order and stays stable for the whole session.
#[derive(Resource, Clone, Debug)]
pub struct BodyCatalog {
    bodies: Vec<BodyDefinition>,
}

impl Default for BodyCatalog {
    fn default() -> Self {
        Self {
            bodies: solar_system(),
        }
    }
}

impl BodyCatalog {
    /// Validate and wrap a list of definitions.
    pub fn new(bodies: Vec<BodyDefinition>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        let mut stars = 0;

        for body in &bodies {
            if !names.insert(body.name.as_str()) {
                return Err(CatalogError::DuplicateName(body.name.clone()));
            }

            if !(body.size > 0.0) {
                return Err(CatalogError::NonPositive {
                    body: body.name.clone(),
                    field: "size",
                    value: body.size as f64,
                });
            }

            match (body.kind, body.orbit) {
                (BodyKind::Star, Some(_)) => {
                    return Err(CatalogError::OrbitingStar(body.name.clone()));
                }
                (BodyKind::Star, None) => stars += 1,
                (BodyKind::Planet, None) => {
                    return Err(CatalogError::MissingOrbit(body.name.clone()));
                }
                (BodyKind::Planet, Some(orbit)) => {
                    for (field, value) in [("distance", orbit.distance), ("period", orbit.period)] {
                        if !(value > 0.0) {
                            return Err(CatalogError::NonPositive {
                                body: body.name.clone(),
                                field,
                                value,
                            });
                        }
                    }
                }
            }
        }

        if stars != 1 {
            return Err(CatalogError::StarCount(stars));
        }

        Ok(Self { bodies })
    }

    pub fn get(&self, index: usize) -> Option<&BodyDefinition> {
        self.bodies.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyDefinition> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&BodyDefinition> {
        self.bodies.iter().find(|b| b.name == name)
    }
}
