//! Navigation requests.
//!
//! The orrery does not own the page it lives in; leaving it for a detail
//! page is a request handed to the host. Requests are logged and kept in
//! [`NavigationHistory`] so embedders (and tests) can act on them.

use bevy::prelude::*;

use crate::types::FrameSet;

/// Where a navigation request points.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Detail page of the Sun.
    SunDetail,
    /// Detail page of a planet, by lowercase name.
    Planet(String),
    /// The simplified child-friendly page.
    ChildMode,
    /// The NEC page.
    Nec,
}

impl Destination {
    /// Page path of the destination.
    pub fn path(&self) -> String {
        match self {
            Destination::SunDetail => "normalsun.html".to_string(),
            Destination::Planet(slug) => format!("{slug}.html"),
            Destination::ChildMode => "index.html".to_string(),
            Destination::Nec => "Nes.html".to_string(),
        }
    }
}

/// Request to leave for another page.
#[derive(Message, Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub destination: Destination,
}

impl NavigationRequest {
    pub fn new(destination: Destination) -> Self {
        Self { destination }
    }
}

/// Every destination requested this session, oldest first.
#[derive(Resource, Default, Debug)]
pub struct NavigationHistory {
    pub requests: Vec<Destination>,
}

impl NavigationHistory {
    pub fn last(&self) -> Option<&Destination> {
        self.requests.last()
    }
}

/// Plugin providing the navigation sink.
pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<NavigationRequest>()
            .init_resource::<NavigationHistory>()
            .add_systems(Update, record_navigation.in_set(FrameSet::Navigation));
    }
}

/// Log and record navigation requests.
pub fn record_navigation(
    mut requests: MessageReader<NavigationRequest>,
    mut history: ResMut<NavigationHistory>,
) {
    for request in requests.read() {
        info!("Navigating to {}", request.destination.path());
        history.requests.push(request.destination.clone());
    }
}
