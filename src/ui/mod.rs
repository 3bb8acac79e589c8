//! User interface module
//!
//! The info panel for the selected satellite and the camera marker used for
//! picking and effects.

use bevy::prelude::*;

pub mod info_panel;

pub use info_panel::InfoPanelState;

use crate::satellite::SwarmSet;

/// Marker for the main scene camera
#[derive(Component)]
pub struct MainCamera;

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InfoPanelState>()
            .add_systems(Startup, info_panel::spawn_info_panel)
            .add_systems(
                Update,
                info_panel::update_info_panel_system.after(SwarmSet::Select),
            );
    }
}
