//! Satellite selection module
//!
//! Pointer picking against satellite interaction volumes and the
//! hover/click selection state.

use bevy::prelude::*;

pub mod picking;
pub mod state;
pub mod systems;

pub use state::SelectionState;
pub use systems::{PointerState, click_system, hover_system, pointer_move_system};

use crate::satellite::SwarmSet;

/// Plugin for hover and click selection
pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectionState>()
            .init_resource::<PointerState>()
            .add_systems(
                Update,
                (pointer_move_system, hover_system, click_system)
                    .chain()
                    .in_set(SwarmSet::Select),
            );
    }
}
