//! Satellite management module
//!
//! This module owns the satellite state store and the systems that step the
//! swarm each frame and mirror it onto renderable entities.

use bevy::prelude::*;

pub mod components;
pub mod resources;
pub mod systems;

pub use resources::{SatelliteRecord, SatelliteStore};
pub use systems::{
    spawn_satellite_entities_system, step_satellites_system, sync_satellite_transforms_system,
};

/// Ordering for per-frame work: satellites move before anything reads them.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SwarmSet {
    Step,
    Select,
    Present,
}

/// Plugin for satellite spawning and stepping.
///
/// Expects `SatelliteStore` and `SimulationConfig` to be inserted by the app.
pub struct SatellitePlugin;

impl Plugin for SatellitePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (SwarmSet::Step, SwarmSet::Select, SwarmSet::Present).chain(),
        )
        .add_systems(Startup, spawn_satellite_entities_system)
        .add_systems(
            Update,
            (step_satellites_system, sync_satellite_transforms_system)
                .chain()
                .in_set(SwarmSet::Step),
        );
    }
}
