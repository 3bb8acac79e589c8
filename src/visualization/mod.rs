//! Visualization module
//!
//! This module handles the Earth, lighting, and the selection effects:
//! orbit line, tracking ring and ripple.

use bevy::prelude::*;

pub mod audio;
pub mod earth;
pub mod effects;
pub mod gizmos;
pub mod lighting;

pub use earth::EarthPlugin;

use crate::satellite::SwarmSet;

/// Plugin for selection effects and scene lighting
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<gizmos::EffectClock>()
            .init_resource::<audio::RippleSound>()
            .add_systems(
                Startup,
                (
                    lighting::spawn_lights,
                    audio::load_ripple_sound,
                    gizmos::init_ripple_state,
                ),
            )
            .add_systems(
                Update,
                (
                    gizmos::tick_effect_clock,
                    (
                        gizmos::draw_orbit_system,
                        gizmos::draw_tracking_ring_system,
                        gizmos::ripple_system,
                    ),
                )
                    .chain()
                    .in_set(SwarmSet::Present),
            );
    }
}
