//! Satellite components for the Bevy ECS system

use bevy::prelude::*;

/// Component marker for satellite entities
#[derive(Component)]
pub struct Satellite;

/// Index of the satellite's record in the `SatelliteStore`
#[derive(Component, Copy, Clone, Debug, PartialEq, Eq)]
pub struct SatelliteIndex(pub usize);
