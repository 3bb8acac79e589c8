//! Satellite systems for stepping and position updates

use bevy::prelude::*;

use crate::core::config::SimulationConfig;
use crate::orbital;
use crate::satellite::components::{Satellite, SatelliteIndex};
use crate::satellite::resources::SatelliteStore;

/// Spawn one visible body per record
pub fn spawn_satellite_entities_system(
    store: Res<SatelliteStore>,
    config: Res<SimulationConfig>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(config.satellite_radius).mesh().uv(16, 16));

    for (index, record) in store.iter().enumerate() {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: record.color,
                unlit: true,
                ..default()
            })),
            Satellite,
            SatelliteIndex(index),
            Transform::from_translation(record.position.as_vec3()),
        ));
    }

    if store.is_empty() {
        warn!("No satellites configured");
    } else {
        info!("Spawned {} satellite entities", store.len());
    }
}

/// System to advance every satellite by one tick
pub fn step_satellites_system(mut store: ResMut<SatelliteStore>) {
    orbital::step(store.records_mut());
}

/// System to copy record positions onto satellite transforms
pub fn sync_satellite_transforms_system(
    store: Res<SatelliteStore>,
    mut q: Query<(&SatelliteIndex, &mut Transform), With<Satellite>>,
) {
    for (index, mut transform) in q.iter_mut() {
        if let Some(record) = store.get(index.0) {
            transform.translation = record.position.as_vec3();
        }
    }
}
