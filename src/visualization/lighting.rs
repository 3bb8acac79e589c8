//! Scene lighting

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

/// Marker component for the key directional light
#[derive(Component)]
pub struct SunLight;

/// Ambient fill plus one directional light from (3, 6, 2)
pub fn spawn_lights(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        brightness: 400.0,
        ..default()
    });

    let dir = Vec3::new(3.0, 6.0, 2.0).normalize();
    // Distance doesn't affect DirectionalLight intensity.
    let light_distance = 2_000.0;
    commands.spawn((
        DirectionalLight {
            illuminance: 6_000.0,
            ..default()
        },
        SunLight,
        Transform::from_translation(dir * light_distance).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
