use bevy::prelude::*;

use crate::core::config::SimulationConfig;

/// Glow shell radius relative to the Earth
const GLOW_SCALE: f32 = 1.05;

/// Marker for the Earth entity
#[derive(Component)]
pub struct Earth;

/// Plugin for Earth rendering and rotation
pub struct EarthPlugin;

impl Plugin for EarthPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_earth)
            .add_systems(Update, spin_earth);
    }
}

/// Spawn the textured Earth and its glow shell
pub fn spawn_earth(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    config: Res<SimulationConfig>,
) {
    let radius = config.earth_radius_display() as f32;

    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(asset_server.load("earth8k.jpg")),
        perceptual_roughness: 1.0,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(128, 64))),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, 0.0, 0.0),
        Visibility::Visible,
        Earth,
        Name::new("Earth"),
    ));

    if config.show_glow {
        let glow = materials.add(StandardMaterial {
            base_color: Color::srgba(0.0, 0.67, 1.0, 0.12),
            alpha_mode: AlphaMode::Add,
            unlit: true,
            ..default()
        });
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(radius * GLOW_SCALE).mesh().uv(64, 64))),
            MeshMaterial3d(glow),
            Transform::from_xyz(0.0, 0.0, 0.0),
            Name::new("Earth Glow"),
        ));
    }
}

/// Rotate the Earth a fixed amount every frame
pub fn spin_earth(config: Res<SimulationConfig>, mut query: Query<&mut Transform, With<Earth>>) {
    for mut transform in &mut query {
        transform.rotate_y(config.earth_spin_per_tick);
    }
}
