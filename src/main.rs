use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{RenderCreation, WgpuSettings};
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod core;
mod orbital;
mod satellite;
mod selection;
mod ui;
mod visualization;

use crate::core::SimulationConfig;
use satellite::{SatellitePlugin, SatelliteStore};
use selection::SelectionPlugin;
use ui::{MainCamera, UiPlugin};
use visualization::{EarthPlugin, VisualizationPlugin};

const CAMERA_DISTANCE: f32 = 1000.0;

// Setup scene camera
pub fn setup(mut commands: Commands) {
    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(CAMERA_DISTANCE),
        yaw: Some(0.0),
        pitch: Some(0.0),
        force_update: true,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            far: 10_000.0,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::srgb_u8(0x00, 0x00, 0x33)),
            ..default()
        },
        pan_orbit,
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn load_config() -> SimulationConfig {
    match SimulationConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[CONFIG] {}; using defaults", e);
            SimulationConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = load_config();
    let store = SatelliteStore::from_config(&config)?;
    println!(
        "[INIT] generated {} satellites (seed: {:?})",
        store.len(),
        config.seed
    );

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "OrbitSwarm".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(RenderPlugin {
                render_creation: RenderCreation::Automatic(WgpuSettings { ..default() }),
                ..default()
            }),
    );

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.insert_resource(config);
    app.insert_resource(store);

    app.add_plugins(PanOrbitCameraPlugin);
    app.add_plugins(EarthPlugin);
    app.add_plugins(SatellitePlugin);
    app.add_plugins(SelectionPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(UiPlugin);
    app.add_systems(Startup, setup);

    app.run();
    Ok(())
}
