//! Gizmo rendering for the orbit line, tracking ring and ripple
//!
//! Everything here is immediate-mode: geometry is rebuilt every frame from
//! the selection and the satellite store.

use bevy::math::Isometry3d;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::core::config::SimulationConfig;
use crate::core::time::wall_clock_ms;
use crate::orbital::build_orbit;
use crate::satellite::SatelliteStore;
use crate::selection::SelectionState;
use crate::ui::MainCamera;
use crate::visualization::audio::{RippleSound, SpawnAudioCue};
use crate::visualization::effects::{RippleAnimator, SilentCue, tracking_ring};

const ORBIT_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 0.8);
const TRACKING_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 0.8);
const TRACKING_INNER: f32 = 0.1;
const TRACKING_OUTER: f32 = 0.6;
const RIPPLE_INNER: f32 = 24.0;
const RIPPLE_OUTER: f32 = 26.0;

/// Wall-clock time sampled once per frame
#[derive(Resource, Default, Debug)]
pub struct EffectClock {
    pub now_ms: f64,
}

/// Ripple animation state
#[derive(Resource)]
pub struct RippleState(pub RippleAnimator);

/// Startup system to create the ripple animator with the configured delay
pub fn init_ripple_state(mut commands: Commands, config: Res<SimulationConfig>) {
    commands.insert_resource(RippleState(RippleAnimator::new(config.ripple_delay_s)));
}

pub fn tick_effect_clock(mut clock: ResMut<EffectClock>) {
    clock.now_ms = wall_clock_ms();
}

/// Draw the orbit of the selected satellite, or the hovered one
pub fn draw_orbit_system(
    mut gizmos: Gizmos,
    selection: Res<SelectionState>,
    store: Res<SatelliteStore>,
) {
    let Some(record) = selection.orbit_source().and_then(|i| store.get(i)) else {
        return;
    };
    let orbit = build_orbit(record);
    gizmos.linestrip(orbit.iter().map(|p| p.as_vec3()), ORBIT_COLOR);
}

/// Draw the pulsating ring on the selected satellite
pub fn draw_tracking_ring_system(
    mut gizmos: Gizmos,
    clock: Res<EffectClock>,
    selection: Res<SelectionState>,
    store: Res<SatelliteStore>,
) {
    let target = selection
        .selected()
        .and_then(|i| store.get(i))
        .map(|r| r.position);
    let frame = tracking_ring(target, clock.now_ms);
    if !frame.visible {
        return;
    }

    // Lies flat in the XZ plane.
    let isometry = Isometry3d::new(frame.position.as_vec3(), Quat::from_rotation_x(FRAC_PI_2));
    let scale = frame.scale as f32;
    gizmos.circle(isometry, TRACKING_INNER * scale, TRACKING_COLOR);
    gizmos.circle(isometry, TRACKING_OUTER * scale, TRACKING_COLOR);
}

/// Animate and draw the ripple around the selected satellite
pub fn ripple_system(
    mut gizmos: Gizmos,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    sound: Res<RippleSound>,
    clock: Res<EffectClock>,
    selection: Res<SelectionState>,
    store: Res<SatelliteStore>,
    mut ripple: ResMut<RippleState>,
    camera: Query<&GlobalTransform, With<MainCamera>>,
) {
    let target = selection
        .selected()
        .and_then(|i| store.get(i))
        .map(|r| r.position);

    let t_s = clock.now_ms / 1000.0;
    let frame = match sound.handle.clone() {
        Some(handle) => {
            let mut cue = SpawnAudioCue {
                commands: &mut commands,
                asset_server: &asset_server,
                handle,
                volume: sound.volume,
            };
            ripple.0.update(target, t_s, &mut cue)
        }
        None => ripple.0.update(target, t_s, &mut SilentCue),
    };
    if !frame.visible {
        return;
    }

    let position = frame.position.as_vec3();
    let Ok(camera_transform) = camera.single() else {
        return;
    };
    // Face the camera.
    let rotation = Transform::from_translation(position)
        .looking_at(camera_transform.translation(), Vec3::Y)
        .rotation;
    let isometry = Isometry3d::new(position, rotation);
    let color = Color::srgba(0.0, 1.0, 1.0, frame.opacity as f32);
    let scale = frame.scale as f32;
    gizmos.circle(isometry, RIPPLE_INNER * scale, color);
    gizmos.circle(isometry, RIPPLE_OUTER * scale, color);
}
