//! Selection effect animators
//!
//! Pure functions of wall-clock time and the current selection. They produce
//! visibility, scale and opacity; drawing happens in the gizmo systems.

use bevy::math::DVec3;
use bevy::prelude::*;

pub const TRACKING_PULSE_RATE: f64 = 0.005;
pub const TRACKING_PULSE_AMPLITUDE: f64 = 0.3;

/// Ripple loop length in seconds
pub const RIPPLE_PERIOD_S: f64 = 2.0;
/// The sound cue may fire while elapsed is below this
pub const RIPPLE_CUE_WINDOW_S: f64 = 0.1;

/// Tracking ring parameters for one frame
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackingRingFrame {
    pub visible: bool,
    pub position: DVec3,
    pub scale: f64,
}

/// Pulsating ring that follows the selected satellite.
///
/// `t_ms` is wall-clock milliseconds.
pub fn tracking_ring(target: Option<DVec3>, t_ms: f64) -> TrackingRingFrame {
    match target {
        Some(position) => TrackingRingFrame {
            visible: true,
            position,
            scale: 1.0 + TRACKING_PULSE_AMPLITUDE * (t_ms * TRACKING_PULSE_RATE).sin(),
        },
        None => TrackingRingFrame {
            visible: false,
            position: DVec3::ZERO,
            scale: 1.0,
        },
    }
}

/// Capability to play the one-shot ripple sound
pub trait AudioCue {
    fn play(&mut self) -> anyhow::Result<()>;
}

/// Cue that plays nothing, used when the sound is muted
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn play(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Ripple parameters for one frame
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RippleFrame {
    pub visible: bool,
    pub position: DVec3,
    pub scale: f64,
    pub opacity: f64,
}

impl RippleFrame {
    fn hidden(position: DVec3) -> Self {
        Self {
            visible: false,
            position,
            scale: 0.0,
            opacity: 0.0,
        }
    }
}

/// Opacity for a ripple `elapsed` seconds into its loop
pub fn ripple_opacity(elapsed: f64) -> f64 {
    (0.5 - elapsed * 0.25).max(0.0)
}

/// Expanding ripple around the selected satellite, with a sound cue at the
/// start of every loop.
#[derive(Debug)]
pub struct RippleAnimator {
    /// Start offset in seconds
    pub delay_s: f64,
    last_cue_cycle: Option<i64>,
}

impl RippleAnimator {
    pub fn new(delay_s: f64) -> Self {
        Self {
            delay_s,
            last_cue_cycle: None,
        }
    }

    /// Advance to wall-clock time `t_s` (seconds).
    ///
    /// The cue fires at most once per loop, on the first frame whose elapsed
    /// time falls inside the cue window. Cue failures are logged and ignored.
    pub fn update(&mut self, target: Option<DVec3>, t_s: f64, cue: &mut dyn AudioCue) -> RippleFrame {
        let Some(position) = target else {
            return RippleFrame::hidden(DVec3::ZERO);
        };

        let since_start = t_s - self.delay_s;
        let elapsed = since_start % RIPPLE_PERIOD_S;
        if elapsed < 0.0 {
            return RippleFrame::hidden(position);
        }

        let cycle = (since_start / RIPPLE_PERIOD_S).floor() as i64;
        if elapsed < RIPPLE_CUE_WINDOW_S && self.last_cue_cycle != Some(cycle) {
            self.last_cue_cycle = Some(cycle);
            if let Err(err) = cue.play() {
                warn!("Ripple sound failed: {}", err);
            }
        }

        RippleFrame {
            visible: true,
            position,
            scale: elapsed,
            opacity: ripple_opacity(elapsed),
        }
    }
}
