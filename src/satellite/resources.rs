//! Satellite resources for managing satellite data

use bevy::math::DVec3;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use std::fmt;

use crate::core::config::SimulationConfig;
use crate::core::coordinates::to_cartesian;

/// One satellite's orbital parameters and derived position.
#[derive(Clone, Debug)]
pub struct SatelliteRecord {
    /// Orbital plane tilt, degrees in [-90, 90]
    pub inclination: f64,
    /// Longitude of ascending node, radians in [0, 2π)
    pub ascending_node: f64,
    /// Altitude in arbitrary units, [50, 450]
    pub altitude: f64,
    /// Altitude converted to display units
    pub scaled_altitude: f64,
    /// Orbit radius in display units (Earth radius + scaled altitude)
    pub radius: f64,
    /// Radians advanced per tick
    pub angular_speed: f64,
    /// Current angle along the orbit, radians in [0, 2π)
    pub angle: f64,
    /// Derived from the fields above; refreshed on every step
    pub position: DVec3,
    /// Display number used for the satellite name
    pub designation: u32,
    pub color: Color,
}

impl SatelliteRecord {
    pub fn new(
        inclination: f64,
        ascending_node: f64,
        altitude: f64,
        angular_speed: f64,
        angle: f64,
        display_scale: f64,
        earth_radius: f64,
    ) -> Self {
        let scaled_altitude = altitude * display_scale;
        let radius = earth_radius + scaled_altitude;
        Self {
            inclination,
            ascending_node,
            altitude,
            scaled_altitude,
            radius,
            angular_speed,
            angle,
            position: to_cartesian(inclination, angle, ascending_node, radius),
            designation: 0,
            color: Color::WHITE,
        }
    }

    /// Recompute `position` from the current angle
    pub fn refresh_position(&mut self) {
        self.position = to_cartesian(self.inclination, self.angle, self.ascending_node, self.radius);
    }

    /// Satellite display name
    pub fn name(&self) -> String {
        format!("Satellite-{}", self.designation)
    }
}

/// Error raised when building the store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    NegativeCount(i64),
    /// The picking sphere must enclose the visible body
    InteractionRadiusTooSmall { interaction: f64, body: f32 },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NegativeCount(n) => {
                write!(f, "satellite count must not be negative (got {})", n)
            }
            StoreError::InteractionRadiusTooSmall { interaction, body } => write!(
                f,
                "interaction radius {} must be larger than satellite radius {}",
                interaction, body
            ),
        }
    }
}

impl std::error::Error for StoreError {}

/// Resource owning every satellite record.
///
/// Records are created once and never added or removed; only `angle` and
/// `position` change afterwards.
#[derive(Resource, Debug, Default)]
pub struct SatelliteStore {
    records: Vec<SatelliteRecord>,
}

impl SatelliteStore {
    /// Generate `count` satellites with uniformly random parameters.
    ///
    /// With `seed` set the generated swarm is reproducible.
    pub fn generate(
        count: i64,
        seed: Option<u64>,
        display_scale: f64,
        earth_radius: f64,
    ) -> Result<Self, StoreError> {
        if count < 0 {
            return Err(StoreError::NegativeCount(count));
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let records = (0..count)
            .map(|_| {
                let inclination = rng.gen_range(-90.0..90.0);
                let altitude = rng.gen_range(50.0..450.0);
                let angular_speed = rng.gen_range(0.0002..0.0003);
                let angle = rng.gen_range(0.0..TAU);
                let ascending_node = rng.gen_range(0.0..TAU);

                let mut record = SatelliteRecord::new(
                    inclination,
                    ascending_node,
                    altitude,
                    angular_speed,
                    angle,
                    display_scale,
                    earth_radius,
                );
                record.designation = rng.gen_range(0..10_000);
                record.color = Color::srgb(
                    rng.gen_range(0.0..1.0),
                    rng.gen_range(0.0..1.0),
                    rng.gen_range(0.0..1.0),
                );
                record
            })
            .collect();

        Ok(Self::from_records(records))
    }

    /// Generate the swarm described by a config
    pub fn from_config(config: &SimulationConfig) -> Result<Self, StoreError> {
        if config.interaction_radius <= config.satellite_radius as f64 {
            return Err(StoreError::InteractionRadiusTooSmall {
                interaction: config.interaction_radius,
                body: config.satellite_radius,
            });
        }
        Self::generate(
            config.satellite_count,
            config.seed,
            config.display_scale,
            config.earth_radius_display(),
        )
    }

    /// Build a store from prepared records
    pub fn from_records(records: Vec<SatelliteRecord>) -> Self {
        Self { records }
    }

    pub fn get(&self, index: usize) -> Option<&SatelliteRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SatelliteRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[SatelliteRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [SatelliteRecord] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
