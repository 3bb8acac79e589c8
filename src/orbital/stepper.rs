//! Per-tick orbital stepping
//!
//! Angles advance by a fixed per-satellite rate; there is no gravity model.

use std::f64::consts::TAU;

use crate::satellite::resources::SatelliteRecord;

/// Advance every record by one tick and refresh its position.
pub fn step(records: &mut [SatelliteRecord]) {
    for record in records.iter_mut() {
        record.angle = (record.angle + record.angular_speed).rem_euclid(TAU);
        record.refresh_position();
    }
}
