//! Core coordinate utilities
//!
//! Converts the orbital-parameter tuple used by the satellite swarm
//! (inclination, angle along the orbit, ascending node, radius) into a
//! Cartesian position in display units.

use bevy::math::DVec3;
use std::f64::consts::PI;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Scale applied to kilometres to get scene display units.
pub const DISPLAY_SCALE: f64 = 0.08;

/// Earth radius in display units (6371 * 0.08).
#[cfg(test)]
pub const EARTH_RADIUS_DISPLAY: f64 = EARTH_RADIUS_KM * DISPLAY_SCALE;

/// Project a point of a circular orbit into Cartesian space.
///
/// `inclination_deg` is in degrees, `angle` and `ascending_node` in radians.
/// The orbital plane is the equatorial plane tilted by `90 - inclination`
/// around the line of nodes, then rotated by the ascending node.
pub fn to_cartesian(inclination_deg: f64, angle: f64, ascending_node: f64, radius: f64) -> DVec3 {
    let phi = (90.0 - inclination_deg) * (PI / 180.0);
    let (sin_theta, cos_theta) = angle.sin_cos();
    let (sin_omega, cos_omega) = ascending_node.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    let x = radius * (cos_omega * cos_theta - sin_omega * sin_theta * cos_phi);
    let y = radius * (sin_omega * cos_theta + cos_omega * sin_theta * cos_phi);
    let z = radius * (sin_phi * sin_theta);
    DVec3::new(x, y, z)
}
