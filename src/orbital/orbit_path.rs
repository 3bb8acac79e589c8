//! Closed orbit polylines for display

use bevy::math::DVec3;

use crate::core::coordinates::to_cartesian;
use crate::satellite::resources::SatelliteRecord;

/// Points in a full orbit polyline: 0..=360 degrees at 1 degree steps.
pub const ORBIT_SAMPLES: usize = 361;

/// Sample a record's full orbit. First and last points coincide.
pub fn build_orbit(record: &SatelliteRecord) -> Vec<DVec3> {
    (0..ORBIT_SAMPLES)
        .map(|deg| {
            to_cartesian(
                record.inclination,
                (deg as f64).to_radians(),
                record.ascending_node,
                record.radius,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coordinates::{DISPLAY_SCALE, EARTH_RADIUS_DISPLAY};

    fn sample_record() -> SatelliteRecord {
        SatelliteRecord::new(45.0, 2.0, 300.0, 0.00025, 1.0, DISPLAY_SCALE, EARTH_RADIUS_DISPLAY)
    }

    #[test]
    fn test_orbit_has_361_points_and_closes() {
        let orbit = build_orbit(&sample_record());
        assert_eq!(orbit.len(), ORBIT_SAMPLES);
        let first = orbit[0];
        let last = orbit[ORBIT_SAMPLES - 1];
        assert!((first - last).length() < 1e-9, "orbit not closed");
    }

    #[test]
    fn test_orbit_points_lie_at_record_radius() {
        let r = sample_record();
        for p in build_orbit(&r) {
            assert!((p.length() - r.radius).abs() < 1e-9);
        }
    }

    #[test]
    fn test_orbit_contains_current_position_plane() {
        // The live position is on the orbit plane: its normal is orthogonal to it.
        let r = sample_record();
        let orbit = build_orbit(&r);
        let normal = orbit[0].cross(orbit[90]).normalize();
        assert!(normal.dot(r.position).abs() < 1e-6);
    }

    #[test]
    fn test_orbit_ignores_current_angle() {
        let mut a = sample_record();
        let b = sample_record();
        a.angle = 4.0;
        a.refresh_position();
        assert_eq!(build_orbit(&a), build_orbit(&b));
    }
}
