//! Ray picking against satellite interaction volumes
//!
//! Every satellite is wrapped in an invisible sphere larger than its visible
//! body. A pick returns the satellite whose sphere the ray enters first.

use bevy::math::Ray3d;
use bevy::math::bounding::{BoundingSphere, RayCast3d};

use crate::satellite::resources::SatelliteRecord;

/// A pointer ray in display space, unbounded in length
#[derive(Clone, Debug)]
pub struct PickRay(RayCast3d);

impl PickRay {
    /// Distance along the ray to the first point inside the sphere, if any.
    ///
    /// An origin inside the sphere hits at distance 0.
    pub fn sphere_hit(&self, sphere: &BoundingSphere) -> Option<f32> {
        self.0.sphere_intersection_at(sphere)
    }
}

impl From<Ray3d> for PickRay {
    fn from(ray: Ray3d) -> Self {
        Self(RayCast3d::from_ray(ray, f32::MAX))
    }
}

/// Index and distance of the nearest hit
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PickHit {
    pub index: usize,
    pub distance: f32,
}

/// Nearest record whose interaction sphere the ray intersects.
///
/// Linear scan; on equal distances the lower index wins.
pub fn pick(ray: &PickRay, records: &[SatelliteRecord], interaction_radius: f64) -> Option<PickHit> {
    let radius = interaction_radius as f32;
    let mut best: Option<PickHit> = None;
    for (index, record) in records.iter().enumerate() {
        let volume = BoundingSphere::new(record.position.as_vec3(), radius);
        let Some(distance) = ray.sphere_hit(&volume) else {
            continue;
        };
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(PickHit { index, distance });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coordinates::{DISPLAY_SCALE, EARTH_RADIUS_DISPLAY};
    use bevy::math::{DVec3, Dir3, Vec3};

    fn record_at(angle: f64, node: f64) -> SatelliteRecord {
        SatelliteRecord::new(30.0, node, 200.0, 0.00025, angle, DISPLAY_SCALE, EARTH_RADIUS_DISPLAY)
    }

    fn ray(origin: Vec3, direction: Vec3) -> PickRay {
        let direction = Dir3::new(direction).expect("non-zero direction");
        PickRay::from(Ray3d::new(origin, direction))
    }

    #[test]
    fn test_sphere_hit_distances() {
        let ray = ray(Vec3::new(0.0, 0.0, 100.0), Vec3::NEG_Z);
        let hit = ray
            .sphere_hit(&BoundingSphere::new(Vec3::ZERO, 5.0))
            .expect("should hit");
        assert!((hit - 95.0).abs() < 1e-4, "hit at {}", hit);

        // Sphere behind the ray
        assert!(ray.sphere_hit(&BoundingSphere::new(Vec3::new(0.0, 0.0, 200.0), 5.0)).is_none());
        // Off to the side
        assert!(ray.sphere_hit(&BoundingSphere::new(Vec3::new(6.0, 0.0, 0.0), 5.0)).is_none());
        // Origin inside
        assert_eq!(
            ray.sphere_hit(&BoundingSphere::new(Vec3::new(0.0, 0.0, 102.0), 5.0)),
            Some(0.0)
        );
    }

    #[test]
    fn test_pick_miss_returns_none() {
        let records = vec![record_at(0.0, 0.0), record_at(2.0, 1.0), record_at(4.0, 3.0)];
        // Pointing away from Earth along +Z from far out.
        let ray = ray(Vec3::new(0.0, 0.0, 5000.0), Vec3::Z);
        assert!(pick(&ray, &records, 5.0).is_none());
    }

    #[test]
    fn test_pick_hits_single_target_through_center() {
        let records = vec![record_at(0.0, 0.0), record_at(2.0, 1.0), record_at(4.0, 3.0)];
        let camera = Vec3::new(0.0, 0.0, 1000.0);
        for (i, r) in records.iter().enumerate() {
            let ray = ray(camera, r.position.as_vec3() - camera);
            let hit = pick(&ray, &records, 5.0).expect("should hit");
            assert_eq!(hit.index, i);
        }
    }

    #[test]
    fn test_pick_prefers_nearest_along_ray() {
        // Two satellites on the same line of sight at different depths.
        let mut near = record_at(0.0, 0.0);
        let mut far = record_at(0.0, 0.0);
        near.position = DVec3::new(0.0, 0.0, 600.0);
        far.position = DVec3::new(0.0, 0.0, 550.0);
        let records = vec![far, near];

        let ray = ray(Vec3::new(0.0, 0.0, 1000.0), Vec3::NEG_Z);
        let hit = pick(&ray, &records, 5.0).expect("should hit");
        assert_eq!(hit.index, 1);
        assert!((hit.distance - 395.0).abs() < 1e-3, "hit at {}", hit.distance);
    }

    #[test]
    fn test_pick_tie_keeps_first_index() {
        let mut a = record_at(0.0, 0.0);
        let mut b = record_at(0.0, 0.0);
        a.position = DVec3::new(0.0, 0.0, 600.0);
        b.position = DVec3::new(0.0, 0.0, 600.0);
        let records = vec![a, b];
        let ray = ray(Vec3::new(0.0, 0.0, 1000.0), Vec3::NEG_Z);
        assert_eq!(pick(&ray, &records, 5.0).map(|h| h.index), Some(0));
    }

    #[test]
    fn test_interaction_volume_larger_than_body() {
        let mut r = record_at(0.0, 0.0);
        r.position = DVec3::new(0.0, 0.0, 600.0);
        let records = vec![r];
        // Passes 3 units from the center: outside a 1.2 body, inside a 5 unit volume.
        let ray = ray(Vec3::new(3.0, 0.0, 1000.0), Vec3::NEG_Z);
        assert!(pick(&ray, &records, 1.2).is_none());
        assert!(pick(&ray, &records, 5.0).is_some());
    }
}
