//! Ray-sphere intersection.

use boxlight_core::Sphere;
use boxlight_math::{Ray, EPSILON};

use crate::hittable::{HitRecord, Hittable};

impl Hittable for Sphere {
    /// Geometric solve against the near surface only.
    ///
    /// Rays starting inside the sphere, or pointing away from it, report no
    /// hit: only the outside of a sphere is ever visible.
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let center = self.center();
        let radius_sq = self.radius() * self.radius();

        // Signed distance to the foot of the perpendicular from the centre
        let length = ray.direction().dot(center - ray.origin());
        let closest = ray.at(length);
        let distance_sq = closest.distance_squared(center);
        if distance_sq > radius_sq {
            return None;
        }

        let near = length - (radius_sq - distance_sq).sqrt();
        if near < -EPSILON {
            return None;
        }

        let distance = near.max(0.0);
        let point = ray.at(distance);
        let normal = (point - center).normalize();
        Some(HitRecord::outward(ray, distance, point, normal))
    }
}
