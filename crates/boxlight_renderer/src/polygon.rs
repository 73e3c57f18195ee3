//! Ray-polygon intersection.
//!
//! The ray is first intersected with the polygon's plane, then the plane
//! point is tested against the boundary with a crossing-number test: a
//! half-line drawn from the point inside the plane crosses the boundary an
//! odd number of times exactly when the point is inside.

use boxlight_core::{Edge, Polygon};
use boxlight_math::{Ray, Vec3, EPSILON};

use crate::hittable::{HitRecord, Hittable};

/// Check whether the half-line `origin + t * direction` (t >= 0) crosses the
/// segment `a..b`.
///
/// Both must lie in a common plane. Segments parallel to the half-line never
/// count as crossed.
pub fn segment_crossed(origin: Vec3, direction: Vec3, a: Vec3, b: Vec3) -> bool {
    let ab = b - a;
    let ao = a - origin;

    let perp = direction.cross(ab);
    let denom = perp.dot(perp);
    if denom == 0.0 {
        return false;
    }

    // s is the fraction along ab, t the multiple of direction
    let s = ao.cross(direction).dot(perp) / denom;
    let t = ao.cross(ab).dot(perp) / denom;

    (0.0..=1.0).contains(&s) && t >= 0.0
}

/// Count boundary crossings of the half-line from `point` along `direction`.
///
/// `point` is assumed to already lie on the polygon's plane, and `direction`
/// to lie in it.
pub fn crossing_count(polygon: &Polygon, point: Vec3, direction: Vec3) -> usize {
    polygon
        .edges()
        .iter()
        .filter(|Edge { a, b }| segment_crossed(point, direction, *a, *b))
        .count()
}

/// Crossing-number containment test for a point on the polygon's plane.
///
/// The half-line runs perpendicular to the first edge, inside the plane.
pub fn contains_point(polygon: &Polygon, point: Vec3) -> bool {
    let direction = polygon.normal().cross(polygon.first_edge().vector());
    crossing_count(polygon, point, direction) % 2 == 1
}

impl Hittable for Polygon {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let normal = self.normal();

        let denom = ray.direction().dot(normal);
        if denom.abs() < EPSILON {
            // Parallel to the plane
            return None;
        }

        let t = (self.anchor() - ray.origin()).dot(normal) / denom;
        if t < 0.0 {
            // Plane is behind the origin
            return None;
        }

        let point = ray.at(t);
        if !contains_point(self, point) {
            return None;
        }

        Some(HitRecord::facing_ray(ray, t, point, normal))
    }
}
