//! Hittable trait and hit records for ray-object intersection.

use boxlight_core::{ObjectId, Shape};
use boxlight_math::{Ray, Vec3};

/// Geometric result of a ray-primitive intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Distance along the (unit) ray direction, never negative
    pub distance: f64,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal
    pub normal: Vec3,
    /// Whether the ray arrived against the primitive's own normal
    pub front_face: bool,
}

impl HitRecord {
    /// Build a record whose normal is turned to face the ray origin.
    ///
    /// Used for polygons, which have no inside.
    pub fn facing_ray(ray: &Ray, distance: f64, point: Vec3, surface_normal: Vec3) -> Self {
        // If the ray and normal point in the same direction, we're behind the face
        let front_face = ray.direction().dot(surface_normal) < 0.0;

        Self {
            distance,
            point,
            normal: if front_face { surface_normal } else { -surface_normal },
            front_face,
        }
    }

    /// Build a record that keeps the outward normal as given.
    ///
    /// Used for spheres, whose normal is always radial.
    pub fn outward(ray: &Ray, distance: f64, point: Vec3, outward_normal: Vec3) -> Self {
        Self {
            distance,
            point,
            normal: outward_normal,
            front_face: ray.direction().dot(outward_normal) < 0.0,
        }
    }
}

/// A hit on a scene object, tagged with the object's handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    pub object: ObjectId,
    pub record: HitRecord,
}

impl RaycastHit {
    #[inline]
    pub fn distance(&self) -> f64 {
        self.record.distance
    }
}

/// Trait for primitives that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest valid intersection in front of the ray origin, if any.
    ///
    /// `ray` must have a unit direction.
    fn hit(&self, ray: &Ray) -> Option<HitRecord>;
}

impl Hittable for Shape {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        match self {
            Shape::Polygon(polygon) => polygon.hit(ray),
            Shape::Sphere(sphere) => sphere.hit(ray),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_ray_flips_back_face() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        // Normal pointing away from the ray origin gets flipped
        let rec = HitRecord::facing_ray(&ray, 5.0, Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, -Vec3::Z);

        let rec = HitRecord::facing_ray(&ray, 5.0, Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
        assert!(rec.front_face);
        assert_eq!(rec.normal, -Vec3::Z);
    }

    #[test]
    fn test_outward_keeps_normal() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let rec = HitRecord::outward(&ray, 1.0, Vec3::Z, Vec3::Z);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
    }
}
