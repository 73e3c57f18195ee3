//! Direct lighting terms for a single hit.

use boxlight_core::Light;
use boxlight_math::Vec3;

use crate::hittable::HitRecord;

/// Constant ambient term added to every lit surface.
pub const AMBIENT: f64 = 0.1;

/// Diffuse value a fully shadowed pixel is reduced to.
pub const DIFFUSE_FLOOR: f64 = 0.1;

/// Lambertian response of a hit to the light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectLight {
    /// Raw cosine between the normal and the direction to the light,
    /// negative when the surface faces away from the light
    pub along_normal: f64,
    /// Clamped cosine scaled by the light strength
    pub diffuse: f64,
}

/// Compute the diffuse response of `hit` to `light`.
pub fn direct_light(light: &Light, hit: &HitRecord) -> DirectLight {
    let to_light = (light.position() - hit.point).normalize_or_zero();
    let along_normal = hit.normal.dot(to_light);

    DirectLight {
        along_normal,
        diffuse: along_normal.max(0.0) * light.strength(),
    }
}

/// Blinn-Phong specular highlight seen from `eye`.
pub fn specular(light: &Light, hit: &HitRecord, eye: Vec3, exponent: f64) -> f64 {
    let to_light = (light.position() - hit.point).normalize_or_zero();
    let to_eye = (eye - hit.point).normalize_or_zero();
    let halfway = (to_light + to_eye).normalize_or_zero();

    hit.normal.dot(halfway).max(0.0).powf(exponent)
}
