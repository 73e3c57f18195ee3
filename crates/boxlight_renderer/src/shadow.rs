//! Shadow rays and the per-pixel occlusion estimate.

use boxlight_core::Scene;
use boxlight_math::{Ray, EPSILON};

use crate::hittable::RaycastHit;
use crate::query::trace;

/// Occlusion of a primary hit, in [0, 1].
///
/// A shadow ray is cast from the light towards the hit point. When it first
/// hits a different object, the result is the blocker's distance from the
/// light over the hit point's distance from the light: near 1 when the
/// blocker sits close to the shaded surface, near 0 when it sits close to the
/// light. Otherwise the pixel is fully lit (1.0), unless the surface faces
/// away from the light (`along_normal < 0`), which is fully occluded (0.0).
pub fn occlusion(scene: &Scene, primary: &RaycastHit, along_normal: f64) -> f64 {
    let light_position = scene.light().position();
    let point = primary.record.point;
    let shadow_ray = Ray::between(light_position, point);

    match trace(scene, &shadow_ray) {
        Some(blocker) if blocker.object != primary.object => {
            let to_point = light_position.distance(point);
            if to_point < EPSILON {
                // The light sits on the surface itself
                return 1.0;
            }
            (blocker.distance() / to_point).clamp(0.0, 1.0)
        }
        _ if along_normal < 0.0 => 0.0,
        _ => 1.0,
    }
}
