//! Closest-hit queries against the whole scene.
//!
//! Every primitive is tested for every ray. Camera rays and shadow rays go
//! through the same query; only the caller decides what the hit means.

use boxlight_core::{ObjectId, Scene, Shape};
use boxlight_math::Ray;

use crate::hittable::{Hittable, RaycastHit};

/// Find the nearest hit among `shapes`.
///
/// Ties keep the earliest shape in iteration order.
pub fn closest_hit<'a, I>(shapes: I, ray: &Ray) -> Option<RaycastHit>
where
    I: IntoIterator<Item = (ObjectId, &'a Shape)>,
{
    let mut closest: Option<RaycastHit> = None;

    for (object, shape) in shapes {
        let Some(record) = shape.hit(ray) else {
            continue;
        };
        let closer = closest
            .as_ref()
            .map_or(true, |best| record.distance < best.record.distance);
        if closer {
            closest = Some(RaycastHit { object, record });
        }
    }

    closest
}

/// Find the nearest hit among all objects of `scene`.
#[inline]
pub fn trace(scene: &Scene, ray: &Ray) -> Option<RaycastHit> {
    closest_hit(scene.shapes(), ray)
}
