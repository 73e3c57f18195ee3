//! Boxlight Renderer - direct lighting ray caster.
//!
//! Renders a scene of polygons and spheres lit by one point light in two
//! passes:
//!
//! 1. **Primary pass**: one camera ray and one shadow ray per pixel, filling
//!    the per-pixel buffers. Scanlines are traced in parallel.
//! 2. **Reconstruction pass**: shadowed pixels are re-shaded from their
//!    neighbourhood to fake a penumbra (or clamped, for hard shadows).
//!
//! The buffers are then composed into an 8-bit RGB image.

mod buffers;
mod camera;
mod error;
mod hittable;
mod polygon;
mod query;
mod renderer;
mod shading;
mod shadow;
mod soft_shadow;
mod sphere;

pub use buffers::{FrameBuffers, PixelSample};
pub use camera::Camera;
pub use error::RenderError;
pub use hittable::{HitRecord, Hittable, RaycastHit};
pub use polygon::{contains_point, crossing_count, segment_crossed};
pub use query::{closest_hit, trace};
pub use renderer::{
    compose, pixel_color, primary_pass, render, render_with_progress, trace_pixel, RenderConfig,
    RenderOutput, RenderStats,
};
pub use shading::{direct_light, specular, DirectLight, AMBIENT, DIFFUSE_FLOOR};
pub use shadow::occlusion;
pub use soft_shadow::{reconstruct_shadows, resolve_diffuse, ShadowMode};

/// Re-export the scene and math types callers need alongside the renderer
pub use boxlight_core::{Color, Light, ObjectId, Polygon, Scene, Shape, Sphere};
pub use boxlight_math::{Ray, Vec3};
