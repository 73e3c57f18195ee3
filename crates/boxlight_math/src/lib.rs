//! Math types shared by the boxlight crates.
//!
//! The renderer works in double precision throughout, so the glam `DVec3`
//! type is re-exported as `Vec3`.

pub use glam::{dvec3, DVec3 as Vec3};

mod ray;
pub use ray::Ray;

/// Tolerance used for parallel tests against planes and for accepting
/// intersections that land a rounding error behind a ray origin.
pub const EPSILON: f64 = 1e-10;
