//! Boxlight Core - immutable scene description for the ray tracer.
//!
//! This crate provides:
//!
//! - **Geometry primitives**: `Polygon`, `Sphere` and the `Shape` enum
//! - **Lighting**: the point `Light` with its fitted attenuation curve
//! - **Scene**: ordered objects addressed by stable `ObjectId` handles
//! - **Presets**: the reference Cornell box
//!
//! Everything here is built once before rendering and never mutated while
//! pixels are being traced, so a `Scene` can be shared freely across threads.
//!
//! # Example
//!
//! ```ignore
//! use boxlight_core::presets::cornell_box;
//!
//! let scene = cornell_box()?;
//! println!("{} objects", scene.len());
//! ```

pub mod error;
pub mod light;
pub mod presets;
pub mod scene;
pub mod shape;

// Re-export commonly used types
pub use error::{SceneError, SceneResult};
pub use light::Light;
pub use scene::{Color, ObjectId, Scene, SceneObject};
pub use shape::{Edge, Polygon, Shape, Sphere};
