//! Errors raised while building a scene.

use thiserror::Error;

/// Invalid scene configuration, detected at construction time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Polygon needs at least 3 points, got {0}")]
    TooFewPoints(usize),

    #[error("Polygon points are collinear or coincident, no plane normal")]
    DegeneratePolygon,

    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("Light reference distance must be positive and finite, got {0}")]
    InvalidReferenceDistance(f64),

    #[error("Light strength must be finite, got {0}")]
    InvalidLightStrength(f64),

    #[error("Light size must be non-negative and finite, got {0}")]
    InvalidLightSize(f64),
}

pub type SceneResult<T> = Result<T, SceneError>;
