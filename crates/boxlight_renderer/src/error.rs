use thiserror::Error;

/// Errors that stop a render before any pixel is traced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Image resolution must be non-zero, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Field of view must lie strictly between 0 and 180 degrees, got {0}")]
    InvalidFieldOfView(f64),
}
