//! Pinhole camera for primary ray generation.

use boxlight_math::{Ray, Vec3};

use crate::error::RenderError;

/// Camera looking down +Z from a fixed position.
///
/// The horizontal and vertical spread both use the same field of view, so
/// non-square images are stretched rather than cropped.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    position: Vec3,

    /// Field of view in degrees
    fov: f64,

    // Cached tan(fov / 2)
    scale: f64,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 500,
            image_height: 500,
            position: Vec3::new(0.0, 0.0, -10.0),
            fov: 90.0,
            scale: fov_scale(90.0),
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set field of view, in degrees.
    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self.scale = fov_scale(fov);
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    /// Check the settings before a render.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(RenderError::InvalidResolution {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(RenderError::InvalidFieldOfView(self.fov));
        }
        Ok(())
    }

    /// Generate the ray through camera row `i` (counted upwards from the
    /// bottom of the image) and column `j`.
    pub fn ray_for_pixel(&self, i: u32, j: u32) -> Ray {
        let dx = (j as f64 + 0.5) / self.image_width as f64 * 2.0 - 1.0;
        let dy = (i as f64 + 0.5) / self.image_height as f64 * 2.0 - 1.0;
        let direction = Vec3::new(dx * self.scale, dy * self.scale, 1.0);
        Ray::new(self.position, direction)
    }

    /// Generate the ray for an image pixel, with row 0 at the top.
    #[inline]
    pub fn ray_for_image_pixel(&self, row: u32, col: u32) -> Ray {
        self.ray_for_pixel(self.image_height - 1 - row, col)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

fn fov_scale(fov_degrees: f64) -> f64 {
    (fov_degrees.to_radians() / 2.0).tan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pixel_looks_forward() {
        let camera = Camera::new().with_resolution(101, 101);
        let ray = camera.ray_for_pixel(50, 50);

        assert_eq!(ray.origin(), Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(ray.direction(), Vec3::Z);
    }

    #[test]
    fn test_corner_spread_matches_fov() {
        // 90 degrees: the outermost pixel centres sit just inside 45 degrees
        let camera = Camera::new().with_resolution(100, 100);
        let ray = camera.ray_for_pixel(0, 99);
        let d = ray.direction();

        let expected = 0.99; // (99 + 0.5) / 100 * 2 - 1
        assert!((d.x / d.z - expected).abs() < 1e-12);
        assert!((d.y / d.z + expected).abs() < 1e-12);
        assert!((d.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_image_rows_run_top_down() {
        let camera = Camera::new().with_resolution(10, 10);
        let top = camera.ray_for_image_pixel(0, 5);
        let bottom = camera.ray_for_image_pixel(9, 5);

        assert!(top.direction().y > 0.0);
        assert!(bottom.direction().y < 0.0);
        assert_eq!(top.direction(), camera.ray_for_pixel(9, 5).direction());
    }

    #[test]
    fn test_narrow_fov_narrows_spread() {
        let wide = Camera::new().with_resolution(10, 10);
        let narrow = Camera::new().with_resolution(10, 10).with_fov(30.0);

        let w = wide.ray_for_pixel(0, 0).direction();
        let n = narrow.ray_for_pixel(0, 0).direction();
        assert!(n.z > w.z);
        assert!((narrow.fov() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate() {
        assert!(Camera::new().validate().is_ok());
        assert_eq!(
            Camera::new().with_resolution(0, 10).validate(),
            Err(RenderError::InvalidResolution { width: 0, height: 10 })
        );
        assert_eq!(
            Camera::new().with_fov(180.0).validate(),
            Err(RenderError::InvalidFieldOfView(180.0))
        );
        assert!(Camera::new().with_fov(-5.0).validate().is_err());
    }
}
