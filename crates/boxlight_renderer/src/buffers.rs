//! Per-pixel buffers shared by the two render passes.

use boxlight_core::{Color, ObjectId};
use boxlight_math::Vec3;
use image::Rgb;

/// Everything the primary pass records for one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSample {
    /// Object seen through the pixel, `None` for background
    pub object: Option<ObjectId>,
    /// Base color of that object
    pub color: Color,
    /// Ambient and specular terms, already attenuated
    pub value: f64,
    /// Shadow estimate in [0, 1], 1.0 meaning fully lit
    pub occlusion: f64,
    /// Diffuse term, not yet attenuated
    pub diffuse: f64,
    /// Distance falloff for this pixel's hit
    pub attenuation: f64,
    /// World position of the hit
    pub position: Vec3,
}

impl PixelSample {
    /// Sample for a pixel whose camera ray hits nothing.
    pub const BACKGROUND: PixelSample = PixelSample {
        object: None,
        color: Rgb([0, 0, 0]),
        value: 0.0,
        occlusion: 0.0,
        diffuse: 0.0,
        attenuation: 0.0,
        position: Vec3::ZERO,
    };

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.object.is_some()
    }

    /// Fully lit samples anchor the soft shadow search.
    #[inline]
    pub fn is_fully_lit(&self) -> bool {
        self.occlusion == 1.0
    }
}

impl Default for PixelSample {
    fn default() -> Self {
        Self::BACKGROUND
    }
}

/// Row-major per-pixel buffers, row 0 at the top of the image.
#[derive(Debug, Clone)]
pub struct FrameBuffers {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<PixelSample>,
}

impl FrameBuffers {
    /// Create buffers filled with background samples.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![PixelSample::BACKGROUND; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Get the sample at (row, col).
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> &PixelSample {
        &self.pixels[self.index(row, col)]
    }

    /// Set the sample at (row, col).
    pub fn set(&mut self, row: u32, col: u32, sample: PixelSample) {
        let index = self.index(row, col);
        self.pixels[index] = sample;
    }

    /// Convert a flat index back to (row, col).
    #[inline]
    pub fn coords(&self, index: usize) -> (u32, u32) {
        let width = self.width as usize;
        ((index / width) as u32, (index % width) as u32)
    }

    /// Number of pixels whose camera ray hit something.
    pub fn hit_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_hit()).count()
    }

    /// Number of hit pixels that are not fully lit.
    pub fn occluded_count(&self) -> usize {
        self.pixels
            .iter()
            .filter(|p| p.is_hit() && !p.is_fully_lit())
            .count()
    }
}
