//! Shadow reconstruction pass.
//!
//! Runs after the primary pass has filled every pixel. Hard shadows simply
//! clamp the diffuse term of occluded pixels. Soft shadows estimate a
//! penumbra per pixel: the less occluded a pixel is and the larger the
//! light, the wider the window searched for the nearest fully lit pixel,
//! and the closer that pixel is, the more of the diffuse term survives.

use rayon::prelude::*;

use crate::buffers::{FrameBuffers, PixelSample};
use crate::shading::DIFFUSE_FLOOR;

/// How occluded pixels are shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowMode {
    /// Occluded pixels keep at most the diffuse floor
    #[default]
    Hard,
    /// Occluded pixels are blended towards the floor by penumbra search
    Soft,
}

/// Rewrite the diffuse term of every pixel for `mode`.
///
/// All pixels are resolved against the buffers as the primary pass left
/// them; results are written back only once every pixel is done. Returns
/// the number of pixels whose diffuse term changed.
pub fn reconstruct_shadows(buffers: &mut FrameBuffers, light_size: f64, mode: ShadowMode) -> usize {
    let snapshot: &FrameBuffers = buffers;
    let resolved: Vec<f64> = (0..snapshot.pixels.len())
        .into_par_iter()
        .map(|index| {
            let (row, col) = snapshot.coords(index);
            resolve_diffuse(snapshot, row, col, light_size, mode)
        })
        .collect();

    let mut changed = 0;
    for (pixel, diffuse) in buffers.pixels.iter_mut().zip(resolved) {
        if pixel.diffuse != diffuse {
            pixel.diffuse = diffuse;
            changed += 1;
        }
    }

    log::debug!("Shadow reconstruction ({:?}) changed {} pixels", mode, changed);
    changed
}

/// Final diffuse term for the pixel at (row, col).
pub fn resolve_diffuse(buffers: &FrameBuffers, row: u32, col: u32, light_size: f64, mode: ShadowMode) -> f64 {
    let pixel = buffers.get(row, col);
    if pixel.is_fully_lit() {
        return pixel.diffuse;
    }

    match mode {
        ShadowMode::Hard => pixel.diffuse.min(DIFFUSE_FLOOR),
        ShadowMode::Soft if pixel.diffuse > DIFFUSE_FLOOR => soften(buffers, row, col, light_size),
        ShadowMode::Soft => pixel.diffuse,
    }
}

/// Half width of the penumbra search window.
///
/// The full width is `floor((1 - occlusion) * light_size / depth)` bumped to
/// the next odd number. Negative and NaN estimates (hits at z < 0) become
/// width 1, so the pixel is left alone. A hit at z = 0 saturates the width
/// and the search covers the whole image.
fn search_half_width(pixel: &PixelSample, light_size: f64) -> u64 {
    let width = (1.0 - pixel.occlusion) * light_size / pixel.position.z;

    let mut width = width.max(0.0) as u64;
    if width % 2 == 0 {
        width += 1;
    }
    width / 2
}

fn soften(buffers: &FrameBuffers, row: u32, col: u32, light_size: f64) -> f64 {
    let pixel = buffers.get(row, col);
    let extra = search_half_width(pixel, light_size);
    if extra == 0 {
        // Not near the edge of a shadow
        return pixel.diffuse;
    }

    let Some((best_distance, best_depth)) = nearest_lit(buffers, row, col, extra) else {
        // No lit pixel close enough to blend towards
        return DIFFUSE_FLOOR;
    };

    let depth_delta = pixel.position.z - best_depth;
    let extra = extra as f64;
    let max_distance = 2.0 * extra * extra + depth_delta * depth_delta;

    // 0.0 if completely in shadow, 1.0 if completely outside
    let shadow = 1.0 - (best_distance / max_distance).sqrt();
    DIFFUSE_FLOOR + (pixel.diffuse - DIFFUSE_FLOOR) * shadow
}

/// Search the window around (row, col) for the nearest fully lit pixel.
///
/// Distance is the squared pixel offset plus the squared depth difference.
/// Returns that distance and the winner's depth; ties keep the first pixel
/// in row-major order.
fn nearest_lit(buffers: &FrameBuffers, row: u32, col: u32, extra: u64) -> Option<(f64, f64)> {
    let depth = buffers.get(row, col).position.z;
    let window = |center: u32, limit: u32| {
        let lo = (center as u64).saturating_sub(extra) as u32;
        let hi = (center as u64).saturating_add(extra).min(limit as u64 - 1) as u32;
        lo..=hi
    };

    let mut best: Option<(f64, f64)> = None;
    for y in window(row, buffers.height) {
        for x in window(col, buffers.width) {
            let sample = buffers.get(y, x);
            if !sample.is_fully_lit() {
                continue;
            }

            let dy = y as f64 - row as f64;
            let dx = x as f64 - col as f64;
            let dz = depth - sample.position.z;
            let distance = dy * dy + dx * dx + dz * dz;
            if best.map_or(true, |(best_distance, _)| distance < best_distance) {
                best = Some((distance, sample.position.z));
            }
        }
    }

    best
}
