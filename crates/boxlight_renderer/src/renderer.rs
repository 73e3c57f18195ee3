//! Render passes and final image composition.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

use boxlight_core::{Color, Scene};
use image::{Rgb, RgbImage};
use rayon::prelude::*;

use crate::buffers::{FrameBuffers, PixelSample};
use crate::camera::Camera;
use crate::error::RenderError;
use crate::query::trace;
use crate::shading::{direct_light, specular, AMBIENT};
use crate::shadow::occlusion;
use crate::soft_shadow::{reconstruct_shadows, ShadowMode};

/// Render configuration.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// How occluded pixels are shaded
    pub shadow_mode: ShadowMode,
    /// Blinn-Phong exponent, `None` disables the specular term
    pub specular_exponent: Option<f64>,
}

impl RenderConfig {
    pub fn with_shadow_mode(mut self, shadow_mode: ShadowMode) -> Self {
        self.shadow_mode = shadow_mode;
        self
    }

    pub fn with_specular(mut self, exponent: f64) -> Self {
        self.specular_exponent = Some(exponent);
        self
    }
}

/// Counters collected over one render.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderStats {
    /// Pixels whose camera ray hit an object
    pub primary_hits: usize,
    /// Hit pixels that were not fully lit after the primary pass
    pub occluded_pixels: usize,
    /// Pixels whose diffuse term the reconstruction pass changed
    pub reconstructed_pixels: usize,
    pub elapsed: Duration,
}

/// A finished render.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub image: RgbImage,
    pub stats: RenderStats,
}

/// Trace the camera ray and shadow ray for one image pixel.
pub fn trace_pixel(scene: &Scene, camera: &Camera, config: &RenderConfig, row: u32, col: u32) -> PixelSample {
    let ray = camera.ray_for_image_pixel(row, col);
    let Some(hit) = trace(scene, &ray) else {
        return PixelSample::BACKGROUND;
    };

    let light = scene.light();
    let lit = direct_light(light, &hit.record);
    let attenuation = light.attenuation(hit.distance());
    let highlight = config
        .specular_exponent
        .map_or(0.0, |exponent| specular(light, &hit.record, camera.position(), exponent));
    let color = scene
        .object(hit.object)
        .map_or(PixelSample::BACKGROUND.color, |object| object.color);

    PixelSample {
        object: Some(hit.object),
        color,
        value: (AMBIENT + highlight) * attenuation,
        occlusion: occlusion(scene, &hit, lit.along_normal),
        diffuse: lit.diffuse,
        attenuation,
        position: hit.record.point,
    }
}

/// First pass: fill the buffers for every pixel.
///
/// Scanlines are traced in parallel. `progress` is called once per finished
/// row with the number of rows done so far and the total.
pub fn primary_pass<F>(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    progress: F,
) -> Result<FrameBuffers, RenderError>
where
    F: Fn(u32, u32) + Sync,
{
    camera.validate()?;

    let mut buffers = FrameBuffers::new(camera.image_width, camera.image_height);
    let width = camera.image_width as usize;
    let height = camera.image_height;
    let rows_done = AtomicU32::new(0);

    buffers
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, scanline)| {
            for (col, slot) in scanline.iter_mut().enumerate() {
                *slot = trace_pixel(scene, camera, config, row as u32, col as u32);
            }
            let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
            progress(done, height);
        });

    Ok(buffers)
}

/// Final color of one pixel.
pub fn pixel_color(sample: &PixelSample) -> Color {
    let intensity = (sample.value + sample.diffuse * sample.attenuation).clamp(0.0, 1.0);
    Rgb(sample.color.0.map(|channel| (intensity * channel as f64) as u8))
}

/// Turn the buffers into an 8-bit RGB image.
pub fn compose(buffers: &FrameBuffers) -> RgbImage {
    RgbImage::from_fn(buffers.width, buffers.height, |x, y| pixel_color(buffers.get(y, x)))
}

/// Render the scene.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> Result<RenderOutput, RenderError> {
    render_with_progress(scene, camera, config, |_, _| {})
}

/// Render the scene, reporting primary pass progress by finished rows.
pub fn render_with_progress<F>(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    progress: F,
) -> Result<RenderOutput, RenderError>
where
    F: Fn(u32, u32) + Sync,
{
    if scene.is_empty() {
        log::warn!("Scene '{}' has no objects, the image will be black", scene.name);
    }

    log::info!(
        "Rendering '{}' at {}x{} ({:?} shadows)",
        scene.name,
        camera.image_width,
        camera.image_height,
        config.shadow_mode
    );
    let start = Instant::now();

    let mut buffers = primary_pass(scene, camera, config, progress)?;
    let primary_hits = buffers.hit_count();
    let occluded_pixels = buffers.occluded_count();
    log::debug!(
        "Primary pass: {} hits, {} occluded, {:?}",
        primary_hits,
        occluded_pixels,
        start.elapsed()
    );

    let reconstructed_pixels = reconstruct_shadows(&mut buffers, scene.light().size(), config.shadow_mode);
    let image = compose(&buffers);

    let stats = RenderStats {
        primary_hits,
        occluded_pixels,
        reconstructed_pixels,
        elapsed: start.elapsed(),
    };
    log::info!("Rendered in {:?}", stats.elapsed);

    Ok(RenderOutput { image, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxlight_core::{presets::cornell_box, Light, ObjectId};
    use boxlight_math::Vec3;

    fn cornell_camera(size: u32) -> Camera {
        Camera::new().with_resolution(size, size)
    }

    #[test]
    fn test_center_pixel_sees_lit_back_wall() {
        let scene = cornell_box().unwrap();
        let camera = cornell_camera(101);
        let config = RenderConfig::default();

        let sample = trace_pixel(&scene, &camera, &config, 50, 50);
        assert_eq!(scene.object(sample.object.unwrap()).unwrap().name, "back");
        assert!((sample.position.z - 10.0).abs() < 1e-9);
        assert_eq!(sample.occlusion, 1.0);
        assert!((sample.diffuse - 0.8).abs() < 1e-9);

        // (0.1 + 0.8) * atten(20) = 0.76994
        let output = render(&scene, &camera, &config).unwrap();
        assert_eq!(*output.image.get_pixel(50, 50), Rgb([196, 0, 0]));
    }

    #[test]
    fn test_sphere_pixel_is_grey() {
        let scene = cornell_box().unwrap();
        let camera = cornell_camera(101);
        let sample = trace_pixel(&scene, &camera, &RenderConfig::default(), 64, 61);
        assert_eq!(scene.object(sample.object.unwrap()).unwrap().name, "sphere_right");

        let color = pixel_color(&sample);
        assert!(color.0[0] > 0);
        assert!(color.0[0] == color.0[1] && color.0[1] == color.0[2]);
    }

    #[test]
    fn test_missed_rays_are_black() {
        let light = Light::new(Vec3::new(0.0, 5.0, 0.0), 1.0, 100.0, 5.0).unwrap();
        let mut scene = Scene::new("lonely", light);
        scene
            .add_sphere("ball", Vec3::new(0.0, 0.0, 10.0), 1.0, Rgb([255, 255, 255]))
            .unwrap();

        let camera = Camera::new().with_resolution(21, 21).with_position(Vec3::ZERO);
        let output = render(&scene, &camera, &RenderConfig::default()).unwrap();

        assert_eq!(*output.image.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_ne!(*output.image.get_pixel(10, 10), Rgb([0, 0, 0]));
        assert!(output.stats.primary_hits > 0);
        assert!(output.stats.primary_hits < 21 * 21);
    }

    #[test]
    fn test_pixel_color_clamps() {
        let sample = PixelSample {
            object: Some(ObjectId(0)),
            color: Rgb([200, 100, 0]),
            value: 0.5,
            diffuse: 2.0,
            attenuation: 1.0,
            ..PixelSample::BACKGROUND
        };
        assert_eq!(pixel_color(&sample), Rgb([200, 100, 0]));

        let dim = PixelSample {
            value: 0.25,
            diffuse: 0.0,
            ..sample
        };
        assert_eq!(pixel_color(&dim), Rgb([50, 25, 0]));
    }

    #[test]
    fn test_soft_shadows_never_darker_than_hard() {
        let scene = cornell_box().unwrap();
        let camera = cornell_camera(60);

        let hard = render(&scene, &camera, &RenderConfig::default()).unwrap();
        let soft = render(
            &scene,
            &camera,
            &RenderConfig::default().with_shadow_mode(ShadowMode::Soft),
        )
        .unwrap();

        assert!(hard.stats.occluded_pixels > 0);
        for (h, s) in hard.image.pixels().zip(soft.image.pixels()) {
            for channel in 0..3 {
                assert!(s.0[channel] >= h.0[channel]);
            }
        }
    }

    #[test]
    fn test_specular_only_brightens() {
        let scene = cornell_box().unwrap();
        let camera = cornell_camera(31);
        let plain = render(&scene, &camera, &RenderConfig::default()).unwrap();
        let shiny = render(&scene, &camera, &RenderConfig::default().with_specular(32.0)).unwrap();

        for (p, s) in plain.image.pixels().zip(shiny.image.pixels()) {
            for channel in 0..3 {
                assert!(s.0[channel] >= p.0[channel]);
            }
        }
    }

    #[test]
    fn test_progress_reports_every_row() {
        let scene = cornell_box().unwrap();
        let camera = cornell_camera(16);
        let calls = AtomicU32::new(0);
        let last = AtomicU32::new(0);

        primary_pass(&scene, &camera, &RenderConfig::default(), |done, total| {
            assert_eq!(total, 16);
            calls.fetch_add(1, Ordering::Relaxed);
            last.fetch_max(done, Ordering::Relaxed);
        })
        .unwrap();

        assert_eq!(calls.load(Ordering::Relaxed), 16);
        assert_eq!(last.load(Ordering::Relaxed), 16);
    }

    #[test]
    fn test_primary_pass_rejects_empty_image() {
        let scene = cornell_box().unwrap();
        let config = RenderConfig::default();

        for (width, height) in [(0, 4), (4, 0)] {
            let camera = Camera::new().with_resolution(width, height);
            let result = primary_pass(&scene, &camera, &config, |_, _| {});
            assert!(matches!(result, Err(RenderError::InvalidResolution { .. })));
        }
    }

    #[test]
    fn test_invalid_camera_is_rejected() {
        let scene = cornell_box().unwrap();
        let camera = Camera::new().with_resolution(0, 0);
        assert!(matches!(
            render(&scene, &camera, &RenderConfig::default()),
            Err(RenderError::InvalidResolution { .. })
        ));
    }
}
