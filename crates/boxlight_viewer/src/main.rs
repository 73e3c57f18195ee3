use anyhow::{Context, Result};
use boxlight_core::presets::{cornell_box, CORNELL_CAMERA, CORNELL_FOV_DEGREES};
use boxlight_renderer::{render_with_progress, Camera, RenderConfig, ShadowMode};
use clap::Parser;

mod cli;
mod config;
mod output;

use cli::Args;
use config::SceneFile;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level)
        .init();

    log::info!("Starting boxlight");

    let (scene, camera, config) = match &args.scene {
        Some(path) => {
            let file = SceneFile::load(path)?;
            let scene = file
                .build_scene()
                .with_context(|| format!("Invalid scene in {}", path.display()))?;
            (scene, file.camera(), file.render_config())
        }
        None => {
            let scene = cornell_box().context("Failed to build the Cornell box")?;
            let camera = Camera::new()
                .with_position(CORNELL_CAMERA)
                .with_fov(CORNELL_FOV_DEGREES);
            (scene, camera, RenderConfig::default())
        }
    };
    let (camera, config) = apply_overrides(&args, camera, config);

    let (polygons, spheres) = scene.shape_counts();
    log::info!(
        "Scene '{}': {} polygons, {} spheres",
        scene.name,
        polygons,
        spheres
    );

    // Roughly every tenth of the image
    let step = (camera.image_height / 10).max(1);
    let output = render_with_progress(&scene, &camera, &config, |done, total| {
        if done % step == 0 || done == total {
            log::debug!("{}/{} rows", done, total);
        }
    })
    .context("Render failed")?;

    log::info!(
        "{} hits, {} occluded, {} reshaded",
        output.stats.primary_hits,
        output.stats.occluded_pixels,
        output.stats.reconstructed_pixels
    );

    output::save_png(&output.image, &args.output)
}

/// Command line flags win over the scene file.
fn apply_overrides(args: &Args, mut camera: Camera, mut config: RenderConfig) -> (Camera, RenderConfig) {
    let width = args.width.unwrap_or(camera.image_width);
    let height = args.height.unwrap_or(camera.image_height);
    camera = camera.with_resolution(width, height);

    if let Some(fov) = args.fov {
        camera = camera.with_fov(fov);
    }
    if args.soft_shadows {
        config.shadow_mode = ShadowMode::Soft;
    }
    if let Some(exponent) = args.specular {
        config.specular_exponent = Some(exponent);
    }

    (camera, config)
}
