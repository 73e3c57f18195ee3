//! Cornell box example.
//!
//! Renders the built-in Cornell box with hard and soft shadows and saves
//! both to PNG.

use boxlight_core::presets::{cornell_box, CORNELL_CAMERA, CORNELL_FOV_DEGREES};
use boxlight_renderer::{render, Camera, RenderConfig, ShadowMode};

fn main() {
    println!("Boxlight - Cornell Box Example");
    println!("==============================");

    let scene = cornell_box().expect("Preset scene is valid");

    let camera = Camera::new()
        .with_resolution(500, 500)
        .with_position(CORNELL_CAMERA)
        .with_fov(CORNELL_FOV_DEGREES);

    for (mode, filename) in [
        (ShadowMode::Hard, "cornell_hard.png"),
        (ShadowMode::Soft, "cornell_soft.png"),
    ] {
        let config = RenderConfig::default().with_shadow_mode(mode);

        println!(
            "Rendering {}x{} with {:?} shadows...",
            camera.image_width, camera.image_height, mode
        );
        let output = render(&scene, &camera, &config).expect("Failed to render");
        println!(
            "Rendered in {:?} ({} occluded pixels, {} reshaded)",
            output.stats.elapsed, output.stats.occluded_pixels, output.stats.reconstructed_pixels
        );

        output.image.save(filename).expect("Failed to save image");
        println!("Saved to {}", filename);
    }
}
