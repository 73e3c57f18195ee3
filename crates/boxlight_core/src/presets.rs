//! Built-in scenes.

use boxlight_math::Vec3;
use image::Rgb;

use crate::error::SceneResult;
use crate::light::Light;
use crate::scene::Scene;

/// Half extent of the Cornell box walls.
pub const BOX_HALF_EXTENT: f64 = 10.0;

/// Camera position the Cornell box is framed for.
pub const CORNELL_CAMERA: Vec3 = Vec3::new(0.0, 0.0, -10.0);

/// Horizontal field of view, in degrees, the Cornell box is framed for.
pub const CORNELL_FOV_DEGREES: f64 = 90.0;

/// The reference Cornell box.
///
/// Five inward-facing walls (the side facing the camera is open), two
/// spheres resting on the floor and a light just below the ceiling.
pub fn cornell_box() -> SceneResult<Scene> {
    let e = BOX_HALF_EXTENT;
    let light = Light::new(Vec3::new(0.0, 7.5, 0.0), 1.0, 750.0, 20.0)?;
    let mut scene = Scene::new("cornell_box", light);

    scene.add_polygon(
        "back",
        vec![
            Vec3::new(-e, e, e),
            Vec3::new(-e, -e, e),
            Vec3::new(e, -e, e),
            Vec3::new(e, e, e),
        ],
        Rgb([255, 0, 0]),
    )?;
    scene.add_polygon(
        "ceiling",
        vec![
            Vec3::new(-e, e, e),
            Vec3::new(e, e, e),
            Vec3::new(e, e, -e),
            Vec3::new(-e, e, -e),
        ],
        Rgb([0, 255, 0]),
    )?;
    scene.add_polygon(
        "floor",
        vec![
            Vec3::new(-e, -e, e),
            Vec3::new(-e, -e, -e),
            Vec3::new(e, -e, -e),
            Vec3::new(e, -e, e),
        ],
        Rgb([0, 0, 255]),
    )?;
    scene.add_polygon(
        "left",
        vec![
            Vec3::new(-e, e, e),
            Vec3::new(-e, e, -e),
            Vec3::new(-e, -e, -e),
            Vec3::new(-e, -e, e),
        ],
        Rgb([255, 255, 0]),
    )?;
    scene.add_polygon(
        "right",
        vec![
            Vec3::new(e, e, e),
            Vec3::new(e, -e, e),
            Vec3::new(e, -e, -e),
            Vec3::new(e, e, -e),
        ],
        Rgb([0, 255, 255]),
    )?;

    scene.add_sphere("sphere_right", Vec3::new(4.0, -5.0, 8.0), 5.0, Rgb([200, 200, 200]))?;
    scene.add_sphere("sphere_left", Vec3::new(-4.0, -5.0, 5.0), 5.0, Rgb([127, 127, 127]))?;

    log::debug!("Built preset '{}' with {} objects", scene.name, scene.len());
    Ok(scene)
}
