//! JSON scene files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use boxlight_core::presets::{CORNELL_CAMERA, CORNELL_FOV_DEGREES};
use boxlight_core::{Light, Scene, SceneResult};
use boxlight_math::Vec3;
use boxlight_renderer::{Camera, RenderConfig, ShadowMode};
use image::Rgb;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneFile {
    #[serde(default = "default_scene_name")]
    pub name: String,
    #[serde(default)]
    pub camera: CameraSettings,
    #[serde(default)]
    pub render: RenderSettings,
    pub light: LightSettings,
    pub objects: Vec<ObjectSettings>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSettings {
    pub position: [f64; 3],
    /// Degrees
    pub fov: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: CORNELL_CAMERA.to_array(),
            fov: CORNELL_FOV_DEGREES,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSettings {
    #[serde(default = "default_resolution")]
    pub width: u32,
    #[serde(default = "default_resolution")]
    pub height: u32,
    #[serde(default)]
    pub soft_shadows: bool,
    #[serde(default)]
    pub specular: Option<f64>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: default_resolution(),
            height: default_resolution(),
            soft_shadows: false,
            specular: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightSettings {
    pub position: [f64; 3],
    #[serde(default = "default_strength")]
    pub strength: f64,
    pub reference_distance: f64,
    pub size: f64,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectSettings {
    Polygon {
        #[serde(default)]
        name: Option<String>,
        points: Vec<[f64; 3]>,
        color: [u8; 3],
    },
    Sphere {
        #[serde(default)]
        name: Option<String>,
        center: [f64; 3],
        radius: f64,
        color: [u8; 3],
    },
}

fn default_scene_name() -> String {
    "untitled".to_string()
}

const fn default_resolution() -> u32 {
    500
}

const fn default_strength() -> f64 {
    1.0
}

impl SceneFile {
    /// Read and parse a scene file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Failed to parse scene file {}", path.display()))
    }

    pub fn parse(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Build the scene, validating every primitive and the light.
    pub fn build_scene(&self) -> SceneResult<Scene> {
        let l = &self.light;
        let light = Light::new(Vec3::from_array(l.position), l.strength, l.reference_distance, l.size)?;
        let mut scene = Scene::new(self.name.clone(), light);

        for (index, object) in self.objects.iter().enumerate() {
            match object {
                ObjectSettings::Polygon { name, points, color } => {
                    let name = name.clone().unwrap_or_else(|| format!("polygon_{}", index));
                    let points = points.iter().copied().map(Vec3::from_array).collect();
                    scene.add_polygon(name, points, Rgb(*color))?;
                }
                ObjectSettings::Sphere {
                    name,
                    center,
                    radius,
                    color,
                } => {
                    let name = name.clone().unwrap_or_else(|| format!("sphere_{}", index));
                    scene.add_sphere(name, Vec3::from_array(*center), *radius, Rgb(*color))?;
                }
            }
        }

        Ok(scene)
    }

    pub fn camera(&self) -> Camera {
        Camera::new()
            .with_resolution(self.render.width, self.render.height)
            .with_position(Vec3::from_array(self.camera.position))
            .with_fov(self.camera.fov)
    }

    pub fn render_config(&self) -> RenderConfig {
        let shadow_mode = if self.render.soft_shadows {
            ShadowMode::Soft
        } else {
            ShadowMode::Hard
        };
        RenderConfig {
            shadow_mode,
            specular_exponent: self.render.specular,
        }
    }
}
