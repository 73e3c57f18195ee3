//! Scene description: ordered objects plus a single light.

use boxlight_math::Vec3;
use image::Rgb;

use crate::error::SceneResult;
use crate::light::Light;
use crate::shape::{Polygon, Shape, Sphere};

/// Base color of an object, 0-255 per channel.
pub type Color = Rgb<u8>;

/// Stable handle to an object in a [`Scene`].
///
/// Handles are indices into the scene's object table. Two hits belong to
/// the same object exactly when their handles compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

impl ObjectId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A primitive with its base color.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Object name, for logging
    pub name: String,

    pub shape: Shape,

    pub color: Color,
}

/// A complete scene: the primitives to render and the light that shades them.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Scene name (preset or file name)
    pub name: String,

    objects: Vec<SceneObject>,

    light: Light,
}

impl Scene {
    /// Create an empty scene lit by `light`.
    pub fn new(name: impl Into<String>, light: Light) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            light,
        }
    }

    /// Add an object and return its handle.
    pub fn add(&mut self, name: impl Into<String>, shape: impl Into<Shape>, color: Color) -> ObjectId {
        let id = ObjectId(self.objects.len());
        let object = SceneObject {
            name: name.into(),
            shape: shape.into(),
            color,
        };
        log::trace!("Added {} '{}' as object {}", object.shape.kind(), object.name, id.index());
        self.objects.push(object);
        id
    }

    /// Build a polygon from `points` and add it.
    pub fn add_polygon(&mut self, name: impl Into<String>, points: Vec<Vec3>, color: Color) -> SceneResult<ObjectId> {
        let polygon = Polygon::new(points)?;
        Ok(self.add(name, polygon, color))
    }

    /// Build a sphere and add it.
    pub fn add_sphere(&mut self, name: impl Into<String>, center: Vec3, radius: f64, color: Color) -> SceneResult<ObjectId> {
        let sphere = Sphere::new(center, radius)?;
        Ok(self.add(name, sphere, color))
    }

    /// Get an object by handle.
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    /// Objects in insertion order, with their handles.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> + '_ {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, object)| (ObjectId(index), object))
    }

    /// Shapes in insertion order, with their handles.
    pub fn shapes(&self) -> impl Iterator<Item = (ObjectId, &Shape)> + '_ {
        self.objects().map(|(id, object)| (id, &object.shape))
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    /// Get object count.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Count objects of each kind as `(polygons, spheres)`.
    pub fn shape_counts(&self) -> (usize, usize) {
        self.objects
            .iter()
            .fold((0, 0), |(polygons, spheres), object| match object.shape {
                Shape::Polygon(_) => (polygons + 1, spheres),
                Shape::Sphere(_) => (polygons, spheres + 1),
            })
    }
}
