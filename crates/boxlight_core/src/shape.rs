//! Geometry primitives: planar polygons and spheres.
//!
//! Both are value types. Derived data (the polygon plane normal and its
//! boundary edges) is computed once in the constructor and never changes.

use boxlight_math::{Vec3, EPSILON};

use crate::error::{SceneError, SceneResult};

/// A boundary segment of a polygon, from `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: Vec3,
    pub b: Vec3,
}

impl Edge {
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self { a, b }
    }

    /// Vector from `a` to `b`.
    #[inline]
    pub fn vector(&self) -> Vec3 {
        self.b - self.a
    }
}

/// A planar, simple polygon with anticlockwise winding.
///
/// Points must be coplanar. Seen from the side the normal points to, the
/// vertices run anticlockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Vec3>,
    /// Unit plane normal
    normal: Vec3,
    /// Closed boundary, last edge wraps back to the first point
    edges: Vec<Edge>,
}

impl Polygon {
    /// Create a polygon from an ordered vertex loop.
    pub fn new(points: Vec<Vec3>) -> SceneResult<Self> {
        if points.len() < 3 {
            return Err(SceneError::TooFewPoints(points.len()));
        }

        let ab = points[1] - points[0];
        let ac = points[2] - points[0];
        let cross = ac.cross(ab);
        if cross.length_squared() < EPSILON * EPSILON {
            return Err(SceneError::DegeneratePolygon);
        }
        let normal = cross.normalize();

        let edges = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(&a, &b)| Edge::new(a, b))
            .collect();

        Ok(Self {
            points,
            normal,
            edges,
        })
    }

    /// Vertices in winding order.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Unit plane normal.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Boundary edges in winding order, including the closing edge.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The edge from the first to the second vertex.
    #[inline]
    pub fn first_edge(&self) -> Edge {
        self.edges[0]
    }

    /// Any point on the polygon's plane (the first vertex).
    #[inline]
    pub fn anchor(&self) -> Vec3 {
        self.points[0]
    }

    /// Average of the vertices.
    pub fn centroid(&self) -> Vec3 {
        self.points.iter().copied().sum::<Vec3>() / self.points.len() as f64
    }
}

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64) -> SceneResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Any primitive the renderer can intersect.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon(Polygon),
    Sphere(Sphere),
}

impl Shape {
    /// Short name of the primitive kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Polygon(_) => "polygon",
            Shape::Sphere(_) => "sphere",
        }
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn back_wall() -> Polygon {
        Polygon::new(vec![
            Vec3::new(-10.0, 10.0, 10.0),
            Vec3::new(-10.0, -10.0, 10.0),
            Vec3::new(10.0, -10.0, 10.0),
            Vec3::new(10.0, 10.0, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_polygon_normal_faces_viewer() {
        // Anticlockwise as seen from the camera at z = -10
        let wall = back_wall();
        assert!((wall.normal() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
        assert!((wall.normal().length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_polygon_edges_wrap() {
        let wall = back_wall();
        let edges = wall.edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0].a, wall.points()[0]);
        assert_eq!(edges[0].b, wall.points()[1]);
        assert_eq!(edges[3].a, wall.points()[3]);
        assert_eq!(edges[3].b, wall.points()[0]);
        assert_eq!(wall.first_edge(), edges[0]);
    }

    #[test]
    fn test_polygon_centroid() {
        let wall = back_wall();
        assert!((wall.centroid() - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-12);
    }

    #[test]
    fn test_polygon_rejects_too_few_points() {
        let result = Polygon::new(vec![Vec3::ZERO, Vec3::X]);
        assert_eq!(result, Err(SceneError::TooFewPoints(2)));
    }

    #[test]
    fn test_polygon_rejects_collinear_points() {
        let result = Polygon::new(vec![Vec3::ZERO, Vec3::X, Vec3::X * 2.0]);
        assert_eq!(result, Err(SceneError::DegeneratePolygon));
    }

    #[test]
    fn test_sphere_validation() {
        assert!(Sphere::new(Vec3::ZERO, 1.0).is_ok());
        assert_eq!(
            Sphere::new(Vec3::ZERO, 0.0),
            Err(SceneError::InvalidRadius(0.0))
        );
        assert!(Sphere::new(Vec3::ZERO, -2.0).is_err());
        assert!(Sphere::new(Vec3::ZERO, f64::NAN).is_err());
    }

    #[test]
    fn test_shape_from() {
        let shape: Shape = Sphere::new(Vec3::ZERO, 1.0).unwrap().into();
        assert_eq!(shape.kind(), "sphere");
        let shape: Shape = back_wall().into();
        assert_eq!(shape.kind(), "polygon");
    }
}
