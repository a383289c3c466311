use super::{in_range, Polygon, Shape, EPSILON};
use crate::{
    error::GeometryError,
    math::{Bounds3, Normal, Point3, Ray},
};

// Möller, Trumbore: Fast, Minimum Storage Ray/Triangle Intersection
// https://cadxfem.org/inf/Fast%20MinimumStorage%20RayTriangle%20Intersection.pdf

/// A triangle object.
///
/// Only the strict interior of the triangle is hit: rays through an edge, a vertex
/// or an edge's extension miss.
#[derive(Debug, Clone)]
pub struct Triangle {
    polygon: Polygon,
}

impl Triangle {
    /// Creates a new `Triangle`. The normal follows the winding by the right hand rule.
    pub fn new(p0: Point3<f32>, p1: Point3<f32>, p2: Point3<f32>) -> Result<Self, GeometryError> {
        Ok(Self {
            polygon: Polygon::new(vec![p0, p1, p2])?,
        })
    }

    pub fn vertices(&self) -> [Point3<f32>; 3] {
        let vs = self.polygon.vertices();
        [vs[0], vs[1], vs[2]]
    }
}

impl Shape for Triangle {
    fn normal(&self, p: Point3<f32>) -> Normal<f32> {
        self.polygon.normal(p)
    }

    fn intersect(&self, ray: &Ray<f32>, t_max: f32) -> Vec<f32> {
        let [p0, p1, p2] = self.vertices();
        let e1 = p1 - p0;
        let e2 = p2 - p0;

        // Determinant test, i.e. if the ray is parallel to the triangle
        // Relative to the edges so that small triangles don't vanish
        let pvec = ray.d.cross(e2);
        let det = e1.dot(pvec);
        if det.abs() <= EPSILON * e1.len() * e2.len() {
            return Vec::new();
        }
        let inv_det = 1.0 / det;

        // Barycentrics have to be strictly inside
        let tvec = ray.o - p0;
        let u = tvec.dot(pvec) * inv_det;
        if u <= 0.0 || u >= 1.0 {
            return Vec::new();
        }

        let qvec = tvec.cross(e1);
        let v = ray.d.dot(qvec) * inv_det;
        if v <= 0.0 || u + v >= 1.0 {
            return Vec::new();
        }

        let t = e2.dot(qvec) * inv_det;
        if in_range(t, t_max) {
            vec![t]
        } else {
            Vec::new()
        }
    }

    fn world_bound(&self) -> Option<Bounds3<f32>> {
        self.polygon.world_bound()
    }
}
