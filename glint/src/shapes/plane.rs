use super::{in_range, is_zero, Shape, EPSILON};
use crate::{
    error::GeometryError,
    math::{Bounds3, Normal, Point3, Ray, Vec3},
};

/// An infinite plane.
#[derive(Debug, Clone)]
pub struct Plane {
    p0: Point3<f32>,
    n: Normal<f32>,
}

impl Plane {
    /// Creates a new `Plane` through `p0` with the normal `n`.
    ///
    /// `n` doesn't have to be normalized but it can't be the zero vector.
    pub fn new(p0: Point3<f32>, n: Vec3<f32>) -> Result<Self, GeometryError> {
        Ok(Self {
            p0,
            n: Normal::from(n.try_normalized()?),
        })
    }

    /// Creates a new `Plane` through three points.
    ///
    /// The normal follows the winding `p0 -> p1 -> p2` by the right hand rule.
    pub fn from_points(
        p0: Point3<f32>,
        p1: Point3<f32>,
        p2: Point3<f32>,
    ) -> Result<Self, GeometryError> {
        if p0 == p1 || p1 == p2 || p0 == p2 {
            return Err(GeometryError::CoincidentPoints);
        }

        let e0 = p1 - p0;
        let e1 = p2 - p0;
        let n = e0.cross(e1);
        // |e0 x e1| = |e0||e1|sin(theta), so this checks sin(theta) against EPSILON
        if n.len_sqr() <= EPSILON * EPSILON * e0.len_sqr() * e1.len_sqr() {
            return Err(GeometryError::CollinearPoints);
        }

        Ok(Self {
            p0,
            n: Normal::from(n.normalized()),
        })
    }

    /// Returns the reference point of this `Plane`.
    pub fn point(&self) -> Point3<f32> {
        self.p0
    }

    /// Returns the unit normal of this `Plane`.
    pub fn n(&self) -> Normal<f32> {
        self.n
    }

    /// Checks if `p` is on this `Plane` within [`EPSILON`].
    pub fn contains(&self, p: Point3<f32>) -> bool {
        p == self.p0 || is_zero(self.n.dot_v((p - self.p0).normalized()))
    }
}

impl Shape for Plane {
    fn normal(&self, _p: Point3<f32>) -> Normal<f32> {
        self.n
    }

    fn intersect(&self, ray: &Ray<f32>, t_max: f32) -> Vec<f32> {
        let nd = self.n.dot_v(ray.d);
        // Parallel rays either miss or lie on the plane, neither counts as a hit
        if is_zero(nd) {
            return Vec::new();
        }

        let t = self.n.dot_v(self.p0 - ray.o) / nd;
        if in_range(t, t_max) {
            vec![t]
        } else {
            Vec::new()
        }
    }

    fn world_bound(&self) -> Option<Bounds3<f32>> {
        None
    }
}
