use super::{in_range, Shape};
use crate::{
    error::GeometryError,
    math::{Bounds3, Normal, Point3, Ray, Vec3},
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Shapes/Spheres.html

/// A sphere object.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3<f32>,
    radius: f32,
}

impl Sphere {
    /// Creates a new `Sphere`.
    pub fn new(center: Point3<f32>, radius: f32) -> Result<Self, GeometryError> {
        // Negated to also catch NaN
        if !(radius > 0.0) {
            return Err(GeometryError::NonPositiveRadius);
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point3<f32> {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Sphere {
    fn normal(&self, p: Point3<f32>) -> Normal<f32> {
        Normal::from((p - self.center).normalized())
    }

    fn intersect(&self, ray: &Ray<f32>, t_max: f32) -> Vec<f32> {
        let o = ray.o - self.center;
        let d = ray.d;

        // Quadratic coefficients
        let a = d.len_sqr();
        let b = 2.0 * d.dot(o);
        let c = o.len_sqr() - self.radius * self.radius;

        // Solve quadratic equation for ts
        // Tangent rays graze the surface and don't count as hits
        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return Vec::new();
        }
        let rd = discriminant.sqrt();

        let q = if b < 0.0 {
            -0.5 * (b - rd)
        } else {
            -0.5 * (b + rd)
        };
        if q == 0.0 {
            return Vec::new();
        }

        let mut t0 = q / a;
        let mut t1 = c / q;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        [t0, t1].into_iter().filter(|&t| in_range(t, t_max)).collect()
    }

    fn world_bound(&self) -> Option<Bounds3<f32>> {
        let r = Vec3::from(self.radius);
        Some(Bounds3::new(self.center - r, self.center + r))
    }
}
