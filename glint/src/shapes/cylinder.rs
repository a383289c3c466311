use super::{in_range, is_zero, Axis, Shape, Tube, EPSILON};
use crate::{
    error::GeometryError,
    math::{Bounds3, Normal, Point3, Ray, Vec3},
};

/// A finite, capped cylinder.
///
/// The bottom cap is centered at the axis origin and the top cap `height` along the axis.
#[derive(Debug, Clone)]
pub struct Cylinder {
    tube: Tube,
    height: f32,
}

impl Cylinder {
    /// Creates a new `Cylinder`.
    pub fn new(axis: Axis, radius: f32, height: f32) -> Result<Self, GeometryError> {
        // Negated to also catch NaN
        if !(height > 0.0) {
            return Err(GeometryError::NonPositiveHeight);
        }
        Ok(Self {
            tube: Tube::new(axis, radius)?,
            height,
        })
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    fn caps(&self) -> [Point3<f32>; 2] {
        let axis = self.tube.axis();
        [axis.origin, axis.origin + axis.dir * self.height]
    }
}

impl Shape for Cylinder {
    fn normal(&self, p: Point3<f32>) -> Normal<f32> {
        let axis = self.tube.axis();
        let t = axis.projection(p);
        if t <= EPSILON {
            Normal::from(-axis.dir)
        } else if (t - self.height).abs() <= EPSILON {
            Normal::from(axis.dir)
        } else {
            axis.radial_normal(p)
        }
    }

    fn intersect(&self, ray: &Ray<f32>, t_max: f32) -> Vec<f32> {
        let axis = *self.tube.axis();

        let mut hits: Vec<f32> = self
            .tube
            .intersect(ray, t_max)
            .into_iter()
            .filter(|&t| {
                let h = axis.projection(ray.point(t));
                (0.0..=self.height).contains(&h)
            })
            .collect();

        // Caps
        let nd = axis.dir.dot(ray.d);
        if !is_zero(nd) {
            let r_sqr = self.tube.radius() * self.tube.radius();
            for c in self.caps() {
                let t = axis.dir.dot(c - ray.o) / nd;
                // Strictly inside so that rim hits aren't counted twice
                if in_range(t, t_max) && ray.point(t).dist_sqr(c) < r_sqr {
                    hits.push(t);
                }
            }
        }

        hits
    }

    fn world_bound(&self) -> Option<Bounds3<f32>> {
        let r = Vec3::from(self.tube.radius());
        let [c0, c1] = self.caps();
        Some(Bounds3::new(c0 - r, c0 + r).union_b(Bounds3::new(c1 - r, c1 + r)))
    }
}
