use super::{in_range, is_zero, Shape};
use crate::{
    error::GeometryError,
    math::{Bounds3, Normal, Point3, Ray, Vec3},
};

/// A ray-like axis shared by the round shapes.
#[derive(Debug, Clone, Copy)]
pub struct Axis {
    /// Start of the axis
    pub origin: Point3<f32>,
    /// Unit direction of the axis
    pub dir: Vec3<f32>,
}

impl Axis {
    /// Creates a new `Axis`, normalizing `dir`.
    pub fn new(origin: Point3<f32>, dir: Vec3<f32>) -> Result<Self, GeometryError> {
        Ok(Self {
            origin,
            dir: dir.try_normalized()?,
        })
    }

    /// Returns the signed distance along the axis of `p`'s projection on it.
    #[inline]
    pub fn projection(&self, p: Point3<f32>) -> f32 {
        self.dir.dot(p - self.origin)
    }

    /// Returns the unit vector perpendicular to the axis pointing towards `p`.
    ///
    /// Points on the axis get an arbitrary perpendicular vector.
    pub fn radial_normal(&self, p: Point3<f32>) -> Normal<f32> {
        let t = self.projection(p);
        let radial = p - (self.origin + self.dir * t);
        match radial.try_normalized() {
            Ok(n) => Normal::from(n),
            Err(_) => {
                let n = self.dir.cross(Vec3::new(1.0, 0.0, 0.0));
                let n = if n.len_sqr() > 0.0 {
                    n
                } else {
                    // Axis is along x
                    self.dir.cross(Vec3::new(0.0, 1.0, 0.0))
                };
                Normal::from(n.normalized())
            }
        }
    }
}

/// An infinite cylinder around an [`Axis`].
#[derive(Debug, Clone)]
pub struct Tube {
    axis: Axis,
    radius: f32,
}

impl Tube {
    /// Creates a new `Tube`.
    pub fn new(axis: Axis, radius: f32) -> Result<Self, GeometryError> {
        // Negated to also catch NaN
        if !(radius > 0.0) {
            return Err(GeometryError::NonPositiveRadius);
        }
        Ok(Self { axis, radius })
    }

    pub fn axis(&self) -> &Axis {
        &self.axis
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Tube {
    fn normal(&self, p: Point3<f32>) -> Normal<f32> {
        self.axis.radial_normal(p)
    }

    fn intersect(&self, ray: &Ray<f32>, t_max: f32) -> Vec<f32> {
        let dir = self.axis.dir;
        let dp = ray.o - self.axis.origin;

        // Project the ray onto the plane perpendicular to the axis
        let d_perp = ray.d - dir * ray.d.dot(dir);
        let dp_perp = dp - dir * dp.dot(dir);

        let a = d_perp.len_sqr();
        // Ray is parallel to the axis
        if is_zero(a) {
            return Vec::new();
        }
        let b = 2.0 * d_perp.dot(dp_perp);
        let c = dp_perp.len_sqr() - self.radius * self.radius;

        // Tangent rays graze the surface and don't count as hits
        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return Vec::new();
        }
        let rd = discriminant.sqrt();

        [(-b - rd) / (2.0 * a), (-b + rd) / (2.0 * a)]
            .into_iter()
            .filter(|&t| in_range(t, t_max))
            .collect()
    }

    fn world_bound(&self) -> Option<Bounds3<f32>> {
        None
    }
}
