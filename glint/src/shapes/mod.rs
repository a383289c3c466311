mod cylinder;
mod plane;
mod polygon;
mod sphere;
mod triangle;
mod tube;

pub use cylinder::Cylinder;
pub use plane::Plane;
pub use polygon::Polygon;
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use tube::{Axis, Tube};

use crate::math::{Bounds3, Normal, Point3, Ray};

/// Tolerance for the "parallel", "on the surface" and "is zero" tests of the shapes.
pub const EPSILON: f32 = 1e-6;

/// Shared interface of all geometric primitives.
pub trait Shape: Send + Sync {
    /// Returns the unit surface normal at `p`. `p` is expected to be on the surface.
    fn normal(&self, p: Point3<f32>) -> Normal<f32>;

    /// Returns the distances along `ray` in `(0, t_max]` where it hits this `Shape`.
    ///
    /// The distances are in no particular order.
    fn intersect(&self, ray: &Ray<f32>, t_max: f32) -> Vec<f32>;

    /// Returns the world space AABB of the `Shape` or `None` if it's unbounded.
    fn world_bound(&self) -> Option<Bounds3<f32>>;

    /// Returns the distance to the closest hit in `(0, t_max]`.
    fn nearest(&self, ray: &Ray<f32>, t_max: f32) -> Option<f32> {
        self.intersect(ray, t_max).into_iter().reduce(f32::min)
    }
}

/// Checks if `t` is a valid hit distance for a query bounded by `t_max`.
#[inline]
pub(crate) fn in_range(t: f32, t_max: f32) -> bool {
    t > 0.0 && t <= t_max
}

/// Checks if `v` is zero within [`EPSILON`].
#[inline]
pub(crate) fn is_zero(v: f32) -> bool {
    v.abs() < EPSILON
}
