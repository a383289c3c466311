use super::{common::FloatValueType, point::Point3, vector::Vec3};
use crate::error::GeometryError;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Rays.html

/// A half-line with a unit direction.
///
/// The maximum distance is passed to the intersection queries instead of being
/// stored in the ray so that the same ray can be reused with different bounds.
#[derive(Copy, PartialEq, Clone, Debug)]
pub struct Ray<T>
where
    T: FloatValueType,
{
    pub o: Point3<T>,
    pub d: Vec3<T>,
}

impl<T> Ray<T>
where
    T: FloatValueType,
{
    /// Creates a new `Ray`, normalizing `d`.
    ///
    /// Fails if `d` is the zero vector.
    pub fn new(o: Point3<T>, d: Vec3<T>) -> Result<Self, GeometryError> {
        let ret = Self {
            o,
            d: d.try_normalized()?,
        };
        debug_assert!(!ret.has_nans());
        Ok(ret)
    }

    /// Checks if any of the members in this `Ray` contain NaNs.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans()
    }

    /// Finds the [Point3] on this `Ray` at distance `t`.
    #[inline]
    pub fn point(&self, t: T) -> Point3<T> {
        self.o + self.d * t
    }
}

impl<T> approx::AbsDiffEq for Ray<T>
where
    T: FloatValueType + approx::AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.o.abs_diff_eq(&other.o, epsilon) && self.d.abs_diff_eq(&other.d, epsilon)
    }
}
