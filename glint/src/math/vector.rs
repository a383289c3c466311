use super::{
    common::{FloatValueType, ValueType},
    normal::Normal,
    point::Point3,
};
use crate::error::GeometryError;

use serde::{Deserialize, Serialize};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html

/// A three-dimensional vector.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Vec3<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
}

impl_vec_like!(Vec3 [x y z] vec3);
impl_vec_op!(Add add Vec3 Vec3 Vec3 [x y z] +);
impl_vec_op!(Sub sub Vec3 Vec3 Vec3 [x y z] -);
impl_vec_assign_op!(AddAssign add_assign Vec3 Vec3 [x y z] +=);
impl_vec_assign_op!(SubAssign sub_assign Vec3 Vec3 [x y z] -=);
impl_scalar_ops!(Vec3 [x y z]);
impl_neg!(Vec3 [x y z]);

impl<T> Vec3<T>
where
    T: ValueType,
{
    /// Calculates the dot product of this `Vec3` and another `Vec3`.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the vector's squared length.
    #[inline]
    pub fn len_sqr(&self) -> T {
        self.dot(*self)
    }
}

impl<T> Vec3<T>
where
    T: FloatValueType,
{
    /// Returns the vector's length.
    #[inline]
    pub fn len(&self) -> T {
        self.len_sqr().sqrt()
    }

    /// Returns `true` if this is the zero vector.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == T::zero() && self.y == T::zero() && self.z == T::zero()
    }

    /// Returns the normalized vector.
    ///
    /// The vector must not be the zero vector, use [`Vec3::try_normalized`] when that isn't known.
    #[inline]
    pub fn normalized(&self) -> Self {
        debug_assert!(!self.is_zero(), "Normalizing a zero vector");

        *self / self.len()
    }

    /// Returns the normalized vector or [`GeometryError::ZeroVector`] if the vector has no length.
    #[inline]
    pub fn try_normalized(&self) -> Result<Self, GeometryError> {
        let len = self.len();
        if len == T::zero() || !len.is_finite() {
            Err(GeometryError::ZeroVector)
        } else {
            Ok(*self / len)
        }
    }

    /// Calculates the dot product of this `Vec3` and a [Normal].
    #[inline]
    pub fn dot_n(&self, n: Normal<T>) -> T {
        self.x * n.x + self.y * n.y + self.z * n.z
    }

    /// Calculates the cross product of this `Vec3` and another `Vec3`.
    //
    // Always uses `f64` internally to avoid errors on "catastrophic cancellation".
    // http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html#DotandCrossProduct
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        debug_assert!(!self.has_nans());
        debug_assert!(!other.has_nans());

        let v1x = self.x.to_f64().unwrap_or(f64::NAN);
        let v1y = self.y.to_f64().unwrap_or(f64::NAN);
        let v1z = self.z.to_f64().unwrap_or(f64::NAN);
        let v2x = other.x.to_f64().unwrap_or(f64::NAN);
        let v2y = other.y.to_f64().unwrap_or(f64::NAN);
        let v2z = other.z.to_f64().unwrap_or(f64::NAN);
        Self {
            x: T::from_f64((v1y * v2z) - (v1z * v2y)).unwrap_or_else(T::nan),
            y: T::from_f64((v1z * v2x) - (v1x * v2z)).unwrap_or_else(T::nan),
            z: T::from_f64((v1x * v2y) - (v1y * v2x)).unwrap_or_else(T::nan),
        }
    }

    /// Reflects this vector around `n`, i.e. `v - 2(v·n)n`.
    #[inline]
    pub fn reflected(&self, n: Normal<T>) -> Self {
        let n = Vec3::from(n);
        *self - n * (self.dot(n) + self.dot(n))
    }
}

impl<T> From<Normal<T>> for Vec3<T>
where
    T: ValueType,
{
    fn from(n: Normal<T>) -> Self {
        Self::new(n.x, n.y, n.z)
    }
}

impl<T> From<Point3<T>> for Vec3<T>
where
    T: ValueType,
{
    fn from(p: Point3<T>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}
