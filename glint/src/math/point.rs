use super::{
    common::{FloatValueType, ValueType},
    vector::Vec3,
};

use serde::{Deserialize, Serialize};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Points.html

// Note about Point ops:
// point + point = point doesn't really make sense mathematically but is useful in
// weighted sums like finding the midpoint

/// A three-dimensional point.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Point3<T>
where
    T: ValueType,
{
    /// The x component of the point.
    pub x: T,
    /// The y component of the point.
    pub y: T,
    /// The z component of the point.
    pub z: T,
}

impl_vec_like!(Point3 [x y z] point3);
impl_vec_op!(Add add Point3 Vec3 Point3 [x y z] +);
impl_vec_op!(Add add Point3 Point3 Point3 [x y z] +);
impl_vec_op!(Sub sub Point3 Vec3 Point3 [x y z] -);
impl_vec_op!(Sub sub Point3 Point3 Vec3 [x y z] -);
impl_vec_assign_op!(AddAssign add_assign Point3 Vec3 [x y z] +=);
impl_vec_assign_op!(SubAssign sub_assign Point3 Vec3 [x y z] -=);
impl_scalar_ops!(Point3 [x y z]);

impl<T> Point3<T>
where
    T: FloatValueType,
{
    /// Calculates the squared distance between this `Point3` and another.
    #[inline]
    pub fn dist_sqr(&self, other: Self) -> T {
        (*self - other).len_sqr()
    }

    /// Calculates the distance between this `Point3` and another.
    #[inline]
    pub fn dist(&self, other: Self) -> T {
        (*self - other).len()
    }
}

impl<T> From<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
