use super::{common::ValueType, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Normals.html

/// A three-dimensional surface normal
///
/// Shapes only hand out normalized normals but the type itself doesn't enforce it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Normal<T>
where
    T: ValueType,
{
    /// The x component of the normal
    pub x: T,
    /// The y component of the normal
    pub y: T,
    /// The z component of the normal
    pub z: T,
}

impl_vec_like!(Normal [x y z] normal);
impl_scalar_ops!(Normal [x y z]);
impl_neg!(Normal [x y z]);

impl<T> Normal<T>
where
    T: ValueType,
{
    /// Calculates the dot product of this `Normal` and a [Vec3].
    #[inline]
    pub fn dot_v(&self, v: Vec3<T>) -> T {
        self.x * v.x + self.y * v.y + self.z * v.z
    }
}

impl<T> From<Vec3<T>> for Normal<T>
where
    T: ValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
