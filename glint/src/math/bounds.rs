use super::{
    common::{FloatValueType, ValueType},
    point::Point3,
    ray::Ray,
    vector::Vec3,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Bounding_Boxes.html

/// Three-dimensional axis-aligned bounds.
///
/// `p_min` is component-wise less than or equal to `p_max`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3<T>
where
    T: ValueType,
{
    /// The minimum extent of the bounds.
    pub p_min: Point3<T>,
    /// The maximum extent of the bounds.
    pub p_max: Point3<T>,
}

impl<T> Bounds3<T>
where
    T: ValueType,
{
    /// Creates new bounds spanning the two points in any order.
    #[inline]
    pub fn new(p0: Point3<T>, p1: Point3<T>) -> Self {
        Self {
            p_min: p0.min(p1),
            p_max: p0.max(p1),
        }
    }

    /// Returns the union of these bounds and a point.
    #[inline]
    pub fn union_p(&self, p: Point3<T>) -> Self {
        Self {
            p_min: self.p_min.min(p),
            p_max: self.p_max.max(p),
        }
    }

    /// Returns the union of these bounds and other bounds.
    #[inline]
    pub fn union_b(&self, other: Self) -> Self {
        Self {
            p_min: self.p_min.min(other.p_min),
            p_max: self.p_max.max(other.p_max),
        }
    }

    /// Returns the vector from `p_min` to `p_max`.
    #[inline]
    pub fn diagonal(&self) -> Vec3<T> {
        self.p_max - self.p_min
    }

    /// Checks if `p` is inside these bounds, boundary included.
    #[inline]
    pub fn inside(&self, p: Point3<T>) -> bool {
        (0..3).all(|i| p[i] >= self.p_min[i] && p[i] <= self.p_max[i])
    }

    /// Checks if `other` is fully inside these bounds, boundary included.
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        self.inside(other.p_min) && self.inside(other.p_max)
    }
}

impl<T> Bounds3<T>
where
    T: FloatValueType,
{
    /// Returns the center point of these bounds.
    ///
    /// Computed on demand as it's only needed when building acceleration structures.
    #[inline]
    pub fn center(&self) -> Point3<T> {
        let half = T::one() / (T::one() + T::one());
        (self.p_min + self.p_max) * half
    }

    /// Slab test of `ray` against these bounds.
    ///
    /// Returns the parametric `(t_enter, t_exit)` interval of the ray inside the bounds.
    /// `t_enter` is negative when the ray starts inside. Bounds fully behind the ray are a miss.
    pub fn intersect(&self, ray: &Ray<T>) -> Option<(T, T)> {
        let eps = T::from_f32(1e-12).unwrap_or_else(T::epsilon);

        let mut t0 = T::neg_infinity();
        let mut t1 = T::infinity();
        for i in 0..3 {
            let o = ray.o[i];
            let d = ray.d[i];
            if d.abs() < eps {
                // Parallel to the slabs, only a hit if we already are between them
                if o < self.p_min[i] || o > self.p_max[i] {
                    return None;
                }
                continue;
            }

            let inv_d = T::one() / d;
            let mut t_near = (self.p_min[i] - o) * inv_d;
            let mut t_far = (self.p_max[i] - o) * inv_d;
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }

            t0 = t0.max(t_near);
            t1 = t1.min(t_far);
            if t0 > t1 {
                return None;
            }
        }

        if t1 < T::zero() {
            None
        } else {
            Some((t0, t1))
        }
    }
}
