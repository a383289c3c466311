use num::{
    cast::{FromPrimitive, ToPrimitive},
    traits::{Float, Num},
};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Component type of the math containers.
pub trait ValueType:
    Num
    + PartialOrd
    + ToPrimitive
    + FromPrimitive
    + Copy
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Mini
    + Maxi
{
}
impl<T> ValueType for T where
    T: Num
        + PartialOrd
        + ToPrimitive
        + FromPrimitive
        + Copy
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + Mini
        + Maxi
{
}

/// Component type of the containers that need `sqrt` and friends.
pub trait FloatValueType: ValueType + Float {}
impl<T> FloatValueType for T where T: ValueType + Float {}

/// Component-wise minimum that doesn't need `Ord`.
pub trait Mini {
    fn mini(&self, other: Self) -> Self;
}

/// Component-wise maximum that doesn't need `Ord`.
pub trait Maxi {
    fn maxi(&self, other: Self) -> Self;
}

macro_rules! impl_mini_maxi_float {
    ( $( $t:ty ),+ ) => {
        $(
            impl Mini for $t {
                #[inline]
                fn mini(&self, other: $t) -> $t {
                    self.min(other)
                }
            }

            impl Maxi for $t {
                #[inline]
                fn maxi(&self, other: $t) -> $t {
                    self.max(other)
                }
            }
        )*
    }
}
impl_mini_maxi_float!(f32, f64);

// Integer containers show up in tests and index math
macro_rules! impl_mini_maxi_integer {
    ( $( $t:ty ),+ ) => {
        $(
            impl Mini for $t {
                #[inline]
                fn mini(&self, other: $t) -> $t {
                    std::cmp::min(*self, other)
                }
            }

            impl Maxi for $t {
                #[inline]
                fn maxi(&self, other: $t) -> $t {
                    std::cmp::max(*self, other)
                }
            }
        )*
    }
}
impl_mini_maxi_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
