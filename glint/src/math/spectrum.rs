use super::common::ValueType;

use serde::{Deserialize, Serialize};

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Color_and_Radiometry/Spectral_Representation

/// A spectral power distribution stored as RGB
///
/// Also used for the per-channel material coefficients.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Spectrum<T>
where
    T: ValueType,
{
    /// The r component of the spd
    pub r: T,
    /// The g component of the spd
    pub g: T,
    /// The b component of the spd
    pub b: T,
}

impl_vec_like!(Spectrum [r g b] spectrum);
impl_vec_op!(Add add Spectrum Spectrum Spectrum [r g b] +);
impl_vec_op!(Sub sub Spectrum Spectrum Spectrum [r g b] -);
impl_vec_op!(Mul mul Spectrum Spectrum Spectrum [r g b] *);
impl_vec_assign_op!(AddAssign add_assign Spectrum Spectrum [r g b] +=);
impl_vec_assign_op!(MulAssign mul_assign Spectrum Spectrum [r g b] *=);
impl_scalar_ops!(Spectrum [r g b]);

/// Black, also the "no light" value.
pub const BLACK: Spectrum<f32> = Spectrum {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};

/// White, also the "all passes" coefficient triple.
pub const WHITE: Spectrum<f32> = Spectrum {
    r: 1.0,
    g: 1.0,
    b: 1.0,
};

impl<T> Spectrum<T>
where
    T: ValueType,
{
    /// Checks if all components are zero.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.r == T::zero() && self.g == T::zero() && self.b == T::zero()
    }

    /// Checks if every component is below `k`.
    #[inline]
    pub fn all_below(&self, k: T) -> bool {
        self.r < k && self.g < k && self.b < k
    }

    /// Clamps each component to `[min, max]`.
    #[inline]
    pub fn clamped(&self, min: T, max: T) -> Self {
        self.max(Self::from(min)).min(Self::from(max))
    }
}
