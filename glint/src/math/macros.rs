// Shared impls for the three-component containers.
// Paths are fully qualified so callers don't need to import the traits.

/// Implements constructors, component-wise helpers, indexing and approx comparisons
/// for a three-component type.
macro_rules! impl_vec_like {
    ( $( $vec_type:ident [ $c0:ident $c1:ident $c2:ident ] $shorthand:ident ),+ ) => {
        $(
            impl<T> $vec_type<T>
            where
                T: $crate::math::ValueType,
            {
                /// Constructs a new value.
                ///
                /// Has a debug assert that checks for NaNs.
                #[inline]
                pub fn new($c0: T, $c1: T, $c2: T) -> Self {
                    let v = Self { $c0, $c1, $c2 };
                    debug_assert!(!v.has_nans());
                    v
                }

                /// Constructs a new value of 0s.
                #[inline]
                pub fn zeros() -> Self {
                    Self {
                        $c0: T::zero(),
                        $c1: T::zero(),
                        $c2: T::zero(),
                    }
                }

                /// Constructs a new value of 1s.
                #[inline]
                pub fn ones() -> Self {
                    Self {
                        $c0: T::one(),
                        $c1: T::one(),
                        $c2: T::one(),
                    }
                }

                /// Returns `true` if any component is NaN.
                #[inline]
                pub fn has_nans(&self) -> bool {
                    // Not all T have is_nan()
                    #[allow(clippy::eq_op)]
                    let ret = self.$c0 != self.$c0 || self.$c1 != self.$c1 || self.$c2 != self.$c2;
                    ret
                }

                /// Returns the component-wise minimum of the two values.
                #[inline]
                pub fn min(&self, other: Self) -> Self {
                    Self {
                        $c0: self.$c0.mini(other.$c0),
                        $c1: self.$c1.mini(other.$c1),
                        $c2: self.$c2.mini(other.$c2),
                    }
                }

                /// Returns the component-wise maximum of the two values.
                #[inline]
                pub fn max(&self, other: Self) -> Self {
                    Self {
                        $c0: self.$c0.maxi(other.$c0),
                        $c1: self.$c1.maxi(other.$c1),
                        $c2: self.$c2.maxi(other.$c2),
                    }
                }

                /// Finds the value of the minimum component.
                #[inline]
                pub fn min_comp(&self) -> T {
                    self.$c0.mini(self.$c1.mini(self.$c2))
                }

                /// Finds the value of the maximum component.
                #[inline]
                pub fn max_comp(&self) -> T {
                    self.$c0.maxi(self.$c1.maxi(self.$c2))
                }
            }

            /// Shorthand constructor
            #[inline]
            pub fn $shorthand<T>($c0: T, $c1: T, $c2: T) -> $vec_type<T>
            where
                T: $crate::math::ValueType,
            {
                // Use new() to catch NANs
                $vec_type::new($c0, $c1, $c2)
            }

            impl<T> From<T> for $vec_type<T>
            where
                T: $crate::math::ValueType,
            {
                fn from(v: T) -> Self {
                    Self {
                        $c0: v,
                        $c1: v,
                        $c2: v,
                    }
                }
            }

            impl<T> std::ops::Index<usize> for $vec_type<T>
            where
                T: $crate::math::ValueType,
            {
                type Output = T;

                #[inline]
                fn index(&self, i: usize) -> &T {
                    match i {
                        0 => &self.$c0,
                        1 => &self.$c1,
                        2 => &self.$c2,
                        _ => panic!("Index {} out of bounds for {}", i, stringify!($vec_type)),
                    }
                }
            }

            impl<T> std::ops::IndexMut<usize> for $vec_type<T>
            where
                T: $crate::math::ValueType,
            {
                #[inline]
                fn index_mut(&mut self, i: usize) -> &mut T {
                    match i {
                        0 => &mut self.$c0,
                        1 => &mut self.$c1,
                        2 => &mut self.$c2,
                        _ => panic!("Index {} out of bounds for {}", i, stringify!($vec_type)),
                    }
                }
            }

            impl<T> approx::AbsDiffEq for $vec_type<T>
            where
                T: $crate::math::ValueType + approx::AbsDiffEq<Epsilon = T>,
            {
                type Epsilon = T;

                fn default_epsilon() -> T {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                    self.$c0.abs_diff_eq(&other.$c0, epsilon)
                        && self.$c1.abs_diff_eq(&other.$c1, epsilon)
                        && self.$c2.abs_diff_eq(&other.$c2, epsilon)
                }
            }

            impl<T> approx::RelativeEq for $vec_type<T>
            where
                T: $crate::math::ValueType + approx::RelativeEq<Epsilon = T>,
            {
                fn default_max_relative() -> T {
                    T::default_max_relative()
                }

                fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                    self.$c0.relative_eq(&other.$c0, epsilon, max_relative)
                        && self.$c1.relative_eq(&other.$c1, epsilon, max_relative)
                        && self.$c2.relative_eq(&other.$c2, epsilon, max_relative)
                }
            }
        )*
    };
}

/// Implements a component-wise binary operator `lhs op rhs -> out`.
macro_rules! impl_vec_op {
    ( $tr:ident $fn_name:ident $lhs:ident $rhs:ident $out:ident [ $c0:ident $c1:ident $c2:ident ] $op:tt ) => {
        impl<T> std::ops::$tr<$rhs<T>> for $lhs<T>
        where
            T: $crate::math::ValueType,
        {
            type Output = $out<T>;

            #[inline]
            fn $fn_name(self, other: $rhs<T>) -> $out<T> {
                $out::new(
                    self.$c0 $op other.$c0,
                    self.$c1 $op other.$c1,
                    self.$c2 $op other.$c2,
                )
            }
        }
    };
}

/// Implements a component-wise assigning operator `lhs op= rhs`.
macro_rules! impl_vec_assign_op {
    ( $tr:ident $fn_name:ident $lhs:ident $rhs:ident [ $c0:ident $c1:ident $c2:ident ] $op:tt ) => {
        impl<T> std::ops::$tr<$rhs<T>> for $lhs<T>
        where
            T: $crate::math::ValueType,
        {
            #[inline]
            fn $fn_name(&mut self, other: $rhs<T>) {
                self.$c0 $op other.$c0;
                self.$c1 $op other.$c1;
                self.$c2 $op other.$c2;
            }
        }
    };
}

/// Implements `Mul<T>`, `Div<T>`, `MulAssign<T>` and `DivAssign<T>` with a scalar.
macro_rules! impl_scalar_ops {
    ( $ty:ident [ $c0:ident $c1:ident $c2:ident ] ) => {
        impl<T> std::ops::Mul<T> for $ty<T>
        where
            T: $crate::math::ValueType,
        {
            type Output = Self;

            #[inline]
            fn mul(self, s: T) -> Self {
                Self::new(self.$c0 * s, self.$c1 * s, self.$c2 * s)
            }
        }

        impl<T> std::ops::Div<T> for $ty<T>
        where
            T: $crate::math::ValueType,
        {
            type Output = Self;

            #[inline]
            fn div(self, s: T) -> Self {
                debug_assert!(s != T::zero());
                Self::new(self.$c0 / s, self.$c1 / s, self.$c2 / s)
            }
        }

        impl<T> std::ops::MulAssign<T> for $ty<T>
        where
            T: $crate::math::ValueType,
        {
            #[inline]
            fn mul_assign(&mut self, s: T) {
                self.$c0 *= s;
                self.$c1 *= s;
                self.$c2 *= s;
            }
        }

        impl<T> std::ops::DivAssign<T> for $ty<T>
        where
            T: $crate::math::ValueType,
        {
            #[inline]
            fn div_assign(&mut self, s: T) {
                debug_assert!(s != T::zero());
                self.$c0 /= s;
                self.$c1 /= s;
                self.$c2 /= s;
            }
        }
    };
}

/// Implements `Neg` for a signed float container.
macro_rules! impl_neg {
    ( $ty:ident [ $c0:ident $c1:ident $c2:ident ] ) => {
        impl<T> std::ops::Neg for $ty<T>
        where
            T: $crate::math::FloatValueType,
        {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self::new(-self.$c0, -self.$c1, -self.$c2)
            }
        }
    };
}
