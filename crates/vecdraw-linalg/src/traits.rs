use std::ops::{Add, Div, Mul, Neg, Sub};

/// The trigonometric functions needed by the rotation and projection builders.
///
/// Angles are in radians.
pub trait Trig {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    /// Interprets `self` as degrees and converts it to radians.
    fn to_radians(self) -> Self;
}

pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// The additive identity.
pub trait Zero {
    const ZERO: Self;
}

/// The multiplicative identity.
pub trait One {
    const ONE: Self;
}

/// Signed numbers closed under the four basic operations.
///
/// Implemented automatically for every type meeting the bounds, in particular `f32`, `f64` and the
/// signed integers.
pub trait Number:
    Copy
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
}

impl<T> Number for T where
    T: Copy
        + PartialEq
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
{
}

/// Floating-point numbers: everything needed for lengths, normalization and transforms.
pub trait Float: Number + Sqrt + Trig + PartialOrd {
    /// Returns `true` if `self` is neither infinite nor NaN.
    fn is_finite(self) -> bool;
}

macro_rules! float_impls {
    ($($ty:ty),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0.0;
            }

            impl One for $ty {
                const ONE: Self = 1.0;
            }

            // The inherent methods take precedence, so these don't recurse.
            impl Trig for $ty {
                fn sin(self) -> Self { self.sin() }
                fn cos(self) -> Self { self.cos() }
                fn tan(self) -> Self { self.tan() }
                fn to_radians(self) -> Self { self.to_radians() }
            }

            impl Sqrt for $ty {
                fn sqrt(self) -> Self { self.sqrt() }
            }

            impl Float for $ty {
                fn is_finite(self) -> bool { self.is_finite() }
            }
        )+
    };
}
float_impls!(f32, f64);

macro_rules! int_impls {
    ($($ty:ty),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0;
            }

            impl One for $ty {
                const ONE: Self = 1;
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
