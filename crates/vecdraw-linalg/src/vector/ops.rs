//! Operator overloads and approximate comparison.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N> {
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

/// Allows comparing against plain arrays in tests and assertions.
impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T, N> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.0 == *other
    }
}

impl<T, const N: usize> Vector<T, N> {
    fn all_pairs(&self, other: &Self, mut pred: impl FnMut(&T, &T) -> bool) -> bool {
        (0..N).all(|i| pred(&self.0[i], &other.0[i]))
    }
}

impl<T: AbsDiffEq, const N: usize> AbsDiffEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.all_pairs(other, |a, b| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq, const N: usize> RelativeEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.all_pairs(other, |a, b| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: UlpsEq, const N: usize> UlpsEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.all_pairs(other, |a, b| a.ulps_eq(b, epsilon, max_ulps))
    }
}

impl<T: Neg, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(|c| -c)
    }
}

/// Component-wise `+`, `-` and `*` between two vectors, plus the `+=`/`-=` forms.
macro_rules! componentwise {
    ($($op:ident $method:ident $assign_op:ident $assign_method:ident: $sym:tt;)+) => {
        $(
            impl<T: $op, const N: usize> $op for Vector<T, N> {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: Self) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l $sym r)
                }
            }

            impl<T: $assign_op, const N: usize> $assign_op for Vector<T, N> {
                fn $assign_method(&mut self, rhs: Self) {
                    for (l, r) in self.0.iter_mut().zip(rhs.0) {
                        l.$assign_method(r);
                    }
                }
            }
        )+
    };
}

componentwise! {
    Add add AddAssign add_assign: +;
    Sub sub SubAssign sub_assign: -;
}

/// Same as [`Vector::component_mul`].
impl<T: Mul, const N: usize> Mul for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.component_mul(rhs)
    }
}

/// Scaling by a scalar, plus the assigning form.
macro_rules! scalar {
    ($($op:ident $method:ident $assign_op:ident $assign_method:ident: $sym:tt;)+) => {
        $(
            impl<T: $op + Copy, const N: usize> $op<T> for Vector<T, N> {
                type Output = Vector<T::Output, N>;

                fn $method(self, s: T) -> Self::Output {
                    self.map(|c| c $sym s)
                }
            }

            impl<T: $assign_op + Copy, const N: usize> $assign_op<T> for Vector<T, N> {
                fn $assign_method(&mut self, s: T) {
                    for c in &mut self.0 {
                        c.$assign_method(s);
                    }
                }
            }
        )+
    };
}

scalar! {
    Mul mul MulAssign mul_assign: *;
    Div div DivAssign div_assign: /;
}

impl<T, const N: usize> Vector<T, N> {
    /// Multiplies corresponding components, also known as the Hadamard product.
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// let rgba = vec4(1.0, 0.5, 0.25, 1.0);
    /// assert_eq!(rgba.component_mul(vec4(0.5, 0.5, 0.5, 1.0)), vec4(0.5, 0.25, 0.125, 1.0));
    /// ```
    pub fn component_mul<U>(self, other: Vector<U, N>) -> Vector<T::Output, N>
    where
        T: Mul<U>,
    {
        self.zip(other).map(|(a, b)| a * b)
    }
}
