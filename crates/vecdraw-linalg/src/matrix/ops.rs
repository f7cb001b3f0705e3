use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{traits::Number, Matrix, Vector};

/// `m[(row, col)]`
impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.0[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.0[col][row]
    }
}

impl<T: PartialEq<U>, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>>
    for Matrix<T, R, C>
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const R: usize, const C: usize> Eq for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    fn all_pairs(&self, other: &Self, mut pred: impl FnMut(&T, &T) -> bool) -> bool {
        let rhs = other.0.iter().flatten();
        self.0.iter().flatten().zip(rhs).all(|(a, b)| pred(a, b))
    }

    /// Multiplies corresponding elements.
    ///
    /// The matrix product is the [`Mul`] impl.
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// let a = Matrix::from_rows([[1, 2], [3, 4]]);
    /// let b = Matrix::from_rows([[0, 1], [1, 0]]);
    /// assert_eq!(a.component_mul(b), Matrix::from_rows([[0, 2], [3, 0]]));
    /// assert_eq!(a * b, Matrix::from_rows([[2, 1], [4, 3]]));
    /// ```
    pub fn component_mul<U>(self, other: Matrix<U, R, C>) -> Matrix<T::Output, R, C>
    where
        T: Mul<U>,
    {
        self.zip(other).map(|(a, b)| a * b)
    }
}

impl<T: AbsDiffEq, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
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

impl<T: RelativeEq, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
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

impl<T: UlpsEq, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
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

impl<T: Neg, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}

impl<T: Add, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Matrix<T::Output, R, C>;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip(rhs).map(|(a, b)| a + b)
    }
}

impl<T: Sub, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Matrix<T::Output, R, C>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip(rhs).map(|(a, b)| a - b)
    }
}

/// Transforms a column vector.
impl<T: Number, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, v: Vector<T, C>) -> Vector<T, R> {
        Vector::from_fn(|row| self.row(row).dot(v))
    }
}

/// The matrix product. `a * b` applies `b` first, then `a`.
impl<T: Number, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        Matrix::from_fn(|row, col| self.row(row).dot(rhs.column(col)))
    }
}

impl<T: Number, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        self.map(|x| x * s)
    }
}
