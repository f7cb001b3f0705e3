use std::{array, fmt};

use crate::{Error, Number, One, Vector, Zero};

mod ops;

pub type Mat1<T> = Matrix<T, 1, 1>;
pub type Mat2<T> = Matrix<T, 2, 2>;
pub type Mat2f = Mat2<f32>;
pub type Mat3<T> = Matrix<T, 3, 3>;
pub type Mat3f = Mat3<f32>;
/// Transforms of homogeneous coordinates: model, view and projection matrices.
pub type Mat4<T> = Matrix<T, 4, 4>;
pub type Mat4f = Mat4<f32>;

/// An `R`×`C` grid of numbers, stored column by column.
///
/// Elements are addressed as `m[(row, col)]`, both 0-based, the way matrices are written on paper.
/// [`Matrix::get`] is the non-panicking variant.
///
/// ```
/// # use vecdraw_linalg::*;
/// let mut m = Mat2::from_rows([
///     [1, 2],
///     [3, 4],
/// ]);
/// m[(1, 0)] = 30;
/// assert_eq!(m.row(1), vec2(30, 4));
/// assert_eq!(m.column(0), vec2(1, 30));
/// ```
///
/// Code is usually easiest to read with [`Matrix::from_rows`], which takes the rows in reading
/// order. [`Matrix::try_from_slice`] does the same for a flat row-major list.
/// [`Matrix::from_columns`] and [`Matrix::from_fn`] are also available, as well as
/// [`Matrix::diagonal`], [`Matrix::from_diagonal`] and [`Matrix::from_partial`] for square
/// matrices.
///
/// Since columns are stored contiguously and without padding, the in-memory layout is what OpenGL
/// and WebGL expect for `mat4` uniforms. [`crate::Flatten`] emits elements in that order.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

// SAFETY: `Matrix` is a transparent wrapper around nested arrays without padding.
#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    const ZERO_COLUMN: [T; R] = [T::ZERO; R];

    pub const ZERO: Self = Self([Self::ZERO_COLUMN; C]);
}

impl<T: Zero + One> Matrix<T, 1, 1> {
    pub const IDENTITY: Self = Self([[T::ONE]]);
}

impl<T: Zero + One> Matrix<T, 2, 2> {
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO],
        [T::ZERO, T::ONE],
    ]);
}

impl<T: Zero + One> Matrix<T, 3, 3> {
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE],
    ]);
}

impl<T: Zero + One> Matrix<T, 4, 4> {
    /// Leaves every vector it is multiplied with unchanged.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ONE],
    ]);
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Builds a matrix from its rows, top to bottom.
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// let by_rows = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// let by_columns = Matrix::from_columns([[1, 4], [2, 5], [3, 6]]);
    /// assert_eq!(by_rows, by_columns);
    /// ```
    pub fn from_rows<V: Into<Vector<T, C>>>(rows: [V; R]) -> Self
    where
        T: Copy,
    {
        let rows: [Vector<T, C>; R] = rows.map(Into::into);
        Self::from_fn(|row, col| rows[row][col])
    }

    /// Builds a matrix from its columns, left to right.
    pub fn from_columns<V: Into<Vector<T, R>>>(columns: [V; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Computes the element at `(row, col)` as `f(row, col)`.
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// let checkers: Mat3<u8> = Matrix::from_fn(|row, col| ((row + col) % 2) as u8);
    /// assert_eq!(checkers.row(0), vec3(0, 1, 0));
    /// assert_eq!(checkers.row(1), vec3(1, 0, 1));
    /// ```
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self(array::from_fn(|col| array::from_fn(|row| f(row, col))))
    }

    /// Creates a [`Matrix`] from `R * C` elements given in row-major order.
    ///
    /// Excess elements are ignored. Returns [`Error::InvalidArgument`] if fewer than `R * C`
    /// elements are provided.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// let mat = Mat2::try_from_slice(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(mat, Matrix::from_rows([[1, 2], [3, 4]]));
    /// assert!(Mat2::try_from_slice(&[1, 2, 3]).is_err());
    /// ```
    pub fn try_from_slice(elems: &[T]) -> Result<Self, Error>
    where
        T: Copy,
    {
        match elems.get(..R * C) {
            Some(elems) => Ok(Self::from_fn(|row, col| elems[row * C + col])),
            None => Err(Error::InvalidArgument("too few matrix elements")),
        }
    }

    /// Transforms every element with `f`.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Matrix<U, R, C> {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Pairs up the elements of `self` and `other` at equal positions.
    pub fn zip<U>(self, other: Matrix<U, R, C>) -> Matrix<(T, U), R, C> {
        let mut rhs = other.0.into_iter();
        // Both have exactly `C` columns of `R` elements.
        Matrix(self.0.map(|lhs| {
            let mut rhs = rhs.next().unwrap().into_iter();
            lhs.map(|l| (l, rhs.next().unwrap()))
        }))
    }

    /// Mirrors the matrix along its diagonal, so that rows become columns.
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// let m = Matrix::from_rows([[1, 2, 3]]);
    /// assert_eq!(m.transpose(), Matrix::from_columns([[1, 2, 3]]));
    /// assert_eq!(m.transpose().transpose(), m);
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(row, col)])
    }

    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[col].into()
    }

    /// Returns the underlying storage, one array per column.
    #[inline]
    pub const fn as_columns(&self) -> &[[T; R]; C] {
        &self.0
    }

    /// ```
    /// # use vecdraw_linalg::*;
    /// let m = Mat2::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(m.get(0, 1), Some(&2));
    /// assert_eq!(m.get(0, 2), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col)?.get(row)
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Scales uniformly by `s`: `s` on the diagonal, 0 elsewhere.
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// assert_eq!(Mat3::diagonal(1), Mat3::IDENTITY);
    /// ```
    pub fn diagonal(s: T) -> Self
    where
        T: Zero + Copy,
    {
        Self::from_diagonal(Vector::splat(s))
    }

    /// Puts the components of `diag` on the diagonal, 0 elsewhere.
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// let m = Matrix::from_diagonal([2, 3]);
    /// assert_eq!(m, Matrix::from_rows([[2, 0], [0, 3]]));
    /// assert_eq!(m.into_diagonal(), vec2(2, 3));
    /// ```
    pub fn from_diagonal(diag: impl Into<Vector<T, N>>) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        let mut m = Self::ZERO;
        for i in 0..N {
            m[(i, i)] = diag[i];
        }
        m
    }

    /// Creates a square matrix from a variable number of elements.
    ///
    /// - No elements produce the identity matrix.
    /// - A single element produces a [`Matrix::diagonal`] matrix.
    /// - Otherwise, the elements are consumed `N` at a time to build successive rows, each
    ///   following the [`Vector::from_partial`] fill rule. Rows beyond the supplied data are
    ///   filled the same way from nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// assert_eq!(Mat2f::from_partial(&[]), Mat2f::IDENTITY);
    /// assert_eq!(Mat2f::from_partial(&[3.0]), Mat2f::diagonal(3.0));
    /// assert_eq!(
    ///     Mat2f::from_partial(&[1.0, 2.0, 3.0]),
    ///     Matrix::from_rows([[1.0, 2.0], [3.0, 0.0]]),
    /// );
    /// assert_eq!(
    ///     Mat4f::from_partial(&[1.0, 2.0]).row(3),
    ///     vec4(0.0, 0.0, 0.0, 1.0),
    /// );
    /// ```
    pub fn from_partial(elems: &[T]) -> Self
    where
        T: Zero + One + Copy,
    {
        match elems {
            [] => Self::diagonal(T::ONE),
            [elem] => Self::diagonal(*elem),
            _ => {
                let rows: [Vector<T, N>; N] = array::from_fn(|row| {
                    let start = (row * N).min(elems.len());
                    Vector::from_partial(&elems[start..])
                });
                Self::from_rows(rows)
            }
        }
    }

    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Sums up the diagonal.
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// assert_eq!(Mat4f::IDENTITY.trace(), 4.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        let diag = self.into_diagonal();
        (0..N).fold(T::ZERO, |sum, i| sum + diag[i])
    }
}

impl<T: Number> Matrix<T, 1, 1> {
    pub fn determinant(&self) -> T {
        self[(0, 0)]
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// `ad - bc`
    pub fn determinant(&self) -> T {
        let [[a, c], [b, d]] = self.0;
        a * d - b * c
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Computes the determinant as the triple product of the rows.
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// let m = Mat3::from_rows([
    ///     [2, 0, 1],
    ///     [1, 3, 2],
    ///     [1, 1, 2],
    /// ]);
    /// assert_eq!(m.determinant(), 6);
    /// ```
    pub fn determinant(&self) -> T {
        self.row(0).dot(self.row(1).cross(self.row(2)))
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);
    /// assert_eq!(Mat4f::diagonal(2.0).determinant(), 16.0);
    /// ```
    pub fn determinant(&self) -> T {
        (0..4).fold(T::ZERO, |acc, col| {
            let term = self[(0, col)] * self.minor(0, col).determinant();
            if col % 2 == 0 {
                acc + term
            } else {
                acc - term
            }
        })
    }

    /// Returns the 3x3 matrix left over after removing `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> Matrix<T, 3, 3> {
        Matrix::from_fn(|r, c| {
            let r = if r < row { r } else { r + 1 };
            let c = if c < col { c } else { c + 1 };
            self[(r, c)]
        })
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Row<'a, T, const R: usize, const C: usize>(&'a Matrix<T, R, C>, usize);

        impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Row<'_, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&Row(self, row));
        }
        list.finish()
    }
}

/// Prints one row per line.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..R {
            if row != 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for col in 0..C {
                if col != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self[(row, col)])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
