//! Packing vectors and matrices into contiguous `f32` buffers for upload.

use std::{mem, ops::Deref};

use crate::{Matrix, Vector};

/// Types that can be serialized into a packed sequence of `f32`s.
///
/// Vectors emit their components in order. Matrices emit their elements column by column, which is
/// the same as emitting the rows of the transposed matrix. Slices emit the concatenation of their
/// elements, so a list of vertices becomes one tightly packed vertex buffer.
///
/// # Examples
///
/// ```
/// # use vecdraw_linalg::*;
/// let points = [vec2(0.0, 1.0), vec2(2.0, 3.0)];
/// assert_eq!(points.flatten().as_slice(), &[0.0, 1.0, 2.0, 3.0]);
///
/// let mat = Matrix::from_rows([
///     [1.0, 2.0],
///     [3.0, 4.0],
/// ]);
/// assert_eq!(mat.flatten().as_slice(), &[1.0, 3.0, 2.0, 4.0]);
/// ```
pub trait Flatten {
    /// Returns the number of `f32`s that [`Flatten::flatten_into`] appends.
    fn flat_len(&self) -> usize;

    /// Appends the packed representation of `self` to `out`.
    fn flatten_into(&self, out: &mut Vec<f32>);

    /// Packs `self` into a freshly allocated, exactly sized buffer.
    fn flatten(&self) -> Flattened {
        let mut buf = Vec::with_capacity(self.flat_len());
        self.flatten_into(&mut buf);
        debug_assert_eq!(buf.len(), self.flat_len());
        Flattened(buf.into_boxed_slice())
    }
}

impl<const N: usize> Flatten for Vector<f32, N> {
    fn flat_len(&self) -> usize {
        N
    }

    fn flatten_into(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(self.as_slice());
    }
}

impl<const R: usize, const C: usize> Flatten for Matrix<f32, R, C> {
    fn flat_len(&self) -> usize {
        R * C
    }

    fn flatten_into(&self, out: &mut Vec<f32>) {
        for column in self.as_columns() {
            out.extend_from_slice(column);
        }
    }
}

impl<F: Flatten> Flatten for [F] {
    fn flat_len(&self) -> usize {
        self.iter().map(Flatten::flat_len).sum()
    }

    fn flatten_into(&self, out: &mut Vec<f32>) {
        for elem in self {
            elem.flatten_into(out);
        }
    }
}

impl<F: Flatten, const N: usize> Flatten for [F; N] {
    fn flat_len(&self) -> usize {
        self.as_slice().flat_len()
    }

    fn flatten_into(&self, out: &mut Vec<f32>) {
        self.as_slice().flatten_into(out)
    }
}

/// An immutable, exactly sized buffer of packed `f32`s produced by [`Flatten::flatten`].
#[derive(Debug, Clone, PartialEq)]
pub struct Flattened(Box<[f32]>);

impl Flattened {
    /// Returns the packed values.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Returns the packed values as native-endian bytes, ready to be copied into a GPU buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.0)
    }

    /// Returns the number of `f32`s in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the size of the buffer in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.0.len() * mem::size_of::<f32>()
    }
}

impl Deref for Flattened {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn sizes() {
        assert_eq!(vec2(0.0, 0.0).flatten().byte_len(), 8);
        assert_eq!(Vec3f::ZERO.flatten().byte_len(), 12);
        assert_eq!(Vec4f::ORIGIN.flatten().byte_len(), 16);
        assert_eq!(Mat2f::IDENTITY.flatten().byte_len(), 16);
        assert_eq!(Mat3f::IDENTITY.flatten().byte_len(), 36);
        assert_eq!(Mat4f::IDENTITY.flatten().byte_len(), 64);

        // Buffer offsets can be computed from the type layout directly.
        assert_eq!(std::mem::size_of::<Vec2f>(), 8);
        assert_eq!(std::mem::size_of::<Vec4f>(), 16);
        assert_eq!(std::mem::size_of::<Mat4f>(), 64);
    }

    #[test]
    fn matrix_is_column_major() {
        let m = Mat3f::try_from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
        assert_eq!(
            m.flatten().as_slice(),
            &[1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]
        );
        assert_eq!(m.flatten(), m.transpose().transpose().flatten());
        assert_eq!(m.flatten().as_bytes(), bytemuck::bytes_of(&m));
    }

    #[test]
    fn lists_concatenate() {
        let colors = vec![vec4(1.0, 0.0, 0.0, 1.0), vec4(0.0, 1.0, 0.0, 1.0)];
        let flat = colors.flatten();
        assert_eq!(flat.len(), 8);
        assert_eq!(&flat[4..], &[0.0, 1.0, 0.0, 1.0]);

        let empty: Vec<Vec2f> = Vec::new();
        assert!(empty.flatten().is_empty());
    }
}
