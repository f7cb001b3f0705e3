//! Runtime-shaped vectors and matrices.
//!
//! [`Value`] holds any of the supported vector and matrix types over `f32`. Shapes are checked when
//! an operation runs, and mismatches are reported as an [`Error`] instead of being rejected by the
//! compiler. Every operation either returns a complete result or fails without side effects.

use std::fmt;

use crate::{Error, Flatten, Mat2f, Mat3f, Mat4f, Matrix, Vec2f, Vec3f, Vec4f, Vector};

/// Whether a [`Value`] is a vector or a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Vector,
    Matrix,
}

/// The kind and size of a [`Value`].
///
/// For vectors, `len` is the number of components. For (square) matrices, it is the number of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub kind: Kind,
    pub len: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Vector => write!(f, "vec{}", self.len),
            Kind::Matrix => write!(f, "mat{}", self.len),
        }
    }
}

/// A vector or square matrix of `f32`s whose shape is only known at runtime.
///
/// The derived [`PartialEq`] is structural equality: values of different kinds or sizes are never
/// equal, even if their flattened contents coincide.
///
/// # Examples
///
/// ```
/// # use vecdraw_linalg::*;
/// let v = Value::vector(&[1.0, 2.0, 3.0, 4.0])?;
/// let m = Value::matrix(&[1.0, 2.0, 3.0, 4.0])?;
/// assert_eq!(v.shape().to_string(), "vec4");
/// assert_eq!(m.shape().to_string(), "mat2");
/// assert!(!v.equal(&m));
///
/// let sum = v.add(&v.negate())?;
/// assert_eq!(sum, Value::Vec4(Vec4f::ZERO));
///
/// assert!(matches!(v.add(&m), Err(Error::DimensionMismatch { .. })));
/// # Ok::<_, Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Vec2(Vec2f),
    Vec3(Vec3f),
    Vec4(Vec4f),
    Mat2(Mat2f),
    Mat3(Mat3f),
    Mat4(Mat4f),
}

/// Expands `$body` once per variant, with `$v` bound to the payload, and rewraps the result in the
/// same variant.
macro_rules! map_each {
    ($value:expr, |$v:ident| $body:expr) => {
        match $value {
            Value::Vec2($v) => Value::Vec2($body),
            Value::Vec3($v) => Value::Vec3($body),
            Value::Vec4($v) => Value::Vec4($body),
            Value::Mat2($v) => Value::Mat2($body),
            Value::Mat3($v) => Value::Mat3($body),
            Value::Mat4($v) => Value::Mat4($body),
        }
    };
}

/// Like `map_each!`, but for two operands that must have the same shape.
macro_rules! zip_each {
    ($lhs:expr, $rhs:expr, |$a:ident, $b:ident| $body:expr) => {
        match ($lhs, $rhs) {
            (Value::Vec2($a), Value::Vec2($b)) => Ok(Value::Vec2($body)),
            (Value::Vec3($a), Value::Vec3($b)) => Ok(Value::Vec3($body)),
            (Value::Vec4($a), Value::Vec4($b)) => Ok(Value::Vec4($body)),
            (Value::Mat2($a), Value::Mat2($b)) => Ok(Value::Mat2($body)),
            (Value::Mat3($a), Value::Mat3($b)) => Ok(Value::Mat3($body)),
            (Value::Mat4($a), Value::Mat4($b)) => Ok(Value::Mat4($body)),
            (lhs, rhs) => Err(lhs.mismatch(rhs)),
        }
    };
}

impl Value {
    /// Creates a vector from 2, 3 or 4 components.
    ///
    /// Returns [`Error::UnsupportedSize`] for any other number of components.
    pub fn vector(components: &[f32]) -> Result<Self, Error> {
        Ok(match components.len() {
            2 => Value::Vec2(Vector::try_from_slice(components)?),
            3 => Value::Vec3(Vector::try_from_slice(components)?),
            4 => Value::Vec4(Vector::try_from_slice(components)?),
            n => return Err(Error::UnsupportedSize(n)),
        })
    }

    /// Creates a square matrix from 4, 9 or 16 elements given in row-major order.
    ///
    /// Returns [`Error::UnsupportedSize`] for any other number of elements.
    pub fn matrix(rows: &[f32]) -> Result<Self, Error> {
        Ok(match rows.len() {
            4 => Value::Mat2(Matrix::try_from_slice(rows)?),
            9 => Value::Mat3(Matrix::try_from_slice(rows)?),
            16 => Value::Mat4(Matrix::try_from_slice(rows)?),
            n => return Err(Error::UnsupportedSize(n)),
        })
    }

    pub fn kind(&self) -> Kind {
        self.shape().kind
    }

    pub fn shape(&self) -> Shape {
        let (kind, len) = match self {
            Value::Vec2(_) => (Kind::Vector, 2),
            Value::Vec3(_) => (Kind::Vector, 3),
            Value::Vec4(_) => (Kind::Vector, 4),
            Value::Mat2(_) => (Kind::Matrix, 2),
            Value::Mat3(_) => (Kind::Matrix, 3),
            Value::Mat4(_) => (Kind::Matrix, 4),
        };
        Shape { kind, len }
    }

    fn mismatch(&self, other: &Value) -> Error {
        Error::DimensionMismatch {
            left: self.shape(),
            right: other.shape(),
        }
    }

    /// Returns the components of a vector, or an error for matrices.
    pub fn components(&self) -> Result<&[f32], Error> {
        match self {
            Value::Vec2(v) => Ok(v.as_slice()),
            Value::Vec3(v) => Ok(v.as_slice()),
            Value::Vec4(v) => Ok(v.as_slice()),
            _ => Err(Error::InvalidArgument("expected a vector, got a matrix")),
        }
    }

    /// Structural equality; `false` whenever kind or size differ.
    pub fn equal(&self, other: &Value) -> bool {
        self == other
    }

    /// Element-wise sum of two values of the same shape.
    pub fn add(&self, other: &Value) -> Result<Value, Error> {
        zip_each!(self, other, |a, b| *a + *b)
    }

    /// Element-wise difference of two values of the same shape.
    pub fn subtract(&self, other: &Value) -> Result<Value, Error> {
        zip_each!(self, other, |a, b| *a - *b)
    }

    /// Multiplies two values.
    ///
    /// A matrix times a vector of matching size is the matrix-vector product. Any other pair of
    /// operands must have the same shape and is multiplied element by element (this includes two
    /// matrices).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// let m = Value::matrix(&[0.0, 1.0, 2.0, 3.0])?;
    /// let v = Value::vector(&[4.0, 5.0])?;
    /// assert_eq!(m.mult(&v)?, Value::Vec2(vec2(5.0, 23.0)));
    /// assert_eq!(v.mult(&v)?, Value::Vec2(vec2(16.0, 25.0)));
    /// assert!(v.mult(&m).is_err());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn mult(&self, other: &Value) -> Result<Value, Error> {
        match (self, other) {
            (Value::Mat2(m), Value::Vec2(v)) => Ok(Value::Vec2(*m * *v)),
            (Value::Mat3(m), Value::Vec3(v)) => Ok(Value::Vec3(*m * *v)),
            (Value::Mat4(m), Value::Vec4(v)) => Ok(Value::Vec4(*m * *v)),
            _ => zip_each!(self, other, |a, b| a.component_mul(*b)),
        }
    }

    /// Multiplies every element by `s`.
    pub fn scale(&self, s: f32) -> Value {
        map_each!(self, |v| *v * s)
    }

    /// Flips the sign of every element.
    pub fn negate(&self) -> Value {
        map_each!(self, |v| -*v)
    }

    /// Transposes a matrix.
    pub fn transpose(&self) -> Result<Value, Error> {
        match self {
            Value::Mat2(m) => Ok(Value::Mat2(m.transpose())),
            Value::Mat3(m) => Ok(Value::Mat3(m.transpose())),
            Value::Mat4(m) => Ok(Value::Mat4(m.transpose())),
            _ => Err(Error::InvalidArgument("transpose requires a matrix")),
        }
    }

    /// Computes the determinant of a matrix.
    pub fn det(&self) -> Result<f32, Error> {
        match self {
            Value::Mat2(m) => Ok(m.determinant()),
            Value::Mat3(m) => Ok(m.determinant()),
            Value::Mat4(m) => Ok(m.determinant()),
            _ => Err(Error::InvalidArgument("determinant requires a matrix")),
        }
    }

    /// Computes the Euclidean length of a vector.
    pub fn length(&self) -> Result<f32, Error> {
        let c = self.components()?;
        Ok(c.iter().map(|x| x * x).sum::<f32>().sqrt())
    }

    /// Computes the inner product of two vectors of equal length.
    pub fn dot(&self, other: &Value) -> Result<f32, Error> {
        let (a, b) = (self.components()?, other.components()?);
        if a.len() != b.len() {
            return Err(self.mismatch(other));
        }
        Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
    }

    /// Computes the cross product of the first 3 components of two vectors.
    ///
    /// Both operands must have at least 3 components.
    pub fn cross(&self, other: &Value) -> Result<Value, Error> {
        let head = |v: &Value| -> Result<Vec3f, Error> {
            Vec3f::try_from_slice(v.components()?)
                .map_err(|_| Error::InvalidArgument("cross product requires at least 3 components"))
        };
        Ok(Value::Vec3(head(self)?.cross(head(other)?)))
    }

    /// Scales a vector to unit length.
    ///
    /// If `exclude_last` is set, the last component neither contributes to the length nor gets
    /// rescaled. Fails if the (remaining) length is zero or not finite.
    pub fn normalize(&self, exclude_last: bool) -> Result<Value, Error> {
        fn norm<const N: usize>(
            v: Vector<f32, N>,
            exclude_last: bool,
        ) -> Result<Vector<f32, N>, Error> {
            if exclude_last {
                v.try_normalize_excluding_last()
            } else {
                v.try_normalize()
            }
        }

        match self {
            Value::Vec2(v) => Ok(Value::Vec2(norm(*v, exclude_last)?)),
            Value::Vec3(v) => Ok(Value::Vec3(norm(*v, exclude_last)?)),
            Value::Vec4(v) => Ok(Value::Vec4(norm(*v, exclude_last)?)),
            _ => Err(Error::InvalidArgument("normalize requires a vector")),
        }
    }

    /// Linearly interpolates between two vectors of the same length.
    pub fn mix(&self, other: &Value, s: f32) -> Result<Value, Error> {
        match (self, other) {
            (Value::Vec2(a), Value::Vec2(b)) => Ok(Value::Vec2(a.mix(*b, s))),
            (Value::Vec3(a), Value::Vec3(b)) => Ok(Value::Vec3(a.mix(*b, s))),
            (Value::Vec4(a), Value::Vec4(b)) => Ok(Value::Vec4(a.mix(*b, s))),
            (a, b) if a.kind() == Kind::Vector && b.kind() == Kind::Vector => Err(a.mismatch(b)),
            _ => Err(Error::InvalidArgument("mix requires two vectors")),
        }
    }
}

impl Flatten for Value {
    fn flat_len(&self) -> usize {
        match self {
            Value::Vec2(v) => v.flat_len(),
            Value::Vec3(v) => v.flat_len(),
            Value::Vec4(v) => v.flat_len(),
            Value::Mat2(m) => m.flat_len(),
            Value::Mat3(m) => m.flat_len(),
            Value::Mat4(m) => m.flat_len(),
        }
    }

    fn flatten_into(&self, out: &mut Vec<f32>) {
        match self {
            Value::Vec2(v) => v.flatten_into(out),
            Value::Vec3(v) => v.flatten_into(out),
            Value::Vec4(v) => v.flatten_into(out),
            Value::Mat2(m) => m.flatten_into(out),
            Value::Mat3(m) => m.flatten_into(out),
            Value::Mat4(m) => m.flatten_into(out),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Vec2(v) => fmt::Display::fmt(v, f),
            Value::Vec3(v) => fmt::Display::fmt(v, f),
            Value::Vec4(v) => fmt::Display::fmt(v, f),
            Value::Mat2(m) => fmt::Display::fmt(m, f),
            Value::Mat3(m) => fmt::Display::fmt(m, f),
            Value::Mat4(m) => fmt::Display::fmt(m, f),
        }
    }
}

macro_rules! from_impls {
    ($($variant:ident: $ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )+
    };
}
from_impls!(Vec2: Vec2f, Vec3: Vec3f, Vec4: Vec4f, Mat2: Mat2f, Mat3: Mat3f, Mat4: Mat4f);

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::*;

    fn shapes() -> Vec<Value> {
        vec![
            Value::vector(&[1.0, -2.0]).unwrap(),
            Value::vector(&[0.5, 3.0, -4.0]).unwrap(),
            Value::vector(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
            Value::matrix(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
            Value::matrix(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.5]).unwrap(),
            Mat4f::from_partial(&[2.0, -1.0, 0.0, 3.0, 7.0]).into(),
        ]
    }

    #[test]
    fn construction() {
        assert_eq!(Value::vector(&[]), Err(Error::UnsupportedSize(0)));
        assert_eq!(Value::vector(&[1.0]), Err(Error::UnsupportedSize(1)));
        assert_eq!(Value::vector(&[0.0; 5]), Err(Error::UnsupportedSize(5)));
        assert_eq!(Value::matrix(&[0.0; 8]), Err(Error::UnsupportedSize(8)));
        assert_eq!(
            Value::matrix(&[1.0, 2.0, 3.0, 4.0]),
            Ok(Value::Mat2(Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]])))
        );
    }

    #[test]
    fn add_negated_is_zero() {
        for v in shapes() {
            let zero = v.add(&v.negate()).unwrap();
            assert_eq!(zero.shape(), v.shape());
            assert!(zero.flatten().iter().all(|&x| x == 0.0), "{zero}");
            assert_eq!(v.subtract(&v), Ok(zero));
        }
    }

    #[test]
    fn kind_mismatch() {
        let v = Value::vector(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let m = Value::matrix(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!(!v.equal(&m));
        assert!(!m.equal(&v));
        assert_eq!(v.flatten(), Value::Mat2(Mat2f::from_partial(&[1.0, 3.0, 2.0, 4.0])).flatten());
        assert!(v.equal(&v));

        assert_eq!(
            v.add(&m),
            Err(Error::DimensionMismatch {
                left: Shape { kind: Kind::Vector, len: 4 },
                right: Shape { kind: Kind::Matrix, len: 2 },
            })
        );
        assert!(v.subtract(&Value::vector(&[1.0, 2.0]).unwrap()).is_err());
        assert!(m.mult(&Value::vector(&[1.0, 2.0, 3.0]).unwrap()).is_err());
    }

    #[test]
    fn matrix_only() {
        let v = Value::vector(&[1.0, 2.0]).unwrap();
        assert!(matches!(v.transpose(), Err(Error::InvalidArgument(_))));
        assert!(matches!(v.det(), Err(Error::InvalidArgument(_))));

        let m = Value::matrix(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.det(), Ok(-2.0));
        assert_eq!(m.transpose(), Value::matrix(&[1.0, 3.0, 2.0, 4.0]));
        assert_eq!(Value::from(Mat4f::IDENTITY).det(), Ok(1.0));
    }

    #[test]
    fn vector_only() {
        let m = Value::from(Mat3f::IDENTITY);
        let v3 = Value::vector(&[1.0, 2.0, 2.0]).unwrap();
        let v4 = Value::vector(&[0.0, 0.0, 1.0, 9.0]).unwrap();

        assert!(m.length().is_err());
        assert_eq!(v3.length(), Ok(3.0));
        assert_eq!(v3.dot(&v3), Ok(9.0));
        assert!(matches!(v3.dot(&v4), Err(Error::DimensionMismatch { .. })));
        assert!(matches!(v3.dot(&m), Err(Error::InvalidArgument(_))));

        assert_eq!(v3.cross(&v4), Ok(Value::Vec3(vec3(2.0, -1.0, 0.0))));
        assert!(matches!(
            Value::vector(&[1.0, 0.0]).unwrap().cross(&v3),
            Err(Error::InvalidArgument(_))
        ));

        let n = v3.normalize(false).unwrap();
        assert_relative_eq!(n.length().unwrap(), 1.0, epsilon = 1e-6);
        let n = v4.normalize(true).unwrap();
        assert_eq!(n, Value::Vec4(vec4(0.0, 0.0, 1.0, 9.0)));
        assert!(Value::Vec3(Vec3f::ZERO).normalize(false).is_err());
        assert!(m.normalize(false).is_err());

        assert_eq!(v3.mix(&v3.scale(3.0), 0.5), Ok(v3.scale(2.0)));
        assert!(matches!(v3.mix(&v4, 0.5), Err(Error::DimensionMismatch { .. })));
        assert!(matches!(m.mix(&m, 0.5), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn display() {
        assert_eq!(Value::vector(&[1.0, 2.5]).unwrap().to_string(), "(1, 2.5)");
        assert_eq!(
            Value::matrix(&[1.0, 2.0, 3.0, 4.0]).unwrap().to_string(),
            "[1, 2]\n[3, 4]"
        );
    }
}
