use std::{array, fmt};

use crate::{
    traits::{Float, Number},
    Error, One, Zero,
};

mod ops;
mod view;

/// Vertex positions and directions in the plane.
pub type Vec2<T> = Vector<T, 2>;
pub type Vec2f = Vec2<f32>;
/// Points and directions in space.
pub type Vec3<T> = Vector<T, 3>;
pub type Vec3f = Vec3<f32>;
/// Homogeneous coordinates and RGBA colors.
pub type Vec4<T> = Vector<T, 4>;
pub type Vec4f = Vec4<f32>;

/// A fixed-size list of `N` numbers, used for positions, directions and colors alike.
///
/// Vectors are plain values: every operation returns a new vector and the length `N` is part of
/// the type, so it can never change behind your back.
///
/// Besides the [`vec2`], [`vec3`] and [`vec4`] shorthands, vectors can be built with
/// [`Vector::ZERO`], [`Vector::splat`], [`Vector::uniform`], [`Vector::from_partial`] (default
/// filling), [`Vector::try_from_slice`] (strict), [`Vector::from_fn`], or converted from `[T; N]`.
///
/// Vectors of 2 to 4 components deref to structs with `x`/`y`/`z`/`w` fields, which in turn deref
/// to `r`/`g`/`b`/`a`. Indexing works like it does on arrays.
///
/// The type is `#[repr(transparent)]` over `[T; N]` and implements [`bytemuck::Pod`] for `Pod`
/// elements, so a `&[Vec2f]` can be handed to a GPU buffer as bytes.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

// SAFETY: `Vector` is a transparent wrapper around `[T; N]`.
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// `(1, 0)`
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// `(0, 1)`
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// `(1, 0, 0)`
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// `(0, 1, 0)`
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// `(0, 0, 1)`
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// The origin in homogeneous coordinates: `(0, 0, 0, 1)`.
    ///
    /// This is what [`Vector::from_partial`] returns when given no components at all.
    pub const ORIGIN: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Repeats `value` in every component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// assert_eq!(Vec4f::splat(0.5), vec4(0.5, 0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([value; N])
    }

    /// Repeats `value` in every component, except for the homogeneous `w` component of a 4-vector,
    /// which is set to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// assert_eq!(Vec3f::uniform(0.5), vec3(0.5, 0.5, 0.5));
    /// assert_eq!(Vec4f::uniform(0.5), vec4(0.5, 0.5, 0.5, 1.0));
    /// ```
    pub fn uniform(value: T) -> Self
    where
        T: One + Copy,
    {
        Self::from_fn(|i| if N == 4 && i == 3 { T::ONE } else { value })
    }

    /// Creates a vector from up to `N` leading components, filling in the rest with defaults.
    ///
    /// Missing components default to 0, except for the 4th component of a 4-vector, which defaults
    /// to 1. Components beyond the `N`th are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// assert_eq!(Vec2f::from_partial(&[]), vec2(0.0, 0.0));
    /// assert_eq!(Vec4f::from_partial(&[]), vec4(0.0, 0.0, 0.0, 1.0));
    /// assert_eq!(Vec4f::from_partial(&[3.0, 4.0]), vec4(3.0, 4.0, 0.0, 1.0));
    /// assert_eq!(Vec2f::from_partial(&[1.0, 2.0, 3.0]), vec2(1.0, 2.0));
    /// ```
    pub fn from_partial(components: &[T]) -> Self
    where
        T: Zero + One + Copy,
    {
        Self::from_fn(|i| match components.get(i) {
            Some(&c) => c,
            None if N == 4 && i == 3 => T::ONE,
            None => T::ZERO,
        })
    }

    /// Creates a vector from the first `N` elements of `components`.
    ///
    /// Returns [`Error::InvalidArgument`] if fewer than `N` elements are provided.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// assert_eq!(Vec2f::try_from_slice(&[1.0, 2.0, 3.0]), Ok(vec2(1.0, 2.0)));
    /// assert!(Vec3f::try_from_slice(&[1.0, 2.0]).is_err());
    /// ```
    pub fn try_from_slice(components: &[T]) -> Result<Self, Error>
    where
        T: Copy,
    {
        match components.get(..N) {
            Some(head) => Ok(Self::from_fn(|i| head[i])),
            None => Err(Error::InvalidArgument("too few vector components")),
        }
    }

    /// Computes component `i` as `f(i)`.
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self(array::from_fn(f))
    }

    /// Transforms every component with `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// assert_eq!(vec2(0.5, 2.0).map(|c| c * 4.0), vec2(2.0, 8.0));
    /// ```
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    /// Pairs up the components of `self` and `other`.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut rhs = other.0.into_iter();
        // Both iterators yield exactly `N` items.
        self.map(|l| (l, rhs.next().unwrap()))
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the dot product of the vector with itself.
    ///
    /// Cheaper than [`Vector::length`] when only comparing lengths.
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// assert_eq!(vec3(1, 2, 2).length2(), 9);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// ```
    /// # use vecdraw_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + crate::Sqrt,
    {
        self.length2().sqrt()
    }

    /// Scales the vector to unit length.
    ///
    /// Returns [`Error::Degenerate`] if the length is zero or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).try_normalize(), Ok(vec3(0.0, 0.0, 1.0)));
    /// assert!(Vec3f::ZERO.try_normalize().is_err());
    /// ```
    pub fn try_normalize(self) -> Result<Self, Error>
    where
        T: Float,
    {
        let len = check_length(self.length())?;
        Ok(self.map(|c| c / len))
    }

    /// Normalizes all components but the last, which is passed through unchanged.
    ///
    /// The last component does not contribute to the length either. This is useful for
    /// homogeneous coordinates, where `w` must not be rescaled.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// let v = vec4(0.0, 3.0, 4.0, 1.0).try_normalize_excluding_last().unwrap();
    /// assert_eq!(v, vec4(0.0, 0.6, 0.8, 1.0));
    /// ```
    pub fn try_normalize_excluding_last(self) -> Result<Self, Error>
    where
        T: Float,
    {
        let head = &self.0[..N.saturating_sub(1)];
        let len = check_length(head.iter().fold(T::ZERO, |acc, &x| acc + x * x).sqrt())?;
        Ok(Self::from_fn(|i| {
            if i + 1 < N {
                self[i] / len
            } else {
                self[i]
            }
        }))
    }

    /// Sums up the pairwise products of the components of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// assert_eq!(vec3(2, 0, -1).dot(vec3(3, 7, 4)), 2);
    /// assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |sum, i| sum + self[i] * other[i])
    }

    /// Linearly interpolates between `self` (at `s = 0`) and `other` (at `s = 1`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// assert_eq!(vec2(0.0, 10.0).mix(vec2(10.0, 20.0), 0.25), vec2(2.5, 12.5));
    /// ```
    pub fn mix(self, other: Self, s: T) -> Self
    where
        T: Number,
    {
        Self::from_fn(|i| (T::ONE - s) * self[i] + s * other[i])
    }
}

fn check_length<T: Float>(len: T) -> Result<T, Error> {
    if !len.is_finite() || len == T::ZERO {
        return Err(Error::Degenerate("vector has zero or non-finite length"));
    }
    Ok(len)
}

impl<T> Vector<T, 2> {
    /// Adds a third component, e.g. to lift a 2D position onto the `z = 0` plane.
    pub fn extend(self, z: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        vec3(x, y, z)
    }
}

impl<T> Vector<T, 3> {
    /// Drops the `z` component.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Adds a `w` component, turning a point or direction into homogeneous coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// let eye = vec3(0.0, 1.0, 5.0);
    /// assert_eq!(eye.extend(1.0), vec4(0.0, 1.0, 5.0, 1.0));
    /// ```
    pub fn extend(self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        vec4(x, y, z, w)
    }

    /// Returns a vector perpendicular to both `self` and `other`, following the right-hand rule.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Z.cross(Vec3f::Y), -Vec3f::X);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        vec3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T> Vector<T, 4> {
    /// Drops the `w` component.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self(components)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

/// Formats as `vecN(a, b, ..)`.
impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = format!("vec{N}");
        let mut tuple = f.debug_tuple(&name);
        for c in &self.0 {
            tuple.field(c);
        }
        tuple.finish()
    }
}

/// Formats as `(a, b, ..)`.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(c, f)?;
        }
        f.write_str(")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec4f::ORIGIN.w, 1.0);

        let mut c = vec4(0.25, 0.5, 0.75, 1.0);
        assert_eq!(c.r, 0.25);
        assert_eq!(c.b, 0.75);
        c.g = 0.0;
        assert_eq!(c.y, 0.0);
        assert_eq!(c[1], 0.0);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::ORIGIN), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::ORIGIN), "vec4(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn default_fill() {
        assert_eq!(Vec2f::from_partial(&[]), Vec2f::ZERO);
        assert_eq!(Vec3f::from_partial(&[7.0]), vec3(7.0, 0.0, 0.0));
        assert_eq!(Vec4f::from_partial(&[]), Vec4f::ORIGIN);
        assert_eq!(Vec4f::from_partial(&[1.0, 2.0, 3.0]), vec4(1.0, 2.0, 3.0, 1.0));
        assert_eq!(
            Vec4f::from_partial(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            vec4(1.0, 2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn strict_slice() {
        assert_eq!(
            Vec3f::try_from_slice(&[1.0]),
            Err(Error::InvalidArgument("too few vector components"))
        );
        assert_eq!(Vec3f::try_from_slice(&[1.0, 2.0, 3.0]), Ok(vec3(1.0, 2.0, 3.0)));
    }

    #[test]
    fn dot_is_squared_length() {
        let v = vec4(1.5f32, -2.0, 0.25, 3.0);
        assert_relative_eq!(v.dot(v), v.length() * v.length(), max_relative = 1e-6);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
    }

    #[test]
    fn normalize() {
        let n = vec3(1.0f32, -2.0, 2.0).try_normalize().unwrap();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(n, vec3(1.0 / 3.0, -2.0 / 3.0, 2.0 / 3.0), epsilon = 1e-6);

        assert!(Vec2f::ZERO.try_normalize().is_err());
        assert!(vec2(f32::INFINITY, 0.0).try_normalize().is_err());

        let h = vec4(2.0f32, 0.0, 0.0, 7.0).try_normalize_excluding_last().unwrap();
        assert_eq!(h, vec4(1.0, 0.0, 0.0, 7.0));
        assert!(vec4(0.0f32, 0.0, 0.0, 1.0)
            .try_normalize_excluding_last()
            .is_err());
    }

    #[test]
    fn mix() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(3.0, 2.0, 1.0);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), vec3(2.0, 2.0, 2.0));
    }

    #[test]
    fn cross_is_perpendicular() {
        let a = vec3(1.0f32, 2.0, 3.0);
        let b = vec3(-4.0f32, 0.5, 2.0);
        let c = a.cross(b);
        assert_relative_eq!(c.dot(a), 0.0, epsilon = 1e-5);
        assert_relative_eq!(c.dot(b), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn extend_truncate() {
        assert_eq!(vec2(1, 2).extend(3), vec3(1, 2, 3));
        assert_eq!(vec4(1, 2, 3, 4).truncate(), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).truncate(), vec2(1, 2));
    }
}
