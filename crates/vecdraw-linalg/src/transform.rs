//! Model, view and projection transforms.
//!
//! All builders produce 4x4 matrices that operate on homogeneous column vectors (`M * v`). Angles
//! are given in degrees.

use crate::{traits::Float, vec4, Error, Matrix, Vec3};

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// # use vecdraw_linalg::*;
/// # use approx::assert_relative_eq;
/// assert_relative_eq!(radians(180.0f64), std::f64::consts::PI);
/// ```
#[inline]
pub fn radians<T: Float>(degrees: T) -> T {
    degrees.to_radians()
}

impl<T: Float> Matrix<T, 4, 4> {
    /// Creates a matrix that moves points by `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// let m = Mat4f::translation([1.0, 2.0, 3.0]);
    /// assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, 2.0, 3.0, 1.0));
    /// assert_eq!(m * vec4(1.0, 1.0, 1.0, 0.0), vec4(1.0, 1.0, 1.0, 0.0));
    /// ```
    pub fn translation(offset: impl Into<Vec3<T>>) -> Self {
        let offset = offset.into();
        let mut result = Self::IDENTITY;
        for row in 0..3 {
            result[(row, 3)] = offset[row];
        }
        result
    }

    /// Creates a matrix that scales each axis by the corresponding component of `factors`.
    pub fn scaling(factors: impl Into<Vec3<T>>) -> Self {
        Self::from_diagonal(factors.into().extend(T::ONE))
    }

    /// Creates a matrix rotating by `degrees` around `axis`, using Rodrigues' formula.
    ///
    /// The axis does not need to be normalized, but it must have a non-zero finite length,
    /// otherwise [`Error::Degenerate`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// # use approx::assert_relative_eq;
    /// let m = Mat4f::rotation(90.0, [0.0, 0.0, 5.0]).unwrap();
    /// assert_relative_eq!(m, Mat4f::rotation_z(90.0));
    /// assert!(Mat4f::rotation(90.0, Vec3f::ZERO).is_err());
    /// ```
    pub fn rotation(degrees: T, axis: impl Into<Vec3<T>>) -> Result<Self, Error> {
        let [x, y, z] = axis.into().try_normalize()?.into_array();
        let (s, c) = sin_cos(degrees);
        let omc = T::ONE - c;
        let o = T::ZERO;

        #[rustfmt::skip]
        let m = Self::from_rows([
            [x * x * omc + c,     x * y * omc - z * s, x * z * omc + y * s, o],
            [x * y * omc + z * s, y * y * omc + c,     y * z * omc - x * s, o],
            [x * z * omc - y * s, y * z * omc + x * s, z * z * omc + c,     o],
            [o,                   o,                   o,                   T::ONE],
        ]);
        Ok(m)
    }

    /// Creates a matrix rotating by `degrees` around the X axis.
    pub fn rotation_x(degrees: T) -> Self {
        let (s, c) = sin_cos(degrees);
        let (o, i) = (T::ZERO, T::ONE);
        #[rustfmt::skip]
        let m = Self::from_rows([
            [i, o,  o, o],
            [o, c, -s, o],
            [o, s,  c, o],
            [o, o,  o, i],
        ]);
        m
    }

    /// Creates a matrix rotating by `degrees` around the Y axis.
    pub fn rotation_y(degrees: T) -> Self {
        let (s, c) = sin_cos(degrees);
        let (o, i) = (T::ZERO, T::ONE);
        #[rustfmt::skip]
        let m = Self::from_rows([
            [ c, o, s, o],
            [ o, i, o, o],
            [-s, o, c, o],
            [ o, o, o, i],
        ]);
        m
    }

    /// Creates a matrix rotating by `degrees` around the Z axis.
    pub fn rotation_z(degrees: T) -> Self {
        let (s, c) = sin_cos(degrees);
        let (o, i) = (T::ZERO, T::ONE);
        #[rustfmt::skip]
        let m = Self::from_rows([
            [c, -s, o, o],
            [s,  c, o, o],
            [o,  o, i, o],
            [o,  o, o, i],
        ]);
        m
    }

    /// Creates a view matrix for a camera at `eye` looking at `at`, with `up` pointing roughly
    /// upwards.
    ///
    /// If `eye` and `at` coincide there is no view direction, and the identity matrix is returned.
    /// If `up` is parallel to the view direction, [`Error::Degenerate`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// let eye = vec3(1.0, 2.0, 3.0);
    /// assert_eq!(Mat4f::look_at(eye, eye, Vec3f::Y), Ok(Mat4f::IDENTITY));
    /// assert!(Mat4f::look_at(Vec3f::ZERO, Vec3f::Y, Vec3f::Y).is_err());
    /// ```
    pub fn look_at(eye: Vec3<T>, at: Vec3<T>, up: Vec3<T>) -> Result<Self, Error> {
        if eye == at {
            return Ok(Self::IDENTITY);
        }

        let forward = (at - eye).try_normalize()?;
        let right = forward.cross(up).try_normalize()?;
        let true_up = right.cross(forward).try_normalize()?;
        let back = -forward;

        Ok(Self::from_rows([
            right.extend(-right.dot(eye)),
            true_up.extend(-true_up.dot(eye)),
            back.extend(-back.dot(eye)),
            vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
        ]))
    }

    /// Creates an orthographic projection mapping the given box onto the clip volume.
    ///
    /// Returns [`Error::Degenerate`] if any pair of opposing planes coincides.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// let m = Mat4f::ortho(-1.0, 1.0, -1.0, 1.0, 1.0, -1.0).unwrap();
    /// assert_eq!(m, Mat4f::IDENTITY);
    /// assert!(Mat4f::ortho(0.0, 0.0, -1.0, 1.0, 0.1, 10.0).is_err());
    /// ```
    pub fn ortho(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Result<Self, Error> {
        if left == right {
            return Err(Error::Degenerate("left and right clip planes are equal"));
        }
        if bottom == top {
            return Err(Error::Degenerate("bottom and top clip planes are equal"));
        }
        if near == far {
            return Err(Error::Degenerate("near and far clip planes are equal"));
        }

        let two = T::ONE + T::ONE;
        let (w, h, d) = (right - left, top - bottom, far - near);
        let o = T::ZERO;

        #[rustfmt::skip]
        let m = Self::from_rows([
            [two / w, o,       o,        -(left + right) / w],
            [o,       two / h, o,        -(top + bottom) / h],
            [o,       o,       -two / d, -(near + far) / d],
            [o,       o,       o,        T::ONE],
        ]);
        Ok(m)
    }

    /// Creates a perspective projection with the given vertical field of view (in degrees),
    /// aspect ratio (width / height) and clip plane distances.
    ///
    /// Returns [`Error::Degenerate`] if `near` equals `far`, if `aspect` is zero, or if the field
    /// of view does not produce a finite focal length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw_linalg::*;
    /// # use approx::assert_relative_eq;
    /// let m = Mat4f::perspective(90.0, 1.0, 1.0, 3.0).unwrap();
    /// let near = m * vec4(0.0, 0.0, -1.0, 1.0);
    /// let far = m * vec4(0.0, 0.0, -3.0, 1.0);
    /// assert_relative_eq!(near.z / near.w, -1.0, epsilon = 1e-6);
    /// assert_relative_eq!(far.z / far.w, 1.0, epsilon = 1e-6);
    /// ```
    pub fn perspective(fovy: T, aspect: T, near: T, far: T) -> Result<Self, Error> {
        if near == far {
            return Err(Error::Degenerate("near and far clip planes are equal"));
        }
        if aspect == T::ZERO {
            return Err(Error::Degenerate("aspect ratio is zero"));
        }

        let two = T::ONE + T::ONE;
        let f = T::ONE / (radians(fovy) / two).tan();
        if !f.is_finite() {
            return Err(Error::Degenerate("field of view produces no finite focal length"));
        }

        let d = far - near;
        let o = T::ZERO;

        #[rustfmt::skip]
        let m = Self::from_rows([
            [f / aspect, o, o,                 o],
            [o,          f, o,                 o],
            [o,          o, -(far + near) / d, -two * near * far / d],
            [o,          o, -T::ONE,           o],
        ]);
        Ok(m)
    }
}

fn sin_cos<T: Float>(degrees: T) -> (T, T) {
    let rad = radians(degrees);
    (rad.sin(), rad.cos())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::*;

    #[test]
    fn translation_and_scaling() {
        let t = Mat4f::translation(vec3(1.0, -2.0, 0.5));
        #[rustfmt::skip]
        assert_eq!(t, Matrix::from_rows([
            [1.0, 0.0, 0.0,  1.0],
            [0.0, 1.0, 0.0, -2.0],
            [0.0, 0.0, 1.0,  0.5],
            [0.0, 0.0, 0.0,  1.0],
        ]));

        let s = Mat4f::scaling([2.0, 3.0, 4.0]);
        assert_eq!(s.into_diagonal(), vec4(2.0, 3.0, 4.0, 1.0));
        assert_eq!(s * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));
        assert_eq!(s.determinant(), 24.0);
    }

    #[test]
    fn axis_rotations() {
        let v = vec4(1.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(Mat4f::rotation_z(90.0) * v, vec4(0.0, 1.0, 0.0, 1.0), epsilon = 1e-6);
        assert_relative_eq!(Mat4f::rotation_y(90.0) * v, vec4(0.0, 0.0, -1.0, 1.0), epsilon = 1e-6);

        let v = vec4(0.0, 1.0, 0.0, 1.0);
        assert_relative_eq!(Mat4f::rotation_x(90.0) * v, vec4(0.0, 0.0, 1.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn rodrigues_matches_axis_rotations() {
        for angle in [-135.0, -30.0, 0.0, 45.0, 200.0] {
            assert_relative_eq!(
                Mat4f::rotation(angle, Vec3f::X).unwrap(),
                Mat4f::rotation_x(angle),
                epsilon = 1e-6
            );
            assert_relative_eq!(
                Mat4f::rotation(angle, Vec3f::Y).unwrap(),
                Mat4f::rotation_y(angle),
                epsilon = 1e-6
            );
            assert_relative_eq!(
                Mat4f::rotation(angle, [0.0, 0.0, 2.0]).unwrap(),
                Mat4f::rotation_z(angle),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn rotation_is_orthonormal() {
        let r = Mat4f::rotation(37.0, [1.0, 2.0, -0.5]).unwrap();
        assert_relative_eq!(r * r.transpose(), Mat4f::IDENTITY, epsilon = 1e-5);
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-5);
        assert_eq!(r.row(3), vec4(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn look_at_basis() {
        let eye = vec3(0.0f32, 0.0, 5.0);
        let view = Mat4f::look_at(eye, Vec3f::ZERO, Vec3f::Y).unwrap();
        #[rustfmt::skip]
        assert_relative_eq!(view, Matrix::from_rows([
            [1.0, 0.0, 0.0,  0.0],
            [0.0, 1.0, 0.0,  0.0],
            [0.0, 0.0, 1.0, -5.0],
            [0.0, 0.0, 0.0,  1.0],
        ]));

        // The camera position maps to the origin.
        assert_relative_eq!(view * eye.extend(1.0), vec4(0.0, 0.0, 0.0, 1.0));

        let eye = vec3(3.0, -1.0, 2.0);
        assert_eq!(Mat4f::look_at(eye, eye, vec3(0.0, 0.0, 0.0)), Ok(Mat4f::IDENTITY));
    }

    #[test]
    fn ortho_maps_box_to_clip_volume() {
        let m = Mat4f::ortho(0.0, 4.0, 0.0, 2.0, 1.0, 11.0).unwrap();
        assert_relative_eq!(m * vec4(0.0, 0.0, -1.0, 1.0), vec4(-1.0, -1.0, -1.0, 1.0), epsilon = 1e-6);
        assert_relative_eq!(m * vec4(4.0, 2.0, -11.0, 1.0), vec4(1.0, 1.0, 1.0, 1.0), epsilon = 1e-6);

        assert!(matches!(
            Mat4f::ortho(0.0, 1.0, 3.0, 3.0, 0.0, 1.0),
            Err(Error::Degenerate(_))
        ));
        assert!(Mat4f::ortho(0.0, 1.0, 0.0, 1.0, 2.0, 2.0).is_err());
    }

    #[test]
    fn perspective_degenerate() {
        assert!(Mat4f::perspective(60.0, 1.0, 1.0, 1.0).is_err());
        assert!(Mat4f::perspective(60.0, 0.0, 0.1, 10.0).is_err());
        assert!(Mat4f::perspective(0.0, 1.0, 0.1, 10.0).is_err());

        let m = Mat4f::perspective(90.0, 2.0, 0.1, 10.0).unwrap();
        assert_relative_eq!(m[(1, 1)], 1.0, epsilon = 1e-6);
        assert_relative_eq!(m[(0, 0)], 0.5, epsilon = 1e-6);
        assert_eq!(m[(3, 2)], -1.0);
        assert_eq!(m[(3, 3)], 0.0);
    }
}
