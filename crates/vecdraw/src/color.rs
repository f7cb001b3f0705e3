use std::{fmt, ops::Index};

use vecdraw_linalg::{vec4, Vec4f};

/// An opaque 8-bit RGB color, as selected with the color sliders.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct Color(pub(crate) [u8; 3]);

impl Color {
    pub const BLACK: Self = Self([0, 0, 0]);
    pub const WHITE: Self = Self([255, 255, 255]);
    pub const RED: Self = Self([255, 0, 0]);
    pub const GREEN: Self = Self([0, 255, 0]);
    pub const BLUE: Self = Self([0, 0, 255]);

    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Picks a color with uniformly random channel values.
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self([rng.u8(..), rng.u8(..), rng.u8(..)])
    }

    #[inline]
    pub fn r(&self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub fn g(&self) -> u8 {
        self.0[1]
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.0[2]
    }

    /// Converts this [`Color`] to an RGBA vertex color with channel values in range 0.0 to 1.0.
    ///
    /// Alpha is always 1.0.
    pub fn to_rgba(self) -> Vec4f {
        vec4(
            f32::from(self.r()) / 255.0,
            f32::from(self.g()) / 255.0,
            f32::from(self.b()) / 255.0,
            1.0,
        )
    }
}

/// The color the drawing starts out with.
impl Default for Color {
    fn default() -> Self {
        Color::RED
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}

impl Index<usize> for Color {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}
