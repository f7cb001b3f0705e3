//! Named field access for small vectors.
//!
//! `Vector<T, N>` derefs to a `#[repr(C)]` struct with one named field per element, which in turn
//! derefs to a struct with the color channel names. Both have the same layout as `[T; N]`.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (),
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (),
}

#[repr(C)]
pub struct RG<T> {
    pub r: T,
    pub g: T,
    _priv: (),
}

#[repr(C)]
pub struct RGB<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    _priv: (),
}

#[repr(C)]
pub struct RGBA<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
    _priv: (),
}

macro_rules! view {
    ($from:ty => $to:ident) => {
        impl<T> Deref for $from {
            type Target = $to<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                unsafe { mem::transmute(self) }
            }
        }

        impl<T> DerefMut for $from {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                unsafe { mem::transmute(self) }
            }
        }
    };
}

view!(Vector<T, 2> => XY);
view!(Vector<T, 3> => XYZ);
view!(Vector<T, 4> => XYZW);
view!(XY<T> => RG);
view!(XYZ<T> => RGB);
view!(XYZW<T> => RGBA);
