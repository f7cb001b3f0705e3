//! A small linear algebra library for vecdraw.
//!
//! # Overview
//!
//! This library prepares data for a graphics pipeline: it builds and combines 2-, 3- and
//! 4-dimensional vectors and square matrices, generates the usual camera and projection transforms,
//! and flattens everything into tightly packed `f32` buffers that can be uploaded as-is.
//!
//! There are two ways of working with vectors and matrices:
//!
//! - The statically sized [`Vector`] and [`Matrix`] types. Dimensions are const generic
//!   parameters, so mismatched operands are rejected at compile time. This is what the rest of
//!   vecdraw uses.
//! - The tagged [`Value`] type, which holds any supported vector or matrix of `f32`s and checks
//!   shapes at runtime. Every operation returns a [`Result`] with an [`Error`] describing the
//!   rejected input. It exists for callers that only learn the shape of their data at runtime.
//!
//! # Layout
//!
//! Matrices are stored column-major and without padding, which is the layout graphics APIs expect.
//! [`Flatten`] therefore emits matrices column by column, and vectors component by component.
//! [`Vector`] and [`Matrix`] are `#[repr(transparent)]` and implement [`bytemuck::Pod`] for `Pod`
//! element types, so `std::mem::size_of::<Vec2f>()` is the byte stride of a 2D vertex.
//!
//! # Approximate comparison
//!
//! [`Vector`] and [`Matrix`] implement the [`approx`] crate's comparison traits, so
//! `approx::assert_relative_eq!` and friends work on them directly.

mod error;
mod flatten;
mod matrix;
mod traits;
mod transform;
mod value;
mod vector;

pub use error::*;
pub use flatten::*;
pub use matrix::*;
pub use traits::*;
pub use transform::radians;
pub use value::*;
pub use vector::*;
