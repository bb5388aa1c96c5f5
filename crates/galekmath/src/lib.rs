//! Fixed-size linear algebra for real-time rendering and game engines.
//!
//! # Overview
//!
//! This library provides the small set of math types a renderer passes around by value:
//!
//! - [`Vec2`], [`Vec3`] and [`Vec4`] (all aliases of [`Vector`]), plus [`Color`].
//! - [`Mat3`] and [`Mat4`] (aliases of [`Matrix`]), together with the usual transform factories
//!   (translation, rotation, scaling, view and projection matrices).
//! - [`Quat`] for rotations.
//! - [`BBox`] and [`BSphere`] bounding volumes.
//! - Ray and triangle queries in [`geometry`].
//!
//! # Goals & Non-Goals
//!
//! - Only 2, 3 and 4 dimensional objects are supported. Dimensions are expressed as const
//!   generics where the implementation is dimension-independent.
//! - There is a single, column-major, unpadded data layout for matrices. Matrices and vectors
//!   implement [`bytemuck::Pod`], so they can be uploaded to the GPU directly.
//! - The scalar type is [`Real`], which is [`f32`] unless the `double-precision` feature is
//!   enabled.
//! - Hot paths are not checked. Normalizing a zero vector or inverting a singular matrix yields
//!   `NaN` or infinities rather than an error. Where a checked alternative makes sense, it is
//!   provided separately (eg. [`Mat4::try_inverse`]).
//!
//! # Conventions
//!
//! - Angles passed to rotation and projection factories are in *degrees*.
//! - Matrices multiply column vectors: `m * v`.
//! - Quaternion products compose like matrices: `a * b` applies `b` first.

pub mod approx;
mod bounds;
mod color;
pub mod geometry;
mod matrix;
mod quat;
pub mod scalar;
mod vector;

pub use bounds::*;
pub use color::*;
pub use matrix::*;
pub use quat::*;
pub use scalar::Real;
pub use vector::*;
