// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! clm-core: linear-algebra core for real-time 3D graphics.
//!
//! Provides fixed-size vectors ([`math::Vec2`], [`math::Vec3`],
//! [`math::Vec4`]), a column-major [`math::Mat4`], and the transform builders a
//! renderer needs to place objects, move a camera, and project the scene:
//! [`math::translate`], [`math::rotate`], [`math::scale`],
//! [`math::perspective`], and [`math::look_at`].
//!
//! Every numeric routine is total over IEEE-754 floats. Ill-conditioned input
//! (a zero-length axis, `near == far`, `up` parallel to the view direction)
//! produces degenerate output instead of an error. Callers who want their
//! projection parameters checked use [`math::try_perspective`], which reports a
//! [`ProjectionError`].
// The Pod/Zeroable derives expand to `unsafe impl`.
#![cfg_attr(feature = "bytemuck", allow(unsafe_code))]

pub mod math;

mod error;

pub use error::ProjectionError;
