// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Model-transform composition.
//!
//! Each builder post-multiplies a local matrix onto the caller's accumulator,
//! so the transform composed last acts first on the object's vertices:
//!
//! ```
//! use clm_core::math::{self, Mat4, Vec3, Vec4};
//! let mut model = Mat4::identity();
//! math::translate(&mut model, Vec3::new(10.0, 0.0, 0.0));
//! math::scale(&mut model, Vec3::new(2.0, 2.0, 2.0));
//! // Scaled first, then translated.
//! let p = model.transform(&Vec4::from_point(Vec3::new(1.0, 0.0, 0.0)));
//! assert_eq!(p.to_array(), [12.0, 0.0, 0.0, 1.0]);
//! ```

use crate::math::{Mat4, Vec3};

/// Composes a translation by `t` onto `transform`.
pub fn translate(transform: &mut Mat4, t: Vec3) {
    transform.multiply_in_place(&Mat4::translation(t.x(), t.y(), t.z()));
}

/// Composes a rotation of `radians` about the unit-length `axis` onto
/// `transform`.
///
/// The axis is not normalized; see [`Mat4::rotation_axis_angle`].
pub fn rotate(transform: &mut Mat4, radians: f32, axis: Vec3) {
    transform.multiply_in_place(&Mat4::rotation_axis_angle(axis, radians));
}

/// Composes a non-uniform scale by `s` onto `transform`.
pub fn scale(transform: &mut Mat4, s: Vec3) {
    transform.multiply_in_place(&Mat4::scale(s.x(), s.y(), s.z()));
}
