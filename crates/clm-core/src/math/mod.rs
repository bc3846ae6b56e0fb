// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Vector and matrix algebra plus the standard graphics transform builders.
//!
//! Matrices are stored column-major (flat index `i` is column `i / 4`, row
//! `i % 4`) so they upload to OpenGL/wgpu uniforms without a transpose. New
//! transforms are post-multiplied onto an accumulator, so the most recently
//! composed transform is the first one applied to a vector.

use std::f32::consts::TAU;

mod camera;
mod mat4;
mod transform;
mod vec2;
mod vec3;
mod vec4;

pub use camera::{camera_basis, look_at, perspective, try_perspective, CameraBasis};
pub use mat4::Mat4;
pub use transform::{rotate, scale, translate};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}
