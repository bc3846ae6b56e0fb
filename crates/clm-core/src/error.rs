// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Reasons [`crate::math::try_perspective`] rejects a frustum.
///
/// The unchecked [`crate::math::perspective`] accepts all of these and returns
/// a degenerate matrix instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProjectionError {
    /// One of the four parameters was NaN or infinite.
    #[error("projection parameter `{name}` must be finite (got {value})")]
    NonFinite {
        /// Parameter name (`fov`, `aspect`, `near`, or `far`).
        name: &'static str,
        /// Offending value.
        value: f32,
    },
    /// Vertical field of view outside the open interval `(0, π)` radians.
    #[error("vertical field of view must lie in (0, π) radians (got {0})")]
    FieldOfView(f32),
    /// Aspect ratio was zero or negative.
    #[error("aspect ratio must be positive (got {0})")]
    AspectRatio(f32),
    /// Near plane at or behind the eye.
    #[error("near plane must be positive (got {0})")]
    NearPlane(f32),
    /// Far plane not strictly beyond the near plane.
    #[error("far plane ({far}) must lie beyond the near plane ({near})")]
    FarPlane {
        /// Near plane distance.
        near: f32,
        /// Far plane distance.
        far: f32,
    },
}
