// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Projection and view matrices.
//!
//! Both follow OpenGL conventions: a right-handed view space looking down
//! `-Z`, and a projection that maps the frustum into clip space with
//! `w_clip = -z_view`.

use core::f32::consts::PI;

use tracing::debug;

use crate::math::{Mat4, Vec3};
use crate::ProjectionError;

/// Builds a symmetric perspective projection from a vertical field of view.
///
/// `fov` is in radians. The frustum extents are derived as
/// `top = near * tan(fov / 2)` and `right = top * aspect`, mirrored for
/// bottom/left.
///
/// Nothing is validated: `near == far`, a non-positive `near`, or a zero
/// aspect produce NaN/∞ entries or an otherwise degenerate matrix. Use
/// [`try_perspective`] to reject those inputs instead.
///
/// # Examples
/// ```
/// use core::f32::consts::FRAC_PI_2;
/// use clm_core::math::perspective;
/// let proj = perspective(FRAC_PI_2, 1.0, 0.1, 100.0);
/// assert_eq!(proj[11], -1.0);
/// assert_eq!(proj[0], proj[5]);
/// ```
pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let top = near * (fov * 0.5).tan();
    let bottom = -top;
    let right = top * aspect;
    let left = -right;

    let mut m = [0.0; 16];
    m[0] = (2.0 * near) / (right - left);
    m[5] = (2.0 * near) / (top - bottom);
    m[10] = -(far + near) / (far - near);
    m[11] = -1.0;
    m[12] = (-near * (right + left)) / (right - left);
    m[13] = (-near * (top + bottom)) / (top - bottom);
    m[14] = (2.0 * far * near) / (near - far);
    Mat4::new(m)
}

/// Validating form of [`perspective`].
///
/// Accepts finite parameters with `0 < fov < π`, `aspect > 0`, `near > 0`,
/// and `far > near`; on success the result is bit-identical to
/// [`perspective`].
pub fn try_perspective(
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
) -> Result<Mat4, ProjectionError> {
    check_frustum(fov, aspect, near, far).inspect_err(|err| {
        debug!(fov, aspect, near, far, %err, "rejected perspective parameters");
    })?;
    Ok(perspective(fov, aspect, near, far))
}

fn check_frustum(fov: f32, aspect: f32, near: f32, far: f32) -> Result<(), ProjectionError> {
    for (name, value) in [("fov", fov), ("aspect", aspect), ("near", near), ("far", far)] {
        if !value.is_finite() {
            return Err(ProjectionError::NonFinite { name, value });
        }
    }
    if fov <= 0.0 || fov >= PI {
        return Err(ProjectionError::FieldOfView(fov));
    }
    if aspect <= 0.0 {
        return Err(ProjectionError::AspectRatio(aspect));
    }
    if near <= 0.0 {
        return Err(ProjectionError::NearPlane(near));
    }
    if far <= near {
        return Err(ProjectionError::FarPlane { near, far });
    }
    Ok(())
}

/// Orthogonal camera axes derived by [`look_at`], expressed in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraBasis {
    /// Camera +X.
    pub right: Vec3,
    /// Camera +Y. Orthogonal to `right` and `dir` but not renormalized.
    pub up: Vec3,
    /// Camera +Z, pointing from the target back towards the eye.
    pub dir: Vec3,
}

/// Derives the camera basis for an eye at `position` looking at `target`.
///
/// When `position == target` the view direction is zero; when `up` is
/// parallel to the view direction, `right` is zero. Zero vectors stay zero
/// through normalization, so the basis (and any view matrix built from it) is
/// degenerate in both cases.
pub fn camera_basis(position: Vec3, target: Vec3, up: Vec3) -> CameraBasis {
    let dir = position.sub(&target).normalized();
    let right = up.cross(&dir).normalized();
    let cam_up = dir.cross(&right);
    if dir.length_squared() == 0.0 {
        debug!(
            position = %position,
            target = %target,
            "look-at basis is degenerate: eye coincides with the target"
        );
    } else if right.length_squared() == 0.0 {
        debug!(
            position = %position,
            target = %target,
            up = %up,
            "look-at basis is degenerate: up is parallel to the view direction"
        );
    }
    CameraBasis {
        right,
        up: cam_up,
        dir,
    }
}

/// Builds a right-handed view matrix for an eye at `position` looking at
/// `target`.
///
/// The rows of the upper-left 3×3 hold the camera basis (the inverse of the
/// camera's world orientation), followed by a translation by `-position`.
/// None of the inputs are modified.
///
/// # Examples
/// ```
/// use clm_core::math::{look_at, Vec3, Vec4};
/// let view = look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::UNIT_Y);
/// let origin = view.transform(&Vec4::new(0.0, 0.0, 0.0, 1.0));
/// assert_eq!(origin.to_array(), [0.0, 0.0, -5.0, 1.0]);
/// ```
pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let CameraBasis { right, up, dir } = camera_basis(position, target, up);

    let mut view = Mat4::new([
        right.x(), up.x(), dir.x(), 0.0, // col 0
        right.y(), up.y(), dir.y(), 0.0, // col 1
        right.z(), up.z(), dir.z(), 0.0, // col 2
        0.0, 0.0, 0.0, 1.0, // col 3
    ]);
    view.multiply_in_place(&Mat4::translation(
        -position.x(),
        -position.y(),
        -position.z(),
    ));
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    #[test]
    fn check_frustum_reports_first_failure() {
        assert_eq!(
            check_frustum(FRAC_PI_2, -1.0, -1.0, -2.0),
            Err(ProjectionError::AspectRatio(-1.0))
        );
        assert!(matches!(
            check_frustum(FRAC_PI_2, 1.0, f32::NAN, f32::INFINITY),
            Err(ProjectionError::NonFinite { name: "near", .. })
        ));
    }

    #[test]
    fn check_frustum_accepts_typical_camera() {
        assert_eq!(check_frustum(FRAC_PI_2, 16.0 / 9.0, 0.1, 100.0), Ok(()));
    }
}
