// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON scene files: a camera, a projection, and an ordered model transform.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use clm_core::math::{self, Mat4, Vec3};
use serde::Deserialize;
use tracing::{debug, info};

/// One step of a model transform, composed in file order.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ModelStep {
    /// Translate by a world-space offset.
    Translate {
        /// Offset.
        by: Vec3,
    },
    /// Rotate about an axis; the axis is normalized before use and must not
    /// be zero.
    Rotate {
        /// Rotation axis.
        axis: Vec3,
        /// Angle in degrees.
        degrees: f32,
    },
    /// Non-uniform scale.
    Scale {
        /// Per-axis factors.
        by: Vec3,
    },
}

impl ModelStep {
    /// Composes this step onto `model`.
    ///
    /// Fails for a rotation about a zero-length axis, which would otherwise
    /// degrade into a uniform `cos(θ)` scale.
    pub fn apply(&self, model: &mut Mat4) -> Result<()> {
        match *self {
            Self::Translate { by } => math::translate(model, by),
            Self::Rotate { axis, degrees } => {
                if axis.length_squared() == 0.0 {
                    bail!("rotation axis must be non-zero (got {axis})");
                }
                let unit = axis.normalized();
                if unit != axis {
                    debug!(%axis, %unit, "normalized rotation axis");
                }
                math::rotate(model, math::deg_to_rad(degrees), unit);
            }
            Self::Scale { by } => math::scale(model, by),
        }
        Ok(())
    }
}

/// Parses `translate:x,y,z`, `rotate:x,y,z:degrees`, or `scale:x,y,z`.
impl FromStr for ModelStep {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        let op = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();
        match (op, args.as_slice()) {
            ("translate", [v]) => Ok(Self::Translate { by: parse_vec3(v)? }),
            ("scale", [v]) => Ok(Self::Scale { by: parse_vec3(v)? }),
            ("rotate", [axis, degrees]) => Ok(Self::Rotate {
                axis: parse_vec3(axis)?,
                degrees: degrees
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid rotation angle `{degrees}`"))?,
            }),
            _ => bail!(
                "invalid model step `{s}` (expected translate:x,y,z, rotate:x,y,z:degrees, or scale:x,y,z)"
            ),
        }
    }
}

/// Parses `x,y,z` into a vector.
pub fn parse_vec3(s: &str) -> Result<Vec3> {
    let parts = s
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<f32>()
                .with_context(|| format!("invalid component `{p}` in `{s}`"))
        })
        .collect::<Result<Vec<_>>>()?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(anyhow!("expected three comma-separated components, got `{s}`")),
    }
}

/// Camera placement for the view matrix.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CameraConfig {
    /// Eye position.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// World up hint.
    #[serde(default = "CameraConfig::default_up")]
    pub up: Vec3,
}

impl CameraConfig {
    const fn default_up() -> Vec3 {
        Vec3::UNIT_Y
    }
}

/// Perspective frustum parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ProjectionConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Width over height.
    pub aspect: f32,
    /// Near plane distance.
    pub near: f32,
    /// Far plane distance.
    pub far: f32,
}

impl ProjectionConfig {
    /// Builds the validated projection matrix.
    pub fn matrix(&self) -> Result<Mat4> {
        let proj = math::try_perspective(
            math::deg_to_rad(self.fov_degrees),
            self.aspect,
            self.near,
            self.far,
        )?;
        Ok(proj)
    }
}

/// A complete scene description.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneConfig {
    /// Camera placement.
    pub camera: CameraConfig,
    /// Projection frustum.
    pub projection: ProjectionConfig,
    /// Model transform steps, composed in order.
    #[serde(default)]
    pub model: Vec<ModelStep>,
}

/// Matrices derived from a [`SceneConfig`].
#[derive(Debug, Clone, Copy)]
pub struct SceneMatrices {
    /// Object-to-world.
    pub model: Mat4,
    /// World-to-camera.
    pub view: Mat4,
    /// Camera-to-clip.
    pub projection: Mat4,
    /// `projection × view × model`.
    pub mvp: Mat4,
}

impl SceneConfig {
    /// Reads and parses a scene file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read scene file {}", path.display()))?;
        let scene: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse scene file {}", path.display()))?;
        info!(
            path = %path.display(),
            steps = scene.model.len(),
            "loaded scene"
        );
        Ok(scene)
    }

    /// Evaluates model, view, projection, and their product.
    pub fn evaluate(&self) -> Result<SceneMatrices> {
        let model = compose(&self.model)?;
        let view = math::look_at(self.camera.position, self.camera.target, self.camera.up);
        let projection = self.projection.matrix()?;
        let mvp = projection * view * model;
        Ok(SceneMatrices {
            model,
            view,
            projection,
            mvp,
        })
    }
}

/// Composes `steps` onto an identity accumulator.
pub fn compose(steps: &[ModelStep]) -> Result<Mat4> {
    let mut model = Mat4::identity();
    for (index, step) in steps.iter().enumerate() {
        step.apply(&mut model)
            .with_context(|| format!("model step {index} is invalid"))?;
    }
    Ok(model)
}
