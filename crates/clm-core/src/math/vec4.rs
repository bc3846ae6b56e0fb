// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use crate::math::Vec3;

/// Homogeneous 4D vector `(x, y, z, w)` consumed by
/// [`crate::math::Mat4::multiply_vector`].
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec4 {
    data: [f32; 4],
}

impl Vec4 {
    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Lifts a point into homogeneous space (`w = 1`).
    pub fn from_point(p: Vec3) -> Self {
        Self::new(p.x(), p.y(), p.z(), 1.0)
    }

    /// Lifts a direction into homogeneous space (`w = 0`).
    pub fn from_direction(d: Vec3) -> Self {
        Self::new(d.x(), d.y(), d.z(), 0.0)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    pub(crate) fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// W component.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// Drops `w`.
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(value: Vec4) -> Self {
        value.data
    }
}

/// Renders `(x, y, z, w)` with two decimals.
impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}, {:.2}, {:.2})",
            self.data[0], self.data[1], self.data[2], self.data[3]
        )
    }
}
