// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub};

/// 2D vector of `f32` components addressed as `(x, y)`.
///
/// Used for screen-space and texture-space quantities. Any float pair is a
/// valid value, including the zero vector.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1]
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.data[0] + other.data[0], self.data[1] + other.data[1])
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.data[0] - other.data[0], self.data[1] - other.data[1])
    }

    /// Returns a copy scaled by `scalar`.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.data[0] * scalar, self.data[1] * scalar)
    }

    /// Scales every component by `scalar` in place.
    pub fn scale_in_place(&mut self, scalar: f32) {
        for c in &mut self.data {
            *c *= scalar;
        }
    }

    /// Euclidean length.
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        value.data
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec2::add(&self, &rhs)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec2::add(self, &rhs);
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec2::sub(&self, &rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.scale_in_place(rhs);
    }
}

/// Renders `(x, y)` with two decimals.
impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.data[0], self.data[1])
    }
}
