// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::ops::{Index, Mul, MulAssign};

use crate::math::{Vec3, Vec4};

/// Column‑major 4×4 matrix.
///
/// - Flat index `i` holds column `i / 4`, row `i % 4`, which is the layout
///   OpenGL and wgpu expect for uniform uploads.
/// - Composition post-multiplies: `a.multiply(&b)` yields `a × b`, so `b` is
///   applied to a vector first.
///
/// # Examples
/// ```
/// use clm_core::math::{Mat4, Vec3, Vec4};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = t.transform(&Vec4::from_point(Vec3::new(2.0, 4.0, -1.0)));
/// assert_eq!(p.to_array(), [7.0, 1.0, 1.0, 1.0]);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Returns the all-zero matrix.
    pub const fn zero() -> Self {
        Self { data: [0.0; 16] }
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column (flat
    /// indices 12, 13, 14).
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                tx, ty, tz, 1.0,    // col 3 (translation)
            ],
        }
    }

    /// Builds a non-uniform scale matrix `diag(sx, sy, sz, 1)`.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, 0.0, // col 0
                0.0, sy, 0.0, 0.0, // col 1
                0.0, 0.0, sz, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a rotation of `angle` radians about `axis` (Rodrigues' formula).
    ///
    /// `axis` must already be unit length; it is not normalized here, and a
    /// non-unit axis yields a matrix that also scales and shears.
    pub fn rotation_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (x, y, z) = (axis.x(), axis.y(), axis.z());
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        Self::new([
            // col 0
            c + x * x * t,
            y * x * t + z * s,
            z * x * t - y * s,
            0.0,
            // col 1
            x * y * t - z * s,
            c + y * y * t,
            z * y * t + x * s,
            0.0,
            // col 2
            x * z * t + y * s,
            y * z * t - x * s,
            c + z * z * t,
            0.0,
            // col 3
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Borrows the column-major storage, e.g. for a uniform upload.
    pub fn as_array(&self) -> &[f32; 16] {
        &self.data
    }

    /// Element at `row`, `col` (both `0..4`).
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Column `index` as a vector.
    pub fn column(&self, index: usize) -> Vec4 {
        let base = index * 4;
        Vec4::new(
            self.data[base],
            self.data[base + 1],
            self.data[base + 2],
            self.data[base + 3],
        )
    }

    /// Row `index` as a vector.
    pub fn row(&self, index: usize) -> Vec4 {
        Vec4::new(
            self.data[index],
            self.data[index + 4],
            self.data[index + 8],
            self.data[index + 12],
        )
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.get(i / 4, i % 4);
        }
        Self::new(out)
    }

    /// Multiplies the matrix with another matrix (`self × rhs`).
    ///
    /// For result index `i`, with `row = i % 4` and `col = (i / 4) * 4`:
    /// `out[i] = Σ_k self[row + 4k] * rhs[col + k]`.
    ///
    /// # Examples
    /// ```
    /// use clm_core::math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let a = &self.data;
        let b = &rhs.data;
        let mut out = [0.0; 16];
        for (i, slot) in out.iter_mut().enumerate() {
            let row = i % 4;
            let col = (i / 4) * 4;
            *slot = a[row] * b[col]
                + a[row + 4] * b[col + 1]
                + a[row + 8] * b[col + 2]
                + a[row + 12] * b[col + 3];
        }
        Self::new(out)
    }

    /// Overwrites `self` with `self × rhs`.
    ///
    /// The product is computed into a temporary first, so `self` is never
    /// read after a partial write.
    pub fn multiply_in_place(&mut self, rhs: &Self) {
        *self = self.multiply(rhs);
    }

    /// Returns `self × v`.
    pub fn transform(&self, v: &Vec4) -> Vec4 {
        let m = &self.data;
        let mut out = [0.0; 4];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = m[i] * v.component(0)
                + m[4 + i] * v.component(1)
                + m[8 + i] * v.component(2)
                + m[12 + i] * v.component(3);
        }
        Vec4::from(out)
    }

    /// Overwrites `v` with `self × v`.
    pub fn multiply_vector(&self, v: &mut Vec4) {
        *v = self.transform(v);
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(value: Mat4) -> Self {
        value.data
    }
}

impl Index<usize> for Mat4 {
    type Output = f32;
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<'a> Mul<&'a Mat4> for &Mat4 {
    type Output = Mat4;
    fn mul(self, rhs: &'a Mat4) -> Self::Output {
        self.multiply(rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply_in_place(&rhs);
    }
}

impl<'a> MulAssign<&'a Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &'a Mat4) {
        self.multiply_in_place(rhs);
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.transform(&rhs)
    }
}

/// Renders four rows of four values, each formatted with two decimals and
/// followed by a space, with a newline after every row.
impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            for col in 0..4 {
                write!(f, "{:.2} ", self.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
