use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// 4x4 matrix of `f32`, row-major, used with the row-vector convention.
///
/// A point is transformed as `p · M`, so composed transforms read left to
/// right in application order: `world * view * projection`.
///
/// # Layout
/// Exactly 16 consecutive `f32` in row-major order (64 bytes, no padding).
/// Shader code reads constant buffers positionally, so this layout is part of
/// the public contract and must not change.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Matrix4x4 {
    pub m: [[f32; 4]; 4],
}

const _: () = assert!(size_of::<Matrix4x4>() == 16 * size_of::<f32>());
const _: () = assert!(align_of::<Matrix4x4>() == align_of::<f32>());

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4x4 {
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Build from rows, `m[row][col]`.
    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    /// Identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[j][i];
            }
        }
        result
    }

    /// Row `i`. Panics if `i >= 4`.
    pub fn row(&self, i: usize) -> [f32; 4] {
        self.m[i]
    }

    /// Column `j`. Panics if `j >= 4`.
    pub fn col(&self, j: usize) -> [f32; 4] {
        [self.m[0][j], self.m[1][j], self.m[2][j], self.m[3][j]]
    }

    /// The 16 scalars in row-major order, as uploaded to the GPU.
    pub fn to_array(&self) -> [f32; 16] {
        bytemuck::cast(self.m)
    }

    /// True when no entry is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|v| v.is_finite())
    }

    /// Element-wise comparison within `eps`.
    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// Largest absolute element-wise difference.
    pub fn max_abs_diff(&self, other: &Self) -> f32 {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f32::max)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = f(self.m[i][j], other.m[i][j]);
            }
        }
        result
    }
}

impl Add for Matrix4x4 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl Sub for Matrix4x4 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

/// Standard matrix product. Not commutative: `a * b` applies `a` first.
impl Mul for Matrix4x4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][0] * rhs.m[0][j]
                    + self.m[i][1] * rhs.m[1][j]
                    + self.m[i][2] * rhs.m[2][j]
                    + self.m[i][3] * rhs.m[3][j];
            }
        }
        result
    }
}

impl From<[[f32; 4]; 4]> for Matrix4x4 {
    fn from(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }
}

/// glam stores columns where we store rows, so the bytes carry over unchanged
/// and the resulting `Mat4` is the column-vector form of the same transform.
impl From<Matrix4x4> for glam::Mat4 {
    fn from(m: Matrix4x4) -> Self {
        glam::Mat4::from_cols_array_2d(&m.m)
    }
}

impl From<glam::Mat4> for Matrix4x4 {
    fn from(m: glam::Mat4) -> Self {
        Self {
            m: m.to_cols_array_2d(),
        }
    }
}
