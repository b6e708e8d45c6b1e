//! Independent reference routines used to validate the closed-form inverse.
//!
//! Not for per-frame use: Gauss-Jordan runs in `f64` with partial pivoting and
//! branches on the data.

use crate::matrix::Matrix4x4;

/// Pivots smaller than this are treated as zero by [`gauss_jordan_inverse`].
const PIVOT_EPSILON: f64 = 1e-12;

/// Splitmix64 generator. Deterministic across platforms, so failing draws can
/// be reproduced from the seed alone.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform sample in `[lo, hi)`.
    pub fn next_f32(&mut self, lo: f32, hi: f32) -> f32 {
        // Top 24 bits fill the f32 mantissa exactly.
        let unit = (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32;
        lo + unit * (hi - lo)
    }

    /// Matrix with every entry drawn from `[lo, hi)`.
    pub fn next_matrix(&mut self, lo: f32, hi: f32) -> Matrix4x4 {
        let mut m = Matrix4x4::ZERO;
        for v in m.m.iter_mut().flatten() {
            *v = self.next_f32(lo, hi);
        }
        m
    }
}

/// Inverse by Gauss-Jordan elimination with partial pivoting, in `f64`.
///
/// Returns `None` when a pivot vanishes.
pub fn gauss_jordan_inverse(m: &Matrix4x4) -> Option<Matrix4x4> {
    let mut a = [[0.0_f64; 8]; 4];
    for (i, row) in a.iter_mut().enumerate() {
        for j in 0..4 {
            row[j] = f64::from(m.m[i][j]);
        }
        row[4 + i] = 1.0;
    }

    for col in 0..4 {
        let pivot_row = (col..4).max_by(|&r, &s| a[r][col].abs().total_cmp(&a[s][col].abs()))?;
        if a[pivot_row][col].abs() < PIVOT_EPSILON {
            return None;
        }
        a.swap(col, pivot_row);

        let pivot = a[col][col];
        for v in a[col].iter_mut() {
            *v /= pivot;
        }

        let pivot_values = a[col];
        for (r, row) in a.iter_mut().enumerate() {
            if r == col {
                continue;
            }
            let factor = row[col];
            for (v, p) in row.iter_mut().zip(pivot_values.iter()) {
                *v -= factor * p;
            }
        }
    }

    let mut result = Matrix4x4::ZERO;
    for i in 0..4 {
        for j in 0..4 {
            result.m[i][j] = a[i][4 + j] as f32;
        }
    }
    Some(result)
}
