/// Precondition violations reported by the kernel.
///
/// The kernel never aborts. Each operation with a precondition returns one of
/// these, and the caller decides whether to propagate or bail.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MathError {
    #[error("viewport depth range is inverted: min_depth {min_depth} > max_depth {max_depth}")]
    InvertedDepthRange { min_depth: f32, max_depth: f32 },
    #[error("homogeneous w is zero; the point cannot be projected")]
    ZeroW,
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix { determinant: f32 },
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,
}
