//! Math kernel: vectors, 4x4 matrices, inversion, transform and projection builders.
//!
//! # Conventions
//! - Matrices are row-major and multiply row vectors from the right:
//!   `p' = p · M`. Composition reads in application order, `world * view * projection`.
//! - `Matrix4x4` is exactly 16 row-major `f32`; that layout is uploaded to
//!   the GPU verbatim.
//!
//! # Invariants
//! - Every operation is a pure function of its arguments.
//! - Precondition violations come back as [`MathError`], never as a panic.
//! - Zero-length normalize and unchecked [`Matrix4x4::inverse`] keep their
//!   soft behavior (zero vector, non-finite entries); the `try_` variants
//!   report them instead.

pub mod error;
pub mod inverse;
pub mod matrix;
pub mod point;
pub mod projection;
pub mod reference;
pub mod transform;
pub mod types;
pub mod vector;

pub use error::MathError;
pub use inverse::SINGULARITY_EPSILON;
pub use matrix::Matrix4x4;
pub use point::{transform, transform_normal, transform_vector4};
pub use projection::{make_orthographic_matrix, make_perspective_fov_matrix, make_viewport_matrix};
pub use transform::{
    make_affine_matrix, make_rotate_matrix, make_rotate_x_matrix, make_rotate_y_matrix,
    make_rotate_z_matrix, make_scale_matrix, make_translate_matrix,
};
pub use types::{TransformParams, VertexData};
pub use vector::{Vector2, Vector3, Vector4};

pub fn crate_info() -> &'static str {
    "framemath-kernel v0.1.0"
}
