use crate::matrix::Matrix4x4;
use crate::vector::Vector3;

/// Translation by `t`, stored in the last row (row-vector convention).
pub fn make_translate_matrix(t: Vector3) -> Matrix4x4 {
    Matrix4x4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [t.x, t.y, t.z, 1.0],
    ])
}

/// Non-uniform scale along the principal axes.
pub fn make_scale_matrix(s: Vector3) -> Matrix4x4 {
    Matrix4x4::from_rows([
        [s.x, 0.0, 0.0, 0.0],
        [0.0, s.y, 0.0, 0.0],
        [0.0, 0.0, s.z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about X. Takes +Y toward +Z.
pub fn make_rotate_x_matrix(radian: f32) -> Matrix4x4 {
    let (s, c) = radian.sin_cos();
    Matrix4x4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, s, 0.0],
        [0.0, -s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about Y. Takes +Z toward +X, so +X heads to -Z.
pub fn make_rotate_y_matrix(radian: f32) -> Matrix4x4 {
    let (s, c) = radian.sin_cos();
    Matrix4x4::from_rows([
        [c, 0.0, -s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about Z. Takes +X toward +Y.
pub fn make_rotate_z_matrix(radian: f32) -> Matrix4x4 {
    let (s, c) = radian.sin_cos();
    Matrix4x4::from_rows([
        [c, s, 0.0, 0.0],
        [-s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Euler rotation `X × (Y × Z)`: applied about X first, then Y, then Z.
pub fn make_rotate_matrix(rotate: Vector3) -> Matrix4x4 {
    make_rotate_x_matrix(rotate.x)
        * (make_rotate_y_matrix(rotate.y) * make_rotate_z_matrix(rotate.z))
}

/// Affine transform `Scale × Rotate × Translate`.
///
/// The order is fixed: scale first, then the Euler rotation of
/// [`make_rotate_matrix`], then translation. Every world and camera matrix
/// is built through here.
pub fn make_affine_matrix(scale: Vector3, rotate: Vector3, translate: Vector3) -> Matrix4x4 {
    make_scale_matrix(scale) * make_rotate_matrix(rotate) * make_translate_matrix(translate)
}
