use crate::error::MathError;
use crate::matrix::Matrix4x4;
use crate::vector::{Vector3, Vector4};

/// Transform a point `(x, y, z, 1)` by `matrix` and divide by the resulting `w`.
///
/// Returns [`MathError::ZeroW`] when `w` is exactly zero, e.g. a point on the
/// camera plane pushed through a perspective projection.
pub fn transform(vector: Vector3, matrix: &Matrix4x4) -> Result<Vector3, MathError> {
    let h = transform_vector4(Vector4::from_point(vector), matrix);
    if h.w == 0.0 {
        return Err(MathError::ZeroW);
    }
    Ok(Vector3::new(h.x / h.w, h.y / h.w, h.z / h.w))
}

/// Full homogeneous product `v · matrix`, without the divide.
pub fn transform_vector4(v: Vector4, matrix: &Matrix4x4) -> Vector4 {
    let m = &matrix.m;
    Vector4::new(
        v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0] + v.w * m[3][0],
        v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1] + v.w * m[3][1],
        v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2] + v.w * m[3][2],
        v.x * m[0][3] + v.y * m[1][3] + v.z * m[2][3] + v.w * m[3][3],
    )
}

/// Direction transform: upper 3x3 only, translation ignored.
pub fn transform_normal(v: Vector3, matrix: &Matrix4x4) -> Vector3 {
    let m = &matrix.m;
    Vector3::new(
        v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0],
        v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1],
        v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2],
    )
}
