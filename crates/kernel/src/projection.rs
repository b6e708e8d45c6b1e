use crate::error::MathError;
use crate::matrix::Matrix4x4;

/// Perspective projection for the row-vector convention.
///
/// Maps view-space depth `near..far` to `0..1` after the divide. Column 3 of
/// row 2 is 1, so the post-multiply `w` carries view-space depth.
pub fn make_perspective_fov_matrix(
    fov_y: f32,
    aspect_ratio: f32,
    near_clip: f32,
    far_clip: f32,
) -> Matrix4x4 {
    let cot = 1.0 / (fov_y / 2.0).tan();
    let depth = far_clip - near_clip;
    Matrix4x4::from_rows([
        [cot / aspect_ratio, 0.0, 0.0, 0.0],
        [0.0, cot, 0.0, 0.0],
        [0.0, 0.0, far_clip / depth, 1.0],
        [0.0, 0.0, -near_clip * far_clip / depth, 0.0],
    ])
}

/// Orthographic projection of the box `left..right`, `bottom..top`,
/// `near..far` onto `[-1, 1] x [-1, 1] x [0, 1]`.
pub fn make_orthographic_matrix(
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    near_clip: f32,
    far_clip: f32,
) -> Matrix4x4 {
    Matrix4x4::from_rows([
        [2.0 / (right - left), 0.0, 0.0, 0.0],
        [0.0, 2.0 / (top - bottom), 0.0, 0.0],
        [0.0, 0.0, 1.0 / (far_clip - near_clip), 0.0],
        [
            (left + right) / (left - right),
            (top + bottom) / (bottom - top),
            near_clip / (near_clip - far_clip),
            1.0,
        ],
    ])
}

/// Maps normalized device coordinates to pixels and `min_depth..max_depth`.
///
/// Y is flipped: NDC +1 lands on `top`.
pub fn make_viewport_matrix(
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    min_depth: f32,
    max_depth: f32,
) -> Result<Matrix4x4, MathError> {
    if min_depth > max_depth {
        tracing::trace!(min_depth, max_depth, "inverted viewport depth range");
        return Err(MathError::InvertedDepthRange {
            min_depth,
            max_depth,
        });
    }
    let (half_w, half_h) = (width / 2.0, height / 2.0);
    Ok(Matrix4x4::from_rows([
        [half_w, 0.0, 0.0, 0.0],
        [0.0, -half_h, 0.0, 0.0],
        [0.0, 0.0, max_depth - min_depth, 0.0],
        [left + half_w, top + half_h, min_depth, 1.0],
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::transform;
    use crate::vector::Vector3;

    const EPS: f32 = 1e-5;

    #[test]
    fn perspective_entries() {
        let m = make_perspective_fov_matrix(0.63, 1.33, 0.1, 1000.0);
        let cot = 1.0 / (0.315_f32).tan();
        assert!((m.m[0][0] - cot / 1.33).abs() < EPS);
        assert!((m.m[1][1] - cot).abs() < EPS);
        assert!((m.m[2][2] - 1000.0 / 999.9).abs() < EPS);
        assert_eq!(m.m[2][3], 1.0);
        assert!((m.m[3][2] - (-100.0 / 999.9)).abs() < EPS);
        assert_eq!(m.m[3][3], 0.0);
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth() {
        let m = make_perspective_fov_matrix(0.45, 16.0 / 9.0, 0.1, 100.0);
        let near = transform(Vector3::new(0.0, 0.0, 0.1), &m).unwrap();
        let far = transform(Vector3::new(0.0, 0.0, 100.0), &m).unwrap();
        assert!(near.z.abs() < EPS, "{near:?}");
        assert!((far.z - 1.0).abs() < EPS, "{far:?}");
    }

    #[test]
    fn perspective_divides_by_depth() {
        let m = make_perspective_fov_matrix(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 10.0);
        // fov 90 degrees: the frustum edge sits at x == z.
        let edge = transform(Vector3::new(5.0, 5.0, 5.0), &m).unwrap();
        assert!(
            (edge.x - 1.0).abs() < EPS && (edge.y - 1.0).abs() < EPS,
            "{edge:?}"
        );
    }

    #[test]
    fn perspective_point_on_camera_plane_has_zero_w() {
        let m = make_perspective_fov_matrix(0.45, 1.0, 0.1, 100.0);
        assert_eq!(
            transform(Vector3::new(1.0, 1.0, 0.0), &m),
            Err(MathError::ZeroW)
        );
    }

    #[test]
    fn orthographic_maps_box_corners() {
        let m = make_orthographic_matrix(-160.0, 160.0, 200.0, 300.0, 0.0, 1000.0);
        let a = transform(Vector3::new(-160.0, 300.0, 0.0), &m).unwrap();
        let b = transform(Vector3::new(200.0, 160.0, 1000.0), &m).unwrap();
        assert!(a.approx_eq(Vector3::new(-1.0, -1.0, 0.0), EPS), "{a:?}");
        assert!(b.approx_eq(Vector3::new(1.0, 1.0, 1.0), EPS), "{b:?}");
    }

    #[test]
    fn orthographic_keeps_w() {
        let m = make_orthographic_matrix(0.0, 0.0, 1280.0, 720.0, 0.0, 100.0);
        assert_eq!(m.col(3), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn viewport_entries() {
        let m = make_viewport_matrix(0.0, 0.0, 1280.0, 720.0, 0.0, 1.0).unwrap();
        assert_eq!(
            m,
            Matrix4x4::from_rows([
                [640.0, 0.0, 0.0, 0.0],
                [0.0, -360.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [640.0, 360.0, 0.0, 1.0],
            ])
        );
    }

    #[test]
    fn viewport_maps_ndc_corners_to_pixels() {
        let m = make_viewport_matrix(100.0, 50.0, 1280.0, 720.0, 0.25, 0.75).unwrap();
        let top_left = transform(Vector3::new(-1.0, 1.0, 0.0), &m).unwrap();
        let bottom_right = transform(Vector3::new(1.0, -1.0, 1.0), &m).unwrap();
        assert_eq!(top_left, Vector3::new(100.0, 50.0, 0.25));
        assert_eq!(bottom_right, Vector3::new(1380.0, 770.0, 0.75));
    }

    #[test]
    fn viewport_rejects_inverted_depth() {
        assert_eq!(
            make_viewport_matrix(0.0, 0.0, 1280.0, 720.0, 0.5, 0.0),
            Err(MathError::InvertedDepthRange {
                min_depth: 0.5,
                max_depth: 0.0,
            })
        );
    }

    #[test]
    fn viewport_accepts_flat_depth() {
        let m = make_viewport_matrix(0.0, 0.0, 640.0, 480.0, 0.5, 0.5).unwrap();
        assert_eq!(m.m[2][2], 0.0);
    }
}
