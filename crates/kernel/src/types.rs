use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::matrix::Matrix4x4;
use crate::transform::make_affine_matrix;
use crate::vector::{Vector2, Vector3, Vector4};

/// Decomposed affine transform: scale, Euler rotation (radians, X then Y then
/// Z), translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    pub scale: Vector3,
    pub rotate: Vector3,
    pub translate: Vector3,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            scale: Vector3::ONE,
            rotate: Vector3::ZERO,
            translate: Vector3::ZERO,
        }
    }
}

impl TransformParams {
    /// Identity transform placed at `translate`.
    pub fn at(translate: Vector3) -> Self {
        Self {
            translate,
            ..Self::default()
        }
    }

    /// Affine matrix `scale * rotate * translate`.
    pub fn to_matrix(&self) -> Matrix4x4 {
        make_affine_matrix(self.scale, self.rotate, self.translate)
    }
}

/// Vertex as laid out in the vertex buffer: homogeneous position followed by
/// texture coordinate, 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct VertexData {
    pub position: Vector4,
    pub texcoord: Vector2,
}

const _: () = assert!(size_of::<VertexData>() == 6 * size_of::<f32>());
