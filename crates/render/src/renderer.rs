use bytemuck::{Pod, Zeroable};
use framemath_kernel::Matrix4x4;

use crate::frame::FrameMatrices;

/// Constant-buffer payload read by the vertex shader: one WVP matrix,
/// 16 row-major floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TransformationMatrix {
    pub wvp: Matrix4x4,
}

const _: () = assert!(std::mem::size_of::<TransformationMatrix>() == 64);

impl Default for TransformationMatrix {
    /// Identity, so the first frame draws untransformed geometry.
    fn default() -> Self {
        Self {
            wvp: Matrix4x4::IDENTITY,
        }
    }
}

impl TransformationMatrix {
    /// Bytes to copy verbatim into the mapped GPU buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Backend-agnostic consumer of per-frame matrices.
///
/// A renderer only reads the composed frame; it never feeds back into the
/// transform parameters.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the composed matrices.
    fn render(&self, frame: &FrameMatrices) -> Self::Output;
}

/// Human-readable dump of a frame's matrices, for logs and the CLI.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn write_matrix(out: &mut String, label: &str, m: &Matrix4x4) {
    out.push_str(&format!("{label}:\n"));
    for row in &m.m {
        out.push_str(&format!(
            "  [{:>10.4} {:>10.4} {:>10.4} {:>10.4}]\n",
            row[0], row[1], row[2], row[3]
        ));
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &FrameMatrices) -> String {
        let mut out = String::new();
        write_matrix(&mut out, "world", &frame.world);
        write_matrix(&mut out, "view", &frame.view);
        write_matrix(&mut out, "projection", &frame.projection);
        write_matrix(&mut out, "viewport", &frame.viewport);
        write_matrix(&mut out, "wvp", &frame.world_view_projection);
        out
    }
}

/// Packs the frame's WVP into the constant-buffer layout the shader expects.
#[derive(Debug, Default)]
pub struct ConstantBufferRenderer;

impl ConstantBufferRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for ConstantBufferRenderer {
    type Output = TransformationMatrix;

    fn render(&self, frame: &FrameMatrices) -> TransformationMatrix {
        TransformationMatrix {
            wvp: frame.world_view_projection,
        }
    }
}
