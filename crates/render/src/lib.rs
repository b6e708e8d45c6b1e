//! Rendering boundary: turns per-frame transform parameters into the matrices
//! a GPU backend consumes.
//!
//! # Invariants
//! - Renderers only read composed matrices; they never mutate parameters.
//! - WVP is composed as `world * (view * projection)` in one place,
//!   [`FrameMatrices::compose`].
//! - Constant-buffer payloads are plain row-major `f32`, copied verbatim.

mod frame;
mod renderer;

pub use frame::{FrameMatrices, FrameParams, PerspectiveParams, RenderError, Spin, ViewportParams};
pub use renderer::{ConstantBufferRenderer, DebugTextRenderer, Renderer, TransformationMatrix};

pub fn crate_info() -> &'static str {
    "framemath-render v0.1.0"
}
