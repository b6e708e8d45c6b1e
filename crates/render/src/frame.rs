use framemath_kernel::{
    MathError, Matrix4x4, TransformParams, Vector3, make_perspective_fov_matrix,
    make_viewport_matrix, transform,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from frame composition and configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Math(#[from] MathError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerspectiveParams {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect_ratio: f32,
    pub near_clip: f32,
    pub far_clip: f32,
}

impl Default for PerspectiveParams {
    fn default() -> Self {
        Self {
            fov_y: 0.45,
            aspect_ratio: 1280.0 / 720.0,
            near_clip: 0.1,
            far_clip: 100.0,
        }
    }
}

/// Viewport rectangle in pixels plus its depth range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportParams {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Default for ViewportParams {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 1280.0,
            height: 720.0,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}

/// Per-frame Euler-angle increment applied to the object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub rate: Vector3,
}

impl Default for Spin {
    fn default() -> Self {
        Self {
            rate: Vector3::new(0.0, 0.03, 0.0),
        }
    }
}

/// Everything the scene layer hands over each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameParams {
    pub object: TransformParams,
    pub camera: TransformParams,
    pub projection: PerspectiveParams,
    pub viewport: ViewportParams,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            object: TransformParams::default(),
            camera: TransformParams::at(Vector3::new(0.0, 0.0, -5.0)),
            projection: PerspectiveParams::default(),
            viewport: ViewportParams::default(),
        }
    }
}

impl FrameParams {
    /// Load parameters from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let params = serde_json::from_reader(std::fs::File::open(path.as_ref())?)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded frame params");
        Ok(params)
    }

    /// Write parameters as pretty-printed JSON, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        serde_json::to_writer_pretty(std::fs::File::create(path)?, self)?;
        Ok(())
    }

    /// Advance the object's rotation by one frame of `spin`.
    pub fn advance(&mut self, spin: &Spin) {
        self.object.rotate = self.object.rotate + spin.rate;
    }
}

/// The matrices produced for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub world: Matrix4x4,
    pub view: Matrix4x4,
    pub projection: Matrix4x4,
    pub viewport: Matrix4x4,
    pub world_view_projection: Matrix4x4,
}

impl FrameMatrices {
    /// Build world, view, projection and viewport matrices from `params`.
    ///
    /// The view matrix is the inverse of the camera's affine transform; a
    /// degenerate camera (e.g. zero scale) is reported rather than producing
    /// NaNs. WVP is `world * (view * projection)`.
    pub fn compose(params: &FrameParams) -> Result<Self, RenderError> {
        let _span = tracing::debug_span!("compose_frame").entered();

        let world = params.object.to_matrix();
        let view = params.camera.to_matrix().try_inverse()?;
        let p = &params.projection;
        let projection =
            make_perspective_fov_matrix(p.fov_y, p.aspect_ratio, p.near_clip, p.far_clip);
        let v = &params.viewport;
        let viewport =
            make_viewport_matrix(v.left, v.top, v.width, v.height, v.min_depth, v.max_depth)?;
        let world_view_projection = world * (view * projection);

        tracing::trace!(wvp = ?world_view_projection, "frame composed");

        Ok(Self {
            world,
            view,
            projection,
            viewport,
            world_view_projection,
        })
    }

    /// Object-space point to normalized device coordinates.
    pub fn project_to_ndc(&self, point: Vector3) -> Result<Vector3, MathError> {
        transform(point, &self.world_view_projection)
    }

    /// Object-space point to pixel coordinates and viewport depth.
    pub fn project_to_screen(&self, point: Vector3) -> Result<Vector3, MathError> {
        let ndc = self.project_to_ndc(point)?;
        transform(ndc, &self.viewport)
    }
}
