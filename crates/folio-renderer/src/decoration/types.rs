//! Decoration trait and per-frame uniform block.

use crate::cloud::Point;
use crate::matrix::{self, Mat4};
use crate::rotation::Rotation;

/// Per-frame values handed to the point shader.
///
/// Layout: mvp(mat4) + color(vec4) + 4 scalars = 96 bytes, 16-byte aligned
/// rows so it can be copied straight into a uniform buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub mvp: Mat4,
    pub color: [f32; 4],
    pub point_size: f32,
    /// Parallax offset of the layer, percent of its height.
    pub parallax_offset: f32,
    pub time: f32,
    pub _pad: f32,
}

impl FrameUniforms {
    pub fn new() -> Self {
        Self {
            mvp: matrix::IDENTITY,
            color: [1.0, 1.0, 1.0, 1.0],
            point_size: 1.0,
            parallax_offset: 0.0,
            time: 0.0,
            _pad: 0.0,
        }
    }
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self::new()
    }
}

/// A decorative point set animated by elapsed time.
///
/// `tick` receives absolute elapsed seconds, never a delta: the pose is a
/// pure function of time.
pub trait Decoration: Send {
    /// Whether this decoration should be rendered.
    fn is_visible(&self) -> bool;

    /// Recompute the pose for `elapsed` seconds since mount.
    fn tick(&mut self, elapsed: f32);

    /// Current rotation.
    fn rotation(&self) -> Rotation;

    /// Points in model space.
    fn points(&self) -> &[Point];

    /// Write decoration-specific values (color, size) into the uniforms.
    fn write_uniforms(&self, uniforms: &mut FrameUniforms);

    /// Model matrix for the current rotation.
    fn model_matrix(&self) -> Mat4 {
        let r = self.rotation();
        matrix::rotate_xy(r.x, r.y)
    }
}
