//! Point and point cloud types.

use serde::{Deserialize, Serialize};

/// A single point of a cloud.
///
/// Layout: position(vec3) = 12 bytes, so a cloud can be uploaded as a
/// vertex buffer without repacking.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Distance from the origin.
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// An ordered, fixed-size set of points.
///
/// The size is fixed at construction; there is no way to push or remove
/// points afterwards. Regenerating means building a new cloud.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PointCloud {
    points: Vec<Point>,
}

impl PointCloud {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Flat `x, y, z, x, y, z, ...` positions (stride 3).
    pub fn positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }

    /// Raw bytes for a GPU vertex buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }

    /// Radius of the smallest origin-centred sphere containing every point.
    pub fn max_radius(&self) -> f32 {
        self.points.iter().map(Point::length).fold(0.0, f32::max)
    }
}

// =============================================================================
// Tests
// =============================================================================
