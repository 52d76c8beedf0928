//! Column-major 4×4 matrices for model, view and projection transforms.
//!
//! Storage is `[f32; 16]` with each group of four floats holding one column,
//! which is the layout a `mat4x4<f32>` uniform expects.

use crate::cloud::Point;

pub type Mat4 = [f32; 16];

pub const IDENTITY: Mat4 = from_cols([
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
]);

/// Build a matrix from four columns.
pub const fn from_cols(c: [[f32; 4]; 4]) -> Mat4 {
    [
        c[0][0], c[0][1], c[0][2], c[0][3], //
        c[1][0], c[1][1], c[1][2], c[1][3], //
        c[2][0], c[2][1], c[2][2], c[2][3], //
        c[3][0], c[3][1], c[3][2], c[3][3],
    ]
}

/// Right-handed perspective projection mapping depth to `[-1, 1]`.
///
/// `fov_y` is in radians; `near` and `far` must both be positive.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let focal = 1.0 / (fov_y / 2.0).tan();
    let depth = near - far;
    from_cols([
        [focal / aspect, 0.0, 0.0, 0.0],
        [0.0, focal, 0.0, 0.0],
        [0.0, 0.0, (near + far) / depth, -1.0],
        [0.0, 0.0, 2.0 * near * far / depth, 0.0],
    ])
}

pub fn rotate_x(angle: f32) -> Mat4 {
    let (sin, cos) = angle.sin_cos();
    from_cols([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos, sin, 0.0],
        [0.0, -sin, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotate_y(angle: f32) -> Mat4 {
    let (sin, cos) = angle.sin_cos();
    from_cols([
        [cos, 0.0, -sin, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [sin, 0.0, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Euler rotation in XYZ order with no Z component: `Rx × Ry`.
pub fn rotate_xy(x: f32, y: f32) -> Mat4 {
    mul(&rotate_x(x), &rotate_y(y))
}

pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[12] = x;
    m[13] = y;
    m[14] = z;
    m
}

/// `a × b`: applying the result applies `b` first, then `a`.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for (i, cell) in out.iter_mut().enumerate() {
        let (col, row) = (i / 4, i % 4);
        *cell = (0..4).map(|k| a[k * 4 + row] * b[col * 4 + k]).sum();
    }
    out
}

/// Transform `p` as a position (w = 1), returning homogeneous `[x, y, z, w]`.
pub fn transform_point(m: &Mat4, p: Point) -> [f32; 4] {
    std::array::from_fn(|row| m[row] * p.x + m[4 + row] * p.y + m[8 + row] * p.z + m[12 + row])
}
