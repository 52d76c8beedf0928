//! Animated 3D decorations for the portfolio page.
//!
//! Provides:
//! - Point cloud sampling (spherical shell, box)
//! - Time-driven rotation and the animation clock
//! - Scroll-linked parallax mapping
//! - Camera and matrix math for MVP transforms
//! - Scene layers with an explicit mount / frame / unmount lifecycle
//! - Entrance reveal timing and frame timing

pub mod backdrop;
pub mod camera;
pub mod cloud;
pub mod decoration;
pub mod matrix;
pub mod perf;
pub mod reveal;
pub mod rotation;
pub mod scroll;

pub use backdrop::{BackdropLayer, FrameState, LayerKind};
pub use camera::Camera;
pub use cloud::{generate_sphere, rng_from_seed, BoxSampler, Point, PointCloud, ShellSampler};
pub use decoration::{Decoration, FrameUniforms};
pub use perf::FrameTimer;
pub use reveal::{RevealTrigger, Stagger, Transition};
pub use rotation::{AnimationClock, AxisMotion, Rotation, Spin};
pub use scroll::{scroll_progress, ScrollMapper};
