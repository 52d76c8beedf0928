//! Point clouds: vertex types and random samplers.
//!
//! A cloud is generated once per mount and never mutated afterwards; only
//! the transform of the decoration that owns it changes from frame to frame.

mod sampler;
mod types;

pub use sampler::*;
pub use types::*;
