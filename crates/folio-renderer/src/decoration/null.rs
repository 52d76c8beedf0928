//! Null decoration: used when a decoration is disabled in config.
//!
//! Does nothing, renders nothing, costs nothing.

use super::types::{Decoration, FrameUniforms};
use crate::cloud::Point;
use crate::rotation::Rotation;

pub struct NullDecoration;

impl NullDecoration {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullDecoration {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoration for NullDecoration {
    fn is_visible(&self) -> bool {
        false
    }

    fn tick(&mut self, _elapsed: f32) {}

    fn rotation(&self) -> Rotation {
        Rotation::default()
    }

    fn points(&self) -> &[Point] {
        &[]
    }

    fn write_uniforms(&self, _uniforms: &mut FrameUniforms) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_decoration_is_invisible_and_empty() {
        let mut deco = NullDecoration::new();
        deco.tick(100.0);
        assert!(!deco.is_visible());
        assert!(deco.points().is_empty());
        assert_eq!(deco.rotation(), Rotation::default());
    }

    #[test]
    fn null_decoration_write_uniforms_is_noop() {
        let deco = NullDecoration::new();
        let mut uniforms = FrameUniforms::new();
        let before = uniforms;
        deco.write_uniforms(&mut uniforms);
        assert_eq!(uniforms, before);
    }
}
