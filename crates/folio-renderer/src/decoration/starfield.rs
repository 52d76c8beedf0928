//! Starfield: the page-wide backdrop of points in a spherical shell.

use folio_common::{Color, RendererError};
use folio_config::schema::BackdropConfig;
use rand::Rng;
use tracing::warn;

use super::types::{Decoration, FrameUniforms};
use crate::cloud::{Point, PointCloud, ShellSampler};
use crate::rotation::{Rotation, Spin};

const FALLBACK_COLOR: Color = Color {
    r: 0x3b,
    g: 0x82,
    b: 0xf6,
    a: 255,
};

/// Slowly spinning shell of points.
pub struct Starfield {
    cloud: PointCloud,
    spin: Spin,
    rotation: Rotation,
    color: [f32; 4],
    point_size: f32,
}

impl Starfield {
    pub fn new(cloud: PointCloud, spin: Spin, color: [f32; 4], point_size: f32) -> Self {
        Self {
            cloud,
            spin,
            rotation: Rotation::default(),
            color,
            point_size,
        }
    }

    /// Sample a fresh cloud from config.
    pub fn from_config<R: Rng + ?Sized>(
        config: &BackdropConfig,
        rng: &mut R,
    ) -> Result<Self, RendererError> {
        let sampler = ShellSampler::new(config.inner_radius as f32, config.outer_radius as f32)?;
        let cloud = sampler.generate(config.point_count as usize, rng);
        let spin = Spin::linear(
            config.rotation_speed_x as f32,
            config.rotation_speed_y as f32,
        );
        let color = parse_color(&config.color).to_rgba_f32(config.opacity as f32);
        Ok(Self::new(cloud, spin, color, config.point_size as f32))
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }
}

fn parse_color(hex: &str) -> Color {
    Color::from_hex(hex).unwrap_or_else(|| {
        warn!("invalid backdrop color {hex:?}, using default");
        FALLBACK_COLOR
    })
}

impl Decoration for Starfield {
    fn is_visible(&self) -> bool {
        !self.cloud.is_empty()
    }

    fn tick(&mut self, elapsed: f32) {
        self.rotation = self.spin.at(elapsed);
    }

    fn rotation(&self) -> Rotation {
        self.rotation
    }

    fn points(&self) -> &[Point] {
        self.cloud.points()
    }

    fn write_uniforms(&self, uniforms: &mut FrameUniforms) {
        uniforms.color = self.color;
        uniforms.point_size = self.point_size;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn starfield() -> Starfield {
        let mut rng = StdRng::seed_from_u64(5);
        Starfield::from_config(&BackdropConfig::default(), &mut rng).unwrap()
    }

    #[test]
    fn from_default_config() {
        let field = starfield();
        assert!(field.is_visible());
        assert_eq!(field.points().len(), 2000);
        assert!(field.cloud().max_radius() <= 15.0 + 1e-3);
    }

    #[test]
    fn tick_sets_rotation_from_absolute_time() {
        let mut field = starfield();
        field.tick(10.0);
        let r = field.rotation();
        assert!((r.x - 0.5).abs() < 1e-6);
        assert!((r.y - 0.2).abs() < 1e-6);

        // Going back in time restores the earlier pose exactly.
        field.tick(0.0);
        assert_eq!(field.rotation(), Rotation::default());
    }

    #[test]
    fn ticking_does_not_touch_points() {
        let mut field = starfield();
        let before = field.cloud().clone();
        field.tick(123.0);
        assert_eq!(field.cloud(), &before);
    }

    #[test]
    fn write_uniforms_sets_color_and_size() {
        let field = starfield();
        let mut uniforms = FrameUniforms::new();
        field.write_uniforms(&mut uniforms);
        assert!((uniforms.point_size - 0.02).abs() < 1e-6);
        assert!((uniforms.color[3] - 0.6).abs() < 1e-6);
        assert!((uniforms.color[2] - 0xf6 as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn empty_cloud_is_invisible() {
        let config = BackdropConfig {
            point_count: 0,
            ..Default::default()
        };
        let field = Starfield::from_config(&config, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(!field.is_visible());
    }

    #[test]
    fn invalid_shell_is_rejected() {
        let config = BackdropConfig {
            inner_radius: 20.0,
            outer_radius: 10.0,
            ..Default::default()
        };
        assert!(Starfield::from_config(&config, &mut StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn bad_color_falls_back() {
        assert_eq!(parse_color("nope"), FALLBACK_COLOR);
    }
}
