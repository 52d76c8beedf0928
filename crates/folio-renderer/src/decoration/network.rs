//! Neural network: the cluster of nodes floating in the hero section.

use folio_common::{Color, RendererError};
use folio_config::schema::HeroConfig;
use rand::Rng;
use tracing::warn;

use super::types::{Decoration, FrameUniforms};
use crate::cloud::{BoxSampler, Point, PointCloud};
use crate::rotation::{AxisMotion, Rotation, Spin};

/// Nodes scattered in a box, spinning about Y with a gentle wobble about X.
pub struct NeuralNetwork {
    nodes: PointCloud,
    spin: Spin,
    rotation: Rotation,
    color: [f32; 4],
    node_radius: f32,
}

impl NeuralNetwork {
    pub fn from_config<R: Rng + ?Sized>(
        config: &HeroConfig,
        rng: &mut R,
    ) -> Result<Self, RendererError> {
        let extent = config.extent.map(|e| e as f32);
        let nodes = BoxSampler::new(extent)?.generate(config.node_count as usize, rng);
        let spin = Spin {
            x: AxisMotion::Oscillate {
                amplitude: config.wobble_amplitude as f32,
                frequency: config.wobble_frequency as f32,
            },
            y: AxisMotion::Linear {
                velocity: config.spin_speed as f32,
            },
        };
        let color = Color::from_hex(&config.color)
            .unwrap_or_else(|| {
                warn!("invalid hero color {:?}, using white", config.color);
                Color::from_rgba(255, 255, 255, 255)
            })
            .to_rgba_f32(1.0);

        Ok(Self {
            nodes,
            spin,
            rotation: Rotation::default(),
            color,
            node_radius: config.node_radius as f32,
        })
    }

    pub fn nodes(&self) -> &PointCloud {
        &self.nodes
    }
}

impl Decoration for NeuralNetwork {
    fn is_visible(&self) -> bool {
        !self.nodes.is_empty()
    }

    fn tick(&mut self, elapsed: f32) {
        self.rotation = self.spin.at(elapsed);
    }

    fn rotation(&self) -> Rotation {
        self.rotation
    }

    fn points(&self) -> &[Point] {
        self.nodes.points()
    }

    fn write_uniforms(&self, uniforms: &mut FrameUniforms) {
        uniforms.color = self.color;
        uniforms.point_size = self.node_radius;
    }
}
