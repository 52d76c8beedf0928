//! Backdrop starfield and hero network configuration types.

use serde::{Deserialize, Serialize};

/// Decorative starfield drawn behind the page content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    pub enabled: bool,
    /// Number of points in the cloud (valid range: 0-200000).
    pub point_count: u32,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Spin about the X axis in radians per second.
    pub rotation_speed_x: f64,
    /// Spin about the Y axis in radians per second.
    pub rotation_speed_y: f64,
    pub color: String,
    pub point_size: f64,
    pub opacity: f64,
    /// Fixed seed for reproducible clouds. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            point_count: 2000,
            inner_radius: 5.0,
            outer_radius: 15.0,
            rotation_speed_x: 0.05,
            rotation_speed_y: 0.02,
            color: "#3b82f6".into(),
            point_size: 0.02,
            opacity: 0.6,
            seed: None,
        }
    }
}

/// Floating "neural network" nodes drawn in the hero section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub enabled: bool,
    pub node_count: u32,
    /// Full width, height and depth of the box the nodes are scattered in.
    pub extent: [f64; 3],
    pub spin_speed: f64,
    pub wobble_amplitude: f64,
    pub wobble_frequency: f64,
    pub color: String,
    pub node_radius: f64,
    pub seed: Option<u64>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            node_count: 20,
            extent: [4.0, 4.0, 2.0],
            spin_speed: 0.1,
            wobble_amplitude: 0.1,
            wobble_frequency: 0.1,
            color: "#60a5fa".into(),
            node_radius: 0.05,
            seed: None,
        }
    }
}
