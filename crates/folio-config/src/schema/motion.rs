//! Camera, parallax and reveal animation configuration types.

use serde::{Deserialize, Serialize};

/// Scroll-linked parallax applied to the backdrop layer.
///
/// Offsets are percentages of the layer height.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub enabled: bool,
    pub from_percent: f64,
    pub to_percent: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            from_percent: 0.0,
            to_percent: 50.0,
        }
    }
}

/// Perspective camera looking at the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub distance: f64,
    /// Vertical field of view in degrees.
    pub fov: f64,
    pub near: f64,
    pub far: f64,
    pub auto_rotate: bool,
    /// Orbit speed; 2.0 is one full orbit every 30 seconds.
    pub auto_rotate_speed: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 5.0,
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            auto_rotate: true,
            auto_rotate_speed: 0.5,
        }
    }
}

/// Entrance animations played when a section scrolls into view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub enabled: bool,
    /// How far inside the viewport (px) a section must be before it reveals.
    pub margin: f64,
    pub duration: f64,
    pub stagger: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            margin: 100.0,
            duration: 0.8,
            stagger: 0.1,
        }
    }
}
