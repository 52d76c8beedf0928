//! Scroll-linked parallax.
//!
//! The host reports how far the page has scrolled through its container as
//! a progress value in `[0, 1]`; the mapper turns that into a vertical
//! offset for the backdrop layer so it trails the foreground content.

use folio_config::schema::ParallaxConfig;
use serde::{Deserialize, Serialize};

/// Compute scroll progress through a container.
///
/// Progress is 0 when the container top reaches the viewport top and 1 when
/// the container bottom reaches the viewport bottom. A container no taller
/// than the viewport cannot scroll and always reports 0.
pub fn scroll_progress(
    scroll_y: f64,
    container_top: f64,
    container_height: f64,
    viewport_height: f64,
) -> f32 {
    let scrollable = container_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    let progress = (scroll_y - container_top) / scrollable;
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0) as f32
}

/// Linear map from scroll progress to a percentage offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollMapper {
    from_percent: f32,
    to_percent: f32,
}

impl ScrollMapper {
    pub fn new(from_percent: f32, to_percent: f32) -> Self {
        Self {
            from_percent,
            to_percent,
        }
    }

    /// A disabled parallax maps every progress to 0%.
    pub fn from_config(config: &ParallaxConfig) -> Self {
        if !config.enabled {
            return Self::new(0.0, 0.0);
        }
        Self::new(config.from_percent as f32, config.to_percent as f32)
    }

    /// Offset as a percentage of the layer height. `progress` is clamped to `[0, 1]`.
    pub fn offset_percent(&self, progress: f32) -> f32 {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.from_percent + (self.to_percent - self.from_percent) * p
    }

    /// Offset in pixels for a layer of the given height.
    pub fn offset_pixels(&self, progress: f32, layer_height: f32) -> f32 {
        self.offset_percent(progress) / 100.0 * layer_height
    }
}

impl Default for ScrollMapper {
    fn default() -> Self {
        Self::new(0.0, 50.0)
    }
}
