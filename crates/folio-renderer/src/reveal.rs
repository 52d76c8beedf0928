//! Entrance animations for page sections.
//!
//! Sections fade in the first time they scroll into view. Each item in a
//! section gets a staggered delay so lists cascade instead of appearing at
//! once.

use folio_common::Rect;
use folio_config::schema::RevealConfig;
use serde::{Deserialize, Serialize};

/// Latching in-view detector for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTrigger {
    /// Pixels the element must be inside the viewport before it counts.
    margin: f64,
    once: bool,
    revealed: bool,
}

impl RevealTrigger {
    pub fn new(margin: f64, once: bool) -> Self {
        Self {
            margin,
            once,
            revealed: false,
        }
    }

    /// A disabled config reveals everything immediately.
    pub fn from_config(config: &RevealConfig) -> Self {
        let mut trigger = Self::new(config.margin, true);
        if !config.enabled {
            trigger.revealed = true;
        }
        trigger
    }

    /// Update with the element's rect relative to the viewport top and
    /// return whether it is revealed.
    pub fn observe(&mut self, rect: Rect, viewport_height: f64) -> bool {
        let visible = rect.y < viewport_height - self.margin && rect.bottom() > self.margin;
        if self.once {
            self.revealed |= visible;
        } else {
            self.revealed = visible;
        }
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::from_config(&RevealConfig::default())
    }
}

/// A single timed transition, in seconds since the reveal started.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub delay: f32,
    pub duration: f32,
}

impl Transition {
    pub fn new(delay: f32, duration: f32) -> Self {
        Self { delay, duration }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, t: f32) -> f32 {
        if t.is_nan() || t <= self.delay {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((t - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    /// Ease-out cubic progress.
    pub fn eased(&self, t: f32) -> f32 {
        ease_out_cubic(self.progress(t))
    }

    pub fn end(&self) -> f32 {
        self.delay + self.duration.max(0.0)
    }
}

pub fn ease_out_cubic(p: f32) -> f32 {
    let inv = 1.0 - p.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Per-item delays for a list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stagger {
    pub base_delay: f32,
    pub step: f32,
    pub duration: f32,
}

impl Stagger {
    pub fn new(base_delay: f32, step: f32, duration: f32) -> Self {
        Self {
            base_delay,
            step,
            duration,
        }
    }

    pub fn from_config(config: &RevealConfig, base_delay: f32) -> Self {
        Self::new(base_delay, config.stagger as f32, config.duration as f32)
    }

    pub fn item(&self, index: usize) -> Transition {
        Transition::new(self.base_delay + index as f32 * self.step, self.duration)
    }

    /// Time at which the last of `count` items finishes.
    pub fn total(&self, count: usize) -> f32 {
        match count {
            0 => 0.0,
            n => self.item(n - 1).end(),
        }
    }
}

/// Width of a skill bar in percent: `level` scaled by eased progress.
pub fn skill_bar_fill(level: u8, transition: &Transition, t: f32) -> f32 {
    f32::from(level.min(100)) * transition.eased(t)
}
