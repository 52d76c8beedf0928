//! Frame timing and tick-cost monitoring.

use std::collections::VecDeque;
use std::time::Duration;

const DEFAULT_WINDOW: usize = 120;

/// Rolling window of recorded frame durations.
///
/// The host measures each frame itself and calls `record`; the timer never
/// reads the clock, so it behaves the same headless and under test.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    max_samples: usize,
    total_frames: u64,
}

impl FrameTimer {
    /// Create a timer with the default 120-sample window.
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW)
    }

    pub fn with_window(max_samples: usize) -> Self {
        let max_samples = max_samples.max(1);
        Self {
            frame_times: VecDeque::with_capacity(max_samples),
            max_samples,
            total_frames: 0,
        }
    }

    /// Record one frame's duration.
    pub fn record(&mut self, dt: Duration) {
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
        self.total_frames += 1;
    }

    /// Average frames per second over the window.
    pub fn fps(&self) -> f64 {
        let total = self.total_secs();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        (self.total_secs() / self.frame_times.len() as f64) * 1000.0
    }

    /// Worst frame time in the window, in milliseconds.
    pub fn max_frame_time_ms(&self) -> f64 {
        self.frame_times
            .iter()
            .map(|d| d.as_secs_f64() * 1000.0)
            .fold(0.0, f64::max)
    }

    /// Number of samples in the window whose duration exceeds `budget_ms`.
    pub fn over_budget(&self, budget_ms: f64) -> usize {
        self.frame_times
            .iter()
            .filter(|d| d.as_secs_f64() * 1000.0 > budget_ms)
            .count()
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    /// Frames recorded since creation, including those rolled out of the window.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    fn total_secs(&self) -> f64 {
        self.frame_times.iter().map(Duration::as_secs_f64).sum()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
