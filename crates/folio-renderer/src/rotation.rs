//! Time-driven rotation.
//!
//! Rotation is a pure function of absolute elapsed time. Nothing is
//! accumulated frame to frame, so a dropped or late frame never causes
//! drift and the same elapsed time always gives the same pose.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Motion of a single rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxisMotion {
    /// No rotation.
    Still,
    /// `angle = t × velocity` (radians per second).
    Linear { velocity: f32 },
    /// `angle = amplitude × sin(t × frequency)`.
    Oscillate { amplitude: f32, frequency: f32 },
}

impl AxisMotion {
    pub fn angle_at(&self, elapsed: f32) -> f32 {
        match *self {
            AxisMotion::Still => 0.0,
            AxisMotion::Linear { velocity } => elapsed * velocity,
            AxisMotion::Oscillate {
                amplitude,
                frequency,
            } => amplitude * (elapsed * frequency).sin(),
        }
    }
}

/// Euler angles (radians) applied in XYZ order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
}

/// Two-axis spin driven by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    pub x: AxisMotion,
    pub y: AxisMotion,
}

impl Spin {
    /// Constant angular velocity on both axes.
    pub fn linear(velocity_x: f32, velocity_y: f32) -> Self {
        Self {
            x: AxisMotion::Linear {
                velocity: velocity_x,
            },
            y: AxisMotion::Linear {
                velocity: velocity_y,
            },
        }
    }

    pub fn at(&self, elapsed: f32) -> Rotation {
        Rotation {
            x: self.x.angle_at(elapsed),
            y: self.y.angle_at(elapsed),
        }
    }
}

/// Elapsed animation time, advanced by host frame deltas.
///
/// While paused, `tick` has no effect, so any pose derived from
/// `elapsed_secs` freezes and resumes from the same place.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    elapsed: Duration,
    paused: bool,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, dt: Duration) {
        if !self.paused {
            self.elapsed += dt;
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_at_zero_is_zero() {
        let spin = Spin::linear(0.05, 0.02);
        assert_eq!(spin.at(0.0), Rotation::default());
    }

    #[test]
    fn ten_seconds_at_point_one_is_one_radian() {
        let spin = Spin::linear(0.1, 0.1);
        let r = spin.at(10.0);
        assert_eq!(r.x, 1.0);
        assert_eq!(r.y, 1.0);
    }

    #[test]
    fn rotation_is_exactly_time_times_velocity() {
        let spin = Spin::linear(0.05, 0.02);
        for t in [0.016_f32, 1.0, 3.5, 59.9, 1234.5] {
            let r = spin.at(t);
            assert_eq!(r.x, t * 0.05);
            assert_eq!(r.y, t * 0.02);
        }
    }

    #[test]
    fn no_drift_after_many_frames() {
        let spin = Spin::linear(0.05, 0.02);
        let mut clock = AnimationClock::new();
        for _ in 0..10_000 {
            clock.tick(Duration::from_micros(16_667));
        }
        let t = clock.elapsed_secs();
        assert_eq!(spin.at(t).x, t * 0.05);
        assert_eq!(spin.at(t).y, t * 0.02);
        assert!((t - 166.67).abs() < 1e-2);
    }

    #[test]
    fn oscillation_wobbles_within_amplitude() {
        let motion = AxisMotion::Oscillate {
            amplitude: 0.1,
            frequency: 0.1,
        };
        assert_eq!(motion.angle_at(0.0), 0.0);
        for i in 0..200 {
            assert!(motion.angle_at(i as f32).abs() <= 0.1 + 1e-6);
        }
        let quarter = std::f32::consts::FRAC_PI_2 / 0.1;
        assert!((motion.angle_at(quarter) - 0.1).abs() < 1e-5);
    }

    #[test]
    fn still_axis_never_moves() {
        assert_eq!(AxisMotion::Still.angle_at(1e6), 0.0);
    }

    #[test]
    fn clock_accumulates_ticks() {
        let mut clock = AnimationClock::new();
        clock.tick(Duration::from_millis(500));
        clock.tick(Duration::from_millis(250));
        assert_eq!(clock.elapsed(), Duration::from_millis(750));
        assert!((clock.elapsed_secs() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn paused_clock_freezes_rotation() {
        let spin = Spin::linear(0.1, 0.0);
        let mut clock = AnimationClock::new();
        clock.tick(Duration::from_secs(2));
        clock.pause();
        let frozen = spin.at(clock.elapsed_secs());
        clock.tick(Duration::from_secs(5));
        assert!(clock.is_paused());
        assert_eq!(spin.at(clock.elapsed_secs()), frozen);

        clock.resume();
        clock.tick(Duration::from_secs(1));
        assert!((spin.at(clock.elapsed_secs()).x - 0.3).abs() < 1e-6);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut clock = AnimationClock::new();
        clock.tick(Duration::from_secs(3));
        clock.reset();
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }
}
