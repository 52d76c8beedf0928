//! Perspective camera orbiting the origin.

use std::f32::consts::TAU;

use folio_config::schema::CameraConfig;

use crate::cloud::Point;
use crate::matrix::{self, Mat4};
use crate::rotation::AxisMotion;

/// Camera on the +Z axis looking at the origin, optionally orbiting
/// around Y as a pure function of elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub distance: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub orbit: AxisMotion,
}

impl Camera {
    pub fn from_config(config: &CameraConfig) -> Self {
        let orbit = if config.auto_rotate {
            AxisMotion::Linear {
                velocity: orbit_velocity(config.auto_rotate_speed as f32),
            }
        } else {
            AxisMotion::Still
        };
        Self {
            distance: config.distance as f32,
            fov_y: (config.fov as f32).to_radians(),
            near: config.near as f32,
            far: config.far as f32,
            orbit,
        }
    }

    pub fn orbit_angle(&self, elapsed: f32) -> f32 {
        self.orbit.angle_at(elapsed)
    }

    /// World-space eye position.
    pub fn position(&self, elapsed: f32) -> Point {
        let (s, c) = self.orbit_angle(elapsed).sin_cos();
        Point::new(self.distance * s, 0.0, self.distance * c)
    }

    pub fn view(&self, elapsed: f32) -> Mat4 {
        matrix::mul(
            &matrix::translate(0.0, 0.0, -self.distance),
            &matrix::rotate_y(-self.orbit_angle(elapsed)),
        )
    }

    /// `projection × view`. Non-positive or non-finite aspect falls back to 1.
    pub fn view_projection(&self, aspect: f32, elapsed: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        let projection = matrix::perspective(self.fov_y, aspect, self.near, self.far);
        matrix::mul(&projection, &self.view(elapsed))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

/// Orbit speed in rad/s. A speed of 2.0 completes one orbit in 30 seconds.
pub fn orbit_velocity(speed: f32) -> f32 {
    TAU * speed / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::transform_point;

    #[test]
    fn default_camera_matches_site() {
        let camera = Camera::default();
        assert!((camera.distance - 5.0).abs() < 1e-6);
        assert!((camera.fov_y - 75f32.to_radians()).abs() < 1e-6);
        assert!(matches!(camera.orbit, AxisMotion::Linear { .. }));
    }

    #[test]
    fn speed_two_orbits_in_thirty_seconds() {
        assert!((orbit_velocity(2.0) * 30.0 - TAU).abs() < 1e-5);
    }

    #[test]
    fn position_starts_on_positive_z() {
        let camera = Camera::default();
        let p = camera.position(0.0);
        assert!(p.x.abs() < 1e-6);
        assert!((p.z - 5.0).abs() < 1e-6);
    }

    #[test]
    fn orbit_keeps_distance() {
        let camera = Camera::default();
        for t in [1.0, 17.0, 90.0] {
            assert!((camera.position(t).length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn origin_projects_to_screen_centre() {
        let camera = Camera::default();
        for t in [0.0, 42.0] {
            let vp = camera.view_projection(16.0 / 9.0, t);
            let [x, y, _, w] = transform_point(&vp, Point::default());
            assert!((x / w).abs() < 1e-5);
            assert!((y / w).abs() < 1e-5);
            assert!(w > 0.0);
        }
    }

    #[test]
    fn view_moves_eye_to_origin() {
        let camera = Camera::default();
        let t = 12.5;
        let eye = camera.position(t);
        let [x, y, z, _] = transform_point(&camera.view(t), eye);
        assert!(x.abs() < 1e-4);
        assert!(y.abs() < 1e-4);
        assert!(z.abs() < 1e-4);
    }

    #[test]
    fn disabled_auto_rotate_is_still() {
        let config = CameraConfig {
            auto_rotate: false,
            ..Default::default()
        };
        let camera = Camera::from_config(&config);
        assert_eq!(camera.orbit_angle(1000.0), 0.0);
    }

    #[test]
    fn bad_aspect_falls_back() {
        let camera = Camera::default();
        assert_eq!(camera.view_projection(0.0, 0.0), camera.view_projection(1.0, 0.0));
    }
}
