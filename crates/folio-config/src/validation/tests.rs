//! Tests for the full validation pipeline.

use super::*;
use crate::schema::FolioConfig;

#[test]
fn default_config_validates() {
    let config = FolioConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_inverted_shell() {
    let mut config = FolioConfig::default();
    config.backdrop.inner_radius = 15.0;
    config.backdrop.outer_radius = 5.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backdrop.inner_radius"));
}

#[test]
fn catches_equal_radii() {
    let mut config = FolioConfig::default();
    config.backdrop.inner_radius = 8.0;
    config.backdrop.outer_radius = 8.0;
    assert!(validate(&config).is_err());
}

#[test]
fn zero_points_is_valid() {
    let mut config = FolioConfig::default();
    config.backdrop.point_count = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_too_many_points() {
    let mut config = FolioConfig::default();
    config.backdrop.point_count = 1_000_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backdrop.point_count"));
}

#[test]
fn catches_opacity_out_of_range() {
    let mut config = FolioConfig::default();
    config.backdrop.opacity = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backdrop.opacity"));
}

#[test]
fn catches_nan_speed() {
    let mut config = FolioConfig::default();
    config.backdrop.rotation_speed_x = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backdrop.rotation_speed_x"));
}

#[test]
fn catches_bad_color() {
    let mut config = FolioConfig::default();
    config.hero.color = "blue".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("hero.color"));
}

#[test]
fn catches_negative_hero_extent() {
    let mut config = FolioConfig::default();
    config.hero.extent = [4.0, -1.0, 2.0];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("hero.extent.y"));
}

#[test]
fn catches_parallax_out_of_range() {
    let mut config = FolioConfig::default();
    config.parallax.to_percent = 150.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("parallax.to_percent"));
}

#[test]
fn catches_bad_fov() {
    let mut config = FolioConfig::default();
    config.camera.fov = 180.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.fov"));
}

#[test]
fn catches_near_beyond_far() {
    let mut config = FolioConfig::default();
    config.camera.near = 50.0;
    config.camera.far = 10.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.near"));
}

#[test]
fn catches_zero_frame_rate() {
    let mut config = FolioConfig::default();
    config.performance.frame_rate = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("performance.frame_rate"));
}

#[test]
fn catches_empty_content_path() {
    let mut config = FolioConfig::default();
    config.content.path = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("content.path"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = FolioConfig::default();
    config.backdrop.opacity = -1.0;
    config.reveal.duration = 60.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backdrop.opacity"));
    assert!(err.contains("reveal.duration"));
    assert!(err.contains("; "));
}
