//! Backdrop and hero decoration validation.

use crate::schema::FolioConfig;

use super::helpers::{validate_hex_color, validate_range, validate_range_f64};

/// Validate the starfield constraints.
pub(crate) fn validate_backdrop(errors: &mut Vec<String>, config: &FolioConfig) {
    let backdrop = &config.backdrop;
    validate_range(errors, "backdrop.point_count", backdrop.point_count, 0, 200_000);
    validate_range_f64(errors, "backdrop.inner_radius", backdrop.inner_radius, 0.0, 1000.0);
    validate_range_f64(errors, "backdrop.outer_radius", backdrop.outer_radius, 0.0, 1000.0);
    if backdrop.inner_radius >= backdrop.outer_radius {
        errors.push(format!(
            "backdrop.inner_radius = {} must be less than backdrop.outer_radius = {}",
            backdrop.inner_radius, backdrop.outer_radius
        ));
    }
    validate_range_f64(errors, "backdrop.rotation_speed_x", backdrop.rotation_speed_x, -10.0, 10.0);
    validate_range_f64(errors, "backdrop.rotation_speed_y", backdrop.rotation_speed_y, -10.0, 10.0);
    validate_range_f64(errors, "backdrop.point_size", backdrop.point_size, 0.0, 10.0);
    validate_range_f64(errors, "backdrop.opacity", backdrop.opacity, 0.0, 1.0);
    validate_hex_color(errors, "backdrop.color", &backdrop.color);
}

/// Validate the hero network constraints.
pub(crate) fn validate_hero(errors: &mut Vec<String>, config: &FolioConfig) {
    let hero = &config.hero;
    validate_range(errors, "hero.node_count", hero.node_count, 0, 1000);
    for (axis, extent) in ["x", "y", "z"].iter().zip(hero.extent) {
        validate_range_f64(errors, &format!("hero.extent.{axis}"), extent, 0.0, 100.0);
    }
    validate_range_f64(errors, "hero.spin_speed", hero.spin_speed, -10.0, 10.0);
    validate_range_f64(errors, "hero.wobble_amplitude", hero.wobble_amplitude, 0.0, 3.2);
    validate_range_f64(errors, "hero.wobble_frequency", hero.wobble_frequency, 0.0, 10.0);
    validate_range_f64(errors, "hero.node_radius", hero.node_radius, 0.0, 1.0);
    validate_hex_color(errors, "hero.color", &hero.color);
}
