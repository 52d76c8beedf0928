//! Camera, parallax and reveal validation.

use crate::schema::FolioConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_parallax(errors: &mut Vec<String>, config: &FolioConfig) {
    validate_range_f64(
        errors,
        "parallax.from_percent",
        config.parallax.from_percent,
        -100.0,
        100.0,
    );
    validate_range_f64(
        errors,
        "parallax.to_percent",
        config.parallax.to_percent,
        -100.0,
        100.0,
    );
}

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &FolioConfig) {
    let camera = &config.camera;
    validate_range_f64(errors, "camera.distance", camera.distance, 0.01, 1000.0);
    validate_range_f64(errors, "camera.fov", camera.fov, 1.0, 179.0);
    validate_range_f64(errors, "camera.near", camera.near, 0.0001, 100.0);
    validate_range_f64(errors, "camera.far", camera.far, 1.0, 100_000.0);
    if camera.near >= camera.far {
        errors.push(format!(
            "camera.near = {} must be less than camera.far = {}",
            camera.near, camera.far
        ));
    }
    validate_range_f64(
        errors,
        "camera.auto_rotate_speed",
        camera.auto_rotate_speed,
        -30.0,
        30.0,
    );
}

pub(crate) fn validate_reveal(errors: &mut Vec<String>, config: &FolioConfig) {
    let reveal = &config.reveal;
    validate_range_f64(errors, "reveal.margin", reveal.margin, -1000.0, 1000.0);
    validate_range_f64(errors, "reveal.duration", reveal.duration, 0.0, 10.0);
    validate_range_f64(errors, "reveal.stagger", reveal.stagger, 0.0, 5.0);
}
