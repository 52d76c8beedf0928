//! Performance and content source validation.

use crate::schema::FolioConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_performance(errors: &mut Vec<String>, config: &FolioConfig) {
    validate_range(
        errors,
        "performance.frame_rate",
        config.performance.frame_rate,
        1,
        240,
    );
    validate_range_f64(
        errors,
        "performance.frame_budget_ms",
        config.performance.frame_budget_ms,
        0.01,
        1000.0,
    );
}

pub(crate) fn validate_content_source(errors: &mut Vec<String>, config: &FolioConfig) {
    if config.content.path.trim().is_empty() {
        errors.push("content.path must not be empty".into());
    }
}
