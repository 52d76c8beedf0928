//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod backdrop;
mod helpers;
mod misc;
mod motion;

#[cfg(test)]
mod tests;

use crate::schema::FolioConfig;
use folio_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FolioConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    backdrop::validate_backdrop(&mut errors, config);
    backdrop::validate_hero(&mut errors, config);
    motion::validate_parallax(&mut errors, config);
    motion::validate_camera(&mut errors, config);
    motion::validate_reveal(&mut errors, config);
    misc::validate_performance(&mut errors, config);
    misc::validate_content_source(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
