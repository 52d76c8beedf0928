//! Where the config file lives, and writing the initial one.

use std::path::{Path, PathBuf};

use folio_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "folio";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/folio/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_failed =
        |what: &str, e: std::io::Error| ConfigError::ParseError(format!("failed to {what}: {e}"));

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| write_failed(&format!("create {}", parent.display()), e))?;
    }
    std::fs::write(path, default_config_toml())
        .map_err(|e| write_failed(&format!("write {}", path.display()), e))?;

    info!(path = %path.display(), "created default config");
    Ok(())
}
