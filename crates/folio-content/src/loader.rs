//! Reading content files.

use std::path::Path;

use folio_common::ContentError;
use tracing::info;

use crate::records::Content;
use crate::validation;

/// Parse content from a TOML string without validating it.
pub fn parse_content(source: &str) -> Result<Content, ContentError> {
    toml::from_str(source).map_err(|e| ContentError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load and validate content from a TOML file.
pub fn load_from_path(path: &Path) -> Result<Content, ContentError> {
    if !path.exists() {
        return Err(ContentError::FileNotFound(path.to_path_buf()));
    }

    let source = std::fs::read_to_string(path)
        .map_err(|e| ContentError::ParseError(format!("failed to read {}: {e}", path.display())))?;
    let content = parse_content(&source)?;
    validation::validate(&content)?;

    info!(
        projects = content.projects.len(),
        posts = content.posts.len(),
        skills = content.skills.len(),
        "loaded content from {}",
        path.display()
    );
    Ok(content)
}
