use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("content parse error: {0}")]
    ParseError(String),

    #[error("content validation error: {0}")]
    ValidationError(String),

    #[error("unknown form field: {0}")]
    UnknownField(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("invalid sphere shell: inner radius {inner} must be >= 0 and below outer radius {outer}")]
    InvalidShell { inner: f32, outer: f32 },

    #[error("invalid box extents: {0:?}")]
    InvalidBox([f32; 3]),
}

#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Renderer(#[from] RendererError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
