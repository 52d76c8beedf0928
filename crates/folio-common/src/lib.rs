pub mod errors;
pub mod types;

pub use errors::{ConfigError, ContentError, FolioError, RendererError};
pub use types::{Color, Rect};

pub type Result<T> = std::result::Result<T, FolioError>;
