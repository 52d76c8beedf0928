//! Configuration schema types for folio.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the shipped site.

mod backdrop;
mod motion;
mod system;

pub use backdrop::*;
pub use motion::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for folio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct FolioConfig {
    pub backdrop: BackdropConfig,
    pub parallax: ParallaxConfig,
    pub camera: CameraConfig,
    pub hero: HeroConfig,
    pub reveal: RevealConfig,
    pub performance: PerformanceConfig,
    pub logging: LoggingConfig,
    pub content: ContentSourceConfig,
}

// =============================================================================
// Tests
// =============================================================================
