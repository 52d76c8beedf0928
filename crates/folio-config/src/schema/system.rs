//! System configuration types: performance, logging, and content source.

use serde::{Deserialize, Serialize};

/// Frame pacing for the host loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub frame_rate: u32,
    /// Per-frame tick cost that triggers a warning, in milliseconds.
    pub frame_budget_ms: f64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            frame_budget_ms: 1.0,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// The directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

/// Where the portfolio content data file lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSourceConfig {
    /// Path to the content TOML. Relative paths resolve against the working directory.
    pub path: String,
    /// Show the certifications block in the skills showcase.
    pub show_certifications: bool,
}

impl Default for ContentSourceConfig {
    fn default() -> Self {
        Self {
            path: "assets/content.toml".into(),
            show_certifications: true,
        }
    }
}
