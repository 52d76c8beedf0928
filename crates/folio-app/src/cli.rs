use std::path::PathBuf;

use clap::Parser;

/// folio: headless host for the animated portfolio page.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Content file path override.
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    pub frames: u32,

    /// Frame rate override.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Viewport aspect ratio (width / height).
    #[arg(long, default_value_t = 16.0 / 9.0)]
    pub aspect: f32,

    /// Seed for reproducible point clouds.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a JSON snapshot of the final frame to this path.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Skip printing the page outline.
    #[arg(long)]
    pub no_outline: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
