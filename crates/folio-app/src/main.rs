mod cli;
mod host;
mod outline;

use std::path::PathBuf;

use folio_config::FolioConfig;
use folio_content::{Content, Page};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse();

    // Config comes first so its log level can seed the filter.
    let (config, config_error) = match &args.config {
        Some(path) => match folio_config::load_config_from(path) {
            Ok(config) => (config, None),
            Err(e) => (FolioConfig::default(), Some(e)),
        },
        None => match folio_config::load_config() {
            Ok(config) => (config, None),
            Err(e) => (FolioConfig::default(), Some(e)),
        },
    };

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.as_directive().to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();

    tracing::info!("folio v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let content_path = args
        .content
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.content.path));
    let content = folio_content::load_from_path(&content_path).unwrap_or_else(|e| {
        tracing::warn!("Content load failed, sections will show placeholders: {e}");
        Content::default()
    });
    let page = Page::build(&content, config.content.show_certifications);

    let mut options = host::HostOptions::from_config(&config);
    options.frames = args.frames;
    options.aspect = args.aspect;
    options.seed = args.seed;
    options.snapshot = args.snapshot.clone();
    options.sections = page.outline().len();
    if let Some(fps) = args.fps {
        options.fps = fps;
    }

    match host::run(&config, &options) {
        Ok(summary) => {
            tracing::info!(
                "Ran {} frames ({:.2}s simulated), mean tick {:.3} ms",
                summary.frames,
                summary.elapsed_secs,
                summary.mean_tick_ms
            );
        }
        Err(e) => {
            tracing::error!("Host loop failed: {e}");
            std::process::exit(1);
        }
    }

    if !args.no_outline {
        print!("{}", outline::render(&content, &page, &config.reveal));
    }
    tracing::info!("Shutdown complete");
}
