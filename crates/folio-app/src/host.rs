//! Headless host loop.
//!
//! Stands in for the browser's frame callback: mounts the layers, drives
//! them with a fixed-step clock while sweeping the page scroll from top to
//! bottom, then unmounts. Tick cost is measured with a `FrameTimer`.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use folio_common::{FolioError, Rect};
use folio_config::FolioConfig;
use folio_renderer::{
    rng_from_seed, scroll_progress, AnimationClock, BackdropLayer, FrameState, FrameTimer, Point,
    RevealTrigger,
};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Height of one page section, in pixels.
const SECTION_HEIGHT: f64 = 900.0;
const VIEWPORT_HEIGHT: f64 = 1080.0;

#[derive(Debug, Clone)]
pub struct HostOptions {
    pub frames: u32,
    pub fps: u32,
    pub aspect: f32,
    pub seed: Option<u64>,
    pub sections: usize,
    pub snapshot: Option<PathBuf>,
}

impl HostOptions {
    pub fn from_config(config: &FolioConfig) -> Self {
        Self {
            frames: 600,
            fps: config.performance.frame_rate,
            aspect: 16.0 / 9.0,
            seed: None,
            sections: 6,
            snapshot: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub frames: u32,
    pub elapsed_secs: f32,
    pub mean_tick_ms: f64,
    pub max_tick_ms: f64,
    pub over_budget: usize,
    pub sections_revealed: usize,
    pub backdrop: Option<FrameState>,
    pub hero: Option<FrameState>,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    summary: &'a RunSummary,
    points: &'a [Point],
}

/// Run the host loop to completion.
pub fn run(config: &FolioConfig, options: &HostOptions) -> Result<RunSummary, FolioError> {
    let mut rng = rng_from_seed(options.seed.or(config.backdrop.seed));
    let mut backdrop = BackdropLayer::mount(config, &mut rng)?;
    let mut hero_rng = rng_from_seed(options.seed.or(config.hero.seed));
    let mut hero = BackdropLayer::mount_hero(config, &mut hero_rng)?;

    let mut triggers: Vec<RevealTrigger> = (0..options.sections)
        .map(|_| RevealTrigger::from_config(&config.reveal))
        .collect();
    let page_height = options.sections as f64 * SECTION_HEIGHT;
    let scroll_travel = (page_height - VIEWPORT_HEIGHT).max(0.0);

    let dt = Duration::from_secs_f64(1.0 / f64::from(options.fps.max(1)));
    let budget_ms = config.performance.frame_budget_ms;
    let mut clock = AnimationClock::new();
    let mut timer = FrameTimer::new();
    let mut last = None;
    let mut last_hero = None;

    info!(frames = options.frames, fps = options.fps, "host loop starting");

    for i in 0..options.frames {
        let sweep = if options.frames > 1 {
            f64::from(i) / f64::from(options.frames - 1)
        } else {
            0.0
        };
        let scroll_y = sweep * scroll_travel;
        let progress = scroll_progress(scroll_y, 0.0, page_height, VIEWPORT_HEIGHT);
        let elapsed = clock.elapsed_secs();

        let start = Instant::now();
        let state = backdrop.frame(elapsed, progress, options.aspect);
        let hero_state = hero.frame(elapsed, progress, options.aspect);
        for (index, trigger) in triggers.iter_mut().enumerate() {
            let top = index as f64 * SECTION_HEIGHT - scroll_y;
            trigger.observe(Rect::new(0.0, top, 1.0, SECTION_HEIGHT), VIEWPORT_HEIGHT);
        }
        let cost = start.elapsed();
        timer.record(cost);

        if cost.as_secs_f64() * 1000.0 > budget_ms {
            warn!(
                frame = i,
                cost_ms = cost.as_secs_f64() * 1000.0,
                budget_ms,
                "frame over budget"
            );
        }
        if i % 60 == 0 {
            debug!(
                frame = i,
                elapsed,
                progress,
                parallax = state.parallax_percent,
                "frame"
            );
        }

        last = Some(state);
        last_hero = Some(hero_state);
        clock.tick(dt);
    }

    let summary = RunSummary {
        frames: options.frames,
        elapsed_secs: clock.elapsed_secs(),
        mean_tick_ms: timer.frame_time_ms(),
        max_tick_ms: timer.max_frame_time_ms(),
        over_budget: timer.over_budget(budget_ms),
        sections_revealed: triggers.iter().filter(|t| t.is_revealed()).count(),
        backdrop: last,
        hero: last_hero,
    };

    info!(
        frames = summary.frames,
        mean_tick_ms = summary.mean_tick_ms,
        max_tick_ms = summary.max_tick_ms,
        over_budget = summary.over_budget,
        revealed = summary.sections_revealed,
        "host loop finished"
    );

    if let Some(path) = &options.snapshot {
        write_snapshot(path, &summary, backdrop.points())?;
    }

    hero.unmount();
    backdrop.unmount();
    Ok(summary)
}

fn write_snapshot(path: &Path, summary: &RunSummary, points: &[Point]) -> Result<(), FolioError> {
    let json = serde_json::to_string_pretty(&Snapshot { summary, points })
        .map_err(|e| FolioError::Other(format!("failed to serialize snapshot: {e}")))?;
    std::fs::write(path, json)?;
    info!("snapshot written to {}", path.display());
    Ok(())
}
