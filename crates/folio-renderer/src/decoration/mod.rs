//! Decorations: starfield backdrop, hero network, or null.
//!
//! Which decorations exist is selected by config. Each one owns its points
//! and writes per-frame data into the shared uniform block.

mod network;
mod null;
mod starfield;
mod types;

pub use network::*;
pub use null::*;
pub use starfield::*;
pub use types::*;

use folio_common::RendererError;
use folio_config::schema::FolioConfig;
use rand::Rng;

/// Create the page backdrop from config.
pub fn create_backdrop<R: Rng + ?Sized>(
    config: &FolioConfig,
    rng: &mut R,
) -> Result<Box<dyn Decoration>, RendererError> {
    if !config.backdrop.enabled {
        return Ok(Box::new(NullDecoration::new()));
    }
    Ok(Box::new(Starfield::from_config(&config.backdrop, rng)?))
}

/// Create the hero section decoration from config.
pub fn create_hero<R: Rng + ?Sized>(
    config: &FolioConfig,
    rng: &mut R,
) -> Result<Box<dyn Decoration>, RendererError> {
    if !config.hero.enabled {
        return Ok(Box::new(NullDecoration::new()));
    }
    Ok(Box::new(NeuralNetwork::from_config(&config.hero, rng)?))
}
