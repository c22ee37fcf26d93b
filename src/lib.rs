//! Conway's Game of Life on a fixed-size grid with a permanently dead border,
//! double buffered and drawn to a text console.

pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod generations;
pub mod grid;
pub mod pattern;
pub mod render;
pub mod seed;

use std::io::Write;
use tracing::{info, warn};

pub use config::{Config, SeedSource};
pub use display::Display;
pub use error::{Error, Result};
pub use generations::Generations;
pub use grid::{Cell, Grid};
pub use render::{Glyphs, Renderer};
pub use seed::{FileSeed, PatternSeed, RandomSeed, Seed, SeedReport};

/// Allocates a cleared grid for `config` and fills its interior with the
/// configured seed.
pub fn seed_grid(config: &Config) -> Result<Grid> {
  let mut grid = Grid::visible(config.height, config.width)?;
  grid.clear();

  let report = match &config.seed {
    SeedSource::Random { rng_seed: Some(seed) } => {
      RandomSeed::seeded(config.probability, *seed)?.populate(&mut grid)?
    }
    SeedSource::Random { rng_seed: None } => {
      RandomSeed::from_entropy(config.probability)?.populate(&mut grid)?
    }
    SeedSource::File { path, strict } => {
      FileSeed::open(path)?.strict(*strict).populate(&mut grid)?
    }
    SeedSource::Pattern(name) => {
      PatternSeed::named(name)?.populate(&mut grid)?
    }
  };

  if report.skipped > 0 {
    warn!(skipped = report.skipped, "some seed input was not applied");
  }
  info!(alive = report.alive, height = config.height, width = config.width, "seeded grid");
  Ok(grid)
}

/// Validates `config`, seeds a grid and runs the display loop on `out`.
/// Returns the generations as they stand when the loop ends.
pub fn run(config: &Config, out: &mut impl Write) -> Result<Generations> {
  config.validate()?;

  if let Some(threads) = config.threads {
    if let Err(err) = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global() {
      warn!(%err, threads, "keeping the existing rayon pool");
    }
  }

  let grid = seed_grid(config)?;
  let mut gens = Generations::new(grid)?.parallel(config.parallel);
  Display::new(config).run(&mut gens, out)?;
  Ok(gens)
}
