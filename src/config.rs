use std::path::PathBuf;
use std::time::Duration;
use crate::error::*;
use crate::pattern;
use crate::render::Glyphs;

/// Where generation 0 comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedSource {
  /// Each interior cell is alive with `Config::probability`. Without a fixed
  /// `rng_seed` every run differs.
  Random {
    rng_seed: Option<u64>,
  },
  /// A file of `y x` lines.
  File {
    path: PathBuf,
    strict: bool,
  },
  /// A built-in pattern from [`pattern::PATTERNS`].
  Pattern(String),
}

impl Default for SeedSource {
  fn default() -> Self {
    SeedSource::Random {
      rng_seed: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  /// Visible rows, border excluded.
  pub height: usize,
  /// Visible columns, border excluded.
  pub width: usize,
  /// Pause between frames.
  pub delay: Duration,
  /// `None` runs until the process is stopped.
  pub iterations: Option<u64>,
  pub probability: f64,
  pub glyphs: Glyphs,
  pub margin: usize,
  pub seed: SeedSource,
  pub parallel: bool,
  /// Size of the rayon pool; `None` leaves rayon's default.
  pub threads: Option<usize>,
  pub clear_screen: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      height: 60,
      width: 140,
      delay: Duration::from_micros(100_000),
      iterations: None,
      probability: 0.5,
      glyphs: Glyphs::default(),
      margin: 0,
      seed: SeedSource::default(),
      parallel: true,
      threads: None,
      clear_screen: true,
    }
  }
}

impl Config {
  pub fn validate(&self) -> Result<()> {
    if self.height == 0 || self.width == 0 {
      return Err(Error::Configuration(format!(
        "visible size must be at least 1x1, got {}x{}", self.height, self.width)));
    }
    if !(0.0..=1.0).contains(&self.probability) {
      return Err(Error::Configuration(format!(
        "live-cell probability must be within [0, 1], got {}", self.probability)));
    }
    if self.threads == Some(0) {
      return Err(Error::Configuration("thread count must be positive".to_owned()));
    }
    for &glyph in &[self.glyphs.alive, self.glyphs.dead] {
      if glyph.is_control() {
        return Err(Error::Configuration(format!("glyph {:?} is not printable", glyph)));
      }
    }
    if let SeedSource::Pattern(name) = &self.seed {
      if pattern::find(name).is_none() {
        return Err(Error::Configuration(format!("unknown pattern {:?}", name)));
      }
    }
    Ok(())
  }
}
