//! Strategies that fill the interior of a freshly cleared grid.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};
use crate::error::*;
use crate::grid::*;
use crate::pattern::{self, Pattern};

/// Outcome of one `populate` call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
  /// Cells set alive.
  pub alive: usize,
  /// Input lines or pattern cells that were not applied.
  pub skipped: usize,
}

pub trait Seed {
  /// Fills the interior of `grid`. The border is never touched.
  fn populate(&mut self, grid: &mut Grid) -> Result<SeedReport>;
}

pub struct RandomSeed<R> {
  probability: f64,
  rng: R,
}

impl<R: Rng> RandomSeed<R> {
  pub fn new(probability: f64, rng: R) -> Result<Self> {
    if !(0.0..=1.0).contains(&probability) {
      return Err(Error::Configuration(
        format!("live-cell probability must be within [0, 1], got {}", probability)));
    }
    Ok(Self {
      probability,
      rng,
    })
  }
}

impl RandomSeed<StdRng> {
  /// Deterministic for a given `seed`.
  pub fn seeded(probability: f64, seed: u64) -> Result<Self> {
    Self::new(probability, StdRng::seed_from_u64(seed))
  }

  /// Seeded from the wall clock and the process id, so runs differ.
  pub fn from_entropy(probability: f64) -> Result<Self> {
    let nanos = SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .map(|d| d.as_nanos() as u64)
      .unwrap_or_default();
    Self::seeded(probability, nanos ^ u64::from(process::id()))
  }
}

impl<R: Rng> Seed for RandomSeed<R> {
  fn populate(&mut self, grid: &mut Grid) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    for (y, x) in grid.interior().collect::<Vec<_>>() {
      let alive = self.rng.gen_bool(self.probability);
      if alive {
        report.alive += 1;
      }
      grid.set(y, x, Cell::from(alive));
    }
    Ok(report)
  }
}

/// Reads `y x` pairs, one per line, in full-grid coordinates.
///
/// A line that does not start with two integers, or names a cell outside the
/// interior, is malformed. Lenient readers (the default) skip it with a
/// warning; strict readers fail on it. Blank lines are ignored and anything
/// after the two integers is not looked at.
pub struct FileSeed<R> {
  reader: R,
  strict: bool,
  line_re: Regex,
}

impl FileSeed<BufReader<File>> {
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::FileAccess {
      path: path.to_owned(),
      source,
    })?;
    Ok(Self::from_reader(BufReader::new(file)))
  }
}

impl<R: BufRead> FileSeed<R> {
  pub fn from_reader(reader: R) -> Self {
    Self {
      reader,
      strict: false,
      line_re: Regex::new(r"^\s*([+-]?\d+)\s+([+-]?\d+)(?:\s|$)")
        .expect("seed line regex is valid"),
    }
  }

  pub fn strict(mut self, strict: bool) -> Self {
    self.strict = strict;
    self
  }

  fn parse(&self, text: &str) -> Option<(i64, i64)> {
    let caps = self.line_re.captures(text)?;
    let y = caps.get(1)?.as_str().parse().ok()?;
    let x = caps.get(2)?.as_str().parse().ok()?;
    Some((y, x))
  }
}

fn interior_cell(grid: &Grid, y: i64, x: i64) -> Option<(usize, usize)> {
  if y < 0 || x < 0 {
    return None;
  }
  let (y, x) = (y as usize, x as usize);
  if grid.is_interior(y, x) { Some((y, x)) } else { None }
}

impl<R: BufRead> Seed for FileSeed<R> {
  fn populate(&mut self, grid: &mut Grid) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    let mut buf = Vec::new();
    let mut line = 0;

    loop {
      buf.clear();
      if self.reader.read_until(b'\n', &mut buf)? == 0 {
        break;
      }
      line += 1;

      let text = String::from_utf8_lossy(&buf);
      let text = text.trim_end();
      if text.trim().is_empty() {
        continue;
      }

      let cell = std::str::from_utf8(&buf)
        .ok()
        .and_then(|text| self.parse(text))
        .and_then(|(y, x)| interior_cell(grid, y, x));
      match cell {
        Some((y, x)) => {
          debug!(y, x, "loaded cell");
          grid.set(y, x, Cell::Alive);
          report.alive += 1;
        }
        None if self.strict => {
          return Err(Error::MalformedSeedLine {
            line,
            text: text.to_owned(),
          });
        }
        None => {
          warn!(line, text, "skipping malformed seed line");
          report.skipped += 1;
        }
      }
    }

    Ok(report)
  }
}

/// Places a built-in pattern in the middle of the interior, clipping
/// whatever does not fit.
pub struct PatternSeed {
  pattern: &'static Pattern,
}

impl PatternSeed {
  pub fn new(pattern: &'static Pattern) -> Self {
    Self {
      pattern,
    }
  }

  pub fn named(name: &str) -> Result<Self> {
    pattern::find(name)
      .map(Self::new)
      .ok_or_else(|| Error::Configuration(format!(
        "unknown pattern {:?}, expected one of: {}",
        name, pattern::names().collect::<Vec<_>>().join(", "))))
  }
}

impl Seed for PatternSeed {
  fn populate(&mut self, grid: &mut Grid) -> Result<SeedReport> {
    let (h, w) = self.pattern.size();
    let top = 1 + grid.visible_height().saturating_sub(h) / 2;
    let left = 1 + grid.visible_width().saturating_sub(w) / 2;

    let mut report = SeedReport::default();
    for &(dy, dx) in self.pattern.cells {
      let (y, x) = (top + dy, left + dx);
      if grid.is_interior(y, x) {
        grid.set(y, x, Cell::Alive);
        report.alive += 1;
      } else {
        report.skipped += 1;
      }
    }
    Ok(report)
  }
}
