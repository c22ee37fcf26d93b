use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::Write;
use std::thread;
use std::time::Duration;
use crate::config::Config;
use crate::error::*;
use crate::generations::Generations;
use crate::grid::Grid;
use crate::render::Renderer;

/// The console loop: draw the current generation, wait, step.
#[derive(Debug, Clone)]
pub struct Display {
  renderer: Renderer,
  delay: Duration,
  clear_screen: bool,
  iterations: Option<u64>,
}

impl Display {
  pub fn new(config: &Config) -> Self {
    Self {
      renderer: Renderer::new(config.glyphs, config.margin),
      delay: config.delay,
      clear_screen: config.clear_screen,
      iterations: config.iterations,
    }
  }

  /// Each pass draws one frame and advances one generation, so `n` iterations
  /// show generations `0..n` and leave generation `n` current.
  pub fn run(&self, gens: &mut Generations, out: &mut impl Write) -> Result<()> {
    let mut remaining = self.iterations;
    while remaining != Some(0) {
      self.frame(gens.current(), out)?;
      if !self.delay.is_zero() {
        thread::sleep(self.delay);
      }
      gens.step();

      if let Some(n) = remaining.as_mut() {
        *n -= 1;
      }
    }
    Ok(())
  }

  fn frame(&self, grid: &Grid, out: &mut impl Write) -> Result<()> {
    if self.clear_screen {
      queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    self.renderer.write(grid, out)?;
    out.flush()?;
    Ok(())
  }
}
