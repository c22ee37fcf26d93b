use std::io::{self, Write};
use itertools::Itertools;
use crate::grid::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
  pub alive: char,
  pub dead: char,
}

impl Default for Glyphs {
  fn default() -> Self {
    Self {
      alive: '*',
      dead: ' ',
    }
  }
}

/// Turns the interior of a grid into a text frame: one line per interior row,
/// then an empty line.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
  glyphs: Glyphs,
  /// Spaces written before every row.
  margin: usize,
}

impl Renderer {
  pub fn new(glyphs: Glyphs, margin: usize) -> Self {
    Self {
      glyphs,
      margin,
    }
  }

  pub fn render(&self, grid: &Grid) -> String {
    let indent = " ".repeat(self.margin);
    let mut frame = (1..grid.height().saturating_sub(1))
      .map(|y| format!("{}{}\n", indent, self.row(grid, y)))
      .join("");
    frame.push('\n');
    frame
  }

  pub fn write(&self, grid: &Grid, out: &mut impl Write) -> io::Result<()> {
    out.write_all(self.render(grid).as_bytes())
  }

  fn row(&self, grid: &Grid, y: usize) -> String {
    grid.row(y)
      .iter()
      .skip(1)
      .take(grid.visible_width())
      .map(|&c| if c.is_alive() { self.glyphs.alive } else { self.glyphs.dead })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn sample() -> Grid {
    let mut grid = Grid::visible(3, 4).unwrap();
    grid.set(1, 1, Cell::Alive);
    grid.set(2, 2, Cell::Alive);
    grid.set(2, 3, Cell::Alive);
    grid.set(3, 4, Cell::Alive);
    grid
  }

  #[test]
  fn default_glyphs() {
    assert_eq!(Renderer::default().render(&sample()), "*   \n ** \n   *\n\n");
  }

  #[test]
  fn custom_glyphs_and_margin() {
    let renderer = Renderer::new(Glyphs { alive: '#', dead: '.' }, 2);
    assert_eq!(renderer.render(&sample()), "  #...\n  .##.\n  ...#\n\n");
  }

  #[test]
  fn border_is_not_drawn() {
    let mut grid = Grid::new(4, 4).unwrap();
    grid.set(0, 0, Cell::Alive);
    grid.set(3, 3, Cell::Alive);
    assert_eq!(Renderer::default().render(&grid), "  \n  \n\n");
  }

  #[test]
  fn empty_interior_is_blank_frame() {
    let grid = Grid::new(2, 2).unwrap();
    assert_eq!(Renderer::default().render(&grid), "\n");
  }

  #[test]
  fn write_matches_render() {
    let mut out = Vec::new();
    Renderer::default().write(&sample(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), Renderer::default().render(&sample()));
  }
}
