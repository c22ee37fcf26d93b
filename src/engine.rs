//! One generation of B3/S23 from a source grid into a destination grid.
//!
//! Only interior cells of the destination are written. Every interior cell
//! reads nothing but the untouched source, so rows can be filled in any order
//! and on any thread.

use rayon::prelude::*;
use crate::grid::*;

/// Live neighbor count of interior cell `(y, x)`.
///
/// Panics if `(y, x)` is not an interior cell.
pub fn neighbors(grid: &Grid, y: usize, x: usize) -> u8 {
  assert!(grid.is_interior(y, x), "({}, {}) is not an interior cell", y, x);
  count(grid.row(y - 1), grid.row(y), grid.row(y + 1), x)
}

/// The fixed Life rule: a live cell survives on 2 or 3 neighbors, a dead
/// cell is born on exactly 3.
pub fn next_state(cell: Cell, n: u8) -> Cell {
  match (cell, n) {
    (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
    (Cell::Dead, 3) => Cell::Alive,
    _ => Cell::Dead,
  }
}

/// Computes the next generation of `source` into `dest`, one row at a time.
///
/// Panics if the grids differ in shape.
pub fn advance(source: &Grid, dest: &mut Grid) {
  check_shape(source, dest);
  let last = source.height().saturating_sub(1);
  dest.rows_mut()
    .enumerate()
    .filter(|&(y, _)| y >= 1 && y < last)
    .for_each(|(y, out)| update_row(source, y, out));
}

/// Same result as [`advance`], with interior rows split across the rayon pool.
/// Returns once every row is written.
pub fn advance_par(source: &Grid, dest: &mut Grid) {
  check_shape(source, dest);
  let last = source.height().saturating_sub(1);
  let width = dest.width();
  dest.cells_mut()
    .par_chunks_mut(width)
    .enumerate()
    .filter(|&(y, _)| y >= 1 && y < last)
    .for_each(|(y, out)| update_row(source, y, out));
}

fn check_shape(source: &Grid, dest: &Grid) {
  assert!(source.same_shape(dest),
    "source is {}x{} but destination is {}x{}",
    source.height(), source.width(), dest.height(), dest.width());
}

fn update_row(source: &Grid, y: usize, out: &mut [Cell]) {
  let above = source.row(y - 1);
  let here = source.row(y);
  let below = source.row(y + 1);
  for x in 1..out.len().saturating_sub(1) {
    out[x] = next_state(here[x], count(above, here, below, x));
  }
}

fn count(above: &[Cell], here: &[Cell], below: &[Cell], x: usize) -> u8 {
  let prn = above[x - 1] as u8 + above[x] as u8 + above[x + 1] as u8;
  let srn = here[x - 1] as u8 + here[x + 1] as u8;
  let nrn = below[x - 1] as u8 + below[x] as u8 + below[x + 1] as u8;
  prn + srn + nrn
}
