use itertools::iproduct;
use std::slice::ChunksMut;
use crate::error::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
  Dead = 0,
  Alive = 1,
}

impl Cell {
  pub fn is_alive(self) -> bool {
    self == Cell::Alive
  }
}

impl Default for Cell {
  fn default() -> Self {
    Cell::Dead
  }
}

impl From<bool> for Cell {
  fn from(alive: bool) -> Self {
    if alive { Cell::Alive } else { Cell::Dead }
  }
}

/// A `height` x `width` block of cells stored row-major in one buffer.
///
/// The outermost ring of cells is the border. Nothing in this crate ever sets
/// a border cell alive, so neighbor lookups for interior cells never need a
/// bounds check of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
  height: usize,
  width: usize,
  cells: Vec<Cell>,
}

impl Grid {
  /// Allocates an all-dead grid, border included in `height` and `width`.
  pub fn new(height: usize, width: usize) -> Result<Self> {
    if height == 0 || width == 0 {
      return Err(Error::Configuration(
        format!("grid dimensions must be non-zero, got {}x{}", height, width)));
    }

    let len = height.checked_mul(width)
      .ok_or(Error::Allocation { height, width })?;
    let mut cells = Vec::new();
    cells.try_reserve_exact(len)
      .map_err(|_| Error::Allocation { height, width })?;
    cells.resize(len, Cell::Dead);

    Ok(Self {
      height,
      width,
      cells,
    })
  }

  /// Allocates a grid whose interior is `visible_height` x `visible_width`.
  pub fn visible(visible_height: usize, visible_width: usize) -> Result<Self> {
    let height = visible_height.checked_add(2);
    let width = visible_width.checked_add(2);
    match (height, width) {
      (Some(height), Some(width)) => Self::new(height, width),
      _ => Err(Error::Allocation {
        height: visible_height,
        width: visible_width,
      }),
    }
  }

  pub fn height(&self) -> usize {
    self.height
  }

  pub fn width(&self) -> usize {
    self.width
  }

  pub fn visible_height(&self) -> usize {
    self.height.saturating_sub(2)
  }

  pub fn visible_width(&self) -> usize {
    self.width.saturating_sub(2)
  }

  pub fn clear(&mut self) {
    self.cells.iter_mut().for_each(|c| *c = Cell::Dead);
  }

  /// Panics if `(y, x)` lies outside the grid.
  pub fn get(&self, y: usize, x: usize) -> Cell {
    self.cells[self.index(y, x)]
  }

  /// Panics if `(y, x)` lies outside the grid.
  pub fn set(&mut self, y: usize, x: usize, cell: Cell) {
    let i = self.index(y, x);
    self.cells[i] = cell;
  }

  pub fn try_get(&self, y: usize, x: usize) -> Option<Cell> {
    if y < self.height && x < self.width {
      Some(self.cells[y * self.width + x])
    } else {
      None
    }
  }

  pub fn is_interior(&self, y: usize, x: usize) -> bool {
    y >= 1 && y + 1 < self.height && x >= 1 && x + 1 < self.width
  }

  /// Coordinates of every interior cell, row by row.
  pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> {
    iproduct!(1..self.height.saturating_sub(1), 1..self.width.saturating_sub(1))
  }

  pub fn row(&self, y: usize) -> &[Cell] {
    assert!(y < self.height, "row {} out of range for {}x{} grid",
      y, self.height, self.width);
    &self.cells[y * self.width..(y + 1) * self.width]
  }

  pub(crate) fn rows_mut(&mut self) -> ChunksMut<'_, Cell> {
    self.cells.chunks_mut(self.width)
  }

  pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
    &mut self.cells
  }

  /// Number of live interior cells.
  pub fn population(&self) -> usize {
    self.interior()
      .filter(|&(y, x)| self.get(y, x).is_alive())
      .count()
  }

  pub fn border_is_dead(&self) -> bool {
    iproduct!(0..self.height, 0..self.width)
      .filter(|&(y, x)| !self.is_interior(y, x))
      .all(|(y, x)| !self.get(y, x).is_alive())
  }

  /// Compares interiors only. Grids of different size are never equal.
  pub fn interior_eq(&self, other: &Grid) -> bool {
    self.height == other.height && self.width == other.width &&
      self.interior().all(|(y, x)| self.get(y, x) == other.get(y, x))
  }

  pub(crate) fn same_shape(&self, other: &Grid) -> bool {
    self.height == other.height && self.width == other.width
  }

  fn index(&self, y: usize, x: usize) -> usize {
    assert!(y < self.height && x < self.width,
      "cell ({}, {}) out of range for {}x{} grid", y, x, self.height, self.width);
    y * self.width + x
  }
}
