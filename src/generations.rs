use tracing::trace;
use crate::engine;
use crate::error::*;
use crate::grid::*;

/// Two same-sized grids. One is the current generation, the other receives
/// the next; `swap` trades the roles without copying cells.
#[derive(Debug, Clone)]
pub struct Generations {
  grids: [Grid; 2],
  current: usize,
  generation: u64,
  parallel: bool,
}

impl Generations {
  /// Takes the seeded grid as generation 0 and allocates a dead partner of
  /// the same size.
  pub fn new(seeded: Grid) -> Result<Self> {
    let next = Grid::new(seeded.height(), seeded.width())?;
    Ok(Self {
      grids: [seeded, next],
      current: 0,
      generation: 0,
      parallel: false,
    })
  }

  /// Use `engine::advance_par` instead of `engine::advance`.
  pub fn parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }

  pub fn current(&self) -> &Grid {
    &self.grids[self.current]
  }

  pub fn next(&self) -> &Grid {
    &self.grids[self.current ^ 1]
  }

  pub fn generation(&self) -> u64 {
    self.generation
  }

  pub fn swap(&mut self) {
    self.current ^= 1;
  }

  /// Advances one generation and makes the result current.
  pub fn step(&mut self) {
    let (a, b) = self.grids.split_at_mut(1);
    let (source, dest) = if self.current == 0 {
      (&a[0], &mut b[0])
    } else {
      (&b[0], &mut a[0])
    };

    if self.parallel {
      engine::advance_par(source, dest);
    } else {
      engine::advance(source, dest);
    }

    self.swap();
    self.generation += 1;
    trace!(generation = self.generation, population = self.current().population());
  }

  pub fn run(&mut self, generations: u64) {
    for _ in 0..generations {
      self.step();
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn glider() -> Grid {
    let mut grid = Grid::visible(8, 8).unwrap();
    for &(y, x) in &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)] {
      grid.set(y, x, Cell::Alive);
    }
    grid
  }

  #[test]
  fn starts_at_seed() {
    let gens = Generations::new(glider()).unwrap();
    assert_eq!(gens.generation(), 0);
    assert_eq!(gens.current(), &glider());
    assert_eq!(gens.next().population(), 0);
  }

  #[test]
  fn swap_exchanges_roles() {
    let mut gens = Generations::new(glider()).unwrap();
    gens.swap();
    assert_eq!(gens.next(), &glider());
    assert_eq!(gens.current().population(), 0);
    gens.swap();
    assert_eq!(gens.current(), &glider());
  }

  #[test]
  fn glider_moves_diagonally() {
    let mut gens = Generations::new(glider()).unwrap();
    gens.run(4);
    assert_eq!(gens.generation(), 4);

    let mut moved = Grid::visible(8, 8).unwrap();
    for &(y, x) in &[(2, 3), (3, 4), (4, 2), (4, 3), (4, 4)] {
      moved.set(y, x, Cell::Alive);
    }
    assert_eq!(gens.current(), &moved);
  }

  #[test]
  fn step_matches_engine() {
    let mut gens = Generations::new(glider()).unwrap();
    let mut expected = glider();
    for _ in 0..6 {
      let mut dest = Grid::new(expected.height(), expected.width()).unwrap();
      engine::advance(&expected, &mut dest);
      expected = dest;
      gens.step();
      assert_eq!(gens.current(), &expected);
    }
  }

  #[test]
  fn parallel_and_serial_agree() {
    let mut serial = Generations::new(glider()).unwrap();
    let mut parallel = Generations::new(glider()).unwrap().parallel(true);
    for _ in 0..12 {
      serial.step();
      parallel.step();
      assert_eq!(serial.current(), parallel.current());
    }
  }

  #[test]
  fn border_survives_many_generations() {
    let mut grid = Grid::visible(10, 10).unwrap();
    for (y, x) in grid.interior().collect::<Vec<_>>() {
      grid.set(y, x, Cell::from((y * 7 + x * 3) % 5 < 2));
    }
    let mut gens = Generations::new(grid).unwrap();
    for _ in 0..50 {
      gens.step();
      assert!(gens.current().border_is_dead());
      assert!(gens.next().border_is_dead());
    }
  }
}
