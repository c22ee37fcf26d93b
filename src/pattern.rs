/// A small named pattern. `cells` are `(row, col)` offsets from the
/// pattern's top-left corner.
#[derive(Debug)]
pub struct Pattern {
  pub name: &'static str,
  pub cells: &'static [(usize, usize)],
}

impl Pattern {
  /// `(rows, cols)` of the pattern's bounding box.
  pub fn size(&self) -> (usize, usize) {
    self.cells.iter().fold((0, 0), |(h, w), &(y, x)| (h.max(y + 1), w.max(x + 1)))
  }
}

pub const PATTERNS: &[Pattern] = &[
  Pattern {
    name: "glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
  },
  Pattern {
    name: "blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
  },
  Pattern {
    name: "block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
  },
  Pattern {
    name: "toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
  },
  Pattern {
    name: "beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
  },
  Pattern {
    name: "pulsar",
    cells: &[
      (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
      (2, 0), (2, 5), (2, 7), (2, 12),
      (3, 0), (3, 5), (3, 7), (3, 12),
      (4, 0), (4, 5), (4, 7), (4, 12),
      (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
      (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
      (8, 0), (8, 5), (8, 7), (8, 12),
      (9, 0), (9, 5), (9, 7), (9, 12),
      (10, 0), (10, 5), (10, 7), (10, 12),
      (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
    ],
  },
  Pattern {
    name: "r-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
  },
  Pattern {
    name: "gosper-gun",
    cells: &[
      (4, 0), (4, 1), (5, 0), (5, 1),
      (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
      (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
      (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
      (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
      (2, 34), (3, 34), (2, 35), (3, 35),
    ],
  },
];

/// Looks up a built-in pattern, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Pattern> {
  PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

pub fn names() -> impl Iterator<Item = &'static str> {
  PATTERNS.iter().map(|p| p.name)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lookup() {
    assert_eq!(find("Glider").map(|p| p.cells.len()), Some(5));
    assert!(find("spaceship").is_none());
  }

  #[test]
  fn sizes() {
    assert_eq!(find("blinker").unwrap().size(), (1, 3));
    assert_eq!(find("pulsar").unwrap().size(), (13, 13));
    assert_eq!(find("gosper-gun").unwrap().size(), (9, 36));
  }

  #[test]
  fn names_are_unique() {
    let mut all: Vec<_> = names().collect();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), PATTERNS.len());
  }
}
