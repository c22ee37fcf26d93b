use itertools::iproduct;
use lifegrid::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Write;

fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
  iproduct!(0..grid.height(), 0..grid.width())
    .filter(|&(y, x)| grid.get(y, x).is_alive())
    .collect()
}

#[test]
fn round_trip() {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  writeln!(file, "2 3").unwrap();
  writeln!(file, "5 7").unwrap();
  file.flush().unwrap();

  let mut grid = Grid::new(10, 10).unwrap();
  let report = FileSeed::open(file.path()).unwrap().populate(&mut grid).unwrap();

  assert_eq!(report, SeedReport { alive: 2, skipped: 0 });
  assert_eq!(alive_cells(&grid), vec![(2, 3), (5, 7)]);
}

#[test]
fn glider_fixture() {
  let mut grid = Grid::visible(8, 8).unwrap();
  FileSeed::open("tests/fixtures/glider.life").unwrap().populate(&mut grid).unwrap();
  assert_eq!(alive_cells(&grid), vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
}

#[test]
fn sloppy_fixture_is_lenient_by_default() {
  let mut grid = Grid::visible(8, 8).unwrap();
  let report = FileSeed::open("tests/fixtures/sloppy.life")
    .unwrap()
    .populate(&mut grid)
    .unwrap();
  assert_eq!(report, SeedReport { alive: 3, skipped: 2 });
  assert_eq!(alive_cells(&grid), vec![(3, 3), (3, 4), (3, 5)]);
}

#[test]
fn sloppy_fixture_fails_when_strict() {
  let mut grid = Grid::visible(8, 8).unwrap();
  let err = FileSeed::open("tests/fixtures/sloppy.life")
    .unwrap()
    .strict(true)
    .populate(&mut grid)
    .unwrap_err();
  assert!(matches!(err, Error::MalformedSeedLine { line: 3, .. }));
}

#[test]
fn missing_file_is_a_startup_error() {
  let dir = tempfile::tempdir().unwrap();
  let config = Config {
    seed: SeedSource::File {
      path: dir.path().join("missing.life"),
      strict: false,
    },
    ..Config::default()
  };
  let err = seed_grid(&config).unwrap_err();
  assert!(matches!(err, Error::FileAccess { .. }));
  assert!(err.to_string().contains("missing.life"));
}

#[test]
fn file_seed_ignores_probability() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("one.life");
  fs::write(&path, "4 4\n").unwrap();
  let config = Config {
    height: 6,
    width: 6,
    probability: 1.0,
    seed: SeedSource::File {
      path,
      strict: true,
    },
    ..Config::default()
  };
  let grid = seed_grid(&config).unwrap();
  assert_eq!(alive_cells(&grid), vec![(4, 4)]);
}
