use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
  /// The cell buffer for a `height` x `width` grid could not be obtained.
  #[error("cannot allocate a {height}x{width} grid")]
  Allocation {
    height: usize,
    width: usize,
  },

  #[error("cannot open seed file {}: {source}", path.display())]
  FileAccess {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// `line` is 1-based.
  #[error("malformed seed line {line}: {text:?}")]
  MalformedSeedLine {
    line: usize,
    text: String,
  },

  #[error("invalid configuration: {0}")]
  Configuration(String),

  #[error(transparent)]
  Io(#[from] io::Error),
}
