use anyhow::Result;
use clap::Parser;
use lifegrid::{Config, Glyphs, SeedSource};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "lifegrid")]
#[command(version)]
#[command(about = "Conway's Game of Life in the terminal")]
struct Cli {
  /// Visible rows
  #[arg(short = 'H', long, default_value_t = 60)]
  height: usize,

  /// Visible columns
  #[arg(short = 'W', long, default_value_t = 140)]
  width: usize,

  /// Delay between frames, in microseconds
  #[arg(short, long, default_value_t = 100_000)]
  delay: u64,

  /// Number of generations to run (runs forever when omitted)
  #[arg(short = 'n', long)]
  iterations: Option<u64>,

  /// Probability that a randomly seeded cell starts alive
  #[arg(short, long, default_value_t = 0.5)]
  probability: f64,

  #[arg(long, default_value_t = '*')]
  alive: char,

  #[arg(long, default_value_t = ' ')]
  dead: char,

  /// Spaces before every row
  #[arg(long, default_value_t = 0)]
  margin: usize,

  /// Seed file of `y x` lines, in coordinates that include the border
  #[arg(short, long, conflicts_with = "pattern")]
  file: Option<PathBuf>,

  /// Fail on malformed seed file lines instead of skipping them
  #[arg(long, requires = "file")]
  strict_seed: bool,

  /// Built-in pattern placed in the middle of the grid
  #[arg(long)]
  pattern: Option<String>,

  /// Fixed seed for random seeding
  #[arg(long, conflicts_with_all = ["file", "pattern"])]
  seed: Option<u64>,

  /// Compute each generation on one thread
  #[arg(long)]
  serial: bool,

  /// Worker threads for the parallel update
  #[arg(long, conflicts_with = "serial")]
  threads: Option<usize>,

  /// Do not clear the screen before each frame
  #[arg(long)]
  no_clear: bool,
}

impl Cli {
  fn into_config(self) -> Config {
    let seed = match (self.file, self.pattern) {
      (Some(path), _) => SeedSource::File {
        path,
        strict: self.strict_seed,
      },
      (None, Some(name)) => SeedSource::Pattern(name),
      (None, None) => SeedSource::Random {
        rng_seed: self.seed,
      },
    };

    Config {
      height: self.height,
      width: self.width,
      delay: Duration::from_micros(self.delay),
      iterations: self.iterations,
      probability: self.probability,
      glyphs: Glyphs {
        alive: self.alive,
        dead: self.dead,
      },
      margin: self.margin,
      seed,
      parallel: !self.serial,
      threads: self.threads,
      clear_screen: !self.no_clear,
    }
  }
}

fn main() -> Result<()> {
  init_tracing();
  let config = Cli::parse().into_config();
  let stdout = io::stdout();
  lifegrid::run(&config, &mut stdout.lock())?;
  Ok(())
}

fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .try_init();
}
