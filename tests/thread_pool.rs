use lifegrid::*;
use std::time::Duration;

#[test]
fn threads_size_the_pool_once() {
  let config = Config {
    height: 8,
    width: 8,
    delay: Duration::from_secs(0),
    iterations: Some(3),
    seed: SeedSource::Random { rng_seed: Some(11) },
    threads: Some(2),
    clear_screen: false,
    ..Config::default()
  };

  let mut first = Vec::new();
  let gens_first = run(&config, &mut first).unwrap();
  assert_eq!(rayon::current_num_threads(), 2);

  // The global pool already exists, so the second run keeps it.
  let mut second = Vec::new();
  let gens_second = run(&Config { threads: Some(3), ..config.clone() }, &mut second).unwrap();
  assert_eq!(rayon::current_num_threads(), 2);

  assert_eq!(first, second);
  assert_eq!(gens_first.current(), gens_second.current());
}
