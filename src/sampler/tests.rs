use {
  super::*,
  crate::{
    color::Color,
    config::Config,
    error::Result
  },
  rand::{RngCore, SeedableRng},
};

/// Replays `values` as the uniform draws of `Rng::gen::<f64>`, cycling.
pub(crate) struct Scripted {
  values: Vec<f64>,
  at: usize,
}

impl Scripted {
  pub(crate) fn new(values: &[f64]) -> Self {
    Scripted { values: values.to_vec(), at: 0 }
  }
}

impl RngCore for Scripted {
  fn next_u32(&mut self) -> u32 {
    (self.next_u64() >> 32) as u32
  }

  fn next_u64(&mut self) -> u64 {
    let u = self.values[self.at % self.values.len()];
    self.at += 1;
    // inverse of the 53-bit mantissa construction of `Standard` for f64
    ((u * (1u64 << 53) as f64) as u64) << 11
  }

  fn fill_bytes(&mut self, dest: &mut [u8]) {
    for chunk in dest.chunks_mut(8) {
      let bytes = self.next_u64().to_le_bytes();
      chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
  }

  fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
    self.fill_bytes(dest);
    Ok(())
  }
}

const RED: Color = Color::new(255, 0, 0);
const GREEN: Color = Color::new(0, 255, 0);

#[test] fn scripted_source() {
  let mut rng = Scripted::new(&[0.5, 0.25, 0.0]);
  assert_eq!(rng.uniform(), 0.5);
  assert_eq!(rng.uniform(), 0.25);
  assert_eq!(rng.uniform(), 0.0);
  assert_eq!(rng.uniform(), 0.5);
}

#[test] fn flat_blob() -> Result<()> {
  let config = Config::new(1000, 500)?.with_resolution(10.0)?;
  let mut rng = Scripted::new(&[
    0.5, 0.5, // bias, area
    0.75, 0.0, 0.0, 0.5, 0.25, 0.5, // color, choice, radius, x, y, alpha
    0.25 // sampling offset
  ]);
  let mut sampler = Sampler::new(&config, DirectionSet([0.0, 1.0, 2.0]), vec![RED, GREEN], &mut rng)?;
  assert_eq!(sampler.bias(), 0.7);
  assert_eq!(sampler.initial_area(), 500_000.0 * (0.15 + 0.85 * 0.5));

  let blob = sampler.next().expect("first blob");
  assert_eq!(blob.color, GREEN);
  assert_eq!(blob.radius, 10.0);
  assert_eq!(blob.center, P2i::new(500, 125));
  assert_eq!(blob.style, FillStyle::Flat { alpha: 0.1 + 0.85 * 0.5 });
  assert!((sampler.covered_area() - PI * 100.0).abs() < 1e-9);

  // floor(2π·10 / 10) samples, starting at angle 0
  let seeds = sampler.seeds();
  assert_eq!(seeds.len(), 6);
  assert_eq!(seeds.points()[0], P2i::new(510, 125));
  assert_eq!(seeds.points()[3], P2i::new(490, 125));
  // forces are rotated by the quarter-turn offset
  let force = seeds.forces()[0];
  assert!(force.x.abs() < 1e-9 && (force.y - 1.0).abs() < 1e-9);
  Ok(())
}

#[test] fn gradient_blob() -> Result<()> {
  let config = Config::new(1000, 500)?;
  let mut rng = Scripted::new(&[0.5, 0.5, 0.0, 0.5, 0.0, 0.5, 0.5, 0.5, 0.0]);
  let mut sampler = Sampler::new(&config, DirectionSet([0.0, 1.0, 2.0]), vec![RED, GREEN], &mut rng)?;
  let blob = sampler.next().expect("first blob");
  assert_eq!(blob.color, RED);
  assert_eq!(blob.style, FillStyle::Gradient { angle: 1.0, alpha: 0.1 + 0.9 * 0.5 });
  // radius 10 is shorter than one resolution step of arc
  assert!(sampler.seeds().is_empty());
  Ok(())
}

#[test] fn terminates_within_budget() -> Result<()> {
  for (width, height) in [(200, 100), (1, 1), (37, 1000), (640, 360)] {
    let config = Config::new(width, height)?;
    for seed in 0..16 {
      let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);
      let directions = DirectionSet::random(&mut rng);
      let mut sampler = Sampler::new(&config, directions, config.palette.colors().to_vec(), &mut rng)?;
      let initial = sampler.initial_area();
      let canvas = width as f64 * height as f64;
      assert!(initial >= 0.15 * canvas && initial <= canvas);

      let mut covered = 0.0;
      for blob in sampler.by_ref() {
        covered += blob.area();
      }
      assert!(sampler.blobs() <= max_blobs(initial));
      assert!(sampler.blobs() >= 1);
      assert!(covered >= initial);
      assert!(sampler.remaining_area() <= 0.0);
    }
  }
  Ok(())
}

#[test] fn unit_canvas_single_blob() -> Result<()> {
  let config = Config::new(1, 1)?;
  let mut rng = rand_pcg::Pcg64::seed_from_u64(7);
  let mut sampler = Sampler::new(&config, DirectionSet::random(&mut rng), vec![RED], &mut rng)?;
  let blobs = sampler.by_ref().collect::<Vec<_>>();
  assert_eq!(blobs.len(), 1);
  assert_eq!(blobs[0].center, P2i::new(0, 0));
  assert_eq!(blobs[0].radius, MIN_RADIUS);
  assert!(sampler.seeds().is_empty());
  Ok(())
}

#[test] fn seeds_stay_near_canvas() -> Result<()> {
  let (width, height) = (640, 360);
  let config = Config::new(width, height)?;
  let max_radius = MIN_RADIUS + height as f64 / 5.0;
  for seed in 0..8 {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);
    let mut sampler = Sampler::new(&config, DirectionSet::random(&mut rng), vec![RED, GREEN], &mut rng)?;
    for blob in sampler.by_ref() {
      assert!(blob.radius >= MIN_RADIUS && blob.radius <= max_radius.round());
      assert!(blob.center.x >= 0 && blob.center.x < width as i32);
      assert!(blob.center.y >= 0 && blob.center.y < height as i32);
    }
    let seeds = sampler.into_seeds();
    assert_eq!(seeds.points().len(), seeds.forces().len());
    for (point, force) in seeds.points().iter().zip(seeds.forces()) {
      let margin = max_radius + 1.0;
      assert!(point.x as f64 >= -margin && point.x as f64 <= width as f64 + margin);
      assert!(point.y as f64 >= -margin && point.y as f64 <= height as f64 + margin);
      assert!((force.length() - 1.0).abs() < 1e-9);
    }
    assert!(seeds.distinct() <= seeds.len());
  }
  Ok(())
}

#[test] fn seed_index_last_write_wins() {
  let mut seeds = SeedSet::default();
  seeds.push(P2i::new(3, 4), V2f::new(1.0, 0.0));
  seeds.push(P2i::new(5, 5), V2f::new(0.0, 1.0));
  seeds.push(P2i::new(3, 4), V2f::new(-1.0, 0.0));
  assert_eq!(seeds.len(), 3);
  assert_eq!(seeds.distinct(), 2);
  assert_eq!(seeds.lookup(P2i::new(3, 4)), Some(2));
  assert_eq!(seeds.lookup(P2i::new(0, 0)), None);
}

#[test] fn direction_set() {
  let mut rng = Scripted::new(&[0.25, 0.5]);
  let DirectionSet([a, b, c]) = DirectionSet::random(&mut rng);
  assert_eq!(a, TAU / 4.0);
  assert!((b - a - PI).abs() < 1e-12);
  assert!((c - a - TAU / 8.0 - 2.0 * TAU / 4.0).abs() < 1e-12);
}

#[test] fn empty_candidates() -> Result<()> {
  let config = Config::new(10, 10)?;
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  assert!(matches!(
    Sampler::new(&config, DirectionSet::random(&mut rng), vec![], &mut rng),
    Err(Error::Config(_))
  ));
  Ok(())
}
