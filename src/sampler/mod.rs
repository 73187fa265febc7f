//! Blob placement and perimeter seeding.
//!
//! [`Sampler`] stamps random discs onto the canvas until a random share of its area has been
//! covered. Every disc is yielded as a [`Blob`] for painting, and the points sampled along its
//! perimeter are accumulated in a [`SeedSet`], which later drives the tessellation.

use {
  std::{collections::HashMap, f64::consts::{PI, TAU}},
  euclid::Size2D,
  crate::{
    color::Color,
    config::{self, Config},
    error::{Error, Result},
    geometry::{self, Disc, PixelSpace, P2i, V2f}
  }
};

#[cfg(test)] pub(crate) mod tests;

/// Minimal blob radius, in pixels.
pub const MIN_RADIUS: f64 = 10.0;

/// A source of uniform floats in `[0, 1)`.
pub trait RandomSource {
  fn uniform(&mut self) -> f64;
}

impl <R: rand::RngCore> RandomSource for R {
  fn uniform(&mut self) -> f64 {
    rand::Rng::gen::<f64>(self)
  }
}

/// Gradient orientations shared by every blob of one image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DirectionSet(pub [f64; 3]);

impl DirectionSet {
  pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
    let angle = rng.uniform() * TAU;
    let quarter = (rng.uniform() * 4.0).floor();
    DirectionSet([
      angle,
      angle + TAU / 2.0,
      angle + TAU / 8.0 + quarter * TAU / 4.0
    ])
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FillStyle {
  /// Translucent flat fill.
  Flat { alpha: f64 },
  /// Linear gradient across the diameter along `angle`, from `alpha` to transparent.
  Gradient { angle: f64, alpha: f64 },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Blob {
  pub center: P2i,
  pub radius: f64,
  pub color: Color,
  pub style: FillStyle,
}

impl Blob {
  pub fn disc(&self) -> Disc {
    Disc { center: self.center.to_f64(), radius: self.radius }
  }

  pub fn area(&self) -> f64 {
    PI * self.radius * self.radius
  }
}

/// Tessellation input: ordered seed points, their force vectors, and an index of the
/// occupied lattice positions.
#[derive(Debug, Clone, Default)]
pub struct SeedSet {
  points: Vec<P2i>,
  forces: Vec<V2f>,
  index: HashMap<(i32, i32), usize>,
}

impl SeedSet {
  pub fn push(&mut self, point: P2i, force: V2f) {
    // last write wins
    self.index.insert((point.x, point.y), self.points.len());
    self.points.push(point);
    self.forces.push(force);
  }

  /// Every sample in insertion order, duplicates included.
  pub fn points(&self) -> &[P2i] { &self.points }

  /// Outward bias of each sample, parallel to [`points`](Self::points).
  /// Not consumed by the tessellation.
  pub fn forces(&self) -> &[V2f] { &self.forces }

  /// Position in [`points`](Self::points) of the last sample written at `point`.
  pub fn lookup(&self, point: P2i) -> Option<usize> {
    self.index.get(&(point.x, point.y)).copied()
  }

  /// Number of distinct lattice positions.
  pub fn distinct(&self) -> usize { self.index.len() }

  pub fn len(&self) -> usize { self.points.len() }

  pub fn is_empty(&self) -> bool { self.points.is_empty() }
}

/// Iterator over the blobs of one image.
///
/// ```
/// # use {stained_glass::{config::Config, sampler::{Sampler, DirectionSet}}, rand::SeedableRng};
/// # fn main() -> stained_glass::error::Result<()> {
/// let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
/// let config = Config::new(640, 360)?;
/// let directions = DirectionSet::random(&mut rng);
/// let mut sampler = Sampler::new(&config, directions, config.palette.colors().to_vec(), &mut rng)?;
/// let blobs = sampler.by_ref().count();
/// assert_eq!(blobs, sampler.blobs());
/// assert!(sampler.covered_area() >= sampler.initial_area());
/// # Ok(())
/// # }
/// ```
pub struct Sampler<'a, R: RandomSource + ?Sized> {
  rng: &'a mut R,
  size: Size2D<u32, PixelSpace>,
  resolution: f64,
  directions: DirectionSet,
  colors: Vec<Color>,
  /// Exponent applied to the radius draw.
  bias: f64,
  initial_area: f64,
  remaining_area: f64,
  blobs: usize,
  seeds: SeedSet,
}

impl<'a, R: RandomSource + ?Sized> Sampler<'a, R> {
  /// `colors` are the candidate blob fills; must not be empty.
  pub fn new(
    config: &Config,
    directions: DirectionSet,
    colors: Vec<Color>,
    rng: &'a mut R
  ) -> Result<Self> {
    if colors.is_empty() {
      return Err(Error::Config("no palette color left for blobs".into()));
    }
    let canvas_area = config.width() as f64 * config.height() as f64;
    let bias = 0.2 + rng.uniform();
    let initial_area = canvas_area * (0.15 + 0.85 * rng.uniform());
    Ok(Sampler {
      rng,
      size: config.size,
      resolution: config.resolution,
      directions,
      colors,
      bias,
      initial_area,
      remaining_area: initial_area,
      blobs: 0,
      seeds: SeedSet::default(),
    })
  }

  pub fn initial_area(&self) -> f64 { self.initial_area }

  pub fn remaining_area(&self) -> f64 { self.remaining_area }

  /// Sum of blob areas so far.
  pub fn covered_area(&self) -> f64 { self.initial_area - self.remaining_area }

  pub fn blobs(&self) -> usize { self.blobs }

  pub fn bias(&self) -> f64 { self.bias }

  pub fn seeds(&self) -> &SeedSet { &self.seeds }

  pub fn into_seeds(self) -> SeedSet { self.seeds }

  fn place_blob(&mut self) -> Blob {
    let color = config::pick(&self.colors, &mut *self.rng);
    let choice = (self.rng.uniform() * 4.0) as usize;
    let min_side = self.size.width.min(self.size.height) as f64;
    let radius = (MIN_RADIUS + self.rng.uniform().powf(self.bias) * min_side / 5.0).round();
    let center = P2i::new(
      (self.rng.uniform() * self.size.width as f64) as i32,
      (self.rng.uniform() * self.size.height as f64) as i32
    );
    let style = match choice {
      0 => FillStyle::Flat { alpha: 0.1 + 0.85 * self.rng.uniform() },
      n => FillStyle::Gradient {
        angle: self.directions.0[(n - 1).min(2)],
        alpha: 0.1 + 0.9 * self.rng.uniform()
      }
    };
    Blob { center, radius, color, style }
  }

  /// Seed the perimeter of `blob`, one sample per `resolution` of arc length.
  fn sample_perimeter(&mut self, blob: &Blob) {
    let count = (TAU * blob.radius / self.resolution).floor() as usize;
    let offset = (self.rng.uniform() * 4.0).floor() * TAU / 4.0;
    if count == 0 {
      return;
    }
    let step = TAU / count as f64;
    let center = blob.center.to_f64();
    let mut angle = 0.0;
    for _ in 0..count {
      let on_circle = center + geometry::polar(angle) * blob.radius;
      self.seeds.push(
        P2i::new(on_circle.x.round() as i32, on_circle.y.round() as i32),
        geometry::polar(angle + offset)
      );
      angle += step;
    }
  }
}

impl<'a, R: RandomSource + ?Sized> Iterator for Sampler<'a, R> {
  type Item = Blob;

  fn next(&mut self) -> Option<Blob> {
    if self.remaining_area <= 0.0 {
      return None;
    }
    let blob = self.place_blob();
    self.sample_perimeter(&blob);
    self.remaining_area -= blob.area();
    self.blobs += 1;
    Some(blob)
  }
}

/// Upper bound on the number of blobs for a canvas area.
pub fn max_blobs(canvas_area: f64) -> usize {
  (canvas_area / (PI * MIN_RADIUS * MIN_RADIUS)).ceil() as usize
}
