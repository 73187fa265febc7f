//! Run-wide settings of a generation pass.

use {
  euclid::Size2D,
  crate::{
    color::{Color, BLACK, WHITE},
    error::{Error, Result},
    geometry::PixelSpace,
    sampler::RandomSource
  }
};

pub const DEFAULT_PALETTE: [&str; 5] = ["#454d66", "#309975", "#58b368", "#dad873", "#efeeb4"];
/// [`DEFAULT_PALETTE`], parsed.
const DEFAULT_COLORS: [Color; 5] = [
  Color::new(0x45, 0x4d, 0x66),
  Color::new(0x30, 0x99, 0x75),
  Color::new(0x58, 0xb3, 0x68),
  Color::new(0xda, 0xd8, 0x73),
  Color::new(0xef, 0xee, 0xb4),
];
pub const DEFAULT_WIDTH: u32 = 5120;
pub const DEFAULT_HEIGHT: u32 = 2880;
/// Arc length between two consecutive perimeter samples.
pub const DEFAULT_RESOLUTION: f64 = 80.0;
/// Smallest accepted sample spacing.
pub const MIN_RESOLUTION: f64 = 1.0;
/// Background luminance below which outlines are white.
/// Equal-contrast point of black and white; not tuned against any palette.
pub const DEFAULT_LUMINANCE_THRESHOLD: f64 = 0.179;

/// Ordered set of fill colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette(Vec<Color>);

impl Palette {
  pub fn parse<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
    if colors.is_empty() {
      return Err(Error::Config("palette is empty".into()));
    }
    colors.iter()
      .map(|c| Color::parse(c.as_ref()))
      .collect::<Result<Vec<_>>>()
      .map(Palette)
  }

  pub fn colors(&self) -> &[Color] { &self.0 }

  /// Uniform pick.
  pub fn choose<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Color {
    pick(&self.0, rng)
  }

  /// Entries different from every color in `exclusions`, in palette order.
  pub fn excluding(&self, exclusions: &[Color]) -> Vec<Color> {
    self.0.iter()
      .filter(|c| !exclusions.contains(c))
      .copied()
      .collect()
  }
}

impl Default for Palette {
  fn default() -> Self {
    Palette(DEFAULT_COLORS.to_vec())
  }
}

/// `colors[floor(U * len)]`; `colors` must not be empty.
pub(crate) fn pick<R: RandomSource + ?Sized>(colors: &[Color], rng: &mut R) -> Color {
  let i = (rng.uniform() * colors.len() as f64) as usize;
  colors[i.min(colors.len() - 1)]
}

/// How cell polygons are filled before their outline is stroked.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellFill {
  /// Reuse the paint of the last blob drawn.
  InheritLast,
  /// Outline only.
  Hollow,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub size: Size2D<u32, PixelSpace>,
  pub palette: Palette,
  /// Fixed background; a random palette entry when `None`.
  pub background: Option<Color>,
  pub luminance_threshold: f64,
  pub resolution: f64,
  pub cell_fill: CellFill,
}

impl Config {
  pub fn new(width: u32, height: u32) -> Result<Self> {
    if width == 0 || height == 0 {
      return Err(Error::Config(format!("canvas must not be empty, got {}x{}", width, height)));
    }
    Ok(Config {
      size: Size2D::new(width, height),
      palette: Palette::default(),
      background: None,
      luminance_threshold: DEFAULT_LUMINANCE_THRESHOLD,
      resolution: DEFAULT_RESOLUTION,
      cell_fill: CellFill::InheritLast,
    })
  }

  pub fn with_palette<S: AsRef<str>>(mut self, colors: &[S]) -> Result<Self> {
    self.palette = Palette::parse(colors)?;
    Ok(self)
  }

  pub fn with_background(mut self, color: &str) -> Result<Self> {
    self.background = Some(Color::parse(color)?);
    Ok(self)
  }

  pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
    if !threshold.is_finite() {
      return Err(Error::Config(format!("luminance threshold must be finite, got {}", threshold)));
    }
    self.luminance_threshold = threshold;
    Ok(self)
  }

  pub fn with_resolution(mut self, resolution: f64) -> Result<Self> {
    if !(resolution.is_finite() && resolution >= MIN_RESOLUTION) {
      return Err(Error::Config(format!(
        "sample resolution must be at least {}, got {}", MIN_RESOLUTION, resolution
      )));
    }
    self.resolution = resolution;
    Ok(self)
  }

  pub fn with_cell_fill(mut self, cell_fill: CellFill) -> Self {
    self.cell_fill = cell_fill;
    self
  }

  pub fn width(&self) -> u32 { self.size.width }

  pub fn height(&self) -> u32 { self.size.height }

  pub fn choose_background<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Color {
    match self.background {
      Some(color) => color,
      None => self.palette.choose(rng)
    }
  }

  /// Outline color for a given background.
  pub fn foreground(&self, background: &Color) -> Color {
    if background.luminance() < self.luminance_threshold { WHITE } else { BLACK }
  }
}

#[cfg(test)] mod tests {
  use {super::*, crate::error::Result};

  #[test] fn defaults() -> Result<()> {
    let config = Config::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)?;
    assert_eq!(config.palette.colors().len(), DEFAULT_PALETTE.len());
    assert_eq!(config.palette, Palette::parse(&DEFAULT_PALETTE)?);
    assert_eq!(Palette::default().colors(), &DEFAULT_COLORS[..]);
    assert_eq!((config.width(), config.height()), (5120, 2880));
    assert_eq!(config.cell_fill, CellFill::InheritLast);
    Ok(())
  }

  #[test] fn rejects() {
    assert!(matches!(Config::new(0, 10), Err(Error::Config(_))));
    assert!(matches!(Config::new(10, 10).and_then(|c| c.with_palette(&["#fff", "zzz"])),
      Err(Error::InvalidColor(s)) if s == "zzz"));
    assert!(matches!(Config::new(10, 10).and_then(|c| c.with_palette::<&str>(&[])),
      Err(Error::Config(_))));
    assert!(matches!(Config::new(10, 10).and_then(|c| c.with_resolution(0.0)),
      Err(Error::Config(_))));
    assert!(matches!(Config::new(10, 10).and_then(|c| c.with_resolution(1e-9)),
      Err(Error::Config(_))));
    assert!(matches!(Config::new(10, 10).and_then(|c| c.with_resolution(f64::INFINITY)),
      Err(Error::Config(_))));
    assert!(Config::new(10, 10).and_then(|c| c.with_resolution(MIN_RESOLUTION)).is_ok());
    assert!(matches!(Config::new(10, 10).and_then(|c| c.with_background("#12")),
      Err(Error::InvalidColor(_))));
  }

  #[test] fn foreground_threshold() -> Result<()> {
    let config = Config::new(10, 10)?;
    assert_eq!(config.foreground(&Color::parse("#454d66")?), WHITE);
    assert_eq!(config.foreground(&Color::parse("#efeeb4")?), BLACK);
    let config = config.with_threshold(10000.0)?;
    assert_eq!(config.foreground(&WHITE), WHITE);
    Ok(())
  }

  #[test] fn excluding() -> Result<()> {
    let palette = Palette::parse(&["#000", "#fff", "#f00"])?;
    assert_eq!(palette.excluding(&[BLACK, WHITE]), vec![Color::new(255, 0, 0)]);
    assert!(palette.excluding(palette.colors()).is_empty());
    Ok(())
  }
}
