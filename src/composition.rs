//! One generation pass: background, blobs, then cell outlines on top.

use {
  std::{fmt, fs, path::Path},
  crate::{
    color::Color,
    config::{CellFill, Config},
    drawing::{Draw, Encode, Outline, Paint, SvgCanvas, Texture},
    error::{Error, Result},
    geometry::{self, Backdrop, Disc, Ring, Shape},
    sampler::{DirectionSet, RandomSource, Sampler, SeedSet},
    tessellation::{self, Cell}
  }
};

/// Stroke width of cell outlines.
pub const OUTLINE_WIDTH: f64 = 1.0;

/// What a pass produced, besides the pixels.
#[derive(Debug, Clone)]
pub struct Composition {
  pub background: Color,
  pub foreground: Color,
  pub directions: DirectionSet,
  pub blobs: usize,
  /// Coverage budget drawn at the start of the pass.
  pub initial_area: f64,
  /// Sum of blob areas; at least `initial_area`.
  pub covered_area: f64,
  pub seeds: SeedSet,
  pub cells: Vec<Cell>,
}

/// Paint one image onto `canvas`.
///
/// Blob fills are drawn from the palette minus the background and outline colors; if that
/// leaves nothing, the pass fails before drawing. Cells are filled according to
/// [`Config::cell_fill`]; with [`CellFill::InheritLast`] every cell reuses the paint of the
/// last blob, gradient included.
pub fn compose<B, R>(config: &Config, rng: &mut R, canvas: &mut B) -> Result<Composition>
  where R: RandomSource + ?Sized,
        Texture<Backdrop, Paint>: Draw<B>,
        Texture<Disc, Paint>: Draw<B>,
        Texture<Ring, Paint>: Draw<B>,
        Outline<Ring>: Draw<B>
{
  let directions = DirectionSet::random(rng);
  let background = config.choose_background(rng);
  let foreground = config.foreground(&background);
  let candidates = config.palette.excluding(&[background, foreground]);
  let mut sampler = Sampler::new(config, directions, candidates, rng)?;

  let mut paint = Paint::opaque(background);
  Backdrop::new(config.size)
    .texture(paint.clone())
    .draw(canvas);

  for blob in sampler.by_ref() {
    paint = Paint::of_blob(&blob);
    blob.disc()
      .texture(paint.clone())
      .draw(canvas);
  }

  let (blobs, initial_area, covered_area) =
    (sampler.blobs(), sampler.initial_area(), sampler.covered_area());
  let seeds = sampler.into_seeds();
  let cells = tessellation::tessellate(seeds.points(), geometry::extent(config.size))?;

  for cell in &cells {
    if config.cell_fill == CellFill::InheritLast {
      cell.ring.clone()
        .texture(paint.clone())
        .draw(canvas);
    }
    cell.ring.clone()
      .outline(foreground, OUTLINE_WIDTH)
      .draw(canvas);
  }

  Ok(Composition {
    background,
    foreground,
    directions,
    blobs,
    initial_area,
    covered_area,
    seeds,
    cells,
  })
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
  Svg,
  Png,
}

impl OutputFormat {
  /// `.png` (any case) selects the raster backend, everything else is SVG.
  pub fn from_path(path: &Path) -> Self {
    match path.extension().and_then(|e| e.to_str()) {
      Some(ext) if ext.eq_ignore_ascii_case("png") => OutputFormat::Png,
      _ => OutputFormat::Svg
    }
  }
}

impl fmt::Display for OutputFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      OutputFormat::Svg => "SVG",
      OutputFormat::Png => "PNG"
    })
  }
}

/// Compose in memory and encode.
pub fn render<R>(config: &Config, rng: &mut R, format: OutputFormat) -> Result<(Composition, Vec<u8>)>
  where R: RandomSource + ?Sized
{
  match format {
    OutputFormat::Svg => {
      let mut canvas = SvgCanvas::new(config.size);
      let composition = compose(config, rng, &mut canvas)?;
      Ok((composition, canvas.encode()?))
    }
    #[cfg(feature = "raster")]
    OutputFormat::Png => {
      let mut canvas = image::RgbaImage::new(config.width(), config.height());
      let composition = compose(config, rng, &mut canvas)?;
      Ok((composition, canvas.encode()?))
    }
    #[cfg(not(feature = "raster"))]
    OutputFormat::Png => Err(Error::Config("PNG output requires the `raster` feature".into()))
  }
}

/// Render and write `path`, overwriting it. Nothing is written unless the whole pass succeeds.
pub fn render_to_file<R>(config: &Config, rng: &mut R, path: &Path) -> Result<Composition>
  where R: RandomSource + ?Sized
{
  let (composition, bytes) = render(config, rng, OutputFormat::from_path(path))?;
  fs::write(path, bytes).map_err(Error::from)?;
  Ok(composition)
}
