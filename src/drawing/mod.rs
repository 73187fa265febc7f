use {
  crate::{
    color::Color,
    error::Result,
    geometry::{self, P2},
    sampler::{Blob, FillStyle}
  }
};

mod impl_draw_svg;
#[cfg(feature = "raster")]
mod impl_draw_rgbaimage;

pub use impl_draw_svg::SvgCanvas;

pub trait Draw<Backend> {
  fn draw(&self, canvas: &mut Backend);
}

/// Serialization of a finished canvas.
pub trait Encode {
  fn encode(&self) -> Result<Vec<u8>>;
}

/// A shape filled with `texture`.
#[derive(Debug, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}

/// The boundary of a shape, stroked with a solid color.
#[derive(Debug, Clone)]
pub struct Outline<S> {
  pub shape: S,
  pub color: Color,
  pub width: f64
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
  /// Position along the gradient axis, `0` at `from`, `1` at `to`.
  pub offset: f64,
  pub color: Color,
  pub alpha: f64,
}

/// Gradient in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
  pub from: P2,
  pub to: P2,
  /// Sorted by offset.
  pub stops: Vec<ColorStop>,
}

impl LinearGradient {
  /// Color and opacity at `point`, projected onto the gradient axis.
  pub fn sample(&self, point: P2) -> (Color, f64) {
    let axis = self.to - self.from;
    let t = if axis.square_length() > 0.0 {
      ((point - self.from).dot(axis) / axis.square_length()).clamp(0.0, 1.0)
    } else {
      0.0
    };
    let (first, last) = match (self.stops.first(), self.stops.last()) {
      (Some(first), Some(last)) => (first, last),
      _ => return (Color::default(), 0.0)
    };
    if t <= first.offset { return (first.color, first.alpha); }
    if t >= last.offset { return (last.color, last.alpha); }
    self.stops.windows(2)
      .find(|pair| t <= pair[1].offset)
      .map(|pair| {
        let span = pair[1].offset - pair[0].offset;
        let ratio = if span > 0.0 { (t - pair[0].offset) / span } else { 1.0 };
        (
          pair[0].color.mix(&pair[1].color, ratio),
          pair[0].alpha + (pair[1].alpha - pair[0].alpha) * ratio
        )
      })
      .unwrap_or((last.color, last.alpha))
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
  Solid { color: Color, alpha: f64 },
  Linear(LinearGradient),
}

impl Paint {
  pub fn opaque(color: Color) -> Self {
    Paint::Solid { color, alpha: 1.0 }
  }

  /// Flat translucent fill, or a gradient across the blob's diameter fading out to
  /// full transparency.
  pub fn of_blob(blob: &Blob) -> Self {
    match blob.style {
      FillStyle::Flat { alpha } => Paint::Solid { color: blob.color, alpha },
      FillStyle::Gradient { angle, alpha } => {
        let center = blob.center.to_f64();
        let reach = geometry::polar(angle) * blob.radius;
        Paint::Linear(LinearGradient {
          from: center - reach,
          to: center + reach,
          stops: vec![
            ColorStop { offset: 0.0, color: blob.color, alpha },
            ColorStop { offset: 1.0, color: blob.color, alpha: 0.0 },
          ]
        })
      }
    }
  }

  pub fn sample(&self, point: P2) -> (Color, f64) {
    match self {
      Paint::Solid { color, alpha } => (*color, *alpha),
      Paint::Linear(gradient) => gradient.sample(point)
    }
  }
}
