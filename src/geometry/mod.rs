//! .
//!
//! The origin of coordinate system is in top-left corner, one unit is one pixel of the
//! output canvas.

use {
  euclid::{Point2D, Box2D, Vector2D as V2, Size2D},
  num_traits::Float,
  crate::sdf::SDF
};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelSpace;

pub type P2 = Point2D<f64, PixelSpace>;
pub type V2f = V2<f64, PixelSpace>;
/// Integer lattice point, as produced by the seed sampler.
pub type P2i = Point2D<i32, PixelSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something drawable inside a rectangular area.
pub trait Shape: SDF<f64> + BoundingBox<f64, PixelSpace> {
  /// Fill the shape.
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
  /// Stroke the boundary of the shape.
  fn outline(self, color: crate::color::Color, width: f64) -> crate::drawing::Outline<Self> where Self: Sized {
    crate::drawing::Outline { shape: self, color, width }
  }
}
impl <T> Shape for T where T: SDF<f64> + BoundingBox<f64, PixelSpace> {}

/// Unit vector at `angle` radians.
pub fn polar<T: Float, U>(angle: T) -> V2<T, U> {
  V2::new(angle.cos(), angle.sin())
}

/// Canvas rectangle `[0, 0] .. [width, height]`.
pub fn extent(size: Size2D<u32, PixelSpace>) -> Box2D<f64, PixelSpace> {
  Box2D::from_size(size.to_f64())
}
