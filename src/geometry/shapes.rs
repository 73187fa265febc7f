use {
  super::{BoundingBox, PixelSpace, P2, V2f},
  euclid::{Box2D, Size2D}
};

/// Full-canvas rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Backdrop(pub Box2D<f64, PixelSpace>);

impl Backdrop {
  pub fn new(size: Size2D<u32, PixelSpace>) -> Self {
    Backdrop(super::extent(size))
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Disc {
  pub center: P2,
  pub radius: f64,
}

/// Closed polygon; the last point connects back to the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ring(pub Vec<P2>);

impl Ring {
  /// Vertices snapped towards zero onto the pixel lattice.
  pub fn truncated(&self) -> Ring {
    Ring(self.0.iter().map(|p| P2::new(p.x.trunc(), p.y.trunc())).collect())
  }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  /// Edges in drawing order: from the last vertex, through every vertex.
  pub fn edges(&self) -> impl Iterator<Item = (P2, P2)> + '_ {
    self.0.last().into_iter()
      .chain(self.0.iter())
      .zip(self.0.iter())
      .map(|(a, b)| (*a, *b))
  }

  /// Shoelace area, positive for counter-clockwise rings in a y-up basis.
  pub fn signed_area(&self) -> f64 {
    self.edges()
      .map(|(a, b)| a.x * b.y - b.x * a.y)
      .sum::<f64>() / 2.0
  }
}

impl BoundingBox<f64, PixelSpace> for Backdrop {
  fn bounding_box(&self) -> Box2D<f64, PixelSpace> { self.0 }
}

impl BoundingBox<f64, PixelSpace> for Disc {
  fn bounding_box(&self) -> Box2D<f64, PixelSpace> {
    Box2D::new(
      self.center - V2f::splat(self.radius),
      self.center + V2f::splat(self.radius)
    )}}

impl BoundingBox<f64, PixelSpace> for Ring {
  fn bounding_box(&self) -> Box2D<f64, PixelSpace> {
    Box2D::from_points(self.0.iter())
  }
}
