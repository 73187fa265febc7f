use {
  euclid::{Point2D, Vector2D as V2},
  crate::geometry::{PixelSpace, Backdrop, Disc, Ring}
};

/// Signed distance function, negative inside.
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, PixelSpace>) -> T;
}

impl SDF<f64> for Backdrop {
  fn sdf(&self, pixel: Point2D<f64, PixelSpace>) -> f64 {
    let half = self.0.size().to_vector() / 2.0;
    let dist = (pixel - self.0.center()).abs() - half;
    let outside_dist = dist
      .max(V2::splat(0.0))
      .length();
    let inside_dist = dist.x
      .max(dist.y)
      .min(0.0);
    outside_dist + inside_dist
  }
}

impl SDF<f64> for Disc {
  fn sdf(&self, pixel: Point2D<f64, PixelSpace>) -> f64 {
    (pixel - self.center).length() - self.radius
  }
}

/// Exact polygon distance, inside by the even-odd rule.
/// Rings with fewer than two vertices are empty: the distance is `+inf`.
impl SDF<f64> for Ring {
  fn sdf(&self, pixel: Point2D<f64, PixelSpace>) -> f64 {
    if self.len() < 2 {
      return f64::INFINITY;
    }
    let mut dist = f64::INFINITY;
    let mut inside = false;
    for (a, b) in self.edges() {
      let e = b - a;
      let w = pixel - a;
      let t = if e.square_length() > 0.0 {
        (w.dot(e) / e.square_length()).clamp(0.0, 1.0)
      } else {
        0.0
      };
      dist = dist.min((w - e * t).length());
      if (a.y > pixel.y) != (b.y > pixel.y)
        && pixel.x < a.x + (pixel.y - a.y) * e.x / e.y {
        inside = !inside;
      }
    }
    if inside { -dist } else { dist }
  }
}

#[cfg(test)] mod tests {
  use {super::*, euclid::{Box2D, Size2D}};

  #[test] fn disc() {
    let disc = Disc { center: [10.0, 10.0].into(), radius: 5.0 };
    assert_eq!(disc.sdf([10.0, 10.0].into()), -5.0);
    assert_eq!(disc.sdf([20.0, 10.0].into()), 5.0);
  }

  #[test] fn backdrop() {
    let rect = Backdrop::new(Size2D::new(20, 10));
    assert_eq!(rect.sdf([10.0, 5.0].into()), -5.0);
    assert_eq!(rect.sdf([25.0, 5.0].into()), 5.0);
    assert_eq!(rect.0, Box2D::new([0.0, 0.0].into(), [20.0, 10.0].into()));
  }

  #[test] fn ring() {
    let square = Ring(vec![
      [0.0, 0.0].into(), [10.0, 0.0].into(), [10.0, 10.0].into(), [0.0, 10.0].into()
    ]);
    assert_eq!(square.sdf([5.0, 5.0].into()), -5.0);
    assert_eq!(square.sdf([5.0, 12.0].into()), 2.0);
    assert_eq!(square.sdf([13.0, 14.0].into()), 5.0);
    assert_eq!(square.signed_area().abs(), 100.0);
    assert_eq!(Ring(vec![[1.0, 1.0].into()]).sdf([1.0, 1.0].into()), f64::INFINITY);
  }
}
