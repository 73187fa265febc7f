//! Voronoi cells of the seed points, clipped to the canvas.
//!
//! The Delaunay triangulation is delegated to `spade`. A site's cell is then the canvas
//! rectangle cut by the perpendicular bisector of every Delaunay neighbour, which also bounds
//! the cells that are infinite in the plane.

use {
  euclid::Box2D,
  itertools::Itertools,
  rayon::prelude::*,
  spade::{DelaunayTriangulation, Point2, Triangulation},
  crate::{
    error::Result,
    geometry::{PixelSpace, P2, P2i, Ring}
  }
};

/// One region of the partition.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
  pub site: P2,
  pub ring: Ring,
}

fn to_p2(p: Point2<f64>) -> P2 {
  P2::new(p.x, p.y)
}

/// One cell per distinct point, in order of first appearance. Coincident points share a
/// cell; cells that do not reach into `extent` are omitted.
pub fn tessellate(points: &[P2i], extent: Box2D<f64, PixelSpace>) -> Result<Vec<Cell>> {
  let mut triangulation = DelaunayTriangulation::<Point2<f64>>::new();
  for p in points {
    triangulation.insert(Point2::new(p.x as f64, p.y as f64))?;
  }

  let sites = triangulation.vertices()
    .map(|vertex| (
      to_p2(vertex.position()),
      vertex.out_edges()
        .map(|edge| to_p2(edge.to().position()))
        .collect::<Vec<_>>()
    ))
    .collect::<Vec<_>>();

  Ok(sites.into_par_iter()
    .filter_map(|(site, neighbours)| {
      let ring = voronoi_cell(site, &neighbours, extent);
      (ring.len() >= 3).then(|| Cell { site, ring })
    })
    .collect())
}

/// `extent` minus the half-planes closer to any neighbour than to `site`.
pub fn voronoi_cell(site: P2, neighbours: &[P2], extent: Box2D<f64, PixelSpace>) -> Ring {
  let mut polygon = vec![
    extent.min,
    P2::new(extent.max.x, extent.min.y),
    extent.max,
    P2::new(extent.min.x, extent.max.y),
  ];
  for &neighbour in neighbours {
    if polygon.is_empty() { break; }
    let normal = neighbour - site;
    let mid = site.lerp(neighbour, 0.5);
    polygon = clip(&polygon, |p| (p - mid).dot(normal));
  }
  Ring(polygon)
}

/// Sutherland–Hodgman against one half-plane, keeping points where `side(p) <= 0`.
fn clip(polygon: &[P2], side: impl Fn(P2) -> f64) -> Vec<P2> {
  let mut out = Vec::with_capacity(polygon.len() + 1);
  for (a, b) in polygon.iter().copied().circular_tuple_windows() {
    let (da, db) = (side(a), side(b));
    if da <= 0.0 {
      out.push(a);
    }
    if (da <= 0.0) != (db <= 0.0) {
      out.push(a + (b - a) * (da / (da - db)));
    }
  }
  out.dedup();
  if out.len() > 1 && out.first() == out.last() {
    out.pop();
  }
  out
}
