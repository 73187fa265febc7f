#![allow(non_snake_case)]
use {
  euclid::{Box2D, Size2D},
  image::{
    ColorType, ImageEncoder, Pixel, Rgba, RgbaImage,
    codecs::png::PngEncoder
  },
  crate::{
    color::Color,
    drawing::{Draw, Encode, Outline, Paint, Texture},
    error::Result,
    geometry::{PixelSpace, Shape, P2}
  }
};

fn rgba(color: Color, alpha: f64) -> Rgba<u8> {
  Rgba([color.r, color.g, color.b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8])
}

/// Pixels touched by `bounding_box`, clipped to the image.
fn pixel_box(
  bounding_box: Box2D<f64, PixelSpace>,
  resolution: (u32, u32)
) -> Option<Box2D<u32, PixelSpace>> {
  bounding_box
    .inflate(1.0, 1.0)
    .round_out()
    .intersection(&Box2D::from_size(Size2D::<u32, PixelSpace>::from(resolution).to_f64()))
    .map(|x| x.to_u32())
}

/// Sample `coverage` at every pixel center of the shape's bounding box and blend `texture`
/// on top, with one pixel of antialiasing.
fn rasterize(
  image: &mut RgbaImage,
  bounding_box: Box2D<f64, PixelSpace>,
  coverage: impl Fn(P2) -> f64,
  texture: impl Fn(P2) -> Rgba<u8>
) {
  let bounding_box = match pixel_box(bounding_box, image.dimensions()) {
    Some(x) => x,
    None => return // bounding box has no intersection with the image at all
  };
  itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
    .for_each(|(y, x)| {
      let center = P2::new(x as f64 + 0.5, y as f64 + 0.5);
      let sdf = coverage(center);
      if sdf >= 0.5 { return; }
      let pixel = image.get_pixel_mut(x, y);
      *pixel = sdf_overlay_aa(sdf, 1.0, *pixel, texture(center));
    });
}

fn sdf_overlay_aa(sdf: f64, Δp: f64, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  let alpha = Δf / Δp;
  col2.0[3] = ((col2.0[3] as f64) * alpha) as u8;
  col1.blend(&col2);
  col1
}

impl <S> Draw<RgbaImage> for Texture<S, Paint>
  where S: Shape
{
  fn draw(&self, image: &mut RgbaImage) {
    rasterize(
      image,
      self.shape.bounding_box(),
      |p| self.shape.sdf(p),
      |p| {
        let (color, alpha) = self.texture.sample(p);
        rgba(color, alpha)
      }
    );
  }
}

impl <S> Draw<RgbaImage> for Outline<S>
  where S: Shape
{
  fn draw(&self, image: &mut RgbaImage) {
    let half = self.width / 2.0;
    let color = rgba(self.color, 1.0);
    rasterize(
      image,
      self.shape.bounding_box().inflate(half, half),
      |p| self.shape.sdf(p).abs() - half,
      |_| color
    );
  }
}

impl Encode for RgbaImage {
  fn encode(&self) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
      .write_image(self.as_raw(), self.width(), self.height(), ColorType::Rgba8)?;
    Ok(bytes)
  }
}
