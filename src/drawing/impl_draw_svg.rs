use {
  euclid::Size2D,
  itertools::Itertools,
  svg::{
    Document,
    node::element::{self, Circle, Definitions, Group, Path, Rectangle, Stop}
  },
  crate::{
    drawing::{Draw, Encode, Outline, Paint, Texture, LinearGradient},
    error::Result,
    geometry::{Backdrop, Disc, PixelSpace, Ring}
  }
};

/// Vector canvas. Elements are appended in paint order; gradients go to `<defs>`.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
  size: Size2D<u32, PixelSpace>,
  defs: Definitions,
  body: Group,
  gradients: usize,
  last_gradient: Option<(LinearGradient, String)>,
}

impl SvgCanvas {
  pub fn new(size: Size2D<u32, PixelSpace>) -> Self {
    SvgCanvas {
      size,
      defs: Definitions::new(),
      body: Group::new(),
      gradients: 0,
      last_gradient: None,
    }
  }

  pub fn size(&self) -> Size2D<u32, PixelSpace> { self.size }

  /// Number of `<linearGradient>` definitions emitted so far.
  pub fn gradients(&self) -> usize { self.gradients }

  /// Value of a `fill` attribute. A gradient equal to the previous one is referenced again
  /// instead of being redefined.
  fn paint_server(&mut self, paint: &Paint) -> String {
    let gradient = match paint {
      Paint::Solid { color, alpha } if *alpha >= 1.0 => return color.to_hex(),
      Paint::Solid { color, alpha } => return color.to_rgba(*alpha),
      Paint::Linear(gradient) => gradient
    };
    if let Some((last, id)) = &self.last_gradient {
      if last == gradient {
        return format!("url(#{})", id);
      }
    }

    let id = format!("g{}", self.gradients);
    let definition = gradient.stops.iter().fold(
      element::LinearGradient::new()
        .set("id", id.clone())
        .set("gradientUnits", "userSpaceOnUse")
        .set("x1", gradient.from.x)
        .set("y1", gradient.from.y)
        .set("x2", gradient.to.x)
        .set("y2", gradient.to.y),
      |definition, stop| definition.add(Stop::new()
        .set("offset", stop.offset)
        .set("stop-color", stop.color.to_hex())
        .set("stop-opacity", stop.alpha))
    );
    self.defs = std::mem::replace(&mut self.defs, Definitions::new()).add(definition);
    self.gradients += 1;
    self.last_gradient = Some((gradient.clone(), id.clone()));
    format!("url(#{})", id)
  }

  fn push<N: svg::Node>(&mut self, node: N) {
    self.body = std::mem::replace(&mut self.body, Group::new()).add(node);
  }

  pub fn document(&self) -> Document {
    let size = self.size();
    Document::new()
      .set("xmlns", "http://www.w3.org/2000/svg")
      .set("width", size.width)
      .set("height", size.height)
      .set("viewBox", format!("0 0 {} {}", size.width, size.height))
      .add(self.defs.clone())
      .add(self.body.clone())
  }
}

/// `M` at the last vertex, `L` through every vertex, so the ring closes on itself.
fn path_data(ring: &Ring) -> String {
  let ring = ring.truncated();
  ring.0.last().into_iter()
    .chain(ring.0.iter())
    .enumerate()
    .map(|(i, p)| format!("{}{},{}", if i == 0 { 'M' } else { 'L' }, p.x as i64, p.y as i64))
    .join(" ")
}

impl Draw<SvgCanvas> for Texture<Backdrop, Paint> {
  fn draw(&self, canvas: &mut SvgCanvas) {
    let fill = canvas.paint_server(&self.texture);
    let rect = self.shape.0;
    canvas.push(Rectangle::new()
      .set("x", rect.min.x)
      .set("y", rect.min.y)
      .set("width", rect.width())
      .set("height", rect.height())
      .set("fill", fill));
  }
}

impl Draw<SvgCanvas> for Texture<Disc, Paint> {
  fn draw(&self, canvas: &mut SvgCanvas) {
    let fill = canvas.paint_server(&self.texture);
    canvas.push(Circle::new()
      .set("cx", self.shape.center.x)
      .set("cy", self.shape.center.y)
      .set("r", self.shape.radius)
      .set("fill", fill));
  }
}

impl Draw<SvgCanvas> for Texture<Ring, Paint> {
  fn draw(&self, canvas: &mut SvgCanvas) {
    if self.shape.len() < 2 { return; }
    let fill = canvas.paint_server(&self.texture);
    canvas.push(Path::new()
      .set("d", path_data(&self.shape))
      .set("fill", fill));
  }
}

impl Draw<SvgCanvas> for Outline<Ring> {
  fn draw(&self, canvas: &mut SvgCanvas) {
    if self.shape.len() < 2 { return; }
    canvas.push(Path::new()
      .set("d", path_data(&self.shape))
      .set("fill", "none")
      .set("stroke", self.color.to_hex())
      .set("stroke-width", self.width));
  }
}

impl Encode for SvgCanvas {
  fn encode(&self) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    svg::write(&mut bytes, &self.document())?;
    Ok(bytes)
  }
}
