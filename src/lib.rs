//! Procedural stained-glass compositions.
//!
//! A pass scatters translucent blobs over a canvas, seeds the perimeter of every blob, cuts
//! the canvas into the Voronoi cells of those seeds, and strokes the cells over the blobs.
//!
//! The pipeline, leaves first:
//! - [`color`]: 8-bit RGB values, hex parsing, HSL, luminance;
//! - [`sampler`]: blob placement under a random coverage budget, perimeter seeding;
//! - [`tessellation`]: Voronoi cells of the seeds, clipped to the canvas;
//! - [`drawing`]: paints and the [`Draw`](drawing::Draw) backends (SVG, and `RgbaImage`
//!   with the `raster` feature);
//! - [`composition`]: one full pass, and writing its output.
//!
//! # Basic usage
//! ```no_run
//! # use {stained_glass::{config::Config, composition::render_to_file, error::Result}, std::path::Path};
//! # fn main() -> Result<()> {
//! let config = Config::new(1920, 1080)?
//!   .with_palette(&["#454d66", "#309975", "#58b368", "#dad873", "#efeeb4"])?;
//! let composition = render_to_file(&config, &mut rand::thread_rng(), Path::new("out.svg"))?;
//! println!("{} blobs, {} cells", composition.blobs, composition.cells.len());
//! # Ok(())
//! # }
//! ```
//!
//! Randomness is injected through [`RandomSource`](sampler::RandomSource), which every
//! `rand::RngCore` implements; seed a `rand_pcg::Pcg64` to reproduce a pass.

pub mod error;
pub mod color;
pub mod config;
pub mod geometry;
pub mod sdf;
pub mod sampler;
pub mod tessellation;
pub mod drawing;
pub mod composition;
mod util;
