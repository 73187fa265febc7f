//! .
//!
//! Hand-written error type; every fallible operation of the crate returns [`Result`].
use std::fmt;

#[derive(Debug)]
pub enum Error {
  /// A palette or background string is not a `#rgb` / `#rrggbb` literal.
  InvalidColor(String),
  /// Configuration rejected before anything was drawn.
  Config(String),
  /// The planar subdivision refused a seed point.
  Tessellation(spade::InsertionError),
  IoError(std::io::Error),
  #[cfg(feature = "raster")]
  ImageError(image::ImageError),
}

impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self {
    Error::IoError(e)
  }
}
impl From<spade::InsertionError> for Error {
  fn from(e: spade::InsertionError) -> Self {
    Error::Tessellation(e)
  }
}
#[cfg(feature = "raster")]
impl From<image::ImageError> for Error {
  fn from(e: image::ImageError) -> Self {
    Error::ImageError(e)
  }
}

impl fmt::Display for Error {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    use Error::*;
    match *self {
      InvalidColor(ref s) => write!(fmt, "invalid color {:?}", s),
      Config(ref s) => write!(fmt, "invalid configuration: {}", s),
      Tessellation(ref err) => write!(fmt, "tessellation failed: {:?}", err),
      IoError(ref err) => write!(fmt, "{}", err),
      #[cfg(feature = "raster")]
      ImageError(ref err) => write!(fmt, "{}", err),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    use Error::*;
    match *self {
      IoError(ref err) => Some(err),
      #[cfg(feature = "raster")]
      ImageError(ref err) => Some(err),
      _ => None
    }
  }
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
