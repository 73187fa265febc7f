//! 8-bit RGB colors.
//!
//! Parsing accepts `#rgb` and `#rrggbb` literals (the `#` is optional, digits are
//! case-insensitive). Arithmetic is done in floating point and saturates into `[0, 255]`
//! when stored back into a channel.

use {
  std::{fmt, str::FromStr},
  crate::error::{Error, Result}
};


const LUM_THRESHOLD: f64 = 0.03928;

const PERCEPTIVE_FACTOR_RED: f64 = 0.2126;
const PERCEPTIVE_FACTOR_GREEN: f64 = 0.7152;
const PERCEPTIVE_FACTOR_BLUE: f64 = 0.0722;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

/// Truncating, saturating float -> channel conversion.
fn channel(v: f64) -> u8 {
  v.clamp(0.0, 255.0) as u8
}

/// sRGB gamma expansion of a normalized channel.
fn gun_luminance(v: f64) -> f64 {
  if v <= LUM_THRESHOLD {
    v / 12.92
  } else {
    ((v + 0.055) / 1.055).powf(2.4)
  }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
  if t < 0.0 { t += 1.0; }
  if t > 1.0 { t -= 1.0; }
  if t < 1.0 / 6.0 { return p + (q - p) * 6.0 * t; }
  if t < 1.0 / 2.0 { return q; }
  if t < 2.0 / 3.0 { return p + (q - p) * (2.0 / 3.0 - t) * 6.0; }
  p
}

impl Color {
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Color { r, g, b }
  }

  /// Parse a `#rgb` / `#rrggbb` literal.
  pub fn parse(text: &str) -> Result<Self> {
    let invalid = || Error::InvalidColor(text.to_string());
    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
      return Err(invalid());
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map_err(|_| invalid());
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

    match digits.len() {
      3 => Ok(Color::new(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17)),
      6 => Ok(Color::new(byte(0)?, byte(2)?, byte(4)?)),
      _ => Err(invalid())
    }
  }

  /// `h` is a fraction of a full turn in `[0, 1)`, `s` and `l` are in `[0, 1]`.
  pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
    let (r, g, b) = if s <= 0.0 {
      (l, l, l) // achromatic
    } else {
      let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
      let p = 2.0 * l - q;
      (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0)
      )
    };
    Color::new(
      channel((r * 255.0).round()),
      channel((g * 255.0).round()),
      channel((b * 255.0).round())
    )
  }

  /// Relative luminance in `[0, 1]`.
  pub fn luminance(&self) -> f64 {
    let [r, g, b] = self.normalized();
    PERCEPTIVE_FACTOR_RED * gun_luminance(r)
      + PERCEPTIVE_FACTOR_GREEN * gun_luminance(g)
      + PERCEPTIVE_FACTOR_BLUE * gun_luminance(b)
  }

  /// WCAG contrast ratio, in `[1, 21]` regardless of argument order.
  pub fn contrast_ratio(&self, other: &Color) -> f64 {
    let (la, lb) = (self.luminance(), other.luminance());
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
  }

  /// Channels scaled into `[0, 1]`.
  pub fn normalized(&self) -> [f64; 3] {
    [self.r, self.g, self.b].map(|c| c as f64 / 255.0)
  }

  /// Linear interpolation towards `other`; `ratio = 0` is `self`, `ratio = 1` is `other`.
  pub fn mix(&self, other: &Color, ratio: f64) -> Color {
    let lerp = |a: u8, b: u8| channel(a as f64 + (b as f64 - a as f64) * ratio);
    Color::new(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
  }

  pub fn multiply(&self, n: f64) -> Color {
    self.scale(n, n, n)
  }

  pub fn scale(&self, r: f64, g: f64, b: f64) -> Color {
    Color::new(
      channel(self.r as f64 * r),
      channel(self.g as f64 * g),
      channel(self.b as f64 * b)
    )
  }

  pub fn set(&mut self, r: u8, g: u8, b: u8) -> &mut Self {
    *self = Color::new(r, g, b);
    self
  }

  pub fn set_from(&mut self, other: &Color) -> &mut Self {
    *self = *other;
    self
  }

  /// `#rrggbb`, lowercase.
  pub fn to_hex(&self) -> String {
    format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
  }

  pub fn to_rgba(&self, alpha: f64) -> String {
    format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
  }

  /// 24-bit `0xrrggbb` packing.
  pub fn to_u32(&self) -> u32 {
    ((self.r as u32) << 16) + ((self.g as u32) << 8) + self.b as u32
  }
}

impl FromStr for Color {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Color::parse(s)
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_hex())
  }
}
