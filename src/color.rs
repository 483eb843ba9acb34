//! Rgb8 type — the public color representation for floem-hexpick.
//!
//! Stores an opaque 8-bit RGB triple. Conversions go through [`crate::math`].

use std::fmt;

use crate::math;

/// Opaque color with 0–255 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb8 {
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Create from 0–255 RGB values.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from HSB values (all 0.0–1.0, clamped).
    pub fn from_hsb(h: f64, s: f64, b: f64) -> Self {
        math::hsb_to_rgb(h, s, b)
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Components as 0.0–1.0, for renderers that take float colors.
    pub fn to_unit(&self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    /// Format as `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        math::rgb_to_hex(*self)
    }
}

impl Default for Rgb8 {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_white() {
        assert_eq!(Rgb8::default(), Rgb8::WHITE);
        assert_eq!(Rgb8::default().to_hex(), "#FFFFFF");
    }

    #[test]
    fn display_matches_hex() {
        let c = Rgb8::from((0x12, 0xAB, 0x00));
        assert_eq!(c.to_string(), "#12AB00");
    }

    #[test]
    fn from_hsb_goes_through_color_math() {
        assert_eq!(Rgb8::from_hsb(0.0, 1.0, 1.0).to_rgb(), (255, 0, 0));
        assert_eq!(Rgb8::from_hsb(0.0, 0.0, 0.0).to_hex(), "#000000");
    }

    #[test]
    fn unit_components() {
        let (r, g, b) = Rgb8::from_rgb(255, 0, 51).to_unit();
        assert_eq!((r, g), (1.0, 0.0));
        assert!((b - 0.2).abs() < 1e-9);
    }
}
