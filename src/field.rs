//! Saturation/brightness gradient field for a single hue.
//!
//! Saturation runs left to right, brightness runs top (1.0) to bottom (0.0).
//! The field is drawn as two layers: white → pure hue horizontally, with a
//! transparent → opaque black ramp laid over it vertically. That composite
//! is evaluated here from the same color math used for sampling, so what is
//! drawn and what is picked cannot drift apart.

use crate::color::Rgb8;
use crate::error::PickerError;
use crate::math;

/// Field dimensions in device-independent units, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSize {
    width: f64,
    height: f64,
}

impl FieldSize {
    pub fn new(width: f64, height: f64) -> Result<Self, PickerError> {
        // `!(x > 0.0)` also rejects NaN.
        if !(width > 0.0) || !(height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(PickerError::DegenerateGeometry { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// A point in the field scaled to 0.0–1.0 on both axes.
///
/// `u` is saturation, `v` is inverted brightness.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedPosition {
    u: f64,
    v: f64,
}

impl NormalizedPosition {
    pub fn new(u: f64, v: f64) -> Self {
        Self {
            u: math::clamp_unit(u),
            v: math::clamp_unit(v),
        }
    }

    pub fn u(&self) -> f64 {
        self.u
    }

    pub fn v(&self) -> f64 {
        self.v
    }

    pub fn saturation(&self) -> f64 {
        self.u
    }

    pub fn brightness(&self) -> f64 {
        1.0 - self.v
    }
}

#[derive(Debug, Clone, Default)]
pub struct GradientField {
    hue: f64,
}

impl GradientField {
    pub fn new(hue: f64) -> Self {
        Self {
            hue: math::clamp_unit(hue),
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Store a new hue (clamped). Only affects later rendering and sampling.
    pub fn set_hue(&mut self, hue: f64) {
        self.hue = math::clamp_unit(hue);
    }

    /// Color under normalized position `(u, v)`.
    pub fn resolve_at(&self, u: f64, v: f64) -> Rgb8 {
        let pos = NormalizedPosition::new(u, v);
        self.resolve(pos)
    }

    pub fn resolve(&self, pos: NormalizedPosition) -> Rgb8 {
        math::hsb_to_rgb(self.hue, pos.saturation(), pos.brightness())
    }

    /// Evaluate the two-layer composite at `(u, v)`.
    ///
    /// Layer one lerps white → hue color by `u`; layer two is black with
    /// alpha `v`, blended source-over.
    pub fn composite_at(&self, u: f64, v: f64) -> Rgb8 {
        let (r, g, b) = self.composite_unit(math::clamp_unit(u), math::clamp_unit(v));
        Rgb8::from_rgb(math::unit_to_u8(r), math::unit_to_u8(g), math::unit_to_u8(b))
    }

    fn composite_unit(&self, u: f64, v: f64) -> (f64, f64, f64) {
        let (hr, hg, hb) = math::hsb_to_unit_rgb(self.hue, 1.0, 1.0);
        let lerp = |c: f64| 1.0 + (c - 1.0) * u;
        let over_black = |c: f64| c * (1.0 - v);
        (over_black(lerp(hr)), over_black(lerp(hg)), over_black(lerp(hb)))
    }

    /// Rasterize the composite to an RGBA8 buffer sampled at pixel centers.
    ///
    /// `width`/`height` are in physical pixels; either being zero yields an
    /// empty buffer.
    pub fn rasterize(&self, width: u32, height: u32) -> Vec<u8> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        let mut buf = vec![0u8; (width * height * 4) as usize];

        // The saturation ramp only depends on x, so build one row of it.
        let row: Vec<(f64, f64, f64)> = (0..width)
            .map(|px| {
                let u = (px as f64 + 0.5) / width as f64;
                self.composite_unit(u, 0.0)
            })
            .collect();

        for py in 0..height {
            let v = (py as f64 + 0.5) / height as f64;
            let row_offset = (py * width * 4) as usize;
            for (px, &(r, g, b)) in row.iter().enumerate() {
                let offset = row_offset + px * 4;
                buf[offset] = math::unit_to_u8(r * (1.0 - v));
                buf[offset + 1] = math::unit_to_u8(g * (1.0 - v));
                buf[offset + 2] = math::unit_to_u8(b * (1.0 - v));
                buf[offset + 3] = 255;
            }
        }

        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within_one(a: Rgb8, b: Rgb8) -> bool {
        let (ar, ag, ab) = a.to_rgb();
        let (br, bg, bb) = b.to_rgb();
        [(ar, br), (ag, bg), (ab, bb)]
            .iter()
            .all(|&(x, y)| (x as i16 - y as i16).abs() <= 1)
    }

    #[test]
    fn corners() {
        let field = GradientField::new(0.0);
        assert_eq!(field.resolve_at(0.0, 0.0), Rgb8::WHITE);
        assert_eq!(field.resolve_at(1.0, 0.0), Rgb8::from_rgb(255, 0, 0));
        assert_eq!(field.resolve_at(0.0, 1.0), Rgb8::from_rgb(0, 0, 0));
        assert_eq!(field.resolve_at(1.0, 1.0), Rgb8::from_rgb(0, 0, 0));
    }

    #[test]
    fn resolve_clamps_position() {
        let field = GradientField::new(0.4);
        assert_eq!(field.resolve_at(-2.0, -2.0), field.resolve_at(0.0, 0.0));
        assert_eq!(field.resolve_at(9.0, 9.0), field.resolve_at(1.0, 1.0));
    }

    #[test]
    fn set_hue_clamps() {
        let mut field = GradientField::default();
        field.set_hue(1.7);
        assert_eq!(field.hue(), 1.0);
        field.set_hue(-0.1);
        assert_eq!(field.hue(), 0.0);
        field.set_hue(f64::NAN);
        assert_eq!(field.hue(), 0.0);
    }

    #[test]
    fn hue_changes_resolution() {
        let mut field = GradientField::new(0.0);
        let red = field.resolve_at(1.0, 0.0);
        field.set_hue(2.0 / 3.0);
        let blue = field.resolve_at(1.0, 0.0);
        assert_ne!(red, blue);
        assert!(within_one(blue, Rgb8::from_rgb(0, 0, 255)));
    }

    #[test]
    fn composite_agrees_with_resolve() {
        for hi in 0..24 {
            let field = GradientField::new(hi as f64 / 24.0);
            for ui in 0..=16 {
                for vi in 0..=16 {
                    let (u, v) = (ui as f64 / 16.0, vi as f64 / 16.0);
                    let sampled = field.resolve_at(u, v);
                    let drawn = field.composite_at(u, v);
                    assert!(
                        within_one(sampled, drawn),
                        "hue {hi}/24 at ({u}, {v}): {sampled} vs {drawn}"
                    );
                }
            }
        }
    }

    #[test]
    fn raster_matches_composite_at_pixel_centers() {
        let field = GradientField::new(0.58);
        let (w, h) = (8u32, 5u32);
        let buf = field.rasterize(w, h);
        assert_eq!(buf.len(), (w * h * 4) as usize);
        for py in 0..h {
            for px in 0..w {
                let o = ((py * w + px) * 4) as usize;
                let u = (px as f64 + 0.5) / w as f64;
                let v = (py as f64 + 0.5) / h as f64;
                let pixel = Rgb8::from_rgb(buf[o], buf[o + 1], buf[o + 2]);
                assert!(within_one(pixel, field.composite_at(u, v)));
                assert_eq!(buf[o + 3], 255);
            }
        }
    }

    #[test]
    fn empty_raster() {
        let field = GradientField::new(0.0);
        assert!(field.rasterize(0, 10).is_empty());
        assert!(field.rasterize(10, 0).is_empty());
    }

    #[test]
    fn field_size_rejects_degenerate() {
        assert!(FieldSize::new(100.0, 50.0).is_ok());
        assert!(FieldSize::new(0.0, 50.0).is_err());
        assert!(FieldSize::new(10.0, -1.0).is_err());
        assert!(FieldSize::new(f64::NAN, 10.0).is_err());
        assert!(FieldSize::new(f64::INFINITY, 10.0).is_err());
    }
}
