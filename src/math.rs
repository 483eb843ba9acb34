//! Color math — direct conversions without external dependencies.
//! All functions use normalized f64 in 0.0–1.0 for internal use.

use crate::color::Rgb8;

/// Clamp to 0.0–1.0, mapping NaN to 0.0.
pub(crate) fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Scale a 0.0–1.0 channel to 0–255, rounding half away from zero.
pub(crate) fn unit_to_u8(x: f64) -> u8 {
    (clamp_unit(x) * 255.0).round() as u8
}

/// HSB/HSV → RGB. All values 0.0–1.0, inputs are clamped first.
pub(crate) fn hsb_to_unit_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let (h, s, v) = (clamp_unit(h), clamp_unit(s), clamp_unit(v));
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0) % 6.0;
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// HSB → 8-bit RGB.
///
/// Hue, saturation and brightness are 0.0–1.0; anything outside that range
/// is clamped, so the result is always a valid color.
pub fn hsb_to_rgb(h: f64, s: f64, b: f64) -> Rgb8 {
    let (r, g, bl) = hsb_to_unit_rgb(h, s, b);
    Rgb8::from_rgb(unit_to_u8(r), unit_to_u8(g), unit_to_u8(bl))
}

/// Format as `#RRGGBB`, uppercase, no alpha.
pub fn rgb_to_hex(color: Rgb8) -> String {
    let (r, g, b) = color.to_rgb();
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}
