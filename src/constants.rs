//! Sizing, color, and timing defaults for the picker.

/// Gradient field width
pub const FIELD_WIDTH: f64 = 240.0;

/// Gradient field height
pub const FIELD_HEIGHT: f64 = 240.0;

/// Hue slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Indicator ring radius on the field
pub const INDICATOR_RADIUS: f64 = 10.0;

/// Thumb radius on the hue slider
pub const THUMB_RADIUS: f64 = 7.0;

/// Corner radius of the field and preview swatch
pub const RADIUS: f64 = 8.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Preview swatch height
pub const PREVIEW_HEIGHT: f32 = 48.0;

/// Hex label font size
pub const HEX_FONT: f32 = 16.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// How long the "copied" notice stays up, in seconds
pub const COPIED_NOTICE_SECS: f64 = 0.8;

/// Horizontal raster resolution of the hue slider
pub const HUE_RASTER_WIDTH: u32 = 360;
