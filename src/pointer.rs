//! Pointer tracking over the gradient field.

use crate::color::Rgb8;
use crate::error::PickerError;
use crate::field::{FieldSize, GradientField, NormalizedPosition};

/// Result of a single drag update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub position: NormalizedPosition,
    /// Clamped indicator center in field coordinates.
    pub point: (f64, f64),
    pub color: Rgb8,
}

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    last: Option<DragSample>,
    visible: bool,
}

/// Clamp a raw coordinate to `[0, extent - 1]`, keeping it one unit off the
/// far edge. NaN lands on the origin.
fn clamp_to_extent(raw: f64, extent: f64) -> f64 {
    let max = (extent - 1.0).max(0.0);
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, max)
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the color under a raw pointer position.
    ///
    /// On degenerate geometry nothing is touched and the error is returned.
    pub fn on_drag_to(
        &mut self,
        field: &GradientField,
        raw_x: f64,
        raw_y: f64,
        field_width: f64,
        field_height: f64,
    ) -> Result<DragSample, PickerError> {
        let size = FieldSize::new(field_width, field_height)?;
        let x = clamp_to_extent(raw_x, size.width());
        let y = clamp_to_extent(raw_y, size.height());
        let position = NormalizedPosition::new(x / size.width(), y / size.height());
        let sample = DragSample {
            position,
            point: (x, y),
            color: field.resolve(position),
        };
        self.last = Some(sample);
        self.visible = true;
        Ok(sample)
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Forget the last position as well as hiding the indicator.
    pub fn clear(&mut self) {
        self.last = None;
        self.hide();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn last(&self) -> Option<&DragSample> {
        self.last.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_into_field() {
        let field = GradientField::new(0.0);
        let mut tracker = PointerTracker::new();
        let s = tracker.on_drag_to(&field, -5.0, 250.0, 100.0, 200.0).unwrap();
        assert_eq!(s.point, (0.0, 199.0));
        assert_eq!(s.position.u(), 0.0);
        assert!((s.position.v() - 0.995).abs() < 1e-12);
        assert!(tracker.is_visible());
    }

    #[test]
    fn far_edge_matches_last_unit() {
        let field = GradientField::new(0.3);
        let mut tracker = PointerTracker::new();
        let far = tracker.on_drag_to(&field, 1000.0, 1000.0, 100.0, 100.0).unwrap();
        let edge = tracker.on_drag_to(&field, 99.999, 99.999, 100.0, 100.0).unwrap();
        assert_eq!(far, edge);
    }

    #[test]
    fn sub_unit_field_pins_to_origin() {
        let field = GradientField::new(0.0);
        let mut tracker = PointerTracker::new();
        let s = tracker.on_drag_to(&field, 0.4, 0.4, 0.5, 0.5).unwrap();
        assert_eq!(s.point, (0.0, 0.0));
        assert_eq!(s.color, Rgb8::WHITE);
    }

    #[test]
    fn degenerate_geometry_keeps_state() {
        let field = GradientField::new(0.0);
        let mut tracker = PointerTracker::new();
        let first = tracker.on_drag_to(&field, 10.0, 10.0, 100.0, 100.0).unwrap();
        let err = tracker.on_drag_to(&field, 50.0, 50.0, 0.0, 100.0);
        assert!(matches!(err, Err(PickerError::DegenerateGeometry { .. })));
        assert_eq!(tracker.last(), Some(&first));
        assert!(tracker.is_visible());
    }

    #[test]
    fn nan_coordinates_land_on_origin() {
        let field = GradientField::new(0.0);
        let mut tracker = PointerTracker::new();
        let s = tracker.on_drag_to(&field, f64::NAN, f64::NAN, 10.0, 10.0).unwrap();
        assert_eq!(s.point, (0.0, 0.0));
    }

    #[test]
    fn hide_and_clear() {
        let field = GradientField::new(0.0);
        let mut tracker = PointerTracker::new();
        tracker.on_drag_to(&field, 1.0, 1.0, 10.0, 10.0).unwrap();
        tracker.hide();
        assert!(!tracker.is_visible());
        assert!(tracker.last().is_some());
        tracker.clear();
        assert!(tracker.last().is_none());
    }
}
