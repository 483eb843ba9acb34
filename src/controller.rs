//! Picker state machine.
//!
//! The controller is the only owner of the current selection. The view shell
//! feeds it hue changes, drags, reset and copy requests and renders whatever
//! [`SelectionState`] comes back.
//!
//! Changing the hue recolors the field but does not re-resolve the current
//! selection; the preview only follows the new hue on the next drag.

use crate::color::Rgb8;
use crate::field::GradientField;
use crate::pointer::PointerTracker;

/// What the shell needs to draw the picker.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub hue: f64,
    pub indicator_visible: bool,
    /// Indicator center in field coordinates, once something was picked.
    pub indicator_position: Option<(f64, f64)>,
    pub color: Rgb8,
    pub hex: String,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            hue: 0.0,
            indicator_visible: false,
            indicator_position: None,
            color: Rgb8::WHITE,
            hex: Rgb8::WHITE.to_hex(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing picked since init or reset.
    Idle,
    /// Showing the last picked color.
    Active,
}

#[derive(Debug, Clone, Default)]
pub struct PickerController {
    field: GradientField,
    tracker: PointerTracker,
    selection: SelectionState,
}

impl PickerController {
    /// A controller in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialize(&mut self) -> SelectionState {
        *self = Self::default();
        self.selection.clone()
    }

    pub fn change_hue(&mut self, hue: f64) {
        self.field.set_hue(hue);
        self.selection.hue = self.field.hue();
    }

    pub fn drag_to(&mut self, x: f64, y: f64, field_width: f64, field_height: f64) -> SelectionState {
        match self
            .tracker
            .on_drag_to(&self.field, x, y, field_width, field_height)
        {
            Ok(sample) => {
                log::trace!("picked {} at {:?}", sample.color, sample.point);
                self.selection = SelectionState {
                    hue: self.field.hue(),
                    indicator_visible: self.tracker.is_visible(),
                    indicator_position: Some(sample.point),
                    color: sample.color,
                    hex: sample.color.to_hex(),
                };
            }
            Err(e) => log::debug!("drag ignored: {e}"),
        }
        self.selection.clone()
    }

    pub fn reset(&mut self) -> SelectionState {
        self.field.set_hue(0.0);
        self.tracker.clear();
        self.selection = SelectionState::default();
        self.selection.clone()
    }

    /// The hex string to hand to a clipboard. Never changes state.
    pub fn copy_current_hex(&self) -> String {
        self.selection.hex.clone()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn field(&self) -> &GradientField {
        &self.field
    }

    pub fn phase(&self) -> Phase {
        if self.tracker.is_visible() {
            Phase::Active
        } else {
            Phase::Idle
        }
    }
}
