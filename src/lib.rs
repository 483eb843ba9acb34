//! # floem-hexpick
//!
//! A saturation/brightness color picker widget for
//! [Floem](https://github.com/lapce/floem).
//!
//! Drag over the gradient field to pick a color for the current hue, read
//! it back as `#RRGGBB`, click the hex value to copy it, or reset to white.
//!
//! The picking logic lives in [`PickerController`] and does not need a
//! window; the views only render its [`SelectionState`] and forward input.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_hexpick::{hex_picker, PickerController};
//!
//! let controller = RwSignal::new(PickerController::new());
//! // Use `hex_picker(controller)` in your Floem view tree.
//! ```

mod color;
mod config;
mod constants;
mod controller;
mod error;
mod field;
mod field_view;
mod hue_slider;
mod inputs;
mod math;
mod notice;
mod picker_view;
mod pointer;

pub use color::Rgb8;
pub use config::PickerConfig;
pub use controller::{Phase, PickerController, SelectionState};
pub use error::PickerError;
pub use field::{FieldSize, GradientField, NormalizedPosition};
pub use math::{hsb_to_rgb, rgb_to_hex};
pub use notice::CopyNotice;
pub use pointer::{DragSample, PointerTracker};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the top-level picker view with default sizing.
///
/// The view reads from and writes to `controller`. Changes made to the
/// controller from outside (for example a programmatic reset) show up in the
/// UI, and user input updates the controller.
pub fn hex_picker(controller: RwSignal<PickerController>) -> impl IntoView {
    hex_picker_with_config(controller, PickerConfig::default())
}

/// Like [`hex_picker`], with explicit sizing and timing.
pub fn hex_picker_with_config(
    controller: RwSignal<PickerController>,
    config: PickerConfig,
) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    picker_view::picker_view(controller, config)
}
