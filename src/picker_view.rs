//! Picker panel: hue slider, gradient field, preview swatch, hex readout
//! with copy, and reset.

use floem::prelude::*;
use floem::reactive::RwSignal;

use crate::config::PickerConfig;
use crate::constants;
use crate::controller::PickerController;
use crate::field_view::field_view;
use crate::hue_slider::hue_slider;
use crate::inputs::{hex_label, notice_label, preview_swatch, reset_button};
use crate::notice::CopyNotice;

/// Creates the full picker panel.
pub(crate) fn picker_view(
    controller: RwSignal<PickerController>,
    config: PickerConfig,
) -> impl IntoView {
    let notice = RwSignal::new(CopyNotice::default());
    let field_width = config.field_width as f32;

    v_stack((
        // Hue slider
        hue_slider(controller, config.slider_height).style(move |s| s.width(field_width)),
        // Saturation / brightness field
        field_view(controller, &config),
        // Preview + hex row
        h_stack((
            preview_swatch(controller, config.corner_radius),
            v_stack((
                hex_label(controller, notice, config.copied_notice()),
                notice_label(notice),
            ))
            .style(|s| s.gap(2.0)),
        ))
        .style(move |st| st.width(field_width).items_center().gap(constants::GAP)),
        reset_button(controller),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .items_center()
            .justify_center()
            .background(Color::rgb8(242, 242, 242))
    })
}
