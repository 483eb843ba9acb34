//! Hex readout, copy notice, preview swatch and reset button.

use std::time::Duration;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, SignalWith};

use crate::constants;
use crate::controller::PickerController;
use crate::notice::CopyNotice;

/// The filled swatch showing the current selection.
pub(crate) fn preview_swatch(
    controller: RwSignal<PickerController>,
    corner_radius: f64,
) -> impl IntoView {
    empty().style(move |st| {
        let (r, g, b) = controller.with(|c| c.selection().color.to_unit());
        st.height(constants::PREVIEW_HEIGHT)
            .flex_grow(1.0)
            .border_radius(corner_radius as f32)
            .border(1.0)
            .border_color(Color::BLACK)
            .background(Color::rgba(r, g, b, 1.0))
    })
}

/// The hex string of the current selection. Clicking it copies the value.
pub(crate) fn hex_label(
    controller: RwSignal<PickerController>,
    notice: RwSignal<CopyNotice>,
    notice_duration: Duration,
) -> impl IntoView {
    let pressed = RwSignal::new(false);
    h_stack((
        label(move || controller.with(|c| c.selection().hex.clone())).style(|s| {
            s.font_size(constants::HEX_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(40, 40, 40))
        }),
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    ))
    .style(|s| {
        s.items_center()
            .gap(constants::GAP / 2.0)
            .padding(2.0)
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        let hex = controller.with_untracked(|c| c.copy_current_hex());
        copy_to_clipboard(&hex);
        let mut generation = 0;
        notice.update(|n| generation = n.show(&hex));
        floem::action::exec_after(notice_duration, move |_| {
            notice.update(|n| {
                n.dismiss(generation);
            });
        });
    })
}

/// The transient "copied" acknowledgement. Empty while nothing is shown.
pub(crate) fn notice_label(notice: RwSignal<CopyNotice>) -> impl IntoView {
    label(move || notice.with(|n| n.message().unwrap_or_default().to_string())).style(|s| {
        s.font_size(constants::LABEL_FONT)
            .color(Color::rgb8(120, 120, 120))
            .min_height(constants::LABEL_FONT + 4.0)
    })
}

/// A text button that puts the picker back to white.
pub(crate) fn reset_button(controller: RwSignal<PickerController>) -> impl IntoView {
    label(|| "Reset")
        .style(|s| {
            s.font_size(constants::LABEL_FONT + 2.0)
                .padding_horiz(10.0)
                .padding_vert(4.0)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(3.0)
                .background(Color::WHITE)
                .cursor(floem::style::CursorStyle::Pointer)
                .hover(|s| s.background(Color::rgb8(230, 230, 230)))
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            controller.update(|c| {
                c.reset();
            });
        })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                log::warn!("Failed to copy {text} to clipboard: {e}");
            }
        }
        Err(e) => log::warn!("Clipboard unavailable: {e}"),
    }
}
