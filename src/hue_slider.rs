//! Hue slider (0.0–1.0).
//!
//! Renders the full hue spectrum as a fixed-resolution raster that the
//! renderer scales to the track, like the field view does for its gradient.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalUpdate, SignalWith};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;
use crate::controller::PickerController;
use crate::math;

/// Rasterize a one-pixel-high hue spectrum: hue 0.0 on the left, 1.0 on the right.
fn rasterize_hue_spectrum(width: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * 4) as usize];
    for px in 0..width {
        let hue = px as f64 / (width - 1).max(1) as f64;
        let (r, g, b) = math::hsb_to_unit_rgb(hue, 1.0, 1.0);
        let offset = (px * 4) as usize;
        buf[offset] = math::unit_to_u8(r);
        buf[offset + 1] = math::unit_to_u8(g);
        buf[offset + 2] = math::unit_to_u8(b);
        buf[offset + 3] = 255;
    }
    buf
}

/// Map a pointer x to a hue, keeping the thumb fully inside the track.
fn hue_at(x: f64, width: f64, thumb_radius: f64) -> Option<f64> {
    let usable = width - 2.0 * thumb_radius;
    if usable > 0.0 {
        Some(((x - thumb_radius) / usable).clamp(0.0, 1.0))
    } else {
        None
    }
}

pub struct HueSlider {
    id: ViewId,
    held: bool,
    hue: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64)>>,
    /// Cached spectrum image, rasterized once.
    hue_img: Option<peniko::Image>,
    hue_hash: Vec<u8>,
}

/// Creates a horizontal hue slider driving `controller`.
pub fn hue_slider(controller: RwSignal<PickerController>, height: f32) -> HueSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let h = controller.with(|c| c.field().hue());
        id.update_state(h);
    });

    HueSlider {
        id,
        held: false,
        hue: controller.with_untracked(|c| c.field().hue()),
        size: Default::default(),
        on_change: Some(Box::new(move |h| {
            controller.update(|c| c.change_hue(h));
        })),
        hue_img: None,
        hue_hash: Vec::new(),
    }
    .style(move |s| {
        s.height(height)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl HueSlider {
    fn update_from_pointer(&mut self, x: f64) {
        if let Some(h) = hue_at(x, self.size.width as f64, constants::THUMB_RADIUS) {
            self.hue = h;
        }
    }

    fn ensure_hue_image(&mut self) {
        if self.hue_img.is_some() {
            return;
        }

        let width = constants::HUE_RASTER_WIDTH;
        let pixels = rasterize_hue_spectrum(width);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob, peniko::Format::Rgba8, width, 1);

        self.hue_hash = b"hue".to_vec();
        self.hue_img = Some(img);
    }
}

impl View for HueSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(h) = state.downcast::<f64>() {
            self.hue = *h;
            self.id.request_layout();
        }
    }

    fn event_before_children(
        &mut self,
        cx: &mut EventCx,
        event: &Event,
    ) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                if let Some(cb) = &self.on_change {
                    cb(self.hue);
                }
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    if let Some(cb) = &self.on_change {
                        cb(self.hue);
                    }
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.held = false;
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        // Clip to rounded rect for rounded ends
        cx.save();
        cx.clip(&rrect);
        self.ensure_hue_image();
        if let Some(ref img) = self.hue_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.hue_hash,
                },
                rect,
            );
        }
        cx.restore();

        // Slider outline
        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb (circular ring; left = 0.0, right = 1.0)
        let radius = constants::THUMB_RADIUS;
        let thumb_x = radius + self.hue * (w - 2.0 * radius);
        let thumb_cy = h / 2.0;
        let circle = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
    }
}
