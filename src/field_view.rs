//! Saturation/brightness field view.
//!
//! Paints the current hue's gradient field as a rasterized image and the
//! indicator ring on top of it. Pointer presses and drags are forwarded to
//! the [`PickerController`] together with the field's current size; the
//! view itself never decides which color was picked.

use std::sync::Arc;

use floem::kurbo::{Circle, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalUpdate, SignalWith};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::config::PickerConfig;
use crate::controller::PickerController;
use crate::field::GradientField;

enum FieldUpdate {
    Hue(f64),
    Indicator(Option<(f64, f64)>),
}

pub(crate) struct FieldView {
    id: ViewId,
    held: bool,
    field: GradientField,
    indicator: Option<(f64, f64)>,
    indicator_radius: f64,
    corner_radius: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_drag: Option<Box<dyn Fn(f64, f64, f64, f64)>>,
    /// Cached field image at the last hue and physical size.
    field_img: Option<peniko::Image>,
    field_hash: Vec<u8>,
    cached_hue: f64,
    cached_dims: (u32, u32),
}

/// Creates the gradient field view bound to `controller`.
pub(crate) fn field_view(controller: RwSignal<PickerController>, config: &PickerConfig) -> FieldView {
    let id = ViewId::new();

    create_effect(move |_| {
        let hue = controller.with(|c| c.field().hue());
        id.update_state(FieldUpdate::Hue(hue));
    });

    create_effect(move |_| {
        let indicator = controller.with(|c| {
            let s = c.selection();
            s.indicator_position.filter(|_| s.indicator_visible)
        });
        id.update_state(FieldUpdate::Indicator(indicator));
    });

    let (width, height) = (config.field_width as f32, config.field_height as f32);

    FieldView {
        id,
        held: false,
        field: controller.with_untracked(|c| c.field().clone()),
        indicator: None,
        indicator_radius: config.indicator_radius,
        corner_radius: config.corner_radius,
        size: Default::default(),
        on_drag: Some(Box::new(move |x, y, w, h| {
            controller.update(|c| {
                c.drag_to(x, y, w, h);
            });
        })),
        field_img: None,
        field_hash: Vec::new(),
        cached_hue: f64::NAN,
        cached_dims: (0, 0),
    }
    .style(move |s| {
        s.width(width)
            .height(height)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl FieldView {
    fn drag(&self, x: f64, y: f64) {
        if let Some(cb) = &self.on_drag {
            cb(x, y, self.size.width as f64, self.size.height as f64);
        }
    }

    fn ensure_field_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let dims = (pw, ph);
        if self.cached_dims == dims && self.cached_hue == self.field.hue() {
            return;
        }

        let pixels = self.field.rasterize(pw, ph);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        let id = blob.id();
        self.field_hash = id.to_le_bytes().to_vec();
        self.field_img = Some(img);
        self.cached_hue = self.field.hue();
        self.cached_dims = dims;
    }
}

impl View for FieldView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<FieldUpdate>() {
            match *update {
                FieldUpdate::Hue(h) => self.field.set_hue(h),
                FieldUpdate::Indicator(p) => self.indicator = p,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.drag(e.pos.x, e.pos.y);
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.drag(e.pos.x, e.pos.y);
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
        let rrect = rect.to_rounded_rect(self.corner_radius);

        cx.save();
        cx.clip(&rrect);
        let scale = cx.scale();
        self.ensure_field_image(scale);
        if let Some(ref img) = self.field_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.field_hash,
                },
                rect,
            );
        }
        cx.restore();

        cx.stroke(&rrect, Color::BLACK, &floem::kurbo::Stroke::new(1.0));

        // Indicator ring, hidden until the first pick
        if let Some((x, y)) = self.indicator {
            let ring = Circle::new((x, y), self.indicator_radius);
            cx.stroke(&ring, Color::BLACK, &floem::kurbo::Stroke::new(1.0));
            let inner = Circle::new((x, y), self.indicator_radius - 1.5);
            cx.stroke(
                &inner,
                Color::rgba8(255, 255, 255, 160),
                &floem::kurbo::Stroke::new(1.0),
            );
        }
    }
}
