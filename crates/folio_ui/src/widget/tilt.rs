//! 3D tilt of `.bento-card` elements under the pointer.

use super::{Widget, WidgetContext};
use crate::config::TiltConfig;
use crate::document::{ElementId, Rect};
use crate::input::HostEvent;
use crate::style;

/// Tilts each card toward the pointer, flat again on exit.
#[derive(Debug, Clone)]
pub struct TiltWidget {
    config: TiltConfig,
    cards: Vec<ElementId>,
}

impl TiltWidget {
    /// Creates the widget.
    #[must_use]
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            cards: Vec::new(),
        }
    }

    /// Rotation (x, y) in degrees for a pointer at (x, y) over `rect`.
    ///
    /// Returns None for a degenerate rect.
    #[must_use]
    pub fn rotation(&self, rect: Rect, x: f32, y: f32) -> Option<(f32, f32)> {
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;
        if center_x <= 0.0 || center_y <= 0.0 {
            return None;
        }

        let local_x = x - rect.x;
        let local_y = y - rect.y;
        let rotate_x = (local_y - center_y) / center_y * -self.config.max_degrees;
        let rotate_y = (local_x - center_x) / center_x * self.config.max_degrees;
        Some((positive_zero(rotate_x), positive_zero(rotate_y)))
    }
}

/// `-0` would print as `-0deg`.
fn positive_zero(v: f32) -> f32 {
    if v.abs() < f32::EPSILON {
        0.0
    } else {
        v
    }
}

impl Widget for TiltWidget {
    fn name(&self) -> &'static str {
        "tilt"
    }

    fn attach(&mut self, cx: &mut WidgetContext<'_>) -> bool {
        self.cards = cx.doc.query_all(".bento-card");
        !self.cards.is_empty()
    }

    fn on_event(&mut self, cx: &mut WidgetContext<'_>, event: HostEvent) {
        match event {
            HostEvent::PointerMoveOver { target, x, y } if self.cards.contains(&target) => {
                let rect = cx.doc.bounding_rect(target);
                let Some((rotate_x, rotate_y)) = self.rotation(rect, x, y) else {
                    return;
                };
                let transform = style::tilt_transform(
                    self.config.perspective_px,
                    rotate_x,
                    rotate_y,
                    self.config.hover_scale,
                );
                cx.doc.set_style(target, "transform", &transform);
            }
            HostEvent::PointerExit { target } if self.cards.contains(&target) => {
                cx.doc
                    .set_style(target, "transform", &style::tilt_rest(self.config.perspective_px));
            }
            _ => {}
        }
    }
}
