//! Googly eyes: pupils follow the pointer, a button closes them, and they
//! blink every few seconds while open.

use super::{TimerTask, Widget, WidgetContext};
use crate::config::BlinkConfig;
use crate::document::ElementId;
use crate::input::HostEvent;
use crate::style;
use folio_shared::Vec2;
use rand::Rng;
use std::time::Duration;

/// Button label while the eyes are open.
pub const CLOSE_LABEL: &str = "Close Eyes";
/// Button label while the eyes are closed.
pub const OPEN_LABEL: &str = "Open Eyes";

/// One `.eyeball` and its `.pupil`s.
#[derive(Debug, Clone)]
struct Eye {
    eyeball: ElementId,
    pupils: Vec<ElementId>,
}

/// Eyes toggle, pupil tracking and blinking.
#[derive(Debug, Clone)]
pub struct EyesWidget {
    config: BlinkConfig,
    button: Option<ElementId>,
    eyes: Vec<Eye>,
}

impl EyesWidget {
    /// Creates the widget.
    #[must_use]
    pub fn new(config: BlinkConfig) -> Self {
        Self {
            config,
            button: None,
            eyes: Vec::new(),
        }
    }

    /// Pupil offset for an eye of `width` centred at `center`, looking at `target`.
    ///
    /// Points at the target, capped at a quarter of the eye's width.
    #[must_use]
    pub fn pupil_offset(center: Vec2, width: f32, target: Vec2) -> Vec2 {
        let delta = target - center;
        let distance = delta.length();
        let max = width / 4.0;
        if distance <= max || distance <= f32::EPSILON {
            delta
        } else {
            Vec2::new(delta.x * max / distance, delta.y * max / distance)
        }
    }

    fn next_blink_delay(&self, cx: &mut WidgetContext<'_>) -> Duration {
        let low = self.config.min_interval_ms.min(self.config.max_interval_ms);
        let high = self.config.min_interval_ms.max(self.config.max_interval_ms);
        Duration::from_millis(cx.rng.gen_range(low..=high))
    }

    fn track(&self, cx: &mut WidgetContext<'_>, target: Vec2) {
        for eye in &self.eyes {
            let rect = cx.doc.bounding_rect(eye.eyeball);
            let (center_x, center_y) = rect.center();
            let offset = Self::pupil_offset(Vec2::new(center_x, center_y), rect.width, target);
            let transform = style::translate(offset.x, offset.y);
            for &pupil in &eye.pupils {
                cx.doc.set_style(pupil, "transform", &transform);
            }
        }
    }

    fn recentre(&self, cx: &mut WidgetContext<'_>) {
        let transform = style::translate(0.0, 0.0);
        for pupil in self.eyes.iter().flat_map(|eye| eye.pupils.iter()) {
            cx.doc.set_style(*pupil, "transform", &transform);
        }
    }

    /// Writes label, lid classes and pupils for the current flag.
    fn render_state(&self, cx: &mut WidgetContext<'_>) {
        let open = cx.state.eyes_open();

        if let Some(button) = self.button {
            cx.doc.set_text(button, if open { CLOSE_LABEL } else { OPEN_LABEL });
        }
        for eye in &self.eyes {
            if open {
                cx.doc.remove_class(eye.eyeball, "closed");
            } else {
                cx.doc.add_class(eye.eyeball, "closed");
            }
        }

        if !open {
            self.recentre(cx);
        } else if let Some(pointer) = cx.pointer.position() {
            self.track(cx, pointer);
        }
    }
}

impl Widget for EyesWidget {
    fn name(&self) -> &'static str {
        "eyes"
    }

    fn attach(&mut self, cx: &mut WidgetContext<'_>) -> bool {
        self.button = cx.doc.query("#closeEyesBtn");
        self.eyes = cx
            .doc
            .query_all(".eyeball")
            .into_iter()
            .map(|eyeball| Eye {
                eyeball,
                pupils: cx.doc.query_within(eyeball, ".pupil"),
            })
            .collect();
        if self.eyes.is_empty() && self.button.is_none() {
            return false;
        }

        self.render_state(cx);
        if !self.eyes.is_empty() {
            let delay = self.next_blink_delay(cx);
            cx.schedule(delay, TimerTask::Blink);
        }
        true
    }

    fn on_event(&mut self, cx: &mut WidgetContext<'_>, event: HostEvent) {
        match event {
            HostEvent::Click { target } if Some(target) == self.button => {
                let open = cx.state.toggle_eyes();
                tracing::debug!(open, "eyes toggled");
                self.render_state(cx);
            }
            HostEvent::PointerMove { x, y } if cx.state.eyes_open() => {
                self.track(cx, Vec2::new(x, y));
            }
            _ => {}
        }
    }

    fn on_timer(&mut self, cx: &mut WidgetContext<'_>, task: TimerTask) {
        match task {
            TimerTask::Blink => {
                if cx.state.eyes_open() {
                    for eye in &self.eyes {
                        cx.doc.add_class(eye.eyeball, "blink");
                    }
                    cx.schedule(self.config.duration(), TimerTask::BlinkEnd);
                }
                let delay = self.next_blink_delay(cx);
                cx.schedule(delay, TimerTask::Blink);
            }
            TimerTask::BlinkEnd => {
                for eye in &self.eyes {
                    cx.doc.remove_class(eye.eyeball, "blink");
                }
            }
            TimerTask::TypeNextChar => {}
        }
    }
}
