//! Custom cursor: a dot pinned to the pointer and an outline that trails it.

use super::{Widget, WidgetContext};
use crate::animation::Animation2D;
use crate::config::CursorConfig;
use crate::document::ElementId;
use crate::input::HostEvent;
use crate::style::{self, Theme};

/// Elements that enlarge the outline while hovered.
const INTERACTIVE: &str = "a, button, .bento-card";

/// Dot + trailing outline.
#[derive(Debug, Clone)]
pub struct CursorWidget {
    config: CursorConfig,
    theme: Theme,
    dot: Option<ElementId>,
    outline: Option<ElementId>,
    /// Outline position, tweened toward the pointer.
    follow: Animation2D,
    interactive: Vec<ElementId>,
}

impl CursorWidget {
    /// Creates the widget.
    #[must_use]
    pub fn new(config: CursorConfig) -> Self {
        let seconds = config.follow_ms as f32 / 1000.0;
        Self {
            config,
            theme: Theme::DARK,
            dot: None,
            outline: None,
            follow: Animation2D::new(0.0, 0.0).with_duration(seconds),
            interactive: Vec::new(),
        }
    }

    fn set_outline_size(cx: &mut WidgetContext<'_>, outline: ElementId, size: f32, background: &str) {
        let size = style::px(size);
        cx.doc.set_style(outline, "width", &size);
        cx.doc.set_style(outline, "height", &size);
        cx.doc.set_style(outline, "background-color", background);
    }
}

impl Widget for CursorWidget {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn attach(&mut self, cx: &mut WidgetContext<'_>) -> bool {
        self.dot = Some(cx.doc.create_element("div", "cursor-dot"));
        self.outline = Some(cx.doc.create_element("div", "cursor-outline"));
        self.interactive = cx.doc.query_all(INTERACTIVE);
        true
    }

    fn on_event(&mut self, cx: &mut WidgetContext<'_>, event: HostEvent) {
        let (Some(dot), Some(outline)) = (self.dot, self.outline) else {
            return;
        };

        match event {
            HostEvent::PointerMove { x, y } => {
                cx.doc.set_style(dot, "left", &style::px(x));
                cx.doc.set_style(dot, "top", &style::px(y));
                self.follow.set_target(x, y);
            }
            HostEvent::PointerEnter { target } if self.interactive.contains(&target) => {
                let hover = self.theme.cursor_hover.to_css();
                Self::set_outline_size(cx, outline, self.config.outline_hover_px, &hover);
            }
            HostEvent::PointerExit { target } if self.interactive.contains(&target) => {
                Self::set_outline_size(cx, outline, self.config.outline_px, style::TRANSPARENT);
            }
            _ => {}
        }
    }

    fn on_frame(&mut self, cx: &mut WidgetContext<'_>, dt: f32) {
        let Some(outline) = self.outline else {
            return;
        };
        if self.follow.is_complete() {
            return;
        }

        self.follow.update(dt);
        let (x, y) = self.follow.value();
        cx.doc.set_style(outline, "left", &style::px(x));
        cx.doc.set_style(outline, "top", &style::px(y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, MemoryDocument};
    use crate::widget::WidgetSet;
    use folio_shared::PointerTracker;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::time::Duration;

    struct Harness {
        doc: MemoryDocument,
        set: WidgetSet,
        rng: ChaCha8Rng,
        pointer: PointerTracker,
    }

    impl Harness {
        fn new(doc: MemoryDocument) -> Self {
            let mut harness = Self {
                doc,
                set: WidgetSet::new(),
                rng: ChaCha8Rng::seed_from_u64(0),
                pointer: PointerTracker::new(),
            };
            harness.set.push(Box::new(CursorWidget::new(CursorConfig::default())));
            harness.set.attach_all(
                &mut harness.doc,
                harness.pointer,
                &mut harness.rng,
                Duration::ZERO,
            );
            harness
        }

        fn send(&mut self, event: HostEvent) {
            if let HostEvent::PointerMove { x, y } = event {
                self.pointer.move_to(x, y);
            }
            self.set.dispatch(&mut self.doc, self.pointer, &mut self.rng, event);
        }

        fn frame(&mut self, dt: f32) {
            self.set.frame(&mut self.doc, self.pointer, &mut self.rng, dt);
        }
    }

    #[test]
    fn test_creates_dot_and_outline() {
        let h = Harness::new(MemoryDocument::new());
        let dot = h.doc.query(".cursor-dot").unwrap();
        let outline = h.doc.query(".cursor-outline").unwrap();

        assert_eq!(h.doc.element(dot).unwrap().tag, "div");
        assert_eq!(h.doc.element(outline).unwrap().parent, Some(h.doc.body()));
    }

    #[test]
    fn test_dot_jumps_outline_trails() {
        let mut h = Harness::new(MemoryDocument::new());
        let dot = h.doc.query(".cursor-dot").unwrap();
        let outline = h.doc.query(".cursor-outline").unwrap();

        h.send(HostEvent::PointerMove { x: 200.0, y: 100.0 });
        assert_eq!(h.doc.style(dot, "left").as_deref(), Some("200px"));
        assert_eq!(h.doc.style(dot, "top").as_deref(), Some("100px"));
        assert_eq!(h.doc.style(outline, "left"), None);

        h.frame(0.25);
        assert_eq!(h.doc.style(outline, "left").as_deref(), Some("100px"));
        assert_eq!(h.doc.style(outline, "top").as_deref(), Some("50px"));

        h.frame(0.25);
        h.frame(0.25);
        assert_eq!(h.doc.style(outline, "left").as_deref(), Some("200px"));
        assert_eq!(h.doc.style(outline, "top").as_deref(), Some("100px"));
    }

    #[test]
    fn test_vertical_move_restarts_outline_tween() {
        let mut h = Harness::new(MemoryDocument::new());
        let outline = h.doc.query(".cursor-outline").unwrap();

        h.send(HostEvent::PointerMove { x: 200.0, y: 0.0 });
        h.frame(0.25);
        assert_eq!(h.doc.style(outline, "left").as_deref(), Some("100px"));

        h.send(HostEvent::PointerMove { x: 200.0, y: 100.0 });
        h.frame(0.25);
        assert_eq!(h.doc.style(outline, "left").as_deref(), Some("150px"));
        assert_eq!(h.doc.style(outline, "top").as_deref(), Some("50px"));
    }

    #[test]
    fn test_hover_enlarges_outline() {
        let mut doc = MemoryDocument::new();
        let link = doc.insert(doc.body(), "a");
        let plain = doc.insert(doc.body(), "p");
        let mut h = Harness::new(doc);
        let outline = h.doc.query(".cursor-outline").unwrap();

        h.send(HostEvent::PointerEnter { target: plain });
        assert_eq!(h.doc.style(outline, "width"), None);

        h.send(HostEvent::PointerEnter { target: link });
        assert_eq!(h.doc.style(outline, "width").as_deref(), Some("60px"));
        assert_eq!(h.doc.style(outline, "height").as_deref(), Some("60px"));
        assert_eq!(
            h.doc.style(outline, "background-color").as_deref(),
            Some("rgba(210, 255, 0, 0.1)")
        );

        h.send(HostEvent::PointerExit { target: link });
        assert_eq!(h.doc.style(outline, "width").as_deref(), Some("40px"));
        assert_eq!(h.doc.style(outline, "background-color").as_deref(), Some("transparent"));
    }
}
