//! Fade-in of `.animate-on-scroll` sections as they enter the viewport.

use super::{Widget, WidgetContext};
use crate::config::WidgetConfig;
use crate::document::ElementId;
use crate::input::HostEvent;
use crate::style::{REVEAL_HIDDEN_TRANSFORM, REVEAL_TRANSITION, VISIBLE_RULE};

/// Hides sections on attach and reveals each once it is 10% visible.
#[derive(Debug, Clone, Default)]
pub struct RevealWidget {
    /// Elements still waiting to be revealed.
    observed: Vec<ElementId>,
}

impl RevealWidget {
    /// Creates the widget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for RevealWidget {
    fn name(&self) -> &'static str {
        "reveal"
    }

    fn attach(&mut self, cx: &mut WidgetContext<'_>) -> bool {
        cx.doc.inject_stylesheet(VISIBLE_RULE);

        self.observed = cx.doc.query_all(".animate-on-scroll");
        for &el in &self.observed {
            cx.doc.set_style(el, "opacity", "0");
            cx.doc.set_style(el, "transform", REVEAL_HIDDEN_TRANSFORM);
            cx.doc.set_style(el, "transition", REVEAL_TRANSITION);
        }
        !self.observed.is_empty()
    }

    fn on_event(&mut self, cx: &mut WidgetContext<'_>, event: HostEvent) {
        let HostEvent::Intersection { target, ratio } = event else {
            return;
        };
        if ratio < WidgetConfig::REVEAL_THRESHOLD {
            return;
        }
        let Some(index) = self.observed.iter().position(|&el| el == target) else {
            return;
        };

        cx.doc.add_class(target, "visible");
        self.observed.swap_remove(index);
    }
}
