//! Types out `.typing-text[data-text]` one character at a time.

use super::{TimerTask, Widget, WidgetContext};
use crate::config::TypewriterConfig;
use crate::document::ElementId;

/// Typewriter effect.
#[derive(Debug, Clone)]
pub struct TypewriterWidget {
    config: TypewriterConfig,
    element: Option<ElementId>,
    /// Full text from `data-text`.
    text: String,
    /// Byte length of the prefix already shown.
    typed: usize,
}

impl TypewriterWidget {
    /// Creates the widget.
    #[must_use]
    pub fn new(config: TypewriterConfig) -> Self {
        Self {
            config,
            element: None,
            text: String::new(),
            typed: 0,
        }
    }

    /// Returns true once the whole text is shown.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.typed >= self.text.len()
    }
}

impl Widget for TypewriterWidget {
    fn name(&self) -> &'static str {
        "typewriter"
    }

    fn attach(&mut self, cx: &mut WidgetContext<'_>) -> bool {
        let Some(element) = cx.doc.query(".typing-text") else {
            return false;
        };
        let Some(text) = cx.doc.attribute(element, "data-text") else {
            tracing::debug!("typing element has no data-text");
            return false;
        };

        cx.doc.set_text(element, "");
        self.element = Some(element);
        self.text = text;
        self.typed = 0;
        cx.schedule(self.config.initial_delay(), TimerTask::TypeNextChar);
        true
    }

    fn on_timer(&mut self, cx: &mut WidgetContext<'_>, task: TimerTask) {
        let (TimerTask::TypeNextChar, Some(element)) = (task, self.element) else {
            return;
        };
        let Some(next) = self.text[self.typed..].chars().next() else {
            return;
        };

        self.typed += next.len_utf8();
        cx.doc.set_text(element, &self.text[..self.typed]);

        if !self.is_done() {
            cx.schedule(self.config.char_interval(), TimerTask::TypeNextChar);
        }
    }
}
